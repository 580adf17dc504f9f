use yew::prelude::*;
use yew_router::prelude::*;
use log::{debug, info};
use web_sys::Node;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod analytics;
mod config;
mod dom;
mod error;
mod forms;
mod roi;
mod scroll;
mod theme;
mod video {
    pub mod browser;
    pub mod controller;
}
mod components {
    pub mod anchor_link;
    pub mod floating_cta;
    pub mod hero_video;
    pub mod lead_form;
    pub mod network;
    pub mod theme_toggle;
}
mod pages {
    pub mod contact;
    pub mod home;
    pub mod roi;
}

use components::{anchor_link::AnchorLink, theme_toggle::ThemeToggle};
use pages::{
    contact::{Contact, Demo},
    home::Home,
    roi::RoiCalculator,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/roi")]
    Roi,
    #[at("/contact")]
    Contact,
    #[at("/demo")]
    Demo,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::Roi => {
            info!("Rendering ROI page");
            html! { <RoiCalculator /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::Demo => {
            info!("Rendering Demo page");
            html! { <Demo /> }
        },
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();

            let scroll_callback = Closure::wrap(Box::new(move || {
                is_scrolled.set(scroll::nav_scrolled(dom::scroll_y()));
            }) as Box<dyn FnMut()>);

            if let Some(window) = &window {
                let _ = window.add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(window) = &window {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    // Clicking anywhere outside the menu and its toggle closes the menu
    {
        let menu_open = menu_open.clone();
        let toggle_ref = toggle_ref.clone();
        let menu_ref = menu_ref.clone();
        use_effect_with_deps(move |_| {
            let document = web_sys::window().and_then(|w| w.document());

            let click_callback = Closure::wrap(Box::new(move |e: MouseEvent| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let inside = |node_ref: &NodeRef| {
                    node_ref
                        .get()
                        .map(|node| node.contains(target.as_ref()))
                        .unwrap_or(false)
                };
                if !inside(&toggle_ref) && !inside(&menu_ref) {
                    menu_open.set(false);
                }
            }) as Box<dyn FnMut(MouseEvent)>);

            if let Some(document) = &document {
                let _ = document.add_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
            }

            move || {
                if let Some(document) = &document {
                    let _ = document.remove_event_listener_with_callback("click", click_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Mobile menu toggled");
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(false))
    };
    let close_on_click = {
        let close_menu = close_menu.clone();
        Callback::from(move |_: MouseEvent| close_menu.emit(()))
    };

    html! {
        <nav id="navbar" class={classes!("navbar", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Sparcle"}
                </Link<Route>>

                <button
                    id="navToggle"
                    ref={toggle_ref}
                    class={classes!("nav-toggle", (*menu_open).then(|| "active"))}
                    aria-label="Toggle menu"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div
                    id="navMenu"
                    ref={menu_ref}
                    class={classes!("nav-menu", (*menu_open).then(|| "active"))}
                >
                    <AnchorLink href="#features" classes={classes!("nav-link")} onclick={close_menu.clone()}>
                        {"Features"}
                    </AnchorLink>
                    <AnchorLink href="#products" classes={classes!("nav-link")} onclick={close_menu.clone()}>
                        {"Products"}
                    </AnchorLink>
                    <div onclick={close_on_click.clone()}>
                        <Link<Route> to={Route::Roi} classes="nav-link">
                            {"ROI"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_on_click.clone()}>
                        <Link<Route> to={Route::Contact} classes="nav-link">
                            {"Contact"}
                        </Link<Route>>
                    </div>
                    <div onclick={close_on_click}>
                        <Link<Route> to={Route::Demo} classes="btn-primary nav-cta">
                            {"Book a demo"}
                        </Link<Route>>
                    </div>
                    <ThemeToggle />
                </div>
            </div>
        </nav>
    }
}

/// Reports a page view whenever the route changes.
#[function_component(PageViewTracker)]
fn page_view_tracker() -> Html {
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();

    use_effect_with_deps(
        |path| {
            analytics::track_page_view(path);
            || ()
        },
        path,
    );

    html! {}
}

#[function_component]
fn App() -> Html {
    use_effect_with_deps(
        |_| {
            let tracker = analytics::ButtonClickTracker::install();
            move || drop(tracker)
        },
        (),
    );

    html! {
        <BrowserRouter>
            <Nav />
            <PageViewTracker />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    analytics::report_page_load();
    yew::Renderer::<App>::new().render();
}
