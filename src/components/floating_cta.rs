use gloo_timers::callback::Timeout;
use web_sys::Event;
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::config::{FLOATING_CTA_SETTLE_MS, FLOATING_CTA_VIEWPORT_RATIO};
use crate::dom;
use crate::Route;

/// Shown once the visitor has scrolled most of the way past the hero.
pub fn past_hero(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height * FLOATING_CTA_VIEWPORT_RATIO
}

#[function_component(FloatingCta)]
pub fn floating_cta() -> Html {
    let visible = use_state_eq(|| false);
    let scrolling = use_state_eq(|| false);
    let settle = use_mut_ref(|| None::<Timeout>);

    {
        let visible = visible.clone();
        let scrolling = scrolling.clone();
        use_event_with_window("scroll", move |_: Event| {
            let (_, height) = dom::viewport_size();
            visible.set(past_hero(dom::scroll_y(), height));

            // Dim while scrolling, restore once scrolling stops
            scrolling.set(true);
            let scrolling = scrolling.clone();
            let timeout = Timeout::new(FLOATING_CTA_SETTLE_MS, move || scrolling.set(false));
            *settle.borrow_mut() = Some(timeout);
        });
    }

    let opacity = if *scrolling { "0.5" } else { "1" };

    html! {
        <div
            id="floatingCta"
            class={classes!("floating-cta", (*visible).then(|| "visible"))}
            style={format!("opacity: {};", opacity)}
        >
            <Link<Route> to={Route::Demo} classes="btn-primary">
                {"Book a demo"}
            </Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_after_most_of_the_first_screen() {
        assert!(!past_hero(0.0, 1000.0));
        assert!(!past_hero(800.0, 1000.0));
        assert!(past_hero(801.0, 1000.0));
    }
}
