use chrono::Datelike;
use log::{debug, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;

use crate::components::floating_cta::FloatingCta;
use crate::components::hero_video::HeroVideo;
use crate::components::network::NetworkNodes;
use crate::scroll::{self, ScrollReveal, ANIMATE_ON_SCROLL, CARD_FADE_IN};
use crate::Route;

const FEATURES: [(&str, &str); 4] = [
    (
        "One inbox for every tool",
        "Slack threads, Jira tickets and email land in a single prioritized feed.",
    ),
    (
        "Answers, not searches",
        "Ask in plain language and get the answer with links to where it came from.",
    ),
    (
        "Meetings that brief themselves",
        "Walk in with the context from every tool your team already uses.",
    ),
    (
        "Private by default",
        "Permissions are mirrored from the source tools, never widened.",
    ),
];

const PRODUCTS: [(&str, &str); 3] = [
    ("Bolt Assistant", "An AI teammate that knows where everything lives."),
    ("Bolt Connect", "Twelve integrations, set up in minutes."),
    ("Bolt Insights", "See where your team loses time, week over week."),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Reveal-on-scroll observers live as long as the page
    use_effect_with_deps(
        |_| {
            let observers: Vec<ScrollReveal> = [ANIMATE_ON_SCROLL, CARD_FADE_IN]
                .into_iter()
                .filter_map(|rule| match ScrollReveal::new(rule) {
                    Ok(observer) => Some(observer),
                    Err(err) => {
                        warn!("Scroll reveal for {} unavailable: {}", rule.selector, err);
                        None
                    }
                })
                .collect();
            move || drop(observers)
        },
        (),
    );

    use_event_with_window("mousemove", |e: MouseEvent| {
        if let Err(err) = scroll::move_hero_orbs(e.client_x() as f64, e.client_y() as f64) {
            debug!("Parallax update failed: {}", err);
        }
    });

    let year = chrono::Local::now().year();

    html! {
        <div class="home-page">
            <section class="hero" id="hero">
                <div class="hero-orb orb-1"></div>
                <div class="hero-orb orb-2"></div>
                <div class="hero-orb orb-3"></div>
                <div class="hero-content">
                    <div class="hero-copy animate-on-scroll">
                        <h1>{"Every tool your team uses, one conversation away"}</h1>
                        <p class="hero-subtitle">
                            {"Bolt connects the apps you already work in and answers questions across all of them."}
                        </p>
                        <div class="hero-cta-group">
                            <Link<Route> to={Route::Demo} classes="btn-primary">
                                {"Book a demo"}
                            </Link<Route>>
                            <Link<Route> to={Route::Roi} classes="btn-secondary">
                                {"Estimate your ROI"}
                            </Link<Route>>
                        </div>
                    </div>
                    <HeroVideo src="/assets/bolt-demo.mp4" poster="/assets/bolt-demo-poster.jpg" />
                </div>
                <NetworkNodes />
            </section>

            <section class="features" id="features">
                <h2 class="animate-on-scroll">{"Less switching, more doing"}</h2>
                <div class="features-grid">
                    {
                        FEATURES.iter().map(|(title, body)| html! {
                            <div class="feature-card animate-on-scroll">
                                <h3>{*title}</h3>
                                <p>{*body}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="products" id="products">
                <h2 class="animate-on-scroll">{"Products"}</h2>
                <div class="products-grid">
                    {
                        PRODUCTS.iter().map(|(name, blurb)| html! {
                            <div class="product-card">
                                <h3>{*name}</h3>
                                <p>{*blurb}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="footer-cta">
                <h2>{"Ready to give your team its time back?"}</h2>
                <Link<Route> to={Route::Contact} classes="btn-primary">
                    {"Talk to us"}
                </Link<Route>>
            </section>

            <FloatingCta />

            <footer class="site-footer">
                <p>{format!("© {} Sparcle.LLC", year)}</p>
            </footer>
        </div>
    }
}
