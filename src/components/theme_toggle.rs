use log::warn;
use yew::prelude::*;

use crate::theme::{self, SystemThemeWatcher, Theme};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let current = use_state(theme::initial_theme);

    // Apply whenever the theme changes
    use_effect_with_deps(
        |selected| {
            if let Err(err) = theme::apply(*selected) {
                warn!("Failed to apply theme: {}", err);
            }
            || ()
        },
        *current,
    );

    // Follow the system color scheme until the visitor chooses
    {
        let current = current.clone();
        use_effect_with_deps(
            move |_| {
                let watcher = SystemThemeWatcher::new(move |system| current.set(system));
                move || drop(watcher)
            },
            (),
        );
    }

    let onclick = {
        let current = current.clone();
        Callback::from(move |_: MouseEvent| current.set(current.toggled()))
    };

    let (sun_display, moon_display) = match *current {
        Theme::Dark => ("display: none;", "display: block;"),
        Theme::Light => ("display: block;", "display: none;"),
    };

    html! {
        <button id="themeToggle" class="theme-toggle" aria-label="Toggle theme" {onclick}>
            <span class="sun-icon" style={sun_display}>{"☀"}</span>
            <span class="moon-icon" style={moon_display}>{"☾"}</span>
        </button>
    }
}
