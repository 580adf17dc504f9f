//! Light/dark theme preference.
//!
//! The saved choice lives in `localStorage` under a single key. Without a
//! saved choice the system color scheme decides, and later changes of the
//! system scheme are followed until the visitor picks a theme explicitly.

use std::fmt;
use std::str::FromStr;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MediaQueryList, MediaQueryListEvent, Storage};

use crate::config::{DARK_SCHEME_QUERY, THEME_STORAGE_KEY};
use crate::dom;
use crate::error::SiteError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// A saved `"dark"` wins; anything else saved means light. With nothing
    /// saved the system preference decides.
    pub fn resolve(saved: Option<&str>, system_prefers_dark: bool) -> Theme {
        match saved {
            Some(value) => value.parse().unwrap_or(Theme::Light),
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}

fn storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

pub fn saved_theme() -> Option<String> {
    storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok()).flatten()
}

fn dark_scheme_query() -> Option<MediaQueryList> {
    web_sys::window()
        .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok())
        .flatten()
}

pub fn system_prefers_dark() -> bool {
    dark_scheme_query().map(|q| q.matches()).unwrap_or(false)
}

pub fn initial_theme() -> Theme {
    Theme::resolve(saved_theme().as_deref(), system_prefers_dark())
}

/// Sets `data-theme` on the root element and persists the choice.
pub fn apply(theme: Theme) -> Result<(), SiteError> {
    let root = dom::document()?
        .document_element()
        .ok_or_else(|| SiteError::MissingElement("html".to_string()))?;
    root.set_attribute("data-theme", theme.as_str())?;
    if let Some(storage) = storage() {
        storage.set_item(THEME_STORAGE_KEY, theme.as_str())?;
    }
    debug!("Theme set to {}", theme);
    Ok(())
}

/// Keeps a `change` listener on the color-scheme media query alive until
/// dropped.
pub struct SystemThemeWatcher {
    query: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SystemThemeWatcher {
    /// `on_change` only hears about changes while no theme is saved.
    pub fn new(on_change: impl Fn(Theme) + 'static) -> Option<Self> {
        let query = dark_scheme_query()?;
        let listener = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
            if saved_theme().is_none() {
                on_change(if e.matches() { Theme::Dark } else { Theme::Light });
            }
        }) as Box<dyn FnMut(MediaQueryListEvent)>);
        query
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { query, listener })
    }
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.listener.as_ref().unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_preference_wins_over_system() {
        assert_eq!(Theme::resolve(Some("dark"), false), Theme::Dark);
        assert_eq!(Theme::resolve(Some("light"), true), Theme::Light);
    }

    #[test]
    fn system_preference_is_the_fallback() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn unknown_saved_value_means_light() {
        assert_eq!(Theme::resolve(Some("sepia"), true), Theme::Light);
    }

    #[test]
    fn toggling_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().to_string(), "light");
    }
}
