//! Scroll-driven page effects: smooth in-page anchors, reveal-on-scroll and
//! the hero orb parallax.

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions,
};

use crate::config::{
    ANCHOR_SCROLL_GAP, NAV_SCROLLED_THRESHOLD, FADE_IN_ROOT_MARGIN, NAV_FALLBACK_HEIGHT, PARALLAX_STRENGTH,
    REVEAL_STAGGER_SECS, REVEAL_THRESHOLD,
};
use crate::dom;
use crate::error::SiteError;

pub fn nav_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_THRESHOLD
}

/// Document offset to scroll to so the target clears the fixed navbar.
pub fn anchor_scroll_top(target_top: f64, page_y_offset: f64, nav_height: f64) -> f64 {
    let nav_height = if nav_height > 0.0 {
        nav_height
    } else {
        NAV_FALLBACK_HEIGHT
    };
    target_top + page_y_offset - nav_height - ANCHOR_SCROLL_GAP
}

/// Smoothly scrolls to the element named by an in-page `#id` href.
///
/// Returns `Ok(false)` when the href is not an in-page anchor or the target
/// does not exist, so the caller can let the browser handle the click.
pub fn scroll_to_anchor(href: &str) -> Result<bool, SiteError> {
    if !href.starts_with('#') || href == "#" {
        return Ok(false);
    }
    let document = dom::document()?;
    let Some(target) = document.query_selector(href)? else {
        return Ok(false);
    };
    let nav_height = document
        .query_selector(".navbar")?
        .and_then(|nav| nav.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);
    let top = anchor_scroll_top(
        target.get_bounding_client_rect().top(),
        dom::scroll_y(),
        nav_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    dom::window()?.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

pub fn stagger_delay(index: usize) -> String {
    format!("{:.1}s", index as f64 * REVEAL_STAGGER_SECS)
}

/// Which elements to watch and what to do once they enter the viewport.
#[derive(Clone, Copy, Debug)]
pub struct RevealRule {
    pub selector: &'static str,
    pub class: &'static str,
    pub root_margin: Option<&'static str>,
    /// Stop watching an element after it has been revealed.
    pub once: bool,
    /// Give sibling reveal elements increasing transition delays.
    pub stagger_siblings: bool,
}

pub const ANIMATE_ON_SCROLL: RevealRule = RevealRule {
    selector: ".animate-on-scroll",
    class: "visible",
    root_margin: None,
    once: false,
    stagger_siblings: true,
};

pub const CARD_FADE_IN: RevealRule = RevealRule {
    selector: ".feature-card, .product-card",
    class: "animate-fade-in",
    root_margin: Some(FADE_IN_ROOT_MARGIN),
    once: true,
    stagger_siblings: false,
};

/// An `IntersectionObserver` bound to one [`RevealRule`]. Disconnects on drop.
pub struct ScrollReveal {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl ScrollReveal {
    pub fn new(rule: RevealRule) -> Result<Self, SiteError> {
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                dom::set_class(&target, rule.class, true);
                if rule.stagger_siblings {
                    stagger_siblings(&target, rule.selector);
                }
                if rule.once {
                    observer.unobserve(&target);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        if let Some(margin) = rule.root_margin {
            init.set_root_margin(margin);
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let targets = dom::query_all(rule.selector)?;
        debug!("Observing {} elements for {}", targets.len(), rule.selector);
        for element in &targets {
            observer.observe(element);
        }

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for ScrollReveal {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn stagger_siblings(target: &Element, selector: &str) {
    let Some(parent) = target.parent_element() else {
        return;
    };
    let Ok(siblings) = parent.query_selector_all(selector) else {
        return;
    };
    for idx in 0..siblings.length() {
        if let Some(sibling) = siblings.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
            let _ = dom::set_style(&sibling, "transition-delay", &stagger_delay(idx as usize));
        }
    }
}

/// Translation of the `index`-th hero orb for a pointer at `client`.
pub fn parallax_offset(client: (f64, f64), viewport: (f64, f64), index: usize) -> (f64, f64) {
    let (width, height) = viewport;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let x = (client.0 / width - 0.5) * PARALLAX_STRENGTH;
    let y = (client.1 / height - 0.5) * PARALLAX_STRENGTH;
    let factor = (index + 1) as f64 * 0.5;
    (x * factor, y * factor)
}

pub fn move_hero_orbs(client_x: f64, client_y: f64) -> Result<(), SiteError> {
    let viewport = dom::viewport_size();
    for (index, orb) in dom::query_all(".hero-orb")?.iter().enumerate() {
        let (x, y) = parallax_offset((client_x, client_y), viewport, index);
        dom::set_style(orb, "transform", &format!("translate({}px, {}px)", x, y))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_offset_clears_navbar() {
        assert_eq!(anchor_scroll_top(500.0, 1000.0, 64.0), 1416.0);
    }

    #[test]
    fn anchor_offset_falls_back_when_nav_has_no_height() {
        assert_eq!(anchor_scroll_top(500.0, 0.0, 0.0), 400.0);
    }

    #[test]
    fn navbar_switches_style_just_past_threshold() {
        assert!(!nav_scrolled(0.0));
        assert!(!nav_scrolled(10.0));
        assert!(nav_scrolled(10.5));
    }

    #[test]
    fn stagger_uses_tenths_of_seconds() {
        assert_eq!(stagger_delay(0), "0.0s");
        assert_eq!(stagger_delay(3), "0.3s");
    }

    #[test]
    fn parallax_is_still_at_viewport_center() {
        assert_eq!(parallax_offset((500.0, 400.0), (1000.0, 800.0), 2), (0.0, 0.0));
    }

    #[test]
    fn parallax_grows_with_orb_index() {
        let first = parallax_offset((1000.0, 0.0), (1000.0, 800.0), 0);
        let third = parallax_offset((1000.0, 0.0), (1000.0, 800.0), 2);
        assert_eq!(first, (5.0, -5.0));
        assert_eq!(third, (15.0, -15.0));
    }

    #[test]
    fn parallax_ignores_empty_viewport() {
        assert_eq!(parallax_offset((10.0, 10.0), (0.0, 0.0), 0), (0.0, 0.0));
    }
}
