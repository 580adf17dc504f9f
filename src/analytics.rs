//! Google Analytics hooks and page-load timing. Events are only sent when the
//! page has a `gtag` function installed.

use gloo_timers::callback::Timeout;
use log::{debug, info};
use serde::Serialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Reflect;
use web_sys::{Element, MouseEvent};

use crate::dom;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = window, js_name = gtag, catch)]
    fn gtag(command: &str, event_name: &str, params: JsValue) -> Result<(), JsValue>;
}

const TRACKED_BUTTONS: &str = ".btn-primary, .btn-secondary";

#[derive(Serialize)]
struct PageView<'a> {
    page_path: &'a str,
}

#[derive(Serialize)]
struct ButtonClick<'a> {
    button_text: &'a str,
    page_path: &'a str,
}

fn gtag_available() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("gtag")).unwrap_or(false))
        .unwrap_or(false)
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn send_event<T: Serialize>(event_name: &str, params: &T) {
    if !gtag_available() {
        return;
    }
    match serde_wasm_bindgen::to_value(params) {
        Ok(params) => {
            if let Err(err) = gtag("event", event_name, params) {
                debug!("gtag {} failed: {:?}", event_name, err);
            }
        }
        Err(err) => debug!("Could not serialize {} params: {}", event_name, err),
    }
}

pub fn track_page_view(page_path: &str) {
    send_event("page_view", &PageView { page_path });
}

pub fn track_button_click(button_text: &str) {
    let page_path = current_path();
    send_event(
        "button_click",
        &ButtonClick {
            button_text: button_text.trim(),
            page_path: &page_path,
        },
    );
}

/// Document-level click listener reporting clicks on primary and secondary
/// buttons, including ones rendered after it was installed.
pub struct ButtonClickTracker {
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl ButtonClickTracker {
    pub fn install() -> Option<Self> {
        let document = dom::document().ok()?;
        let listener = Closure::wrap(Box::new(move |e: MouseEvent| {
            let button = e
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(TRACKED_BUTTONS).ok().flatten());
            if let Some(button) = button {
                track_button_click(&button.text_content().unwrap_or_default());
            }
        }) as Box<dyn FnMut(MouseEvent)>);
        document
            .add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { listener })
    }
}

impl Drop for ButtonClickTracker {
    fn drop(&mut self) {
        if let Ok(document) = dom::document() {
            let _ = document
                .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
        }
    }
}

fn log_page_load_time() {
    let Some(timing) = web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.timing())
    else {
        return;
    };
    let load_time = timing.load_event_end() - timing.navigation_start();
    info!("Page loaded in {}ms", load_time);
}

/// Logs the page load time once the `load` event has completed.
pub fn report_page_load() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let complete = window
        .document()
        .map(|d| d.ready_state() == "complete")
        .unwrap_or(false);
    if complete {
        log_page_load_time();
        return;
    }
    // loadEventEnd is only filled in after the load handlers return
    let on_load = Closure::once_into_js(move || {
        Timeout::new(0, log_page_load_time).forget();
    });
    let _ = window.add_event_listener_with_callback("load", on_load.unchecked_ref());
}
