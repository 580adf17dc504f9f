//! `web_sys` implementations of the controller's host traits.

use std::future::ready;

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;
use yew::NodeRef;

use crate::dom;
use crate::error::PlaybackError;
use crate::video::controller::{LocalTask, PlayFuture, PlaybackSurface, TaskHost, VideoChrome};

/// A `<video>` element resolved lazily through its `NodeRef`.
pub struct DomVideo {
    node: NodeRef,
}

impl DomVideo {
    pub fn new(node: NodeRef) -> Self {
        Self { node }
    }

    fn element(&self) -> Option<HtmlVideoElement> {
        self.node.cast::<HtmlVideoElement>()
    }
}

impl PlaybackSurface for DomVideo {
    fn play(&self) -> PlayFuture {
        let Some(video) = self.element() else {
            return Box::pin(ready(Err(PlaybackError::Detached)));
        };
        match video.play() {
            Ok(promise) => Box::pin(async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(PlaybackError::from)
            }),
            Err(err) => Box::pin(ready(Err(err.into()))),
        }
    }

    fn pause(&self) {
        if let Some(video) = self.element() {
            if let Err(err) = video.pause() {
                debug!("pause failed: {:?}", err);
            }
        }
    }

    fn set_current_time(&self, seconds: f64) {
        if let Some(video) = self.element() {
            video.set_current_time(seconds);
        }
    }

    fn set_muted(&self, muted: bool) {
        if let Some(video) = self.element() {
            video.set_muted(muted);
        }
    }
}

pub struct DomChrome {
    pub modal: NodeRef,
    pub play_overlay: NodeRef,
}

impl VideoChrome for DomChrome {
    fn set_modal_active(&self, active: bool) {
        if let Some(modal) = self.modal.cast::<web_sys::Element>() {
            dom::set_class(&modal, "active", active);
        }
    }

    fn set_play_overlay_visible(&self, visible: bool) {
        if let Some(overlay) = self.play_overlay.cast::<web_sys::Element>() {
            dom::set_class(&overlay, "hidden", !visible);
        }
    }

    fn set_scroll_locked(&self, locked: bool) {
        let overflow = if locked { "hidden" } else { "" };
        let result = dom::body().and_then(|body| dom::set_style(&body, "overflow", overflow));
        if let Err(err) = result {
            debug!("Could not update page scroll: {}", err);
        }
    }
}

pub struct BrowserHost;

impl TaskHost for BrowserHost {
    type Timer = Timeout;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, callback)
    }

    fn spawn(&self, task: LocalTask) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
