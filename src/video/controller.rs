//! Coordination between the muted hero preview and the full-screen modal video.
//!
//! The controller is the only writer of [`ModalState`] and the only caller of
//! play/pause on either surface. Opening the modal always pauses the preview,
//! closing it always pauses the modal, so the two are never audible together.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::config::HOVER_PREVIEW_DELAY_MS;
use crate::error::PlaybackError;

pub type PlayFuture = Pin<Box<dyn Future<Output = Result<(), PlaybackError>>>>;
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// A video element as seen by the controller.
pub trait PlaybackSurface {
    /// Starts playback. The returned future settles once the browser has
    /// accepted or refused the request.
    fn play(&self) -> PlayFuture;
    fn pause(&self);
    fn set_current_time(&self, seconds: f64);
    fn set_muted(&self, muted: bool);
}

/// Visual state around the two videos.
pub trait VideoChrome {
    fn set_modal_active(&self, active: bool);
    fn set_play_overlay_visible(&self, visible: bool);
    /// Locks or restores background page scrolling.
    fn set_scroll_locked(&self, locked: bool);
}

/// Timer and task primitives of the host event loop.
pub trait TaskHost {
    /// Pending delayed callback. Dropping it cancels the callback.
    type Timer;

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> Self::Timer;
    fn spawn(&self, task: LocalTask);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Clone, Copy)]
enum PreviewStart {
    Autoplay,
    Hover,
    Resume,
}

/// Whether a key press should dismiss the modal.
pub fn closes_modal(key: &str, state: ModalState) -> bool {
    key == "Escape" && state == ModalState::Open
}

pub struct VideoPreviewController<S, C, H: TaskHost> {
    preview: S,
    modal: S,
    chrome: C,
    host: H,
    state: Cell<ModalState>,
    hover_timer: RefCell<Option<H::Timer>>,
    this: Weak<Self>,
}

impl<S, C, H> VideoPreviewController<S, C, H>
where
    S: PlaybackSurface + 'static,
    C: VideoChrome + 'static,
    H: TaskHost + 'static,
{
    pub fn new(preview: S, modal: S, chrome: C, host: H) -> Rc<Self> {
        Rc::new_cyclic(|this| Self {
            preview,
            modal,
            chrome,
            host,
            state: Cell::new(ModalState::Closed),
            hover_timer: RefCell::new(None),
            this: this.clone(),
        })
    }

    pub fn state(&self) -> ModalState {
        self.state.get()
    }

    pub fn on_page_load(&self) {
        self.preview.set_muted(true);
        self.start_preview(PreviewStart::Autoplay);
    }

    pub fn on_pointer_enter(&self) {
        let this = self.this.clone();
        let timer = self.host.schedule(
            HOVER_PREVIEW_DELAY_MS,
            Box::new(move || {
                if let Some(controller) = this.upgrade() {
                    controller.on_hover_elapsed();
                }
            }),
        );
        // Replacing the slot drops, and so cancels, any earlier timer.
        *self.hover_timer.borrow_mut() = Some(timer);
    }

    pub fn on_pointer_leave(&self) {
        self.cancel_hover();
        self.preview.pause();
        self.preview.set_current_time(0.0);
        self.chrome.set_play_overlay_visible(true);
    }

    pub fn on_expand_requested(&self) {
        if self.state.get() == ModalState::Open {
            debug!("Modal already open, ignoring expand request");
            return;
        }
        self.state.set(ModalState::Open);
        self.cancel_hover();

        self.chrome.set_modal_active(true);
        self.chrome.set_scroll_locked(true);

        self.modal.set_current_time(0.0);
        self.modal.set_muted(false);
        let playback = self.modal.play();
        self.host.spawn(Box::pin(async move {
            if let Err(err) = playback.await {
                warn!("Modal playback prevented: {}", err);
            }
        }));

        self.preview.pause();
    }

    pub fn on_close_requested(&self) {
        if self.state.get() == ModalState::Closed {
            return;
        }
        self.state.set(ModalState::Closed);

        self.chrome.set_modal_active(false);
        self.chrome.set_scroll_locked(false);
        self.modal.pause();

        self.preview.set_muted(true);
        self.start_preview(PreviewStart::Resume);
    }

    fn on_hover_elapsed(&self) {
        // A timer that is no longer in the slot was superseded or canceled.
        if self.hover_timer.borrow_mut().take().is_none() {
            return;
        }
        if self.state.get() == ModalState::Open {
            return;
        }
        self.preview.set_muted(true);
        self.preview.set_current_time(0.0);
        self.chrome.set_play_overlay_visible(false);
        self.start_preview(PreviewStart::Hover);
    }

    fn cancel_hover(&self) {
        drop(self.hover_timer.take());
    }

    fn start_preview(&self, reason: PreviewStart) {
        let playback = self.preview.play();
        let this = self.this.clone();
        self.host.spawn(Box::pin(async move {
            let result = playback.await;
            let Some(controller) = this.upgrade() else {
                return;
            };
            let Err(err) = result else {
                // Hover hid the overlay before asking to play
                if !matches!(reason, PreviewStart::Hover) {
                    controller.chrome.set_play_overlay_visible(false);
                }
                return;
            };
            match reason {
                PreviewStart::Autoplay => {
                    info!("Autoplay prevented - user interaction required ({})", err)
                }
                PreviewStart::Hover => warn!("Preview playback prevented: {}", err),
                PreviewStart::Resume => debug!("Preview resume prevented: {}", err),
            }
            controller.chrome.set_play_overlay_visible(true);
        }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::ready;

    #[derive(Default)]
    struct FakeVideo {
        playing: Cell<bool>,
        muted: Cell<bool>,
        position: Cell<f64>,
        play_calls: Cell<u32>,
        reject: Cell<bool>,
    }

    impl PlaybackSurface for Rc<FakeVideo> {
        fn play(&self) -> PlayFuture {
            self.play_calls.set(self.play_calls.get() + 1);
            if self.reject.get() {
                return Box::pin(ready(Err(PlaybackError::Rejected(
                    "NotAllowedError".to_string(),
                ))));
            }
            self.playing.set(true);
            Box::pin(ready(Ok(())))
        }

        fn pause(&self) {
            self.playing.set(false);
        }

        fn set_current_time(&self, seconds: f64) {
            self.position.set(seconds);
        }

        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }
    }

    #[derive(Default)]
    struct FakeChrome {
        modal_active: Cell<bool>,
        overlay_visible: Cell<bool>,
        scroll_locked: Cell<bool>,
    }

    impl VideoChrome for Rc<FakeChrome> {
        fn set_modal_active(&self, active: bool) {
            self.modal_active.set(active);
        }

        fn set_play_overlay_visible(&self, visible: bool) {
            self.overlay_visible.set(visible);
        }

        fn set_scroll_locked(&self, locked: bool) {
            self.scroll_locked.set(locked);
        }
    }

    struct PendingTimer {
        due: u32,
        canceled: Rc<Cell<bool>>,
        callback: Box<dyn FnOnce()>,
    }

    /// Manual clock; timers only fire from `advance`.
    #[derive(Default)]
    struct FakeHost {
        now: Cell<u32>,
        timers: RefCell<Vec<PendingTimer>>,
    }

    struct FakeTimer {
        canceled: Rc<Cell<bool>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.canceled.set(true);
        }
    }

    impl FakeHost {
        fn advance(&self, ms: u32) {
            let target = self.now.get() + ms;
            loop {
                let next = {
                    let mut timers = self.timers.borrow_mut();
                    timers.retain(|t| !t.canceled.get());
                    timers
                        .iter()
                        .position(|t| t.due <= target)
                        .map(|idx| timers.remove(idx))
                };
                match next {
                    Some(timer) => {
                        self.now.set(timer.due);
                        (timer.callback)();
                    }
                    None => break,
                }
            }
            self.now.set(target);
        }

        fn pending(&self) -> usize {
            self.timers
                .borrow()
                .iter()
                .filter(|t| !t.canceled.get())
                .count()
        }
    }

    impl TaskHost for Rc<FakeHost> {
        type Timer = FakeTimer;

        fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) -> FakeTimer {
            let canceled = Rc::new(Cell::new(false));
            self.timers.borrow_mut().push(PendingTimer {
                due: self.now.get() + delay_ms,
                canceled: canceled.clone(),
                callback,
            });
            FakeTimer { canceled }
        }

        fn spawn(&self, task: LocalTask) {
            futures::executor::block_on(task);
        }
    }

    struct Harness {
        preview: Rc<FakeVideo>,
        modal: Rc<FakeVideo>,
        chrome: Rc<FakeChrome>,
        host: Rc<FakeHost>,
        controller: Rc<VideoPreviewController<Rc<FakeVideo>, Rc<FakeChrome>, Rc<FakeHost>>>,
    }

    fn harness() -> Harness {
        let preview = Rc::new(FakeVideo::default());
        let modal = Rc::new(FakeVideo::default());
        let chrome = Rc::new(FakeChrome::default());
        chrome.overlay_visible.set(true);
        let host = Rc::new(FakeHost::default());
        let controller = VideoPreviewController::new(
            preview.clone(),
            modal.clone(),
            chrome.clone(),
            host.clone(),
        );
        Harness {
            preview,
            modal,
            chrome,
            host,
            controller,
        }
    }

    #[test]
    fn starts_closed() {
        let h = harness();
        assert_eq!(h.controller.state(), ModalState::Closed);
        assert!(h.controller.hover_timer.borrow().is_none());
    }

    #[test]
    fn leave_before_delay_never_plays_preview() {
        let h = harness();
        for elapsed in [0, 1, 150, 299] {
            h.controller.on_pointer_enter();
            h.host.advance(elapsed);
            h.controller.on_pointer_leave();
            h.host.advance(1_000);
        }
        assert_eq!(h.preview.play_calls.get(), 0);
        assert!(h.chrome.overlay_visible.get());
        assert_eq!(h.host.pending(), 0);
    }

    #[test]
    fn hover_plays_once_muted_from_start() {
        let h = harness();
        h.preview.position.set(12.5);
        h.controller.on_pointer_enter();
        h.host.advance(300);

        assert_eq!(h.preview.play_calls.get(), 1);
        assert!(h.preview.playing.get());
        assert!(h.preview.muted.get());
        assert_eq!(h.preview.position.get(), 0.0);
        assert!(!h.chrome.overlay_visible.get());

        h.host.advance(5_000);
        assert_eq!(h.preview.play_calls.get(), 1);
        assert!(h.controller.hover_timer.borrow().is_none());
    }

    #[test]
    fn hover_then_leave_resets_preview() {
        let h = harness();
        h.controller.on_pointer_enter();
        h.host.advance(300);
        h.preview.position.set(0.01);
        h.host.advance(10);
        h.controller.on_pointer_leave();

        assert!(!h.preview.playing.get());
        assert_eq!(h.preview.position.get(), 0.0);
        assert!(h.chrome.overlay_visible.get());
    }

    #[test]
    fn reentering_keeps_a_single_pending_timer() {
        let h = harness();
        h.controller.on_pointer_enter();
        h.host.advance(200);
        h.controller.on_pointer_enter();
        assert_eq!(h.host.pending(), 1);

        h.host.advance(200);
        assert_eq!(h.preview.play_calls.get(), 0);
        h.host.advance(100);
        assert_eq!(h.preview.play_calls.get(), 1);
    }

    #[test]
    fn leave_is_idempotent() {
        let h = harness();
        h.controller.on_pointer_leave();
        h.controller.on_pointer_leave();
        assert!(!h.preview.playing.get());
        assert!(h.chrome.overlay_visible.get());
        assert_eq!(h.preview.position.get(), 0.0);
    }

    #[test]
    fn expand_opens_modal_with_audio_and_pauses_preview() {
        let h = harness();
        h.controller.on_page_load();
        assert!(h.preview.playing.get());
        h.modal.position.set(42.0);
        h.modal.muted.set(true);

        h.controller.on_expand_requested();

        assert_eq!(h.controller.state(), ModalState::Open);
        assert!(h.chrome.modal_active.get());
        assert!(h.chrome.scroll_locked.get());
        assert_eq!(h.modal.position.get(), 0.0);
        assert!(!h.modal.muted.get());
        assert_eq!(h.modal.play_calls.get(), 1);
        assert!(!h.preview.playing.get());
    }

    #[test]
    fn expand_pauses_idle_preview_too() {
        let h = harness();
        h.controller.on_expand_requested();
        assert!(!h.preview.playing.get());
    }

    #[test]
    fn second_expand_is_ignored() {
        let h = harness();
        h.controller.on_expand_requested();
        h.modal.position.set(3.0);

        h.controller.on_expand_requested();

        assert_eq!(h.controller.state(), ModalState::Open);
        assert_eq!(h.modal.play_calls.get(), 1);
        assert_eq!(h.modal.position.get(), 3.0);
    }

    #[test]
    fn expand_cancels_pending_hover() {
        let h = harness();
        h.controller.on_pointer_enter();
        h.host.advance(100);
        h.controller.on_expand_requested();
        h.host.advance(1_000);

        assert_eq!(h.preview.play_calls.get(), 0);
        assert!(!h.preview.playing.get());
    }

    #[test]
    fn close_pauses_modal_restores_scroll_and_resumes_preview() {
        let h = harness();
        h.controller.on_expand_requested();
        h.controller.on_close_requested();

        assert_eq!(h.controller.state(), ModalState::Closed);
        assert!(!h.chrome.modal_active.get());
        assert!(!h.chrome.scroll_locked.get());
        assert!(!h.modal.playing.get());
        assert!(h.preview.playing.get());
        assert!(h.preview.muted.get());
    }

    #[test]
    fn close_while_closed_does_nothing() {
        let h = harness();
        h.controller.on_close_requested();
        assert_eq!(h.preview.play_calls.get(), 0);
        assert_eq!(h.controller.state(), ModalState::Closed);
    }

    #[test]
    fn modal_never_plays_with_preview() {
        let h = harness();
        h.controller.on_page_load();
        h.controller.on_pointer_enter();
        h.host.advance(300);
        h.controller.on_expand_requested();
        assert!(!(h.preview.playing.get() && h.modal.playing.get()));
        h.controller.on_close_requested();
        assert!(!(h.preview.playing.get() && h.modal.playing.get()));
    }

    #[test]
    fn successful_autoplay_hides_overlay() {
        let h = harness();
        h.controller.on_page_load();

        assert!(h.preview.playing.get());
        assert!(h.preview.muted.get());
        assert!(!h.chrome.overlay_visible.get());
    }

    #[test]
    fn successful_resume_after_close_hides_overlay() {
        let h = harness();
        h.controller.on_page_load();
        h.controller.on_expand_requested();
        h.controller.on_pointer_leave();
        assert!(h.chrome.overlay_visible.get());

        h.controller.on_close_requested();

        assert!(h.preview.playing.get());
        assert!(h.preview.muted.get());
        assert!(!h.chrome.overlay_visible.get());
    }

    #[test]
    fn rejected_resume_after_close_shows_overlay() {
        let h = harness();
        h.controller.on_page_load();
        h.controller.on_expand_requested();
        h.preview.reject.set(true);

        h.controller.on_close_requested();

        assert!(!h.preview.playing.get());
        assert!(h.chrome.overlay_visible.get());
    }

    #[test]
    fn escape_closes_only_an_open_modal() {
        assert!(closes_modal("Escape", ModalState::Open));
        assert!(!closes_modal("Escape", ModalState::Closed));
        for key in ["Enter", " ", "Esc", "escape", "q"] {
            assert!(!closes_modal(key, ModalState::Open), "{key} should not close");
        }
    }

    #[test]
    fn escape_key_routes_to_close() {
        let h = harness();
        h.controller.on_expand_requested();
        for key in ["Enter", "Escape"] {
            if closes_modal(key, h.controller.state()) {
                h.controller.on_close_requested();
            }
        }
        assert_eq!(h.controller.state(), ModalState::Closed);
        assert!(!h.modal.playing.get());
        assert!(!h.chrome.scroll_locked.get());
        assert!(h.preview.playing.get());
        assert!(h.preview.muted.get());
    }

    #[test]
    fn rejected_autoplay_leaves_overlay_visible() {
        let h = harness();
        h.chrome.overlay_visible.set(false);
        h.preview.reject.set(true);
        h.controller.on_page_load();

        assert!(!h.preview.playing.get());
        assert!(h.chrome.overlay_visible.get());
    }

    #[test]
    fn rejected_hover_play_restores_overlay() {
        let h = harness();
        h.preview.reject.set(true);
        h.controller.on_pointer_enter();
        h.host.advance(300);

        assert_eq!(h.preview.play_calls.get(), 1);
        assert!(h.chrome.overlay_visible.get());
    }

    #[test]
    fn rejected_modal_play_keeps_modal_open() {
        let h = harness();
        h.modal.reject.set(true);
        h.controller.on_expand_requested();

        assert_eq!(h.controller.state(), ModalState::Open);
        assert!(!h.modal.playing.get());
        h.controller.on_close_requested();
        assert_eq!(h.controller.state(), ModalState::Closed);
    }

    #[test]
    fn dropped_controller_ignores_late_timer() {
        let h = harness();
        h.controller.on_pointer_enter();
        let Harness {
            preview,
            host,
            controller,
            ..
        } = h;
        drop(controller);
        host.advance(300);
        assert_eq!(preview.play_calls.get(), 0);
    }
}
