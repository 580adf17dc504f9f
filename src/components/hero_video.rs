use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use crate::video::browser::{BrowserHost, DomChrome, DomVideo};
use crate::video::controller::{closes_modal, VideoPreviewController};

type HeroController = VideoPreviewController<DomVideo, DomChrome, BrowserHost>;

#[derive(Properties, PartialEq)]
pub struct HeroVideoProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub poster: Option<AttrValue>,
}

#[function_component(HeroVideo)]
pub fn hero_video(props: &HeroVideoProps) -> Html {
    let preview_ref = use_node_ref();
    let modal_video_ref = use_node_ref();
    let modal_ref = use_node_ref();
    let overlay_ref = use_node_ref();

    let controller: Rc<Rc<HeroController>> = {
        let preview_ref = preview_ref.clone();
        let modal_video_ref = modal_video_ref.clone();
        let modal_ref = modal_ref.clone();
        let overlay_ref = overlay_ref.clone();
        use_memo(
            move |_| {
                VideoPreviewController::new(
                    DomVideo::new(preview_ref),
                    DomVideo::new(modal_video_ref),
                    DomChrome {
                        modal: modal_ref,
                        play_overlay: overlay_ref,
                    },
                    BrowserHost,
                )
            },
            (),
        )
    };

    // Autoplay on mount, Escape closes the modal
    {
        let controller = (*controller).clone();
        use_effect_with_deps(
            move |_| {
                controller.on_page_load();

                let document = web_sys::window().and_then(|w| w.document());
                let keydown = {
                    let controller = controller.clone();
                    Closure::wrap(Box::new(move |e: KeyboardEvent| {
                        if closes_modal(&e.key(), controller.state()) {
                            controller.on_close_requested();
                        }
                    }) as Box<dyn FnMut(KeyboardEvent)>)
                };
                if let Some(document) = &document {
                    let _ = document
                        .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
                }

                move || {
                    if let Some(document) = &document {
                        let _ = document.remove_event_listener_with_callback(
                            "keydown",
                            keydown.as_ref().unchecked_ref(),
                        );
                    }
                    // Leaving the page with the modal up must not keep the body locked
                    controller.on_close_requested();
                }
            },
            (),
        );
    }

    let on_enter = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.on_pointer_enter())
    };
    let on_leave = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.on_pointer_leave())
    };
    let on_wrapper_click = {
        let controller = (*controller).clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            controller.on_expand_requested();
        })
    };
    let on_expand_click = {
        let controller = (*controller).clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            controller.on_expand_requested();
        })
    };
    let on_close = {
        let controller = (*controller).clone();
        Callback::from(move |_: MouseEvent| controller.on_close_requested())
    };

    html! {
        <>
            <div
                id="heroVideoWrapper"
                class="hero-video-wrapper"
                onmouseenter={on_enter}
                onmouseleave={on_leave}
                onclick={on_wrapper_click}
            >
                <video
                    id="heroVideo"
                    ref={preview_ref}
                    class="hero-video"
                    src={props.src.clone()}
                    poster={props.poster.clone()}
                    muted=true
                    loop=true
                    playsinline=true
                    preload="metadata"
                ></video>
                <div id="playOverlay" ref={overlay_ref} class="play-overlay">
                    <span class="play-icon">{"▶"}</span>
                </div>
                <button
                    id="expandVideo"
                    class="expand-video"
                    aria-label="Watch with sound"
                    onclick={on_expand_click}
                >
                    {"🔊 Watch with sound"}
                </button>
            </div>

            <div id="videoModal" ref={modal_ref} class="video-modal">
                <div id="modalBackdrop" class="modal-backdrop" onclick={on_close.clone()}></div>
                <div class="modal-content">
                    <button id="modalClose" class="modal-close" aria-label="Close video" onclick={on_close}>
                        {"✕"}
                    </button>
                    <video
                        id="modalVideo"
                        ref={modal_video_ref}
                        class="modal-video"
                        src={props.src.clone()}
                        controls=true
                        playsinline=true
                        preload="none"
                    ></video>
                </div>
            </div>
        </>
    }
}
