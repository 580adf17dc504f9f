use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::info;
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::prelude::*;

use crate::config::{FORM_MESSAGE_LIFETIME_MS, FORM_SUBMIT_DELAY_MS};
use crate::forms::{
    is_valid_email, FormKind, FormMessage, MessageKind, INVALID_EMAIL_MESSAGE, SENDING_LABEL,
    SUCCESS_MESSAGE,
};

#[derive(Properties, PartialEq)]
pub struct LeadFormProps {
    pub kind: FormKind,
}

/// Contact / demo request form. Nothing is sent anywhere; submission is
/// acknowledged after a short delay.
#[function_component(LeadForm)]
pub fn lead_form(props: &LeadFormProps) -> Html {
    let kind = props.kind;
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let message = use_state(|| None::<FormMessage>);
    let sending = use_state(|| false);

    // Each message removes itself after a while; a newer one cancels the old timer
    {
        let message = message.clone();
        let current_id = message.as_ref().map(|m| m.id);
        use_effect_with_deps(
            move |id| {
                let timeout = (*id).map(|id| {
                    Timeout::new(FORM_MESSAGE_LIFETIME_MS, move || {
                        if message.as_ref().map(|m| m.id) == Some(id) {
                            message.set(None);
                        }
                    })
                });
                move || drop(timeout)
            },
            current_id,
        );
    }

    let onsubmit = {
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let message = message.clone();
        let sending = sending.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            if let Some(email) = email_ref.cast::<HtmlInputElement>() {
                if !is_valid_email(&email.value()) {
                    message.set(Some(FormMessage::next(
                        message.as_ref(),
                        MessageKind::Error,
                        INVALID_EMAIL_MESSAGE,
                    )));
                    return;
                }
            }

            sending.set(true);
            let form = form_ref.cast::<HtmlFormElement>();
            let message = message.clone();
            let sending = sending.clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(FORM_SUBMIT_DELAY_MS).await;
                info!("{} form submitted", kind.class());
                message.set(Some(FormMessage::next(
                    message.as_ref(),
                    MessageKind::Success,
                    SUCCESS_MESSAGE,
                )));
                if let Some(form) = form {
                    form.reset();
                }
                sending.set(false);
            });
        })
    };

    let submit_text = if *sending {
        SENDING_LABEL
    } else {
        kind.submit_label()
    };

    html! {
        <form ref={form_ref} class={kind.class()} {onsubmit} novalidate=true>
            {
                if let Some(msg) = (*message).as_ref() {
                    html! {
                        <div key={msg.id} class={classes!("form-message", msg.kind.class())}>
                            {msg.text}
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <label for="name">{"Name"}</label>
            <input id="name" name="name" type="text" autocomplete="name" />

            <label for="email">{"Work email"}</label>
            <input id="email" ref={email_ref} name="email" type="email" autocomplete="email" />

            <label for="company">{"Company"}</label>
            <input id="company" name="company" type="text" autocomplete="organization" />

            {
                if kind == FormKind::Demo {
                    html! {
                        <>
                            <label for="team-size">{"Team size"}</label>
                            <input id="team-size" name="team-size" type="number" min="1" />
                        </>
                    }
                } else {
                    html! {
                        <>
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" rows="5"></textarea>
                        </>
                    }
                }
            }

            <button type="submit" class="btn-primary" disabled={*sending}>
                {submit_text}
            </button>
        </form>
    }
}
