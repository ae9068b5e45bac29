use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Element, HtmlInputElement, HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};
use yew::prelude::*;

use crate::config::{FORM_MESSAGE_HIDE_MS, SUBMIT_DELAY_MS};
use crate::error::FormError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

const SUCCESS_TEXT: &str = "Vielen Dank für Ihre Nachricht! Wir werden uns bald bei Ihnen melden.";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(FormError::MissingRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(FormError::InvalidEmail);
        }
        Ok(())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let message = use_state(String::new);
    let submitting = use_state(|| false);
    let status = use_state(|| None::<FormMessage>);
    let hide_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let status_ref = use_node_ref();

    // Bring the status line into view whenever it changes.
    {
        let status_ref = status_ref.clone();
        use_effect_with_deps(
            move |status: &Option<FormMessage>| {
                if status.is_some() {
                    if let Some(element) = status_ref.cast::<Element>() {
                        let options = ScrollIntoViewOptions::new();
                        options.set_behavior(ScrollBehavior::Smooth);
                        options.set_block(ScrollLogicalPosition::Nearest);
                        element.scroll_into_view_with_scroll_into_view_options(&options);
                    }
                }
                || ()
            },
            (*status).clone(),
        );
    }

    let show_status = {
        let status = status.clone();
        Callback::from(move |next: FormMessage| {
            status.set(Some(next));
            let status = status.clone();
            // Replacing the old timer cancels it.
            *hide_timer.borrow_mut() = Some(Timeout::new(FORM_MESSAGE_HIDE_MS, move || status.set(None)));
        })
    };

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let message = message.clone();
        let submitting = submitting.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }

            let data = ContactMessage {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                message: (*message).clone(),
            };

            if let Err(err) = data.validate() {
                show_status.emit(FormMessage { kind: MessageKind::Error, text: err.to_string() });
                return;
            }

            submitting.set(true);
            debug!(
                "Simulating contact submission: {}",
                serde_json::to_string(&data).unwrap_or_default()
            );

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let show_status = show_status.clone();
            spawn_local(async move {
                TimeoutFuture::new(SUBMIT_DELAY_MS).await;
                show_status.emit(FormMessage { kind: MessageKind::Success, text: SUCCESS_TEXT.to_string() });
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                message.set(String::new());
                submitting.set(false);
            });
        })
    };

    let input_setter = |field: &UseStateHandle<String>| {
        let field = field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            field.set(input.value());
        })
    };
    let on_message_input = {
        let message = message.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(input.value());
        })
    };

    let status_class = classes!("form-message", status.as_ref().map(|s| s.kind.class()));
    let status_text = status.as_ref().map(|s| s.text.clone()).unwrap_or_default();

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate=true>
            <div class="form-group">
                <label for="name">{"Name *"}</label>
                <input type="text" id="name" value={(*name).clone()} oninput={input_setter(&name)} />
            </div>
            <div class="form-group">
                <label for="email">{"E-Mail *"}</label>
                <input type="email" id="email" value={(*email).clone()} oninput={input_setter(&email)} />
            </div>
            <div class="form-group">
                <label for="phone">{"Telefon"}</label>
                <input type="tel" id="phone" value={(*phone).clone()} oninput={input_setter(&phone)} />
            </div>
            <div class="form-group">
                <label for="message">{"Nachricht *"}</label>
                <textarea id="message" rows="5" value={(*message).clone()} oninput={on_message_input} />
            </div>
            <button type="submit" class="submit-button" disabled={*submitting}>
                { if *submitting { "Wird gesendet..." } else { "Nachricht senden" } }
            </button>
            <div id="formMessage" ref={status_ref} class={status_class} role="status">
                {status_text}
            </div>
        </form>
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn form_opts_out_of_native_validation() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<ContactForm>::with_root(root.clone()).render();
        TimeoutFuture::new(10).await;

        let form = root.query_selector("#contactForm").unwrap().unwrap();
        assert!(form.has_attribute("novalidate"));

        app.destroy();
        root.remove();
    }
}
