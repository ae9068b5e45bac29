use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, KeyboardEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

const INTERACTIVE_SELECTOR: &str = "a, button, input, textarea, select";

/// First Tab from an unfocused page lands on the first interactive element.
#[hook]
pub fn use_first_tab_focus() {
    use_event_with_window("keydown", move |e: KeyboardEvent| {
        if e.key() != "Tab" || e.shift_key() {
            return;
        }
        let Some(document) = window().and_then(|w| w.document()) else {
            return;
        };
        let body: Option<Element> = document.body().map(Into::into);
        if body.is_none() || document.active_element() != body {
            return;
        }
        let first = document
            .query_selector(INTERACTIVE_SELECTOR)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(first) = first {
            e.prevent_default();
            let _ = first.focus();
        }
    });
}
