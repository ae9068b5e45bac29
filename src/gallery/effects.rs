//! DOM side effects of lightbox state changes.

use log::error;
use serde::Serialize;
use wasm_bindgen::JsValue;
use web_sys::{window, CustomEvent, CustomEventInit, HtmlElement, HtmlImageElement};
use yew::NodeRef;

pub const OPEN_EVENT: &str = "gallery:open";
pub const CLOSE_EVENT: &str = "gallery:close";

#[derive(Serialize)]
struct OpenDetail {
    index: usize,
}

/// Suspends or restores scrolling of the page behind the lightbox.
pub fn set_scroll_locked(locked: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        error!("Failed to toggle page scrolling: {:?}", e);
    }
}

pub fn focus(node: &NodeRef) {
    if let Some(element) = node.cast::<HtmlElement>() {
        let _ = element.focus();
    }
}

/// Starts fetching `src` into the browser cache without displaying it.
pub fn preload(src: &str) {
    match HtmlImageElement::new() {
        Ok(img) => img.set_src(src),
        Err(e) => error!("Failed to create preload image: {:?}", e),
    }
}

fn dispatch(name: &str, detail: Option<&JsValue>) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let init = CustomEventInit::new();
    if let Some(detail) = detail {
        init.set_detail(detail);
    }
    match CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            let _ = document.dispatch_event(&event);
        }
        Err(e) => error!("Failed to create {} event: {:?}", name, e),
    }
}

pub fn dispatch_open(index: usize) {
    match serde_wasm_bindgen::to_value(&OpenDetail { index }) {
        Ok(detail) => dispatch(OPEN_EVENT, Some(&detail)),
        Err(e) => error!("Failed to encode {} detail: {}", OPEN_EVENT, e),
    }
}

pub fn dispatch_close() {
    dispatch(CLOSE_EVENT, None);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Reflect;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn open_event_carries_index() {
        let document = window().unwrap().document().unwrap();
        let seen = Rc::new(RefCell::new(None));
        let listener = {
            let seen = seen.clone();
            Closure::wrap(Box::new(move |event: CustomEvent| {
                let index = Reflect::get(&event.detail(), &JsValue::from_str("index"))
                    .ok()
                    .and_then(|v| v.as_f64());
                *seen.borrow_mut() = index;
            }) as Box<dyn FnMut(CustomEvent)>)
        };
        document
            .add_event_listener_with_callback(OPEN_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();

        dispatch_open(3);

        document
            .remove_event_listener_with_callback(OPEN_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();
        assert_eq!(*seen.borrow(), Some(3.0));
    }

    #[wasm_bindgen_test]
    fn scroll_lock_toggles_body_overflow() {
        let body = window().unwrap().document().unwrap().body().unwrap();
        set_scroll_locked(true);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "hidden");
        set_scroll_locked(false);
        assert_eq!(body.style().get_property_value("overflow").unwrap(), "");
    }
}
