use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};
use yew::prelude::*;

use crate::config::{FADE_IN_ROOT_MARGIN, FADE_IN_SELECTOR, FADE_IN_STAGGER_SECS, FADE_IN_THRESHOLD};
use crate::intersection::{elements, VisibilityWatch};

/// Transition for the `index`-th animated element; later ones start later.
pub fn fade_transition(index: usize) -> String {
    let delay = index as f64 * FADE_IN_STAGGER_SECS;
    format!("opacity 0.6s ease {delay:.1}s, transform 0.6s ease {delay:.1}s")
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

/// Hides the page's content blocks and fades each one in as it scrolls into view.
#[hook]
pub fn use_fade_in() {
    use_effect_with_deps(
        move |_| {
            let targets = window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector_all(FADE_IN_SELECTOR).ok())
                .map(elements)
                .unwrap_or_default();

            for (index, element) in targets.iter().enumerate() {
                if let Some(element) = element.dyn_ref::<HtmlElement>() {
                    set_style(element, "opacity", "0");
                    set_style(element, "transform", "translateY(30px)");
                    set_style(element, "transition", &fade_transition(index));
                }
            }

            let watch = VisibilityWatch::observe(&targets, FADE_IN_ROOT_MARGIN, FADE_IN_THRESHOLD, |target, _| {
                if let Some(element) = target.dyn_ref::<HtmlElement>() {
                    set_style(element, "opacity", "1");
                    set_style(element, "transform", "translateY(0)");
                }
            });

            // Without an observer nothing would ever reveal them.
            if watch.is_none() {
                for element in targets.iter().filter_map(|el| el.dyn_ref::<HtmlElement>()) {
                    set_style(element, "opacity", "1");
                    set_style(element, "transform", "none");
                }
            }

            move || drop(watch)
        },
        (),
    );
}
