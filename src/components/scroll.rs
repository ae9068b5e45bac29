use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::SCROLL_TOP_VISIBLE_PX;

/// Section id an in-page link points at. A bare `#` points nowhere.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Where to scroll so the section starts just below the fixed navbar.
pub fn scroll_target_top(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

pub fn smooth_scroll_to(top: f64) {
    if let Some(window) = window() {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

fn scroll_to_section(id: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(section) = document.get_element_by_id(id).and_then(|el| el.dyn_into::<HtmlElement>().ok()) else {
        return;
    };
    let navbar_height = document
        .get_element_by_id("navbar")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .map(|nav| nav.offset_height() as f64)
        .unwrap_or(0.0);
    smooth_scroll_to(scroll_target_top(section.offset_top() as f64, navbar_height));
}

/// Turns every `href="#..."` link on the page into a smooth scroll.
#[hook]
pub fn use_smooth_anchor_scroll() {
    use_event_with_window("click", move |e: MouseEvent| {
        let anchor = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten());
        let Some(anchor) = anchor else {
            return;
        };
        e.prevent_default();
        if let Some(href) = anchor.get_attribute("href") {
            if let Some(id) = anchor_target_id(&href) {
                scroll_to_section(id);
            }
        }
    });
}

#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_event_with_window("scroll", move |_: Event| {
            let scroll_y = window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
            visible.set(scroll_y > SCROLL_TOP_VISIBLE_PX);
        });
    }

    let onclick = Callback::from(|_: MouseEvent| smooth_scroll_to(0.0));

    html! {
        <>
            <button class={classes!("scroll-to-top", (*visible).then(|| "visible"))}
                aria-label="Scroll to top" {onclick}>
                {"↑"}
            </button>
            <style>
                {r#"
                .scroll-to-top {
                    position: fixed;
                    bottom: 30px;
                    right: 30px;
                    width: 50px;
                    height: 50px;
                    background: var(--primary-color);
                    color: white;
                    border: none;
                    border-radius: 50%;
                    font-size: 24px;
                    cursor: pointer;
                    opacity: 0;
                    visibility: hidden;
                    transition: all 0.3s ease;
                    z-index: 999;
                    box-shadow: 0 4px 15px rgba(0, 0, 0, 0.2);
                }
                .scroll-to-top.visible {
                    opacity: 1;
                    visibility: visible;
                }
                .scroll-to-top:hover {
                    background: var(--primary-dark);
                    transform: translateY(-5px);
                    box-shadow: 0 6px 20px rgba(0, 0, 0, 0.3);
                }
                @media (max-width: 768px) {
                    .scroll-to-top {
                        bottom: 20px;
                        right: 20px;
                        width: 45px;
                        height: 45px;
                        font-size: 20px;
                    }
                }
                "#}
            </style>
        </>
    }
}
