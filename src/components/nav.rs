use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;

use crate::config::{ACTIVE_SECTION_OFFSET_PX, NAV_SHADOW_SCROLL_PX};
use crate::content::NAV_LINKS;
use crate::intersection::elements;

/// Id of the section the visitor is reading: the last one whose top has
/// passed `scroll_y` plus the header offset.
pub fn active_section(sections: &[(String, f64)], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - ACTIVE_SECTION_OFFSET_PX)
        .last()
        .map(|(id, _)| id.as_str())
}

fn section_offsets(document: &Document) -> Vec<(String, f64)> {
    document
        .query_selector_all("section[id]")
        .map(elements)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|section| {
            let top = section.dyn_ref::<HtmlElement>()?.offset_top() as f64;
            Some((section.id(), top))
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    WrapToFirst,
    WrapToLast,
    Close,
}

/// Keeps Tab cycling inside the open mobile menu; Escape closes it.
pub fn classify_menu_key(key: &str, shift: bool, on_first: bool, on_last: bool) -> Option<MenuKey> {
    match key {
        "Tab" if shift && on_first => Some(MenuKey::WrapToLast),
        "Tab" if !shift && on_last => Some(MenuKey::WrapToFirst),
        "Escape" => Some(MenuKey::Close),
        _ => None,
    }
}

fn focus_element(element: Option<&Element>) {
    if let Some(element) = element.and_then(|el| el.dyn_ref::<HtmlElement>()) {
        let _ = element.focus();
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);
    let active = use_state_eq(|| None::<String>);
    let toggle_ref = use_node_ref();
    let menu_ref = use_node_ref();

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(move |_| {
            let listener = window().and_then(|window| {
                let document = window.document()?;
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_y > NAV_SHADOW_SCROLL_PX);
                    let sections = section_offsets(&document);
                    active.set(active_section(&sections, scroll_y).map(str::to_string));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .ok()?;
                Some((window, scroll_callback))
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let on_menu_key = {
        let menu_open = menu_open.clone();
        let menu_ref = menu_ref.clone();
        let toggle_ref = toggle_ref.clone();
        Callback::from(move |e: KeyboardEvent| {
            if !*menu_open {
                return;
            }
            let Some(menu) = menu_ref.cast::<Element>() else {
                return;
            };
            let focusables = menu.query_selector_all("a, button").map(elements).unwrap_or_default();
            let focused = window().and_then(|w| w.document()).and_then(|d| d.active_element());
            let on_first = focused.is_some() && focusables.first() == focused.as_ref();
            let on_last = focused.is_some() && focusables.last() == focused.as_ref();

            match classify_menu_key(&e.key(), e.shift_key(), on_first, on_last) {
                Some(MenuKey::WrapToLast) => {
                    e.prevent_default();
                    focus_element(focusables.last());
                }
                Some(MenuKey::WrapToFirst) => {
                    e.prevent_default();
                    focus_element(focusables.first());
                }
                Some(MenuKey::Close) => {
                    menu_open.set(false);
                    focus_element(toggle_ref.cast::<Element>().as_ref());
                }
                None => {}
            }
        })
    };

    html! {
        <nav id="navbar" class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"Musik-Café"}</a>

                <button id="navToggle" ref={toggle_ref}
                    class={classes!("burger-menu", (*menu_open).then(|| "active"))}
                    aria-label="Menü umschalten" aria-expanded={menu_open.to_string()}
                    onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div id="navMenu" ref={menu_ref}
                    class={classes!("nav-menu", (*menu_open).then(|| "active"))}
                    onkeydown={on_menu_key}>
                    {
                        for NAV_LINKS.iter().map(|(href, label)| {
                            let is_active = active.as_deref() == href.strip_prefix('#');
                            html! {
                                <a href={*href} onclick={close_menu.clone()}
                                    class={classes!("nav-link", is_active.then(|| "active"))}>
                                    {*label}
                                </a>
                            }
                        })
                    }
                </div>
            </div>
            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 900;
                    background: rgba(255, 255, 255, 0.97);
                    box-shadow: 0 2px 20px rgba(0, 0, 0, 0.05);
                    transition: box-shadow 0.3s ease;
                }
                .top-nav.scrolled {
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.1);
                }
                .nav-content {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: var(--primary-color);
                    text-decoration: none;
                }
                .nav-menu {
                    display: flex;
                    gap: 1.5rem;
                }
                .nav-link {
                    color: var(--text-color);
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-link.active,
                .nav-link:hover {
                    color: var(--primary-color);
                }
                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .burger-menu span {
                    width: 25px;
                    height: 3px;
                    background: var(--text-color);
                    transition: all 0.3s ease;
                }
                .burger-menu.active span:nth-child(1) {
                    transform: rotate(45deg) translate(6px, 6px);
                }
                .burger-menu.active span:nth-child(2) {
                    opacity: 0;
                }
                .burger-menu.active span:nth-child(3) {
                    transform: rotate(-45deg) translate(6px, -6px);
                }
                @media (max-width: 768px) {
                    .burger-menu {
                        display: flex;
                    }
                    .nav-menu {
                        display: none;
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        flex-direction: column;
                        padding: 1.5rem;
                        background: white;
                    }
                    .nav-menu.active {
                        display: flex;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<(String, f64)> {
        vec![
            ("home".to_string(), 0.0),
            ("about".to_string(), 800.0),
            ("gallery".to_string(), 1600.0),
        ]
    }

    #[test]
    fn first_section_active_at_top() {
        assert_eq!(active_section(&sections(), 0.0), Some("home"));
    }

    #[test]
    fn section_activates_before_reaching_it() {
        assert_eq!(active_section(&sections(), 599.0), Some("home"));
        assert_eq!(active_section(&sections(), 600.0), Some("about"));
        assert_eq!(active_section(&sections(), 5000.0), Some("gallery"));
    }

    #[test]
    fn no_sections_no_active_link() {
        assert_eq!(active_section(&[], 100.0), None);
    }

    #[test]
    fn tab_wraps_inside_menu() {
        assert_eq!(classify_menu_key("Tab", false, false, true), Some(MenuKey::WrapToFirst));
        assert_eq!(classify_menu_key("Tab", true, true, false), Some(MenuKey::WrapToLast));
        assert_eq!(classify_menu_key("Tab", false, false, false), None);
        assert_eq!(classify_menu_key("Tab", true, false, true), None);
    }

    #[test]
    fn escape_closes_menu() {
        assert_eq!(classify_menu_key("Escape", false, false, false), Some(MenuKey::Close));
        assert_eq!(classify_menu_key("Enter", false, true, true), None);
    }
}
