//! Deferred thumbnail loading.
//!
//! Thumbnails past the first few render a placeholder and keep their real
//! source in `data-src`. Each one is swapped in once it comes within
//! `LAZY_ROOT_MARGIN` of the viewport and is then no longer observed.

use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config::LAZY_ROOT_MARGIN;
use crate::intersection::{elements, VisibilityWatch};

pub const DEFERRED_SRC_ATTR: &str = "data-src";

/// Moves `data-src` into `src`. Images without a deferred source are left alone.
pub fn take_deferred_source(img: &Element) -> Option<String> {
    let src = img.get_attribute(DEFERRED_SRC_ATTR)?;
    let _ = img.set_attribute("src", &src);
    let _ = img.remove_attribute(DEFERRED_SRC_ATTR);
    Some(src)
}

fn resolve_thumbnail(item: &Element) {
    if let Ok(Some(img)) = item.query_selector("img") {
        if let Some(src) = take_deferred_source(&img) {
            debug!("Loaded deferred gallery image {}", src);
        }
    }
}

#[hook]
pub fn use_deferred_thumbnails(grid: NodeRef) {
    use_effect_with_deps(
        move |grid: &NodeRef| {
            let watch = grid.cast::<Element>().and_then(|root| {
                let items = root
                    .query_selector_all("[data-gallery-item]")
                    .map(elements)
                    .unwrap_or_default();

                let watch = VisibilityWatch::observe(&items, LAZY_ROOT_MARGIN, 0.0, |item, observer| {
                    resolve_thumbnail(item);
                    observer.unobserve(item);
                });

                if watch.is_none() {
                    debug!("IntersectionObserver unavailable, loading all thumbnails");
                    items.iter().for_each(resolve_thumbnail);
                }
                watch
            });

            move || drop(watch)
        },
        grid,
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn img() -> Element {
        web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .create_element("img")
            .unwrap()
    }

    #[wasm_bindgen_test]
    fn deferred_source_is_swapped_in_once() {
        let img = img();
        img.set_attribute("src", "placeholder.gif").unwrap();
        img.set_attribute(DEFERRED_SRC_ATTR, "/assets/gallery/5.jpg").unwrap();

        assert_eq!(take_deferred_source(&img).as_deref(), Some("/assets/gallery/5.jpg"));
        assert_eq!(img.get_attribute("src").as_deref(), Some("/assets/gallery/5.jpg"));
        assert!(!img.has_attribute(DEFERRED_SRC_ATTR));
        assert_eq!(take_deferred_source(&img), None);
    }

    #[wasm_bindgen_test]
    fn missing_deferred_source_keeps_image() {
        let img = img();
        img.set_attribute("src", "/assets/gallery/1.jpg").unwrap();
        assert_eq!(take_deferred_source(&img), None);
        assert_eq!(img.get_attribute("src").as_deref(), Some("/assets/gallery/1.jpg"));
    }
}
