use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent, MouseEvent, TouchEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::{EAGER_THUMBNAILS, PLACEHOLDER_SRC};
use crate::gallery::effects::{dispatch_close, dispatch_open, focus, preload, set_scroll_locked};
use crate::gallery::input::{classify_page_key, classify_thumbnail_key, GalleryAction, SwipeTracker};
use crate::gallery::lazy::use_deferred_thumbnails;
use crate::gallery::state::{Direction, GalleryController, ImageDescriptor};

pub enum LightboxMsg {
    Input(GalleryAction),
    ImageLoaded,
}

impl Reducible for GalleryController {
    type Action = LightboxMsg;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            LightboxMsg::Input(action) => {
                debug!("Gallery action {:?}", action);
                action.apply(&mut next);
            }
            LightboxMsg::ImageLoaded => next.image_loaded(),
        }
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<ImageDescriptor>,
}

/// Thumbnail grid plus lightbox. Renders nothing for an empty image list.
#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let controller = use_memo(|images| GalleryController::new(images.clone()), props.images.clone());

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                if let Err(e) = &*controller {
                    warn!("Gallery not initialized: {}", e);
                }
                || ()
            },
            (),
        );
    }

    match &*controller {
        Ok(controller) => html! { <Lightbox controller={controller.clone()} /> },
        Err(_) => html! {},
    }
}

#[derive(Properties, PartialEq)]
struct LightboxProps {
    controller: GalleryController,
}

#[function_component(Lightbox)]
fn lightbox(props: &LightboxProps) -> Html {
    let state = {
        let initial = props.controller.clone();
        use_reducer(move || initial)
    };
    let was_open = use_mut_ref(|| false);
    let swipe = use_mut_ref(SwipeTracker::default);

    let grid_ref = use_node_ref();
    let modal_ref = use_node_ref();
    let image_ref = use_node_ref();
    let close_ref = use_node_ref();
    let thumb_refs = use_memo(|len| (0..*len).map(|_| NodeRef::default()).collect::<Vec<_>>(), state.len());

    use_deferred_thumbnails(grid_ref.clone());

    {
        let len = state.len();
        use_effect_with_deps(
            move |_| {
                info!("Gallery initialized with {} images", len);
                || ()
            },
            (),
        );
    }

    // Open/close transitions: focus, page scroll and page-level events.
    {
        let was_open = was_open.clone();
        let close_ref = close_ref.clone();
        let thumb_refs = thumb_refs.clone();
        let index = state.current_index();
        let requested = state.requested_index();
        use_effect_with_deps(
            move |&is_open| {
                if *was_open.borrow() != is_open {
                    *was_open.borrow_mut() = is_open;
                    set_scroll_locked(is_open);
                    if is_open {
                        focus(&close_ref);
                        dispatch_open(requested);
                    } else {
                        if let Some(thumb) = thumb_refs.get(index) {
                            focus(thumb);
                        }
                        dispatch_close();
                    }
                }
                || ()
            },
            state.is_open(),
        );
    }

    // Prime the neighbours of whatever is on screen.
    {
        let deps = (state.is_open(), state.current_index());
        let state = state.clone();
        use_effect_with_deps(
            move |&(is_open, _)| {
                if is_open {
                    state.preload_targets().iter().for_each(|image| preload(&image.src));
                }
                || ()
            },
            deps,
        );
    }

    let send = {
        let state = state.clone();
        Callback::from(move |action: GalleryAction| state.dispatch(LightboxMsg::Input(action)))
    };

    {
        let send = send.clone();
        let is_open = state.is_open();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if let Some(action) = classify_page_key(&e.key(), is_open) {
                e.prevent_default();
                send.emit(action);
            }
        });
    }

    let thumbnails = state.images().iter().enumerate().map(|(index, image)| {
        let onclick = {
            let send = send.clone();
            Callback::from(move |_: MouseEvent| send.emit(GalleryAction::Open(index)))
        };
        let onkeydown = {
            let send = send.clone();
            Callback::from(move |e: KeyboardEvent| {
                if let Some(action) = classify_thumbnail_key(&e.key(), index) {
                    e.prevent_default();
                    send.emit(action);
                }
            })
        };
        html! {
            <div class="gallery-item" data-gallery-item="" tabindex="0" role="button"
                ref={thumb_refs[index].clone()} {onclick} {onkeydown}>
                {
                    if index < EAGER_THUMBNAILS {
                        html! { <img src={image.src.clone()} alt={image.alt.clone()} /> }
                    } else {
                        html! { <img src={PLACEHOLDER_SRC} data-src={image.src.clone()} alt={image.alt.clone()} /> }
                    }
                }
            </div>
        }
    });

    let on_backdrop = {
        let send = send.clone();
        let modal_ref = modal_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target().and_then(|t| t.dyn_into::<Element>().ok());
            if target.is_some() && target == modal_ref.cast::<Element>() {
                send.emit(GalleryAction::Close);
            }
        })
    };
    let on_close = {
        let send = send.clone();
        Callback::from(move |_: MouseEvent| send.emit(GalleryAction::Close))
    };
    let nav_button = |direction: Direction| {
        let send = send.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            send.emit(GalleryAction::Navigate(direction));
        })
    };
    let on_touch_start = {
        let swipe = swipe.clone();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                swipe.borrow_mut().begin(touch.screen_x() as f64);
            }
        })
    };
    let on_touch_end = {
        let swipe = swipe.clone();
        let send = send.clone();
        let is_open = state.is_open();
        Callback::from(move |e: TouchEvent| {
            if let Some(touch) = e.changed_touches().get(0) {
                if let Some(action) = swipe.borrow_mut().finish(touch.screen_x() as f64, is_open) {
                    send.emit(action);
                }
            }
        })
    };
    let on_image_load = {
        let state = state.clone();
        Callback::from(move |_: Event| state.dispatch(LightboxMsg::ImageLoaded))
    };

    let (image_src, image_alt) = state
        .displayed()
        .map(|image| (image.src.clone(), image.alt.clone()))
        .unwrap_or_default();
    let image_style = if state.is_loading() { "opacity: 0;" } else { "opacity: 1;" };
    let dim = |dimmed: bool| if dimmed { "opacity: 0.5;" } else { "opacity: 1;" };
    let counter = state.counter_text();

    html! {
        <>
            <div class="gallery-grid" ref={grid_ref}>
                { for thumbnails }
            </div>
            <div id="galleryModal" ref={modal_ref}
                class={classes!("modal", state.is_open().then(|| "active"))}
                role="dialog" aria-modal="true" aria-hidden={(!state.is_open()).to_string()}
                data-counter={counter.clone()}
                onclick={on_backdrop} ontouchstart={on_touch_start} ontouchend={on_touch_end}>
                <button class="modal-close" ref={close_ref} aria-label="Close gallery" onclick={on_close}>
                    {"×"}
                </button>
                <button class="modal-nav modal-prev" aria-label={state.previous_label()}
                    style={dim(state.previous_dimmed())} onclick={nav_button(Direction::Previous)}>
                    {"‹"}
                </button>
                <img id="modalImage" ref={image_ref} src={image_src} alt={image_alt}
                    style={image_style} onload={on_image_load.clone()} onerror={on_image_load} />
                <button class="modal-nav modal-next" aria-label={state.next_label()}
                    style={dim(state.next_dimmed())} onclick={nav_button(Direction::Next)}>
                    {"›"}
                </button>
                <span class="modal-counter" aria-live="polite">{counter}</span>
            </div>
            <style>
                {r#"
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
                    gap: 1rem;
                }
                .gallery-item {
                    cursor: pointer;
                    overflow: hidden;
                    border-radius: 12px;
                    aspect-ratio: 4 / 3;
                    outline-offset: 3px;
                }
                .gallery-item img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.3s ease;
                }
                .gallery-item:hover img {
                    transform: scale(1.05);
                }
                .gallery-item:focus {
                    outline: 3px solid var(--primary-color);
                }
                .modal {
                    display: none;
                    position: fixed;
                    inset: 0;
                    z-index: 1000;
                    background: rgba(0, 0, 0, 0.9);
                    align-items: center;
                    justify-content: center;
                }
                .modal.active {
                    display: flex;
                }
                #modalImage {
                    max-width: 90vw;
                    max-height: 85vh;
                    transition: opacity 0.3s ease;
                }
                .modal-close {
                    position: absolute;
                    top: 20px;
                    right: 30px;
                    font-size: 2.5rem;
                    color: white;
                    background: none;
                    border: none;
                    cursor: pointer;
                }
                .modal-nav {
                    position: absolute;
                    top: 50%;
                    transform: translateY(-50%);
                    font-size: 3rem;
                    color: white;
                    background: rgba(255, 255, 255, 0.1);
                    border: none;
                    border-radius: 50%;
                    width: 60px;
                    height: 60px;
                    cursor: pointer;
                }
                .modal-prev { left: 20px; }
                .modal-next { right: 20px; }
                .modal-nav:focus {
                    outline: 3px solid var(--secondary-color);
                    outline-offset: 3px;
                }
                .modal-close:focus {
                    outline: 3px solid var(--secondary-color);
                }
                .modal-counter {
                    position: absolute;
                    bottom: 20px;
                    left: 50%;
                    transform: translateX(-50%);
                    color: white;
                    font-size: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                    padding: 8px 16px;
                    border-radius: 20px;
                    pointer-events: none;
                }
                @media (max-width: 768px) {
                    .modal-nav {
                        width: 44px;
                        height: 44px;
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;
    use web_sys::js_sys::Reflect;
    use web_sys::{CustomEvent, Document, HtmlElement, KeyboardEventInit};
    use yew::AppHandle;

    use crate::gallery::effects::{CLOSE_EVENT, OPEN_EVENT};

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    fn images(n: usize) -> Vec<ImageDescriptor> {
        (0..n)
            .map(|i| ImageDescriptor::new(format!("/assets/gallery/{i}.jpg"), format!("Bild {i}")))
            .collect()
    }

    // Gives the scheduler a turn to render and run effects.
    async fn settle() {
        TimeoutFuture::new(10).await;
    }

    async fn mount(n: usize) -> (Element, AppHandle<Gallery>) {
        let root = document().create_element("div").unwrap();
        document().body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Gallery>::with_root_and_props(root.clone(), GalleryProps { images: images(n) })
            .render();
        settle().await;
        (root, app)
    }

    fn unmount(root: Element, app: AppHandle<Gallery>) {
        app.destroy();
        root.remove();
    }

    fn find(root: &Element, selector: &str) -> HtmlElement {
        root.query_selector(selector).unwrap().unwrap().dyn_into().unwrap()
    }

    fn thumbnail(root: &Element, index: usize) -> HtmlElement {
        root.query_selector_all("[data-gallery-item]")
            .unwrap()
            .get(index as u32)
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn is_active(modal: &HtmlElement) -> bool {
        modal.class_name().split_whitespace().any(|c| c == "active")
    }

    fn focused() -> Option<Element> {
        document().active_element()
    }

    fn body_overflow() -> String {
        document().body().unwrap().style().get_property_value("overflow").unwrap()
    }

    fn keydown(key: &str) -> KeyboardEvent {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        init.set_bubbles(true);
        KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap()
    }

    fn press(key: &str) {
        web_sys::window().unwrap().dispatch_event(&keydown(key)).unwrap();
    }

    fn count_events(name: &str) -> (Rc<Cell<u32>>, Closure<dyn FnMut(Event)>) {
        let count = Rc::new(Cell::new(0));
        let listener = {
            let count = count.clone();
            Closure::wrap(Box::new(move |_: Event| count.set(count.get() + 1)) as Box<dyn FnMut(Event)>)
        };
        document()
            .add_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            .unwrap();
        (count, listener)
    }

    fn stop_listening<T: ?Sized>(name: &str, listener: &Closure<T>) {
        document()
            .remove_event_listener_with_callback(name, listener.as_ref().unchecked_ref())
            .unwrap();
    }

    #[wasm_bindgen_test]
    async fn thumbnail_click_opens_lightbox_on_that_image() {
        let (root, app) = mount(5).await;
        let modal = find(&root, "#galleryModal");
        assert!(!is_active(&modal));
        assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("true"));

        thumbnail(&root, 2).click();
        settle().await;

        assert!(is_active(&modal));
        assert_eq!(modal.get_attribute("aria-hidden").as_deref(), Some("false"));
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("3 / 5"));
        assert_eq!(find(&root, ".modal-counter").text_content().as_deref(), Some("3 / 5"));
        assert_eq!(
            find(&root, "#modalImage").get_attribute("src").as_deref(),
            Some("/assets/gallery/2.jpg")
        );
        assert_eq!(focused(), Some(Element::from(find(&root, ".modal-close"))));
        assert_eq!(body_overflow(), "hidden");

        press("Escape");
        settle().await;
        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn escape_closes_once_and_returns_focus_to_thumbnail() {
        let (root, app) = mount(5).await;
        let modal = find(&root, "#galleryModal");
        let (closes, listener) = count_events(CLOSE_EVENT);

        thumbnail(&root, 3).click();
        settle().await;
        assert!(is_active(&modal));
        assert_eq!(body_overflow(), "hidden");

        press("Escape");
        settle().await;
        press("Escape");
        settle().await;

        stop_listening(CLOSE_EVENT, &listener);
        assert!(!is_active(&modal));
        assert_eq!(closes.get(), 1);
        assert_eq!(focused(), Some(Element::from(thumbnail(&root, 3))));
        assert_eq!(body_overflow(), "");
        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn only_backdrop_click_closes() {
        let (root, app) = mount(5).await;
        let modal = find(&root, "#galleryModal");

        thumbnail(&root, 0).click();
        settle().await;

        find(&root, "#modalImage").click();
        settle().await;
        assert!(is_active(&modal));

        find(&root, ".modal-next").click();
        settle().await;
        assert!(is_active(&modal));
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("2 / 5"));

        find(&root, ".modal-prev").click();
        find(&root, ".modal-prev").click();
        settle().await;
        assert!(is_active(&modal));
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("5 / 5"));

        modal.click();
        settle().await;
        assert!(!is_active(&modal));
        assert_eq!(body_overflow(), "");
        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn keyboard_opens_and_navigates() {
        let (root, app) = mount(4).await;
        let modal = find(&root, "#galleryModal");

        // Arrow keys do nothing while the lightbox is closed.
        press("ArrowRight");
        settle().await;
        assert!(!is_active(&modal));

        thumbnail(&root, 1).dispatch_event(&keydown("Enter")).unwrap();
        settle().await;
        assert!(is_active(&modal));
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("2 / 4"));

        press("ArrowRight");
        settle().await;
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("3 / 4"));
        assert_eq!(
            find(&root, ".modal-prev").get_attribute("aria-label").as_deref(),
            Some("Previous image (3 of 4)")
        );

        press("ArrowLeft");
        press("ArrowLeft");
        press("ArrowLeft");
        settle().await;
        assert_eq!(modal.get_attribute("data-counter").as_deref(), Some("4 / 4"));

        press("Escape");
        settle().await;
        assert!(!is_active(&modal));
        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn open_event_reports_clicked_index() {
        let (root, app) = mount(6).await;
        let seen = Rc::new(Cell::new(None));
        let listener = {
            let seen = seen.clone();
            Closure::wrap(Box::new(move |event: CustomEvent| {
                let index = Reflect::get(&event.detail(), &JsValue::from_str("index"))
                    .ok()
                    .and_then(|v| v.as_f64());
                seen.set(index);
            }) as Box<dyn FnMut(CustomEvent)>)
        };
        document()
            .add_event_listener_with_callback(OPEN_EVENT, listener.as_ref().unchecked_ref())
            .unwrap();

        thumbnail(&root, 4).click();
        settle().await;

        stop_listening(OPEN_EVENT, &listener);
        assert_eq!(seen.get(), Some(4.0));

        press("Escape");
        settle().await;
        unmount(root, app);
    }

    #[wasm_bindgen_test]
    async fn empty_gallery_renders_nothing() {
        let (root, app) = mount(0).await;
        assert!(root.query_selector("#galleryModal").unwrap().is_none());
        assert!(root.query_selector("[data-gallery-item]").unwrap().is_none());
        unmount(root, app);
    }
}
