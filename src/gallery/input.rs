//! Maps raw keyboard, pointer and touch input onto gallery actions.

use crate::config::SWIPE_THRESHOLD_PX;
use crate::gallery::state::{Direction, GalleryController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryAction {
    Open(usize),
    Close,
    Navigate(Direction),
}

impl GalleryAction {
    pub fn apply(self, gallery: &mut GalleryController) {
        match self {
            GalleryAction::Open(index) => gallery.open(index),
            GalleryAction::Close => {
                gallery.close();
            }
            GalleryAction::Navigate(direction) => gallery.step(direction),
        }
    }
}

/// Enter or Space on a focused thumbnail behaves like a click on it.
pub fn classify_thumbnail_key(key: &str, index: usize) -> Option<GalleryAction> {
    match key {
        "Enter" | " " => Some(GalleryAction::Open(index)),
        _ => None,
    }
}

/// Page-level keys only mean something while the lightbox is open.
pub fn classify_page_key(key: &str, is_open: bool) -> Option<GalleryAction> {
    if !is_open {
        return None;
    }
    match key {
        "Escape" => Some(GalleryAction::Close),
        "ArrowLeft" => Some(GalleryAction::Navigate(Direction::Previous)),
        "ArrowRight" => Some(GalleryAction::Navigate(Direction::Next)),
        _ => None,
    }
}

/// Tracks one touch gesture on the lightbox surface.
#[derive(Debug, Default, Clone, Copy)]
pub struct SwipeTracker {
    start_x: Option<f64>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f64) {
        self.start_x = Some(x);
    }

    /// Ends the gesture. Dragging leftward advances, rightward goes back.
    pub fn finish(&mut self, x: f64, is_open: bool) -> Option<GalleryAction> {
        let start = self.start_x.take()?;
        if !is_open {
            return None;
        }
        let diff = start - x;
        if diff.abs() <= SWIPE_THRESHOLD_PX {
            return None;
        }
        let direction = if diff > 0.0 { Direction::Next } else { Direction::Previous };
        Some(GalleryAction::Navigate(direction))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::state::ImageDescriptor;

    fn gallery(n: usize) -> GalleryController {
        let images = (0..n)
            .map(|i| ImageDescriptor::new(format!("{i}.jpg"), format!("image {i}")))
            .collect();
        GalleryController::new(images).unwrap()
    }

    #[test]
    fn enter_matches_click() {
        let mut clicked = gallery(5);
        GalleryAction::Open(3).apply(&mut clicked);

        let mut keyed = gallery(5);
        classify_thumbnail_key("Enter", 3).unwrap().apply(&mut keyed);

        assert_eq!(clicked, keyed);
        assert_eq!(classify_thumbnail_key(" ", 3), Some(GalleryAction::Open(3)));
        assert_eq!(classify_thumbnail_key("a", 3), None);
    }

    #[test]
    fn page_keys_ignored_while_closed() {
        for key in ["Escape", "ArrowLeft", "ArrowRight"] {
            assert_eq!(classify_page_key(key, false), None);
        }
    }

    #[test]
    fn page_keys_while_open() {
        assert_eq!(classify_page_key("Escape", true), Some(GalleryAction::Close));
        assert_eq!(
            classify_page_key("ArrowLeft", true),
            Some(GalleryAction::Navigate(Direction::Previous))
        );
        assert_eq!(
            classify_page_key("ArrowRight", true),
            Some(GalleryAction::Navigate(Direction::Next))
        );
        assert_eq!(classify_page_key("Tab", true), None);
    }

    #[test]
    fn swipe_while_closed_does_nothing() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.finish(100.0, false), None);
    }

    #[test]
    fn swipe_moves_one_image_per_gesture() {
        let mut g = gallery(5);
        g.open(2);
        let mut swipe = SwipeTracker::default();

        swipe.begin(300.0);
        swipe.finish(100.0, g.is_open()).unwrap().apply(&mut g);
        assert_eq!(g.current_index(), 3);

        swipe.begin(100.0);
        swipe.finish(300.0, g.is_open()).unwrap().apply(&mut g);
        assert_eq!(g.current_index(), 2);

        // A stray touchend without a matching touchstart is not a gesture.
        assert_eq!(swipe.finish(0.0, true), None);
    }

    #[test]
    fn short_drag_is_not_a_swipe() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0);
        assert_eq!(swipe.finish(150.0, true), None);
        swipe.begin(100.0);
        assert_eq!(
            swipe.finish(49.0, true),
            Some(GalleryAction::Navigate(Direction::Next))
        );
    }

    #[test]
    fn close_action_is_idempotent() {
        let mut g = gallery(2);
        GalleryAction::Open(1).apply(&mut g);
        GalleryAction::Close.apply(&mut g);
        let once = g.clone();
        GalleryAction::Close.apply(&mut g);
        assert_eq!(g, once);
    }
}
