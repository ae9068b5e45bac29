//! Lightbox state: the image list, the cursor and the open flag.
//!
//! Nothing here touches the DOM. The lightbox component reads the derived
//! labels and counter from this type and performs the side effects itself.

use std::rc::Rc;

use crate::error::GalleryError;

/// One gallery image: where to load it from and its accessible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub src: String,
    pub alt: String,
}

impl ImageDescriptor {
    pub fn new(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self { src: src.into(), alt: alt.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryController {
    images: Rc<[ImageDescriptor]>,
    current_index: usize,
    is_open: bool,
    // Index whose source currently sits in the modal image slot.
    displayed: Option<usize>,
    // Last index passed to `open`, kept even when it was out of range.
    requested: usize,
    loading: bool,
}

impl GalleryController {
    pub fn new(images: Vec<ImageDescriptor>) -> Result<Self, GalleryError> {
        if images.is_empty() {
            return Err(GalleryError::EmptyGallery);
        }
        Ok(Self {
            images: images.into(),
            current_index: 0,
            is_open: false,
            displayed: None,
            requested: 0,
            loading: false,
        })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn images(&self) -> &[ImageDescriptor] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// True between a source swap and the matching image load.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The index most recently asked for by `open`, which is what the
    /// `gallery:open` event reports.
    pub fn requested_index(&self) -> usize {
        self.requested
    }

    /// The image shown in the modal slot, if one has been shown yet.
    pub fn displayed(&self) -> Option<&ImageDescriptor> {
        self.displayed.map(|i| &self.images[i])
    }

    /// Opens the lightbox at `index`. An out-of-range index still opens the
    /// lightbox, but keeps the previously shown image.
    pub fn open(&mut self, index: usize) {
        self.is_open = true;
        self.requested = index;
        self.show(index);
    }

    /// Returns false if the lightbox was already closed.
    pub fn close(&mut self) -> bool {
        if !self.is_open {
            return false;
        }
        self.is_open = false;
        true
    }

    /// Moves the cursor to `index` and swaps the displayed image.
    /// Out-of-range targets are ignored; there is no wraparound here.
    pub fn show(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.current_index = index;
        if self.displayed != Some(index) {
            self.displayed = Some(index);
            self.loading = true;
        }
        true
    }

    pub fn next(&mut self) {
        let target = if self.current_index + 1 < self.images.len() {
            self.current_index + 1
        } else {
            0
        };
        self.show(target);
    }

    pub fn previous(&mut self) {
        let target = if self.current_index > 0 {
            self.current_index - 1
        } else {
            self.images.len() - 1
        };
        self.show(target);
    }

    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Previous => self.previous(),
            Direction::Next => self.next(),
        }
    }

    pub fn image_loaded(&mut self) {
        self.loading = false;
    }

    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current_index + 1, self.images.len())
    }

    pub fn previous_label(&self) -> String {
        format!("Previous image ({} of {})", self.current_index + 1, self.images.len())
    }

    pub fn next_label(&self) -> String {
        format!("Next image ({} of {})", self.current_index + 1, self.images.len())
    }

    /// Boundary hints only; both controls keep working and wrap around.
    pub fn previous_dimmed(&self) -> bool {
        self.current_index == 0
    }

    pub fn next_dimmed(&self) -> bool {
        self.current_index + 1 == self.images.len()
    }

    /// Neighbours of the current image worth fetching ahead of time.
    pub fn preload_targets(&self) -> Vec<&ImageDescriptor> {
        let mut targets = Vec::with_capacity(2);
        if let Some(prev) = self.current_index.checked_sub(1) {
            targets.push(&self.images[prev]);
        }
        if let Some(next) = self.images.get(self.current_index + 1) {
            targets.push(next);
        }
        targets
    }
}
