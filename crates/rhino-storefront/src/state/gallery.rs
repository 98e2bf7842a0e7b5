//! Product image gallery.
//!
//! Navigation wraps in both directions. Keyboard input only acts while the
//! enlarged view is open.

use serde::{Deserialize, Serialize};

/// How the gallery is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GalleryView {
    #[default]
    Inline,
    Modal,
}

/// Keys the gallery responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl GalleryKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Self {
        match key {
            "ArrowLeft" => GalleryKey::ArrowLeft,
            "ArrowRight" => GalleryKey::ArrowRight,
            "Escape" => GalleryKey::Escape,
            _ => GalleryKey::Other,
        }
    }
}

/// Selected image and display mode over a fixed number of images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    len: usize,
    current: usize,
    view: GalleryView,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            view: GalleryView::Inline,
        }
    }

    /// Index of the selected image.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn view(&self) -> GalleryView {
        self.view
    }

    pub fn is_open(&self) -> bool {
        self.view == GalleryView::Modal
    }

    /// Select image `index` and enlarge it. Out-of-range indexes wrap.
    pub fn open(&mut self, index: usize) {
        if self.is_empty() {
            return;
        }
        self.current = index % self.len;
        self.view = GalleryView::Modal;
    }

    pub fn close(&mut self) {
        self.view = GalleryView::Inline;
    }

    pub fn next(&mut self) {
        if !self.is_empty() {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn previous(&mut self) {
        if !self.is_empty() {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Apply a key press. Returns whether the gallery handled it.
    pub fn handle_key(&mut self, key: GalleryKey) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            GalleryKey::ArrowRight => self.next(),
            GalleryKey::ArrowLeft => self.previous(),
            GalleryKey::Escape => self.close(),
            GalleryKey::Other => return false,
        }
        true
    }
}
