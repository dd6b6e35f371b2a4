//! Cyclic image sequences for the page background and the image sliders.

/// Background cycle: each tick shows the current image, then advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundRotation {
    images: Vec<String>,
    current: usize,
}

impl BackgroundRotation {
    #[must_use]
    pub const fn new(images: Vec<String>) -> Self {
        Self { images, current: 0 }
    }

    /// Image to display on this tick; `None` when there are no images.
    pub fn tick(&mut self) -> Option<&str> {
        let len = self.images.len();
        let shown = self.current;
        self.current = (shown + 1) % len.max(1);
        self.images.get(shown).map(String::as_str)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Slider cycle: the first image is already on the page, so each tick advances first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRotation {
    images: Vec<String>,
    index: usize,
}

impl SlideRotation {
    #[must_use]
    pub const fn new(images: Vec<String>) -> Self {
        Self { images, index: 0 }
    }

    /// Image sliding in on this tick; `None` when there are no images.
    pub fn tick(&mut self) -> Option<&str> {
        if self.images.is_empty() {
            return None;
        }
        self.index = (self.index + 1) % self.images.len();
        self.images.get(self.index).map(String::as_str)
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
