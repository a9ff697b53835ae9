use std::time::Duration;

use crate::surface::{ContentRegion, RenderSurface};
use crate::DogImage;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(3_500);
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(300);

/// Auto-advancing slider over the dog images of one render cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    slides: ContentRegion<DogImage>,
    current: usize,
    elapsed: Duration,
    delay: Duration,
    transition: Duration,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY, DEFAULT_TRANSITION)
    }
}

impl Carousel {
    pub fn new(delay: Duration, transition: Duration) -> Self {
        Self {
            slides: ContentRegion::Empty,
            current: 0,
            elapsed: Duration::ZERO,
            delay,
            transition,
        }
    }

    pub fn slides(&self) -> &ContentRegion<DogImage> {
        &self.slides
    }

    pub fn current_index(&self) -> Option<usize> {
        (!self.slides.items().is_empty()).then_some(self.current)
    }

    pub fn current(&self) -> Option<&DogImage> {
        self.slides.items().get(self.current)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn transition(&self) -> Duration {
        self.transition
    }

    pub fn begin_loading(&mut self) {
        self.slides.begin_loading();
        self.rewind();
    }

    /// Accumulates elapsed time; returns true when the visible slide changed.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let count = self.slides.items().len();
        if count < 2 || self.delay.is_zero() {
            return false;
        }
        self.elapsed += dt;
        let mut advanced = false;
        while self.elapsed >= self.delay {
            self.elapsed -= self.delay;
            self.current = (self.current + 1) % count;
            advanced = true;
        }
        advanced
    }

    pub fn advance(&mut self) -> bool {
        let count = self.slides.items().len();
        if count == 0 {
            return false;
        }
        self.current = (self.current + 1) % count;
        self.elapsed = Duration::ZERO;
        true
    }

    fn rewind(&mut self) {
        self.current = 0;
        self.elapsed = Duration::ZERO;
    }
}

impl RenderSurface<DogImage> for Carousel {
    fn replace_all(&mut self, items: Vec<DogImage>) {
        self.slides.replace_all(items);
        self.rewind();
    }

    fn show_fallback(&mut self, message: &str) {
        self.slides.show_fallback(message);
        self.rewind();
    }
}
