//! Carousel Position
//!
//! Wrapping index over a fixed list plus the single-slot auto-advance timer.

/// Where a slide sits relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlidePosition {
    Active,
    Next,
    Prev,
    Hidden,
}

impl SlidePosition {
    pub fn class(&self) -> &'static str {
        match self {
            SlidePosition::Active => "active",
            SlidePosition::Next => "next",
            SlidePosition::Prev => "prev",
            SlidePosition::Hidden => "hidden-card",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Replace the list length, keeping the index in range
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.index = 0;
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    /// Jump to `index`; out-of-range values are ignored
    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }

    pub fn position(&self, slide: usize) -> SlidePosition {
        if self.len == 0 || slide >= self.len {
            return SlidePosition::Hidden;
        }
        let diff = (slide + self.len - self.index) % self.len;
        if diff == 0 {
            SlidePosition::Active
        } else if diff == 1 {
            SlidePosition::Next
        } else if diff == self.len - 1 {
            SlidePosition::Prev
        } else {
            SlidePosition::Hidden
        }
    }
}

/// Holds at most one live timer handle.
///
/// Handles cancel on drop (as `gloo_timers::callback::Interval` does), so
/// re-arming can never leave two timers running.
#[derive(Debug)]
pub struct AutoAdvance<H> {
    handle: Option<H>,
}

impl<H> Default for AutoAdvance<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> AutoAdvance<H> {
    /// Cancel the current timer, then start a new one
    pub fn arm(&mut self, start: impl FnOnce() -> H) {
        self.disarm();
        self.handle = Some(start());
    }

    pub fn disarm(&mut self) {
        self.handle.take();
    }

    pub fn is_armed(&self) -> bool {
        self.handle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_three_next_on_five() {
        let mut carousel = Carousel::new(5);
        for _ in 0..3 {
            carousel.next();
        }
        assert_eq!(carousel.index(), 3);
    }

    #[test]
    fn test_next_is_n_mod_k() {
        for k in 1..7 {
            let mut carousel = Carousel::new(k);
            for n in 1..20 {
                carousel.next();
                assert_eq!(carousel.index(), n % k);
            }
        }
    }

    #[test]
    fn test_prev_wraps_from_zero() {
        let mut carousel = Carousel::new(4);
        carousel.prev();
        assert_eq!(carousel.index(), 3);
        carousel.prev();
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.next();
        carousel.prev();
        carousel.select(2);
        assert_eq!(carousel.index(), 0);
        assert_eq!(carousel.position(0), SlidePosition::Hidden);
    }

    #[test]
    fn test_select_and_reset() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.index(), 2);
        carousel.select(9);
        assert_eq!(carousel.index(), 2);
        carousel.reset(2);
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_positions() {
        let mut carousel = Carousel::new(5);
        carousel.select(0);
        assert_eq!(carousel.position(0), SlidePosition::Active);
        assert_eq!(carousel.position(1), SlidePosition::Next);
        assert_eq!(carousel.position(4), SlidePosition::Prev);
        assert_eq!(carousel.position(2), SlidePosition::Hidden);

        let mut pair = Carousel::new(2);
        pair.select(1);
        assert_eq!(pair.position(0), SlidePosition::Next);
        assert_eq!(pair.position(1).class(), "active");
    }

    /// Counts live handles the way a real interval would be cancelled
    struct Handle(Rc<Cell<usize>>);

    impl Handle {
        fn start(live: &Rc<Cell<usize>>) -> Handle {
            live.set(live.get() + 1);
            Handle(live.clone())
        }
    }

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn test_rearm_never_overlaps() {
        let live = Rc::new(Cell::new(0));
        let mut auto = AutoAdvance::default();

        auto.arm(|| Handle::start(&live));
        auto.arm(|| Handle::start(&live));
        auto.arm(|| Handle::start(&live));
        assert_eq!(live.get(), 1);
        assert!(auto.is_armed());

        auto.disarm();
        assert_eq!(live.get(), 0);
        assert!(!auto.is_armed());
    }

    #[test]
    fn test_old_handle_dropped_before_new_one_starts() {
        let live = Rc::new(Cell::new(0));
        let mut auto = AutoAdvance::default();
        auto.arm(|| Handle::start(&live));

        let seen = live.clone();
        auto.arm(|| {
            assert_eq!(seen.get(), 0);
            Handle::start(&seen)
        });
        assert_eq!(live.get(), 1);
    }
}
