//! Image carousel state for listing cards.
//!
//! Each card owns one `CarouselState`. The image list itself belongs to the
//! listing and is passed in by length, so the state never holds a stale copy.
//!
//! ```text
//! images: [a.jpg, b.jpg, c.jpg]
//!
//!   next:      0 → 1 → 2 → 0
//!   previous:  0 → 2 → 1 → 0
//! ```

/// Current position in a listing's image set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
}

impl CarouselState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the image currently shown
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance one image, wrapping to the first after the last.
    pub fn next(&mut self, len: usize) {
        self.step(1, len);
    }

    /// Go back one image, wrapping to the last before the first.
    pub fn previous(&mut self, len: usize) {
        self.step(-1, len);
    }

    /// Jump straight to `index`.
    ///
    /// Only the pagination dots call this, and they never emit an index
    /// outside `0..len`.
    pub fn jump_to(&mut self, index: usize, len: usize) {
        debug_assert!(index < len, "carousel jump to {index} with {len} images");
        self.index = index;
    }

    /// The image reference to render, or `None` for the placeholder path.
    pub fn current<'a>(&self, images: &'a [String]) -> Option<&'a str> {
        if images.is_empty() {
            return None;
        }
        images.get(self.index % images.len()).map(String::as_str)
    }

    fn step(&mut self, delta: isize, len: usize) {
        if !has_controls(len) {
            return;
        }
        let len = len as isize;
        self.index = (self.index as isize + delta).rem_euclid(len) as usize;
    }
}

/// Arrows and pagination dots only make sense with more than one image.
pub fn has_controls(len: usize) -> bool {
    len > 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_next_wraps() {
        let imgs = images(&["a.jpg", "b.jpg", "c.jpg"]);
        let mut state = CarouselState::new();
        assert_eq!(state.index(), 0);

        state.next(imgs.len());
        assert_eq!(state.index(), 1);
        state.next(imgs.len());
        assert_eq!(state.index(), 2);
        state.next(imgs.len());
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(&imgs), Some("a.jpg"));
    }

    #[test]
    fn test_previous_wraps() {
        let mut state = CarouselState::new();
        state.previous(3);
        assert_eq!(state.index(), 2);
        state.previous(3);
        assert_eq!(state.index(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..12 {
            for start in 0..len {
                let mut state = CarouselState::new();
                state.jump_to(start, len);
                for _ in 0..len {
                    state.next(len);
                }
                assert_eq!(state.index(), start, "len={len}");
            }
        }
    }

    #[test]
    fn test_previous_inverts_next() {
        for len in 1..10 {
            for i in 0..len {
                let mut state = CarouselState::new();
                state.jump_to(i, len);
                state.next(len);
                state.previous(len);
                assert_eq!(state.index(), i);

                state.previous(len);
                state.next(len);
                assert_eq!(state.index(), i);
            }
        }
    }

    #[test]
    fn test_jump_is_idempotent() {
        let mut state = CarouselState::new();
        state.jump_to(3, 5);
        assert_eq!(state.index(), 3);
        state.jump_to(3, 5);
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_single_and_empty_are_noops() {
        let mut state = CarouselState::new();
        state.next(1);
        state.previous(1);
        assert_eq!(state.index(), 0);

        state.next(0);
        state.previous(0);
        assert_eq!(state.index(), 0);
        assert_eq!(state.current(&[]), None);
    }

    #[test]
    fn test_has_controls() {
        assert!(!has_controls(0));
        assert!(!has_controls(1));
        assert!(has_controls(2));
    }

    #[test]
    fn test_current_after_images_shrink() {
        let mut state = CarouselState::new();
        state.jump_to(2, 3);
        // Listing reloaded with fewer photos; index is taken modulo the new length
        let imgs = images(&["x.png", "y.png"]);
        assert_eq!(state.current(&imgs), Some("x.png"));
    }
}
