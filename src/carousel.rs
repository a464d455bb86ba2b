//! Carousel navigation over a fixed, non-empty item sequence

use crate::{Error, Result};

/// Current position within `len` items, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: usize,
}

impl Carousel {
    /// A carousel over zero items is never built; callers show a
    /// "no content" state instead.
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyCarousel);
        }
        Ok(Self { current: 0, len })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Navigation only does something with two or more items
    pub fn is_navigable(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }

    pub fn prev(&mut self) -> usize {
        self.current = (self.current + self.len - 1) % self.len;
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Jump straight to `index` (e.g. a dot indicator was tapped)
    pub fn go_to(&mut self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange { index, len: self.len });
        }
        self.current = index;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_carousel_is_refused() {
        assert!(matches!(Carousel::new(0), Err(Error::EmptyCarousel)));
    }

    #[test]
    fn next_and_prev_wrap() {
        let mut c = Carousel::new(3).unwrap();
        assert_eq!(c.prev(), 2);
        assert_eq!(c.next(), 0);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn single_item_is_a_fixed_point() {
        let mut c = Carousel::new(1).unwrap();
        assert!(!c.is_navigable());
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
    }

    #[test]
    fn go_to_checks_bounds() {
        let mut c = Carousel::new(2).unwrap();
        c.go_to(1).unwrap();
        assert_eq!(c.current(), 1);
        assert!(matches!(c.go_to(2), Err(Error::IndexOutOfRange { index: 2, len: 2 })));
        c.reset();
        assert_eq!(c.current(), 0);
    }
}
