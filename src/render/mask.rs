//! Boolean pixel masks.
//!
//! Backs the filler's edge mask and visited/exterior masks. Reads outside
//! the grid return `false` and writes outside it are ignored, so callers can
//! probe padded bounding-box coordinates freely.

/// A width x height grid of booleans addressed with signed coordinates.
#[derive(Debug, Clone)]
pub struct PixelMask {
    width: u32,
    height: u32,
    bits: Vec<bool>,
}

impl PixelMask {
    /// Create an all-false mask.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            bits: vec![false; (width as usize) * (height as usize)],
        }
    }

    /// Mask width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Whether a coordinate lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Read a bit; out-of-bounds coordinates read as `false`.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> bool {
        self.in_bounds(x, y) && self.bits[self.index(x, y)]
    }

    /// Set a bit; out-of-bounds coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32) {
        if self.in_bounds(x, y) {
            let idx = self.index(x, y);
            self.bits[idx] = true;
        }
    }

    /// Number of set bits.
    #[must_use]
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut mask = PixelMask::new(10, 10);
        assert!(!mask.get(3, 4));
        mask.set(3, 4);
        assert!(mask.get(3, 4));
        assert_eq!(mask.count(), 1);
    }

    #[test]
    fn test_out_of_bounds_tolerant() {
        let mut mask = PixelMask::new(10, 10);
        mask.set(-1, 0);
        mask.set(0, -1);
        mask.set(10, 0);
        mask.set(0, 10);
        assert_eq!(mask.count(), 0);

        assert!(!mask.get(-1, -1));
        assert!(!mask.get(100, 100));
    }

    #[test]
    fn test_zero_sized_mask() {
        let mask = PixelMask::new(0, 0);
        assert!(!mask.get(0, 0));
    }
}
