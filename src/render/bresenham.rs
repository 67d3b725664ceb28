//! Bresenham line scan conversion.
//!
//! Turns a line segment into the ordered sequence of pixels it touches,
//! using the classic integer error accumulator. The iterator is lazy and
//! finite; consumers clip out-of-canvas pixels themselves.

use crate::geometry::Point;

/// Lazy pixel iterator over a line segment, endpoints inclusive.
///
/// The segment is canonicalized before iteration: steep lines (|dy| > |dx|)
/// are traversed in (y, x) space and swapped back on output, and the x-major
/// endpoint order is normalized so `x0 <= x1`. Because of this the *set* of
/// emitted pixels is identical when the endpoints are reversed, though the
/// emission order may differ.
///
/// # Example
///
/// ```
/// use rasterink::geometry::Point;
/// use rasterink::render::Bresenham;
///
/// let pixels: Vec<(i32, i32)> =
///     Bresenham::new(Point::new(0, 0), Point::new(3, 0)).collect();
/// assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Bresenham {
    x: i32,
    x1: i32,
    y: i32,
    ystep: i32,
    dx: i32,
    dy: i32,
    error: i32,
    steep: bool,
}

impl Bresenham {
    /// Scan-convert the segment from `a` to `b`.
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        let (mut x0, mut y0, mut x1, mut y1) = (a.x, a.y, b.x, b.y);
        let mut dx = (x1 - x0).abs();
        let mut dy = (y1 - y0).abs();

        let steep = dy > dx;
        if steep {
            std::mem::swap(&mut x0, &mut y0);
            std::mem::swap(&mut x1, &mut y1);
            std::mem::swap(&mut dx, &mut dy);
        }
        if x0 > x1 {
            std::mem::swap(&mut x0, &mut x1);
            std::mem::swap(&mut y0, &mut y1);
        }

        Self {
            x: x0,
            x1,
            y: y0,
            ystep: if y0 < y1 { 1 } else { -1 },
            dx,
            dy,
            error: 0,
            steep,
        }
    }
}

impl Iterator for Bresenham {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<(i32, i32)> {
        if self.x > self.x1 {
            return None;
        }

        let out = if self.steep {
            (self.y, self.x)
        } else {
            (self.x, self.y)
        };

        self.error += self.dy;
        if 2 * self.error >= self.dx {
            self.y += self.ystep;
            self.error -= self.dx;
        }
        self.x += 1;

        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.x1 - self.x + 1).max(0) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bresenham {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn pixel_set(a: Point, b: Point) -> HashSet<(i32, i32)> {
        Bresenham::new(a, b).collect()
    }

    #[test]
    fn test_horizontal_line_exact_pixels() {
        let pixels: Vec<(i32, i32)> =
            Bresenham::new(Point::new(0, 0), Point::new(5, 0)).collect();
        assert_eq!(
            pixels,
            vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0), (5, 0)]
        );
    }

    #[test]
    fn test_vertical_line() {
        let pixels = pixel_set(Point::new(3, 0), Point::new(3, 4));
        assert_eq!(
            pixels,
            HashSet::from([(3, 0), (3, 1), (3, 2), (3, 3), (3, 4)])
        );
    }

    #[test]
    fn test_diagonal_line() {
        let pixels: Vec<(i32, i32)> =
            Bresenham::new(Point::new(0, 0), Point::new(3, 3)).collect();
        assert_eq!(pixels, vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
    }

    #[test]
    fn test_single_pixel() {
        let pixels: Vec<(i32, i32)> =
            Bresenham::new(Point::new(7, 7), Point::new(7, 7)).collect();
        assert_eq!(pixels, vec![(7, 7)]);
    }

    #[test]
    fn test_endpoints_always_included() {
        let a = Point::new(2, 9);
        let b = Point::new(31, -4);
        let pixels = pixel_set(a, b);
        assert!(pixels.contains(&(a.x, a.y)));
        assert!(pixels.contains(&(b.x, b.y)));
    }

    #[test]
    fn test_steep_negative_slope() {
        let pixels = pixel_set(Point::new(0, 10), Point::new(2, 0));
        // Steep line: one pixel per y step
        assert_eq!(pixels.len(), 11);
        assert!(pixels.contains(&(0, 10)));
        assert!(pixels.contains(&(2, 0)));
    }

    #[test]
    fn test_size_hint() {
        let it = Bresenham::new(Point::new(0, 0), Point::new(5, 2));
        assert_eq!(it.len(), 6);
    }

    proptest! {
        #[test]
        fn prop_endpoint_order_symmetry(
            x0 in -50i32..50, y0 in -50i32..50,
            x1 in -50i32..50, y1 in -50i32..50,
        ) {
            let a = Point::new(x0, y0);
            let b = Point::new(x1, y1);
            prop_assert_eq!(pixel_set(a, b), pixel_set(b, a));
        }

        #[test]
        fn prop_contiguous_8_connected(
            x0 in -30i32..30, y0 in -30i32..30,
            x1 in -30i32..30, y1 in -30i32..30,
        ) {
            let pixels: Vec<(i32, i32)> =
                Bresenham::new(Point::new(x0, y0), Point::new(x1, y1)).collect();
            for pair in pixels.windows(2) {
                let (ax, ay) = pair[0];
                let (bx, by) = pair[1];
                prop_assert!((ax - bx).abs() <= 1 && (ay - by).abs() <= 1);
            }
        }
    }
}
