//! Curve flattening via de Casteljau reduction.
//!
//! Reduces a control polygon to a single curve sample per parameter value,
//! producing the ordered polyline the scan converter consumes.

use crate::geometry::Point;

/// One de Casteljau curve sample at parameter `t`.
///
/// Given `n` control points, each reduction step produces `n - 1` points
/// where point `k = (1 - t) * p[k] + t * p[k + 1]`, applied to x and y
/// independently and rounded to the pixel grid, until one point remains.
/// At `t = 0` and `t = 1` every step is an identity copy of an endpoint, so
/// the curve's endpoints are reproduced exactly with no rounding drift.
///
/// An empty control polygon yields the origin; callers always pass the three
/// control points of a quadratic curve.
#[must_use]
pub fn de_casteljau(control: &[Point], t: f64) -> Point {
    let mut points: Vec<Point> = control.to_vec();
    while points.len() > 1 {
        for i in 0..points.len() - 1 {
            let x = (1.0 - t) * f64::from(points[i].x) + t * f64::from(points[i + 1].x);
            let y = (1.0 - t) * f64::from(points[i].y) + t * f64::from(points[i + 1].y);
            points[i] = Point::new(x.round() as i32, y.round() as i32);
        }
        points.pop();
    }
    points.first().copied().unwrap_or(Point::ORIGIN)
}

/// Flatten a curve into `segments + 1` ordered samples.
///
/// Sample `i` is the curve at `t = i / segments`. `segments` is clamped to
/// at least 1, so even the coarsest flattening keeps both endpoints.
#[must_use]
pub fn flatten(control: &[Point], segments: u32) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| de_casteljau(control, f64::from(i) / f64::from(segments)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_endpoints_exact() {
        let control = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        let samples = flatten(&control, 2);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Point::new(0, 0));
        assert_eq!(samples[2], Point::new(10, 10));
    }

    #[test]
    fn test_middle_sample_is_one_step_reduction() {
        let control = [Point::new(0, 0), Point::new(10, 0), Point::new(10, 10)];
        let samples = flatten(&control, 2);

        // t = 0.5: (0,0)/(10,0) -> (5,0); (10,0)/(10,10) -> (10,5);
        // then (5,0)/(10,5) -> (7.5, 2.5) rounded
        assert_eq!(samples[1], de_casteljau(&control, 0.5));
        assert_eq!(samples[1], Point::new(8, 3));
    }

    #[test]
    fn test_centered_handle_degenerates_to_straight_line() {
        // Handle at the midpoint: every sample lies on the segment
        let control = [Point::new(0, 0), Point::new(5, 5), Point::new(10, 10)];
        for sample in flatten(&control, 10) {
            assert_eq!(sample.x, sample.y);
            assert!((0..=10).contains(&sample.x));
        }
    }

    #[test]
    fn test_samples_are_monotonic_along_straight_line() {
        let control = [Point::new(0, 0), Point::new(10, 0), Point::new(20, 0)];
        let samples = flatten(&control, 4);
        assert_eq!(
            samples,
            vec![
                Point::new(0, 0),
                Point::new(5, 0),
                Point::new(10, 0),
                Point::new(15, 0),
                Point::new(20, 0)
            ]
        );
    }

    #[test]
    fn test_two_point_reduction() {
        // Flattening tolerates non-quadratic inputs
        let control = [Point::new(0, 0), Point::new(10, 0)];
        assert_eq!(de_casteljau(&control, 0.5), Point::new(5, 0));
    }

    #[test]
    fn test_single_point_and_empty() {
        assert_eq!(de_casteljau(&[Point::new(3, 4)], 0.7), Point::new(3, 4));
        assert_eq!(de_casteljau(&[], 0.5), Point::ORIGIN);
    }

    #[test]
    fn test_segments_clamped_to_one() {
        let control = [Point::new(0, 0), Point::new(5, 5), Point::new(10, 0)];
        let samples = flatten(&control, 0);
        assert_eq!(samples, vec![Point::new(0, 0), Point::new(10, 0)]);
    }

    proptest! {
        #[test]
        fn prop_endpoints_never_drift(
            (x0, y0, x1, y1, x2, y2) in (
                -200i32..200, -200i32..200, -200i32..200,
                -200i32..200, -200i32..200, -200i32..200,
            ),
            segments in 1u32..32,
        ) {
            let control = [Point::new(x0, y0), Point::new(x1, y1), Point::new(x2, y2)];
            let samples = flatten(&control, segments);
            prop_assert_eq!(samples.len() as u32, segments + 1);
            prop_assert_eq!(samples[0], control[0]);
            prop_assert_eq!(samples[samples.len() - 1], control[2]);
        }
    }
}
