//! Scene management: shape ownership, hit-testing, and point relocation.
//!
//! The scene owns the point arena and every shape. All mutation goes through
//! the methods here, invoked synchronously by the interactive collaborator;
//! there is no internal locking because the model is single-threaded.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::geometry::{Line, Marker, Point, PointArena, PointId, Polygon, Shape, ShapeKind};

/// The editable scene: a point arena plus an ordered shape collection.
///
/// Serializing the scene and deserializing it back reproduces identical
/// rendering: point identity is the arena index, so joint sharing between
/// polygon edges survives the round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    arena: PointArena,
    shapes: Vec<Shape>,
    canvas_width: u32,
    canvas_height: u32,
    hit_tolerance: i32,
}

impl Scene {
    /// Create an empty scene bounded by the configured canvas.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            arena: PointArena::new(),
            shapes: Vec::new(),
            canvas_width: config.canvas_width,
            canvas_height: config.canvas_height,
            hit_tolerance: config.control_point_size,
        }
    }

    /// The shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The point arena.
    #[must_use]
    pub fn points(&self) -> &PointArena {
        &self.arena
    }

    /// Current coordinates of a point.
    #[must_use]
    pub fn point(&self, id: PointId) -> Point {
        self.arena.get(id)
    }

    /// Append a shape, stamping its z-index with the current shape count.
    ///
    /// Z-indices are monotonically increasing and never recomputed, so
    /// insertion order is draw order.
    fn push_shape(&mut self, kind: ShapeKind) {
        let z_index = self.shapes.len() as u32;
        debug!(z_index, "adding shape");
        self.shapes.push(Shape { z_index, kind });
    }

    /// Add a line between two coordinates.
    pub fn add_line(&mut self, start: Point, end: Point) {
        let a = self.arena.alloc(start);
        let b = self.arena.alloc(end);
        let line = Line::new(&mut self.arena, a, b);
        self.push_shape(ShapeKind::Line(line));
    }

    /// Add a polygon over an ordered vertex chain.
    pub fn add_polygon(&mut self, vertices: &[Point], closed: bool) {
        let ids: Vec<PointId> = vertices.iter().map(|&p| self.arena.alloc(p)).collect();
        let polygon = Polygon::new(&mut self.arena, &ids, closed);
        self.push_shape(ShapeKind::Polygon(polygon));
    }

    /// Add a standalone control-point marker.
    pub fn add_marker(&mut self, point: Point) {
        let id = self.arena.alloc(point);
        self.push_shape(ShapeKind::Marker(Marker { point: id }));
    }

    /// Remove every shape and point. Idempotent.
    pub fn clear(&mut self) {
        debug!(shapes = self.shapes.len(), "clearing scene");
        self.shapes.clear();
        self.arena.clear();
    }

    /// Find the control point under a click, if any.
    ///
    /// A point is hit when the click falls inside its axis-aligned square
    /// hit-box (half-size = the configured handle size; square on purpose,
    /// matching the handle glyph). Shapes are scanned in scene order and the
    /// first match wins. Hitting a line's mid-handle marks that line as
    /// user-curved, permanently exempting it from auto-recentering.
    pub fn hit_test(&mut self, click: Point) -> Option<PointId> {
        let arena = &self.arena;
        let tolerance = self.hit_tolerance;
        let hit = |id: PointId| {
            let c = arena.get(id);
            (c.x - click.x).abs() < tolerance && (c.y - click.y).abs() < tolerance
        };

        for shape in &mut self.shapes {
            for line in shape.kind.lines_mut() {
                for id in line.control_points() {
                    if hit(id) {
                        if id == line.ctrl {
                            line.user_curved = true;
                        }
                        debug!(?id, "hit control point");
                        return Some(id);
                    }
                }
            }
            if let ShapeKind::Marker(marker) = &shape.kind {
                if hit(marker.point) {
                    debug!(?marker.point, "hit marker point");
                    return Some(marker.point);
                }
            }
        }
        None
    }

    /// Relocate a control point, updating every shape that references it.
    ///
    /// Positions outside the canvas (boundary included) are rejected as a
    /// silent no-op. For each affected line the pristine-handle check runs
    /// *before* the coordinate update, because the midpoint formula depends
    /// on the old endpoint values; pristine lines whose moved point is not
    /// the handle itself are re-centered afterwards.
    pub fn move_point(&mut self, id: PointId, new_pos: Point) {
        let w = self.canvas_width as i32;
        let h = self.canvas_height as i32;
        if !(0 < new_pos.x && new_pos.x < w && 0 < new_pos.y && new_pos.y < h) {
            debug!(?new_pos, "move rejected: outside canvas");
            return;
        }
        if !self.arena.contains(id) {
            return;
        }

        let mut referenced = false;
        let mut recenter: Vec<Line> = Vec::new();
        for shape in &self.shapes {
            for line in shape.kind.lines() {
                if line.control_points().contains(&id) {
                    referenced = true;
                    if !line.user_curved
                        && line.ctrl != id
                        && line.has_centered_control_point(&self.arena)
                    {
                        recenter.push(*line);
                    }
                }
            }
            if let ShapeKind::Marker(marker) = &shape.kind {
                if marker.point == id {
                    referenced = true;
                }
            }
        }
        if !referenced {
            return;
        }

        self.arena.set(id, new_pos);
        for line in &recenter {
            line.center_control_point(&mut self.arena);
        }
        debug!(?id, ?new_pos, recentered = recenter.len(), "moved point");
    }

    /// Euclidean distance between two coordinates.
    ///
    /// Consumed by the interactive collaborator for minimum-spacing checks
    /// while drawing.
    #[must_use]
    pub fn distance(p1: Point, p2: Point) -> f64 {
        p1.distance(p2)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene::new(&Config::default())
    }

    fn line_of(scene: &Scene, index: usize) -> Line {
        match &scene.shapes()[index].kind {
            ShapeKind::Line(line) => *line,
            other => panic!("expected line, got {other:?}"),
        }
    }

    #[test]
    fn test_z_index_stamped_in_call_order() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        s.add_marker(Point::new(100, 100));
        s.add_polygon(&[Point::new(20, 20), Point::new(40, 20), Point::new(30, 40)], true);

        let z: Vec<u32> = s.shapes().iter().map(|sh| sh.z_index).collect();
        assert_eq!(z, vec![0, 1, 2]);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        s.clear();
        assert!(s.shapes().is_empty());
        assert!(s.points().is_empty());
        s.clear();
        assert!(s.shapes().is_empty());
    }

    #[test]
    fn test_hit_test_square_box() {
        let mut s = scene();
        s.add_marker(Point::new(100, 100));
        let id = match &s.shapes()[0].kind {
            ShapeKind::Marker(m) => m.point,
            _ => unreachable!(),
        };

        // Inside the square in both axes
        assert_eq!(s.hit_test(Point::new(104, 96)), Some(id));
        // Corner of the square region: would miss a circular hit-box of the
        // same radius, but the box is intentionally square
        assert_eq!(s.hit_test(Point::new(104, 104)), Some(id));
        // One axis out of tolerance
        assert_eq!(s.hit_test(Point::new(105, 100)), None);
        assert_eq!(s.hit_test(Point::new(100, 105)), None);
    }

    #[test]
    fn test_hit_test_first_match_in_scene_order() {
        let mut s = scene();
        s.add_marker(Point::new(100, 100));
        s.add_marker(Point::new(101, 100));
        let first = match &s.shapes()[0].kind {
            ShapeKind::Marker(m) => m.point,
            _ => unreachable!(),
        };
        assert_eq!(s.hit_test(Point::new(100, 100)), Some(first));
    }

    #[test]
    fn test_hit_on_mid_handle_marks_user_curved() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        let ctrl = line_of(&s, 0).ctrl;
        let handle_pos = s.point(ctrl);

        let hit = s.hit_test(handle_pos);
        assert_eq!(hit, Some(ctrl));
        assert!(line_of(&s, 0).user_curved);
    }

    #[test]
    fn test_move_endpoint_keeps_pristine_line_straight() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        let line = line_of(&s, 0);

        s.move_point(line.start, Point::new(20, 30));

        let moved = line_of(&s, 0);
        assert!(moved.has_centered_control_point(s.points()));
        assert_eq!(s.point(moved.ctrl), Point::new(35, 20));
    }

    #[test]
    fn test_moved_handle_freezes_curve_shape() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        let line = line_of(&s, 0);

        // Grab the handle (marks user-curved) and drag it off-center
        s.hit_test(s.point(line.ctrl));
        s.move_point(line.ctrl, Point::new(30, 40));
        assert_eq!(s.point(line.ctrl), Point::new(30, 40));

        // Moving an endpoint afterwards must not touch the handle
        s.move_point(line.start, Point::new(15, 15));
        assert_eq!(s.point(line.ctrl), Point::new(30, 40));
    }

    #[test]
    fn test_move_outside_canvas_rejected() {
        let mut s = scene();
        s.add_line(Point::new(10, 10), Point::new(50, 10));
        let line = line_of(&s, 0);

        for bad in [
            Point::new(0, 50),    // boundary is rejected too
            Point::new(400, 50),  // == canvas_width
            Point::new(50, 0),
            Point::new(50, 400),
            Point::new(-5, 50),
            Point::new(50, 900),
        ] {
            s.move_point(line.start, bad);
            assert_eq!(s.point(line.start), Point::new(10, 10));
        }

        s.move_point(line.start, Point::new(399, 1));
        assert_eq!(s.point(line.start), Point::new(399, 1));
    }

    #[test]
    fn test_shared_joint_moves_both_edges() {
        let mut s = scene();
        s.add_polygon(
            &[Point::new(20, 20), Point::new(120, 205), Point::new(220, 50)],
            true,
        );
        let polygon = match &s.shapes()[0].kind {
            ShapeKind::Polygon(p) => p.clone(),
            _ => unreachable!(),
        };
        let joint = polygon.lines[0].end;
        assert_eq!(joint, polygon.lines[1].start);

        s.move_point(joint, Point::new(130, 210));

        let moved = match &s.shapes()[0].kind {
            ShapeKind::Polygon(p) => p.clone(),
            _ => unreachable!(),
        };
        assert_eq!(s.point(moved.lines[0].end), Point::new(130, 210));
        assert_eq!(s.point(moved.lines[1].start), Point::new(130, 210));
        // Both adjoining pristine edges re-centered their handles
        assert!(moved.lines[0].has_centered_control_point(s.points()));
        assert!(moved.lines[1].has_centered_control_point(s.points()));
    }

    #[test]
    fn test_distance() {
        use approx::assert_relative_eq;
        assert_relative_eq!(Scene::distance(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_relative_eq!(
            Scene::distance(Point::new(1, 1), Point::new(2, 2)),
            std::f64::consts::SQRT_2
        );
    }
}
