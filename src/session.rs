//! Interactive freehand drawing sessions.
//!
//! A [`DrawSession`] collects the points of a shape being drawn, owned by
//! the interactive collaborator and passed into the scene's construction
//! calls on finish. The engine itself keeps no ambient drawing state.

use tracing::debug;

use crate::config::Config;
use crate::geometry::Point;
use crate::scene::Scene;

/// Collects clicks into a vertex chain and classifies the finished shape.
#[derive(Debug, Clone)]
pub struct DrawSession {
    points: Vec<Point>,
    handle_half_size: i32,
}

impl DrawSession {
    /// Create a session using the configured handle size for its spacing
    /// and closing thresholds.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            points: Vec::new(),
            handle_half_size: config.control_point_size,
        }
    }

    /// Start a new chain at the first click, discarding any previous one.
    pub fn begin(&mut self, point: Point) {
        self.points.clear();
        self.points.push(point);
    }

    /// Whether a chain is currently being drawn.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        !self.points.is_empty()
    }

    /// The chain collected so far, for live preview rendering.
    #[must_use]
    pub fn preview(&self) -> &[Point] {
        &self.points
    }

    /// Points too close together make overlapping handles; at least three
    /// handle diagonals must fit between consecutive vertices.
    fn has_minimum_spacing(&self, point: Point) -> bool {
        let Some(&last) = self.points.last() else {
            return true;
        };
        let handle_diagonal = (2.0 * f64::from(self.handle_half_size).powi(2)).sqrt();
        Scene::distance(last, point) >= handle_diagonal * 3.0
    }

    /// Extend the chain with another vertex.
    ///
    /// Ignored when no chain is in progress; returns whether the point was
    /// accepted (too-close points are dropped).
    pub fn add_point(&mut self, point: Point) -> bool {
        if !self.in_progress() || !self.has_minimum_spacing(point) {
            return false;
        }
        self.points.push(point);
        true
    }

    /// Finish the chain at the release point and add the resulting shape.
    ///
    /// A release near the chain's origin closes the shape: one collected
    /// point becomes a marker, two become a line, three or more a closed
    /// polygon. A release elsewhere appends the point (when spaced) and
    /// adds an open polygon. The session is empty afterwards.
    pub fn finish(&mut self, scene: &mut Scene, release: Point) {
        if self.points.is_empty() {
            return;
        }

        let near_origin =
            Scene::distance(self.points[0], release) < f64::from(self.handle_half_size) * 2.0;
        if near_origin {
            debug!(vertices = self.points.len(), "closing drawn shape");
            match self.points.as_slice() {
                [single] => scene.add_marker(*single),
                [start, end] => scene.add_line(*start, *end),
                chain => scene.add_polygon(chain, true),
            }
        } else {
            if self.has_minimum_spacing(release) {
                self.points.push(release);
            }
            debug!(vertices = self.points.len(), "finishing open chain");
            scene.add_polygon(&self.points, false);
        }
        self.points.clear();
    }
}
