//! Geometric model for the editable scene.
//!
//! Points live in an arena owned by the scene; shapes reference them by
//! [`PointId`]. Two polygon edges meeting at a joint hold the *same* id, so
//! relocating the joint moves both edges. Identity is the arena index and
//! survives any coordinate mutation.

use serde::{Deserialize, Serialize};

/// A 2D point on the integer pixel grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0, 0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

/// Midpoint of two points, with floor division.
///
/// Floor division keeps the pristine-handle predicate exact: the handle is
/// compared against this same formula after every endpoint move.
#[must_use]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x).div_euclid(2), (a.y + b.y).div_euclid(2))
}

/// Stable identity of a point in the scene's arena.
///
/// Distinct from the point's coordinate value: the id stays valid while the
/// coordinates mutate underneath it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct PointId(u32);

/// Index-addressable point store owned by the scene.
///
/// Points are never removed individually; the arena empties only when the
/// scene is cleared wholesale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointArena {
    points: Vec<Point>,
}

impl PointArena {
    /// Create an empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a point and return its identity.
    pub fn alloc(&mut self, point: Point) -> PointId {
        let id = PointId(self.points.len() as u32);
        self.points.push(point);
        id
    }

    /// Current coordinates of a point.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this arena. Ids are only minted
    /// by [`PointArena::alloc`], so a foreign id is a caller bug.
    #[must_use]
    pub fn get(&self, id: PointId) -> Point {
        self.points[id.0 as usize]
    }

    /// Overwrite the coordinates of a point, keeping its identity.
    pub fn set(&mut self, id: PointId, point: Point) {
        self.points[id.0 as usize] = point;
    }

    /// Whether the id belongs to this arena.
    #[must_use]
    pub fn contains(&self, id: PointId) -> bool {
        (id.0 as usize) < self.points.len()
    }

    /// Number of points stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove all points.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

/// A line with three control points: two endpoints and a quadratic handle.
///
/// The handle starts at the endpoint midpoint and the line renders straight.
/// Once the user drags the handle the line becomes a quadratic Bézier curve
/// and is never auto-recentered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    /// Start endpoint.
    pub start: PointId,
    /// Quadratic control handle.
    pub ctrl: PointId,
    /// End endpoint.
    pub end: PointId,
    /// Set once the user has grabbed the handle; exempts the line from
    /// auto-recentering permanently.
    pub user_curved: bool,
}

impl Line {
    /// Create a line between two existing points, allocating a centered
    /// control handle.
    pub fn new(arena: &mut PointArena, start: PointId, end: PointId) -> Self {
        let ctrl = arena.alloc(midpoint(arena.get(start), arena.get(end)));
        Self {
            start,
            ctrl,
            end,
            user_curved: false,
        }
    }

    /// The three control points, in start/handle/end order.
    #[must_use]
    pub fn control_points(&self) -> [PointId; 3] {
        [self.start, self.ctrl, self.end]
    }

    /// Whether the handle still sits exactly at the endpoint midpoint.
    ///
    /// Re-evaluated on every mutation; a pristine handle follows its
    /// endpoints, a displaced one means the line is a curve.
    #[must_use]
    pub fn has_centered_control_point(&self, arena: &PointArena) -> bool {
        arena.get(self.ctrl) == midpoint(arena.get(self.start), arena.get(self.end))
    }

    /// Snap the handle back to the endpoint midpoint, keeping its identity.
    pub fn center_control_point(&self, arena: &mut PointArena) {
        let mid = midpoint(arena.get(self.start), arena.get(self.end));
        arena.set(self.ctrl, mid);
    }
}

/// An ordered chain of lines, optionally closed back to the first vertex.
///
/// Consecutive lines share their joint [`PointId`]; moving a joint moves
/// both adjoining edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Polygon {
    /// The edge chain.
    pub lines: Vec<Line>,
    /// Whether a final edge connects the last vertex back to the first.
    pub closed: bool,
}

impl Polygon {
    /// Build a polygon from an ordered vertex chain.
    ///
    /// Fewer than two vertices produce an edgeless polygon, which renders
    /// nothing and is never filled.
    pub fn new(arena: &mut PointArena, vertices: &[PointId], closed: bool) -> Self {
        let mut lines = Vec::new();
        for pair in vertices.windows(2) {
            lines.push(Line::new(arena, pair[0], pair[1]));
        }
        if closed && vertices.len() >= 2 {
            lines.push(Line::new(
                arena,
                vertices[vertices.len() - 1],
                vertices[0],
            ));
        }
        Self { lines, closed }
    }

    /// All control points of all edges, joints deduplicated by identity.
    #[must_use]
    pub fn control_points(&self) -> Vec<PointId> {
        let mut result = Vec::new();
        for line in &self.lines {
            for id in line.control_points() {
                if !result.contains(&id) {
                    result.push(id);
                }
            }
        }
        result
    }
}

/// A render-only control-point marker wrapping a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// The wrapped point.
    pub point: PointId,
}

/// The shape kinds the scene can hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    /// A straight line or quadratic curve.
    Line(Line),
    /// An open or closed edge chain.
    Polygon(Polygon),
    /// A standalone control-point dot.
    Marker(Marker),
}

impl ShapeKind {
    /// All control points this shape reports, deduplicated by identity.
    #[must_use]
    pub fn control_points(&self) -> Vec<PointId> {
        match self {
            Self::Line(line) => line.control_points().to_vec(),
            Self::Polygon(polygon) => polygon.control_points(),
            Self::Marker(marker) => vec![marker.point],
        }
    }

    /// The edge lines of this shape (empty for markers).
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        match self {
            Self::Line(line) => std::slice::from_ref(line),
            Self::Polygon(polygon) => &polygon.lines,
            Self::Marker(_) => &[],
        }
    }

    /// Mutable access to the edge lines of this shape.
    pub(crate) fn lines_mut(&mut self) -> &mut [Line] {
        match self {
            Self::Line(line) => std::slice::from_mut(line),
            Self::Polygon(polygon) => &mut polygon.lines,
            Self::Marker(_) => &mut [],
        }
    }

    /// Min/max corner points over all control points, or `None` for a shape
    /// without any.
    #[must_use]
    pub fn bounding_box(&self, arena: &PointArena) -> Option<(Point, Point)> {
        let ids = self.control_points();
        let first = arena.get(*ids.first()?);
        let mut min = first;
        let mut max = first;
        for &id in &ids[1..] {
            let p = arena.get(id);
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some((min, max))
    }
}

/// A shape plus its draw-order stamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape {
    /// Insertion-order draw priority. Stamped once on add, never reused.
    pub z_index: u32,
    /// The shape payload.
    pub kind: ShapeKind,
}
