//! Polygon interior filling.
//!
//! The filler never tests interiority directly. It rasterizes the polygon's
//! edges into a mask, flood-fills the *exterior* within a padded bounding
//! box, and inverts: whatever the flood never reached, and is not an edge,
//! is interior. The flood fill is iterative with an explicit stack, so its
//! depth is bounded by the box's pixel count rather than the call stack.

use tracing::trace;

use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Point, PointArena, Polygon};
use crate::pattern::{PatternCell, PatternMask};
use crate::render::bresenham::Bresenham;
use crate::render::flatten::flatten;
use crate::render::mask::PixelMask;

/// Rasterize every edge of a polygon into a canvas-sized mask.
///
/// Each edge is flattened to a polyline and each segment scan-converted;
/// the union of all touched in-canvas pixels is the edge mask.
#[must_use]
pub fn edge_mask(
    arena: &PointArena,
    polygon: &Polygon,
    segments: u32,
    width: u32,
    height: u32,
) -> PixelMask {
    edge_mask_from(arena, polygon, segments, Point::ORIGIN, width, height)
}

/// Edge mask relative to `origin`, for masks framed on the padded bounding
/// box instead of the canvas. Edges must block the flood fill even where
/// they fall outside the canvas.
fn edge_mask_from(
    arena: &PointArena,
    polygon: &Polygon,
    segments: u32,
    origin: Point,
    width: u32,
    height: u32,
) -> PixelMask {
    let mut mask = PixelMask::new(width, height);
    for line in &polygon.lines {
        let control = [
            arena.get(line.start),
            arena.get(line.ctrl),
            arena.get(line.end),
        ];
        let samples = flatten(&control, segments);
        for pair in samples.windows(2) {
            for (x, y) in Bresenham::new(pair[0], pair[1]) {
                mask.set(x - origin.x, y - origin.y);
            }
        }
    }
    mask
}

/// Fill the interior of a closed polygon into the framebuffer.
///
/// Emits one fill pixel per interior position not covered by an edge,
/// colored by the pattern cell at that canvas position (`Primary` = `color`,
/// `Secondary` = `background`). Edge pixels are deliberately left alone;
/// the renderer re-strokes them after filling so they stay on top.
///
/// Open polygons and polygons with fewer than three edges are never filled.
/// A bounding box collapsed to a point yields an empty interior, not an
/// error.
pub fn fill_polygon(
    arena: &PointArena,
    polygon: &Polygon,
    fb: &mut Framebuffer,
    color: Rgba,
    background: Rgba,
    pattern: &PatternMask,
    segments: u32,
) {
    if !polygon.closed || polygon.lines.len() < 3 {
        return;
    }
    let control_points = polygon.control_points();
    let Some(&first) = control_points.first() else {
        return;
    };

    // Padded bounding box over all control points (curve handles included;
    // a quadratic curve never leaves its control polygon's hull)
    let mut min = arena.get(first);
    let mut max = min;
    for &id in &control_points[1..] {
        let p = arena.get(id);
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    let start = Point::new(min.x - 1, min.y - 1);
    let end = Point::new(max.x + 1, max.y + 1);
    let box_w = (end.x - start.x + 1) as u32;
    let box_h = (end.y - start.y + 1) as u32;

    // Everything (edge mask included) is framed on the padded box, so
    // coordinates that fall off the canvas index safely.
    let edges = edge_mask_from(arena, polygon, segments, start, box_w, box_h);

    // Flood the exterior from the padding corner
    let mut visited = PixelMask::new(box_w, box_h);
    let mut exterior = PixelMask::new(box_w, box_h);
    let mut frontier: Vec<(i32, i32)> = vec![(0, 0)];
    while let Some((lx, ly)) = frontier.pop() {
        if !visited.in_bounds(lx, ly) || visited.get(lx, ly) {
            continue;
        }
        visited.set(lx, ly);
        if edges.get(lx, ly) {
            // Edge pixels block the flood; they belong to neither region
            continue;
        }
        exterior.set(lx, ly);
        frontier.push((lx, ly + 1));
        frontier.push((lx, ly - 1));
        frontier.push((lx + 1, ly));
        frontier.push((lx - 1, ly));
    }

    // Interior = box minus exterior; emit fills, skipping edge pixels
    let mut filled = 0usize;
    for ly in 0..box_h as i32 {
        for lx in 0..box_w as i32 {
            if exterior.get(lx, ly) || edges.get(lx, ly) {
                continue;
            }
            let gx = start.x + lx;
            let gy = start.y + ly;
            let value = match pattern.cell(gx, gy) {
                PatternCell::Primary => color,
                PatternCell::Secondary => background,
            };
            fb.set_pixel_clipped(gx, gy, value);
            filled += 1;
        }
    }
    trace!(filled, box_w, box_h, "filled polygon interior");
}
