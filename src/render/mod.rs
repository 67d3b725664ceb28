//! Rendering: scan conversion, curve flattening, filling, and compositing.
//!
//! The renderer walks the scene in z-order and rasterizes each shape into a
//! framebuffer. All drawing is deterministic, single-threaded, and
//! non-antialiased.

pub mod bresenham;
pub mod fill;
pub mod flatten;
pub mod mask;

pub use bresenham::Bresenham;
pub use fill::{edge_mask, fill_polygon};
pub use flatten::{de_casteljau, flatten};
pub use mask::PixelMask;

use tracing::debug;

use crate::color::Rgba;
use crate::config::Config;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Line, Point, PointArena, ShapeKind};
use crate::pattern::{Pattern, PatternMask};
use crate::scene::Scene;

/// Background color: the cleared surface and the secondary pattern tone.
const BACKGROUND: Rgba = Rgba::WHITE;
/// Stroke color for edges and handle glyphs.
const STROKE: Rgba = Rgba::BLACK;

/// The compositor: orders shapes by z-index and dispatches per-shape drawing.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: Config,
    show_control_points: bool,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            config,
            show_control_points: true,
        }
    }

    /// Toggle the control-point handle overlay.
    pub fn toggle_control_points(&mut self) {
        self.show_control_points = !self.show_control_points;
    }

    /// Whether handle glyphs are currently overlaid.
    #[must_use]
    pub const fn show_control_points(&self) -> bool {
        self.show_control_points
    }

    /// Render the scene into the framebuffer.
    ///
    /// Clears the surface, stable-sorts shapes ascending by z-index (ties
    /// keep insertion order; stamping makes ties impossible, but the sort
    /// does not rely on that), then draws each shape. Closed polygons are
    /// filled with `color` under `pattern`, and their edges are re-stroked
    /// after filling so a fill pixel adjacent to an edge can never swallow
    /// it, whatever footprint the surface gives a single painted pixel.
    pub fn render(&self, scene: &Scene, fb: &mut Framebuffer, color: Rgba, pattern: Pattern) {
        debug!(shapes = scene.shapes().len(), ?pattern, "render pass");
        fb.clear(BACKGROUND);

        let pattern_mask = PatternMask::new(pattern, self.config.stripe_width);
        let arena = scene.points();

        let mut ordered: Vec<&crate::geometry::Shape> = scene.shapes().iter().collect();
        ordered.sort_by_key(|shape| shape.z_index);

        for shape in ordered {
            match &shape.kind {
                ShapeKind::Line(line) => self.stroke_curve(arena, line, fb),
                ShapeKind::Polygon(polygon) => {
                    for line in &polygon.lines {
                        self.stroke_curve(arena, line, fb);
                    }
                    if polygon.closed {
                        fill_polygon(
                            arena,
                            polygon,
                            fb,
                            color,
                            BACKGROUND,
                            &pattern_mask,
                            self.config.bezier_segments,
                        );
                    }
                    // Edges stay on top of the fill
                    for line in &polygon.lines {
                        self.stroke_curve(arena, line, fb);
                    }
                }
                ShapeKind::Marker(marker) => {
                    self.draw_handle_glyph(fb, arena.get(marker.point));
                }
            }

            if self.show_control_points {
                for id in shape.kind.control_points() {
                    self.draw_handle_glyph(fb, arena.get(id));
                }
            }
        }
    }

    /// Flatten a line's quadratic control polygon and scan-convert the
    /// resulting segments. A pristine (centered) handle makes the samples
    /// collinear, so the line draws straight.
    fn stroke_curve(&self, arena: &PointArena, line: &Line, fb: &mut Framebuffer) {
        let control = [
            arena.get(line.start),
            arena.get(line.ctrl),
            arena.get(line.end),
        ];
        let samples = flatten(&control, self.config.bezier_segments);
        for pair in samples.windows(2) {
            for (x, y) in Bresenham::new(pair[0], pair[1]) {
                fb.set_pixel_clipped(x, y, STROKE);
            }
        }
    }

    /// Draw the square handle glyph: the outline of the point's hit-box.
    fn draw_handle_glyph(&self, fb: &mut Framebuffer, center: Point) {
        let half = self.config.control_point_size;
        let start = Point::new(center.x - half, center.y - half);
        let end = Point::new(center.x + half, center.y + half);

        let corners = [
            (start, Point::new(end.x, start.y)),
            (start, Point::new(start.x, end.y)),
            (end, Point::new(start.x, end.y)),
            (end, Point::new(end.x, start.y)),
        ];
        for (a, b) in corners {
            for (x, y) in Bresenham::new(a, b) {
                fb.set_pixel_clipped(x, y, STROKE);
            }
        }
    }
}
