//! # Rasterink
//!
//! A deterministic, single-threaded CPU rasterizer for an editable vector
//! scene. Points, lines/quadratic curves, and polygons are converted to
//! pixels with hand-rolled algorithms:
//!
//! - **Bresenham** scan conversion of line segments
//! - **de Casteljau** flattening of quadratic Bézier curves
//! - a bounded **flood fill**, run in reverse over a padded bounding box to
//!   determine polygon interiors, combined with tiling pattern masks
//!
//! The windowing system, event dispatch, and persistence format are external
//! collaborators: they call the scene and renderer APIs with already
//! resolved inputs (click coordinates, render triggers, a serde blob to
//! rehydrate the scene graph).
//!
//! ## Quick Start
//!
//! ```
//! use rasterink::color::Rgba;
//! use rasterink::config::Config;
//! use rasterink::framebuffer::Framebuffer;
//! use rasterink::geometry::Point;
//! use rasterink::pattern::Pattern;
//! use rasterink::render::Renderer;
//! use rasterink::scene::Scene;
//!
//! let config = Config::default();
//! let mut scene = Scene::new(&config);
//! scene.add_line(Point::new(200, 200), Point::new(300, 100));
//! scene.add_polygon(
//!     &[Point::new(20, 20), Point::new(120, 205), Point::new(220, 50)],
//!     true,
//! );
//!
//! let renderer = Renderer::new(config.clone());
//! let mut fb = Framebuffer::new(config.canvas_width, config.canvas_height).unwrap();
//! let fill = Rgba::from_hex(&config.fill_color).unwrap();
//! renderer.render(&scene, &mut fb, fill, Pattern::None);
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and hex parsing.
pub mod color;

/// Engine configuration.
pub mod config;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric model: points, identity arena, lines, polygons, shapes.
pub mod geometry;

// ============================================================================
// Scene Modules
// ============================================================================

/// Scene ownership, hit-testing, and point relocation.
pub mod scene;

/// Interactive freehand drawing sessions.
pub mod session;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Fill patterns and tiling masks.
pub mod pattern;

/// Rasterization and compositing.
pub mod render;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for rasterink operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```
/// use rasterink::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Line, Marker, Point, PointArena, PointId, Polygon, Shape, ShapeKind};
    pub use crate::output::PngEncoder;
    pub use crate::pattern::{Pattern, PatternCell, PatternMask};
    pub use crate::render::{Bresenham, Renderer};
    pub use crate::scene::Scene;
    pub use crate::session::DrawSession;
}
