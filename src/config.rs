//! Engine configuration.
//!
//! Bundles the knobs the interactive collaborator resolves for the engine:
//! canvas size, curve sampling density, pattern stripe width, and the
//! control-point handle half-size used for both hit-testing and glyphs.

use serde::{Deserialize, Serialize};

use crate::pattern::Pattern;

/// Configuration for the scene and renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// How many straight segments approximate one Bézier curve. Must be >= 1.
    pub bezier_segments: u32,
    /// Width of the stripes in the fill patterns.
    pub stripe_width: u32,
    /// Half-size of control-point handles (hit-box and glyph).
    pub control_point_size: i32,
    /// Default polygon fill color (`#rrggbb`).
    pub fill_color: String,
    /// Default fill pattern.
    pub pattern: Pattern,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: 400,
            canvas_height: 400,
            bezier_segments: 10,
            stripe_width: 5,
            control_point_size: 5,
            fill_color: "#6c9ee0".to_string(),
            pattern: Pattern::None,
        }
    }
}
