//! Fill patterns for polygon interiors.
//!
//! A pattern selects per-pixel between the primary fill color and a
//! secondary background tone. Stripes tile one axis and broadcast the other;
//! checkers combine both stripe phases.

use serde::{Deserialize, Serialize};

/// Named fill patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    /// Uniform fill.
    #[default]
    None,
    /// Stripes tiled along the y axis.
    Horizontal,
    /// Stripes tiled along the x axis.
    Vertical,
    /// Product of the horizontal and vertical stripe phases.
    Checkers,
}

impl Pattern {
    /// Resolve a pattern by name.
    ///
    /// Unrecognized names fall back to the unpatterned solid fill; a bad
    /// name is never fatal.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "horizontal" => Self::Horizontal,
            "vertical" => Self::Vertical,
            "checkers" => Self::Checkers,
            _ => Self::None,
        }
    }
}

/// Which of the two fill values a pattern cell selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCell {
    /// The fill color.
    Primary,
    /// The neutral background tone.
    Secondary,
}

/// A precomputed tiling mask for one pattern.
///
/// One stripe period is materialized; lookups index it modulo the period,
/// so the mask tiles the whole canvas regardless of size.
#[derive(Debug, Clone)]
pub struct PatternMask {
    pattern: Pattern,
    /// One period of the stripe phase: `true` for the leading block.
    period: Vec<bool>,
}

impl PatternMask {
    /// Build the mask for a pattern with the given stripe width.
    #[must_use]
    pub fn new(pattern: Pattern, stripe_width: u32) -> Self {
        let w = stripe_width.max(1) as usize;
        let mut period = vec![true; 2 * w];
        for slot in &mut period[w..] {
            *slot = false;
        }
        Self { pattern, period }
    }

    /// Stripe phase at a coordinate (tiles over the full signed range).
    fn phase(&self, v: i32) -> bool {
        let len = self.period.len() as i32;
        self.period[v.rem_euclid(len) as usize]
    }

    /// The cell value at a canvas coordinate.
    ///
    /// Coordinates are absolute canvas positions, so the pattern stays
    /// anchored to the canvas rather than to each polygon.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> PatternCell {
        match self.pattern {
            Pattern::None => PatternCell::Primary,
            Pattern::Vertical => {
                if self.phase(x) {
                    PatternCell::Primary
                } else {
                    PatternCell::Secondary
                }
            }
            Pattern::Horizontal => {
                if self.phase(y) {
                    PatternCell::Primary
                } else {
                    PatternCell::Secondary
                }
            }
            Pattern::Checkers => {
                // Agreeing stripe phases form the secondary cells
                if self.phase(x) == self.phase(y) {
                    PatternCell::Secondary
                } else {
                    PatternCell::Primary
                }
            }
        }
    }
}
