#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// Section properties of one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Section {
    /// Distance from the leading edge to the trailing-edge midpoint.
    pub chord: f64,
    /// Chord angle relative to the flow direction, degrees, nose-up positive.
    pub twist_degrees: f64,
    /// Largest upper-minus-lower surface distance in the chord frame.
    pub max_thickness: f64,
    pub leading_edge: Point2,
    /// Trailing-edge midpoint.
    pub trailing_edge: Point2,
}

impl Section {
    /// Returns the maximum thickness as a fraction of chord.
    #[must_use]
    pub fn thickness_ratio(&self) -> f64 {
        self.max_thickness / self.chord
    }
}
