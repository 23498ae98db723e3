use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{FoilError, InputError, Result};
use crate::math::Vector3;

/// Magnitude deviation above which a direction vector is reported before
/// being normalised.
const UNIT_TOLERANCE: f64 = 1e-5;

/// A unit direction in model space.
///
/// Parsed from an axis token (`X+`, `x-`, `Z+`, ...) or from three
/// comma- or whitespace-separated components.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Direction(Vector3);

impl Direction {
    pub const X_POS: Self = Self(Vector3::new(1.0, 0.0, 0.0));
    pub const X_NEG: Self = Self(Vector3::new(-1.0, 0.0, 0.0));
    pub const Y_POS: Self = Self(Vector3::new(0.0, 1.0, 0.0));
    pub const Y_NEG: Self = Self(Vector3::new(0.0, -1.0, 0.0));
    pub const Z_POS: Self = Self(Vector3::new(0.0, 0.0, 1.0));
    pub const Z_NEG: Self = Self(Vector3::new(0.0, 0.0, -1.0));

    /// Creates a direction from an arbitrary non-zero vector.
    ///
    /// The vector is normalised; a warning is logged when its magnitude is
    /// not within `1e-5` of one.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidDirection` for zero or non-finite vectors.
    pub fn from_vector(v: Vector3) -> Result<Self> {
        let mag = v.norm();
        if !mag.is_finite() || mag <= 0.0 {
            return Err(InputError::InvalidDirection(format!(
                "({}, {}, {}) has no direction",
                v.x, v.y, v.z
            ))
            .into());
        }
        if (mag - 1.0).abs() > UNIT_TOLERANCE {
            warn!(x = v.x, y = v.y, z = v.z, mag, "direction is not unit length, normalising");
        }
        Ok(Self(v / mag))
    }

    /// Returns the unit vector.
    #[must_use]
    pub fn as_vector(&self) -> &Vector3 {
        &self.0
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "X+" => Some(Self::X_POS),
            "X-" => Some(Self::X_NEG),
            "Y+" => Some(Self::Y_POS),
            "Y-" => Some(Self::Y_NEG),
            "Z+" => Some(Self::Z_POS),
            "Z-" => Some(Self::Z_NEG),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = FoilError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Some(axis) = Self::from_token(s) {
            return Ok(axis);
        }

        let components: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|c| !c.is_empty())
            .collect();
        if components.len() != 3 {
            return Err(InputError::InvalidDirection(format!(
                "'{s}' is neither an axis token (X+, X-, Y+, Y-, Z+, Z-) nor a 3-vector"
            ))
            .into());
        }
        let mut v = Vector3::zeros();
        for (slot, text) in v.iter_mut().zip(&components) {
            *slot = text.parse().map_err(|_| {
                InputError::InvalidDirection(format!("'{text}' is not a number in '{s}'"))
            })?;
        }
        Self::from_vector(v)
    }
}

impl TryFrom<String> for Direction {
    type Error = FoilError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Direction> for String {
    fn from(value: Direction) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0.x, self.0.y, self.0.z)
    }
}
