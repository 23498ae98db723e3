use crate::error::{InputError, Result};
use crate::math::Point3;

use super::Direction;

/// Slice origins along the span, all sharing one plane normal.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanStations {
    origins: Vec<Point3>,
    normal: Direction,
}

impl SpanStations {
    /// `count` evenly spaced origins from `start` to `end` inclusive.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` if `count` is zero.
    pub fn linspace(start: Point3, end: Point3, count: usize, normal: Direction) -> Result<Self> {
        if count == 0 {
            return Err(
                InputError::InvalidConfig("at least one span station required".to_owned()).into(),
            );
        }
        Ok(Self {
            origins: evenly_spaced(start, end, count),
            normal,
        })
    }

    /// Stations at explicit origins.
    #[must_use]
    pub fn from_origins(origins: Vec<Point3>, normal: Direction) -> Self {
        Self { origins, normal }
    }

    #[must_use]
    pub fn origins(&self) -> &[Point3] {
        &self.origins
    }

    /// Returns the slice-plane normal.
    #[must_use]
    pub fn normal(&self) -> Direction {
        self.normal
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }
}

impl Default for SpanStations {
    /// 100 stations from the origin to `(0, 0, 1)`, normal `Z+`.
    fn default() -> Self {
        Self {
            origins: evenly_spaced(Point3::origin(), Point3::new(0.0, 0.0, 1.0), 100),
            normal: Direction::Z_POS,
        }
    }
}

/// `count >= 1` points; the last one is exactly `end`.
#[allow(clippy::cast_precision_loss)]
fn evenly_spaced(start: Point3, end: Point3, count: usize) -> Vec<Point3> {
    if count == 1 {
        return vec![start];
    }
    let step = (end - start) / (count - 1) as f64;
    (0..count)
        .map(|i| if i + 1 == count { end } else { start + step * i as f64 })
        .collect()
}
