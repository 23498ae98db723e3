#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{Freestream, SectionConfig};
use crate::error::{InputError, Result};
use crate::geometry::RawSegment;

use super::StitchSegments;

/// Pressure coefficient at one point of a stitched section loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PressureRecord {
    pub x: f64,
    pub y: f64,
    pub cp: f64,
}

/// Stitches the raw segments of one slice and normalises the surface
/// pressure they carry into a pressure coefficient at every loop point.
///
/// Records follow the canonical loop order: upper trailing-edge vertex
/// first, counter-clockwise.
#[derive(Debug)]
pub struct PressureSlice<'a> {
    segments: &'a [RawSegment],
    freestream: Freestream,
    config: SectionConfig,
}

impl<'a> PressureSlice<'a> {
    /// Creates a new pressure-coefficient run.
    #[must_use]
    pub fn new(segments: &'a [RawSegment], freestream: Freestream, config: SectionConfig) -> Self {
        Self {
            segments,
            freestream,
            config,
        }
    }

    /// Executes the run.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` for a degenerate free stream,
    /// `InputError::MissingPressure` naming the first segment without
    /// pressure, or any error of [`StitchSegments::execute`].
    pub fn execute(&self) -> Result<Vec<PressureRecord>> {
        self.freestream.validate()?;
        if let Some(segment) = self.segments.iter().position(|s| s.pressure().is_none()) {
            return Err(InputError::MissingPressure { segment }.into());
        }

        let stitched = StitchSegments::new(self.segments, self.config).execute()?;
        let pressure = stitched
            .pressure()
            .ok_or(InputError::MissingPressure { segment: 0 })?;

        let records: Vec<PressureRecord> = stitched
            .points()
            .iter()
            .zip(pressure)
            .map(|(p, &value)| PressureRecord {
                x: p.x,
                y: p.y,
                cp: self.freestream.pressure_coefficient(value),
            })
            .collect();
        debug!(
            points = records.len(),
            q0 = self.freestream.dynamic_pressure(),
            "computed pressure coefficients"
        );
        Ok(records)
    }
}
