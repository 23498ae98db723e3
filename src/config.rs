//! Tolerances and policy knobs for section reconstruction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// Rule used to drop coincident points after chains are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DedupRule {
    /// Keep a point if it is the first occurrence of its exact x value or the
    /// first occurrence of its exact y value, in traversal order.
    ///
    /// Distinct points that share both coordinates with earlier points are
    /// dropped; this is the historical behaviour of the sweep output.
    #[default]
    FirstOccurrenceXOrY,

    /// Drop a point only if the exact `(x, y)` pair occurred earlier.
    ExactPoint,
}

/// Configuration shared by the stitcher, the trailing-edge locator and the
/// section extractor.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectionConfig {
    /// Absolute distance under which two chain endpoints are joined.
    pub coincidence_tolerance: f64,
    /// Circle fit rejects three points when `|Im(w)|` is at most this value.
    pub collinear_tolerance: f64,
    /// Vertices with an interior angle below this (degrees) are trailing-edge
    /// candidates.
    pub trailing_edge_angle_deg: f64,
    /// Bracket width at which leading-edge refinement stops.
    pub optimizer_tolerance: f64,
    /// Iteration cap for leading-edge refinement.
    pub optimizer_max_iterations: usize,
    /// Number of chordwise thickness samples.
    pub thickness_samples: usize,
    /// First thickness sample, as a fraction of chord.
    pub sample_start: f64,
    /// Last thickness sample, as a fraction of chord.
    pub sample_end: f64,
    /// Duplicate-point rule applied after stitching.
    pub dedup: DedupRule,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            coincidence_tolerance: 1e-8,
            collinear_tolerance: 1e-5,
            trailing_edge_angle_deg: 145.0,
            optimizer_tolerance: 1e-12,
            optimizer_max_iterations: 200,
            thickness_samples: 100,
            sample_start: 0.01,
            sample_end: 0.99,
            dedup: DedupRule::default(),
        }
    }
}

impl SectionConfig {
    /// Sets the endpoint coincidence tolerance.
    #[must_use]
    pub fn with_coincidence_tolerance(mut self, tolerance: f64) -> Self {
        self.coincidence_tolerance = tolerance;
        self
    }

    /// Sets the circle-fit collinearity tolerance.
    #[must_use]
    pub fn with_collinear_tolerance(mut self, tolerance: f64) -> Self {
        self.collinear_tolerance = tolerance;
        self
    }

    /// Sets the trailing-edge angle threshold in degrees.
    #[must_use]
    pub fn with_trailing_edge_angle(mut self, degrees: f64) -> Self {
        self.trailing_edge_angle_deg = degrees;
        self
    }

    /// Sets the leading-edge optimiser tolerance and iteration cap.
    #[must_use]
    pub fn with_optimizer(mut self, tolerance: f64, max_iterations: usize) -> Self {
        self.optimizer_tolerance = tolerance;
        self.optimizer_max_iterations = max_iterations;
        self
    }

    /// Sets the thickness sampling: `count` samples from `start` to `end`
    /// (fractions of chord).
    #[must_use]
    pub fn with_thickness_sampling(mut self, count: usize, start: f64, end: f64) -> Self {
        self.thickness_samples = count;
        self.sample_start = start;
        self.sample_end = end;
        self
    }

    /// Sets the duplicate-point rule.
    #[must_use]
    pub fn with_dedup(mut self, rule: DedupRule) -> Self {
        self.dedup = rule;
        self
    }

    /// Checks that every knob is in range.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("coincidence_tolerance", self.coincidence_tolerance),
            ("collinear_tolerance", self.collinear_tolerance),
            ("optimizer_tolerance", self.optimizer_tolerance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        let angle = self.trailing_edge_angle_deg;
        if !(angle > 0.0 && angle < 180.0) {
            return Err(invalid(format!(
                "trailing_edge_angle_deg must be in (0, 180), got {angle}"
            )));
        }
        if self.optimizer_max_iterations == 0 {
            return Err(invalid("optimizer_max_iterations must be non-zero".to_owned()));
        }
        if self.thickness_samples < 2 {
            return Err(invalid(format!(
                "thickness_samples must be at least 2, got {}",
                self.thickness_samples
            )));
        }
        if !(0.0..1.0).contains(&self.sample_start)
            || !(self.sample_end > self.sample_start && self.sample_end <= 1.0)
        {
            return Err(invalid(format!(
                "sample range [{}, {}] must satisfy 0 <= start < end <= 1",
                self.sample_start, self.sample_end
            )));
        }
        Ok(())
    }
}

/// Free-stream reference state used to normalise surface pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Freestream {
    pub density: f64,
    /// Velocity magnitude; only its square enters the pressure coefficient.
    pub velocity: f64,
    pub pressure: f64,
}

impl Freestream {
    #[must_use]
    pub fn new(density: f64, velocity: f64, pressure: f64) -> Self {
        Self {
            density,
            velocity,
            pressure,
        }
    }

    /// Returns `0.5 * density * velocity^2`.
    #[must_use]
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.velocity * self.velocity
    }

    /// Returns `(p - p0) / q0`.
    #[must_use]
    pub fn pressure_coefficient(&self, pressure: f64) -> f64 {
        (pressure - self.pressure) / self.dynamic_pressure()
    }

    /// Checks that the reference state gives a finite, positive dynamic
    /// pressure.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !(self.density.is_finite() && self.density > 0.0) {
            return Err(invalid(format!(
                "freestream density must be positive, got {}",
                self.density
            )));
        }
        if !self.velocity.is_finite() || self.velocity == 0.0 {
            return Err(invalid(format!(
                "freestream velocity must be finite and non-zero, got {}",
                self.velocity
            )));
        }
        if !self.pressure.is_finite() {
            return Err(invalid(format!(
                "freestream pressure must be finite, got {}",
                self.pressure
            )));
        }
        if !self.dynamic_pressure().is_normal() {
            return Err(invalid(format!(
                "freestream dynamic pressure {} is not representable",
                self.dynamic_pressure()
            )));
        }
        Ok(())
    }
}

fn invalid(message: String) -> crate::error::FoilError {
    InputError::InvalidConfig(message).into()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SectionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.thickness_samples, 100);
        assert_eq!(config.dedup, DedupRule::FirstOccurrenceXOrY);
    }

    #[test]
    fn builders_set_fields() {
        let config = SectionConfig::default()
            .with_trailing_edge_angle(120.0)
            .with_thickness_sampling(50, 0.05, 0.95)
            .with_dedup(DedupRule::ExactPoint);
        assert!((config.trailing_edge_angle_deg - 120.0).abs() < f64::EPSILON);
        assert_eq!(config.thickness_samples, 50);
        assert_eq!(config.dedup, DedupRule::ExactPoint);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        let bad = [
            SectionConfig::default().with_coincidence_tolerance(0.0),
            SectionConfig::default().with_collinear_tolerance(f64::NAN),
            SectionConfig::default().with_trailing_edge_angle(180.0),
            SectionConfig::default().with_optimizer(1e-12, 0),
            SectionConfig::default().with_thickness_sampling(1, 0.01, 0.99),
            SectionConfig::default().with_thickness_sampling(10, 0.5, 0.5),
            SectionConfig::default().with_thickness_sampling(10, 0.0, 1.5),
        ];
        for config in bad {
            assert!(config.validate().is_err(), "{config:?}");
        }
    }

    #[test]
    fn pressure_coefficient_of_freestream() {
        let freestream = Freestream::new(1.2, -10.0, 100.0);
        assert!(freestream.validate().is_ok());
        assert!((freestream.dynamic_pressure() - 60.0).abs() < 1e-12);
        assert!(freestream.pressure_coefficient(100.0).abs() < 1e-15);
        assert!((freestream.pressure_coefficient(160.0) - 1.0).abs() < 1e-12);
        assert!((freestream.pressure_coefficient(70.0) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn rejects_degenerate_freestream() {
        let bad = [
            Freestream::new(0.0, 10.0, 0.0),
            Freestream::new(-1.2, 10.0, 0.0),
            Freestream::new(f64::NAN, 10.0, 0.0),
            Freestream::new(1.2, 0.0, 0.0),
            Freestream::new(1.2, f64::INFINITY, 0.0),
            Freestream::new(1.2, 10.0, f64::NAN),
            Freestream::new(1e-300, 1e-10, 0.0),
        ];
        for freestream in bad {
            let err = freestream.validate().unwrap_err();
            assert!(
                matches!(err, crate::FoilError::Input(InputError::InvalidConfig(_))),
                "{freestream:?}"
            );
        }
    }
}
