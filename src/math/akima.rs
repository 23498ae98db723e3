//! Akima piecewise-cubic interpolation.
//!
//! Node slopes are weighted averages of neighbouring secant slopes, so each
//! piece depends only on a local window of samples. The result is C1 and does
//! not overshoot around isolated outliers.

use crate::error::{GeometryError, Result};

/// A 1D Akima interpolant over strictly increasing abscissae.
#[derive(Debug, Clone)]
pub struct Akima1D {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl Akima1D {
    /// Builds an interpolant through `(xs[i], ys[i])`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidInterpolant` if fewer than 2 samples are
    /// given, the lengths differ, or `xs` is not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(GeometryError::InvalidInterpolant(format!(
                "{} abscissae but {} ordinates",
                xs.len(),
                ys.len()
            ))
            .into());
        }
        if xs.len() < 2 {
            return Err(GeometryError::InvalidInterpolant(format!(
                "at least 2 samples required, got {}",
                xs.len()
            ))
            .into());
        }
        if let Some(i) = super::polygon_2d::first_non_increasing(xs.iter().copied()) {
            return Err(GeometryError::InvalidInterpolant(format!(
                "abscissae not strictly increasing at sample {i}"
            ))
            .into());
        }

        let slopes = node_slopes(&xs, &ys);
        Ok(Self { xs, ys, slopes })
    }

    /// Returns the interpolation domain `(min, max)`.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::OutOfDomain` if `x` lies outside the sample
    /// range (no extrapolation, no clamping).
    pub fn evaluate(&self, x: f64) -> Result<f64> {
        let (min, max) = self.domain();
        if x.is_nan() || x < min || x > max {
            return Err(GeometryError::OutOfDomain { x, min, max }.into());
        }

        let n = self.xs.len();
        let j = self.xs.partition_point(|&v| v <= x).saturating_sub(1).min(n - 2);

        let h = self.xs[j + 1] - self.xs[j];
        let t = (x - self.xs[j]) / h;
        let t2 = t * t;
        let t3 = t2 * t;

        let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
        let h10 = t3 - 2.0 * t2 + t;
        let h01 = -2.0 * t3 + 3.0 * t2;
        let h11 = t3 - t2;

        Ok(h00 * self.ys[j]
            + h10 * h * self.slopes[j]
            + h01 * self.ys[j + 1]
            + h11 * h * self.slopes[j + 1])
    }
}

/// Computes Akima node slopes, extending the secant slopes by two linear
/// extrapolations at each end.
fn node_slopes(xs: &[f64], ys: &[f64]) -> Vec<f64> {
    let n = xs.len();
    let secants: Vec<f64> = xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect();

    if n == 2 {
        return vec![secants[0]; 2];
    }

    // m[k + 2] = secants[k]; two ghost slopes on each side.
    let mut m = vec![0.0; n + 3];
    m[2..=n].copy_from_slice(&secants);
    m[1] = 2.0 * m[2] - m[3];
    m[0] = 2.0 * m[1] - m[2];
    m[n + 1] = 2.0 * m[n] - m[n - 1];
    m[n + 2] = 2.0 * m[n + 1] - m[n];

    let dm: Vec<f64> = m.windows(2).map(|w| (w[1] - w[0]).abs()).collect();
    let max_weight = (0..n)
        .map(|i| dm[i + 2] + dm[i])
        .fold(f64::NEG_INFINITY, f64::max);

    (0..n)
        .map(|i| {
            let f1 = dm[i + 2];
            let f2 = dm[i];
            let f12 = f1 + f2;
            if f12 > 1e-9 * max_weight {
                (f1 * m[i + 1] + f2 * m[i + 2]) / f12
            } else {
                0.5 * (m[i + 1] + m[i + 2])
            }
        })
        .collect()
}
