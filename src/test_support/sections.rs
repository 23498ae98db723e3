//! Synthetic airfoil sections. Shared by unit tests, integration tests and
//! the demo, so it depends on nalgebra alone.

use std::f64::consts::PI;

use nalgebra::{Point2, Rotation2, Vector2};

/// Half thickness of a NACA four-digit symmetric section with an open
/// trailing edge.
#[must_use]
pub fn naca_half_thickness(thickness: f64, x: f64) -> f64 {
    5.0 * thickness
        * (0.2969 * x.sqrt() - 0.1260 * x - 0.3516 * x.powi(2) + 0.2843 * x.powi(3)
            - 0.1015 * x.powi(4))
}

/// Canonical loop of a unit-chord symmetric NACA section: upper trailing-edge
/// corner first, counter-clockwise through the leading edge at index `n`,
/// ending at the lower trailing-edge corner at index `2n`.
#[must_use]
pub fn naca_symmetric(thickness: f64, n: u32) -> Vec<Point2<f64>> {
    let xs: Vec<f64> = (1..=n)
        .map(|i| 0.5 * (1.0 - (PI * f64::from(i) / f64::from(n)).cos()))
        .collect();
    xs.iter()
        .rev()
        .map(|&x| Point2::new(x, naca_half_thickness(thickness, x)))
        .chain(std::iter::once(Point2::origin()))
        .chain(xs.iter().map(|&x| Point2::new(x, -naca_half_thickness(thickness, x))))
        .collect()
}

/// Rotates a unit-chord section nose-up by `twist_deg` about its leading
/// edge, scales it, then moves the leading edge to `offset`.
#[must_use]
pub fn place_section(
    points: &[Point2<f64>],
    twist_deg: f64,
    scale: f64,
    offset: Vector2<f64>,
) -> Vec<Point2<f64>> {
    let rotation = Rotation2::new(-twist_deg.to_radians());
    points
        .iter()
        .map(|p| Point2::from(rotation * p.coords * scale + offset))
        .collect()
}
