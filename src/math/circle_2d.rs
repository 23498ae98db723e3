//! Circumcircle of three points, computed in the complex plane.

use num_complex::Complex64;

use super::Point2;
use crate::error::{GeometryError, Result};

/// Computes the center and radius of the circle through three points.
///
/// With `w = (z3 - z1) / (z2 - z1)` the center is
/// `z1 + (z2 - z1) * (w - |w|^2) / (2i * Im(w))`.
///
/// # Errors
///
/// Returns `GeometryError::DuplicatePoints` if any two points are equal, or
/// `GeometryError::CollinearPoints` if `|Im(w)| <= collinear_tolerance`.
pub fn circle_from_three_points(
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    collinear_tolerance: f64,
) -> Result<(Point2, f64)> {
    let z1 = Complex64::new(p1.x, p1.y);
    let z2 = Complex64::new(p2.x, p2.y);
    let z3 = Complex64::new(p3.x, p3.y);

    if z1 == z2 || z2 == z3 || z3 == z1 {
        return Err(
            GeometryError::DuplicatePoints(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y).into(),
        );
    }

    let w = (z3 - z1) / (z2 - z1);
    if w.im.abs() <= collinear_tolerance {
        return Err(
            GeometryError::CollinearPoints(p1.x, p1.y, p2.x, p2.y, p3.x, p3.y).into(),
        );
    }

    let c = (z2 - z1) * (w - w.norm_sqr()) / Complex64::new(0.0, 2.0 * w.im) + z1;
    let r = (z1 - c).norm();
    Ok((Point2::new(c.re, c.im), r))
}
