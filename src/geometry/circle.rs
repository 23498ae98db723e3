use crate::error::Result;
use crate::math::circle_2d::circle_from_three_points;
use crate::math::{Point2, Vector2};

/// A circle in the section plane.
///
/// `P(t) = center + radius * (cos t, sin t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle2 {
    center: Point2,
    radius: f64,
}

impl Circle2 {
    /// Fits the circle through three points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::DuplicatePoints` or
    /// `GeometryError::CollinearPoints` when no finite circle exists.
    pub fn through_points(
        p1: &Point2,
        p2: &Point2,
        p3: &Point2,
        collinear_tolerance: f64,
    ) -> Result<Self> {
        let (center, radius) = circle_from_three_points(p1, p2, p3, collinear_tolerance)?;
        Ok(Self { center, radius })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Evaluates the circle at angle `theta` (radians).
    #[must_use]
    pub fn point_at(&self, theta: f64) -> Point2 {
        self.center + Vector2::new(theta.cos(), theta.sin()) * self.radius
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn point_at_quarter_turn() {
        let circle = Circle2 {
            center: Point2::new(1.0, 2.0),
            radius: 0.5,
        };
        let p = circle.point_at(FRAC_PI_2);
        assert_abs_diff_eq!(p.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn fit_through_points() {
        let circle = Circle2::through_points(
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(-1.0, 0.0),
            1e-5,
        )
        .unwrap();
        assert_abs_diff_eq!(circle.center().x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(circle.center().y, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(circle.radius(), 1.0, epsilon = 1e-6);
    }
}
