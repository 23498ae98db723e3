use crate::error::{InputError, Result};
use crate::geometry::RawSegment;
use crate::math::{Matrix3, Point2, Point3, TOLERANCE};

use super::{Direction, RawSegment3};

/// Maps model-space slice points into the 2D section plane: the drag
/// component becomes x, the lift component becomes y.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowFrame {
    drag: Direction,
    lift: Direction,
    rotation: Matrix3,
}

impl FlowFrame {
    /// Creates the frame with rows drag, lift and drag x lift.
    ///
    /// # Errors
    ///
    /// Returns `InputError::InvalidDirection` if drag and lift are not
    /// orthogonal.
    pub fn new(drag: Direction, lift: Direction) -> Result<Self> {
        let d = drag.as_vector();
        let l = lift.as_vector();
        let cosine = d.dot(l);
        if cosine.abs() > TOLERANCE {
            return Err(InputError::InvalidDirection(format!(
                "drag ({drag}) and lift ({lift}) are not orthogonal: cos = {cosine}"
            ))
            .into());
        }
        let normal = d.cross(l);
        let rotation = Matrix3::from_rows(&[d.transpose(), l.transpose(), normal.transpose()]);
        Ok(Self {
            drag,
            lift,
            rotation,
        })
    }

    #[must_use]
    pub fn drag(&self) -> Direction {
        self.drag
    }

    #[must_use]
    pub fn lift(&self) -> Direction {
        self.lift
    }

    /// Projects a point into the section plane.
    #[must_use]
    pub fn project(&self, p: &Point3) -> Point2 {
        let r = self.rotation * p.coords;
        Point2::new(r.x, r.y)
    }

    /// Projects a 3D slice segment, keeping its arclength and pressure
    /// values.
    ///
    /// # Errors
    ///
    /// Returns `InputError::LengthMismatch` or `InputError::PressureMismatch`
    /// if the segment's arrays differ in length.
    pub fn project_segment(&self, segment: &RawSegment3) -> Result<RawSegment> {
        let projected = RawSegment::new(
            segment.points.iter().map(|p| self.project(p)).collect(),
            segment.arclength.clone(),
        )?;
        match &segment.pressure {
            Some(pressure) => projected.with_pressure(pressure.clone()),
            None => Ok(projected),
        }
    }
}

impl Default for FlowFrame {
    /// Drag along +X, lift along +Y.
    fn default() -> Self {
        Self {
            drag: Direction::X_POS,
            lift: Direction::Y_POS,
            rotation: Matrix3::identity(),
        }
    }
}
