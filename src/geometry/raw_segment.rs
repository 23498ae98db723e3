use crate::error::{InputError, Result};
use crate::math::polygon_2d::cumulative_length;
use crate::math::Point2;

/// Ordered 2D points from a section slice with a parallel arclength array
/// and, optionally, the surface pressure at each point.
///
/// Arclength is non-decreasing along each true polyline piece. A decrease
/// marks the start of a new piece concatenated into the same array.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSegment {
    points: Vec<Point2>,
    arclength: Vec<f64>,
    pressure: Option<Vec<f64>>,
}

impl RawSegment {
    /// Creates a segment from points and their arclength values.
    ///
    /// # Errors
    ///
    /// Returns `InputError::LengthMismatch` if the arrays differ in length.
    pub fn new(points: Vec<Point2>, arclength: Vec<f64>) -> Result<Self> {
        if points.len() != arclength.len() {
            return Err(InputError::LengthMismatch {
                points: points.len(),
                arclength: arclength.len(),
            }
            .into());
        }
        Ok(Self {
            points,
            arclength,
            pressure: None,
        })
    }

    /// Creates a single-piece segment, using cumulative point distance as the
    /// arclength.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        let arclength = cumulative_length(&points);
        Self {
            points,
            arclength,
            pressure: None,
        }
    }

    /// Attaches one pressure value per point.
    ///
    /// # Errors
    ///
    /// Returns `InputError::PressureMismatch` if `pressure` and the points
    /// differ in length.
    pub fn with_pressure(mut self, pressure: Vec<f64>) -> Result<Self> {
        if pressure.len() != self.points.len() {
            return Err(InputError::PressureMismatch {
                points: self.points.len(),
                pressure: pressure.len(),
            }
            .into());
        }
        self.pressure = Some(pressure);
        Ok(self)
    }

    /// Returns the points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the arclength values.
    #[must_use]
    pub fn arclength(&self) -> &[f64] {
        &self.arclength
    }

    /// Returns the pressure values, if the slice carried them.
    #[must_use]
    pub fn pressure(&self) -> Option<&[f64]> {
        self.pressure.as_deref()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the segment holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
