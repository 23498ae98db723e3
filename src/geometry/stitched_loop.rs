use crate::math::polygon_2d::{cumulative_length, signed_area_open};
use crate::math::Point2;

/// A closed, deduplicated, counter-clockwise section loop.
///
/// Position 0 is the upper trailing-edge vertex. `indices[i]` is the position
/// of loop point `i` in the flattened raw input, or `None` when the loop was
/// not built from raw segments. Pressure is present when every raw segment
/// carried it.
#[derive(Debug, Clone, PartialEq)]
pub struct StitchedLoop {
    points: Vec<Point2>,
    arclength: Vec<f64>,
    indices: Vec<Option<usize>>,
    pressure: Option<Vec<f64>>,
}

impl StitchedLoop {
    /// Assembles a loop from parallel arrays already in canonical order.
    pub(crate) fn from_parts(
        points: Vec<Point2>,
        arclength: Vec<f64>,
        indices: Vec<Option<usize>>,
    ) -> Self {
        debug_assert_eq!(points.len(), arclength.len());
        debug_assert_eq!(points.len(), indices.len());
        Self {
            points,
            arclength,
            indices,
            pressure: None,
        }
    }

    /// Reorders the flattened raw pressure into loop order.
    pub(crate) fn with_raw_pressure(mut self, raw: &[f64]) -> Self {
        self.pressure = self.gather(raw);
        self
    }

    /// Wraps points that the caller already holds in canonical order
    /// (counter-clockwise, upper trailing-edge vertex first).
    ///
    /// No raw-index mapping exists, so every index is `None`; arclength is
    /// the cumulative point distance.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        let arclength = cumulative_length(&points);
        let indices = vec![None; points.len()];
        Self {
            points,
            arclength,
            indices,
            pressure: None,
        }
    }

    /// Returns the loop points.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// Returns the arclength value carried over from the raw input for each
    /// loop point.
    #[must_use]
    pub fn arclength(&self) -> &[f64] {
        &self.arclength
    }

    /// Returns the raw-input position of each loop point.
    #[must_use]
    pub fn indices(&self) -> &[Option<usize>] {
        &self.indices
    }

    /// Returns the pressure at each loop point.
    #[must_use]
    pub fn pressure(&self) -> Option<&[f64]> {
        self.pressure.as_deref()
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the loop holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the open-chain shoelace area, positive for this loop.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_open(&self.points)
    }

    /// Reorders a per-point attribute of the flattened raw input (pressure,
    /// for instance) into loop order.
    ///
    /// Returns `None` if a loop point has no raw index or an index falls
    /// outside `values`.
    #[must_use]
    pub fn gather<T: Clone>(&self, values: &[T]) -> Option<Vec<T>> {
        self.indices
            .iter()
            .map(|idx| idx.and_then(|i| values.get(i).cloned()))
            .collect()
    }
}
