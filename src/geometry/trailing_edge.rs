use crate::math::Point2;

/// The two corner vertices of a blunt trailing edge.
///
/// `upper` has the greater y coordinate. Indices refer to positions in the
/// loop the edge was located on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailingEdge {
    pub upper: Point2,
    pub lower: Point2,
    pub upper_index: usize,
    pub lower_index: usize,
}

impl TrailingEdge {
    /// Returns the midpoint of the trailing-edge face.
    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.upper, &self.lower)
    }

    /// Returns the length of the trailing-edge face.
    #[must_use]
    pub fn thickness(&self) -> f64 {
        (self.upper - self.lower).norm()
    }
}
