use tracing::{debug, warn};

use crate::error::{GeometryError, Result, TopologyError};
use crate::geometry::TrailingEdge;
use crate::math::polygon_2d::interior_angle;
use crate::math::Point2;

/// Locates the two corner vertices of a blunt trailing edge on a cyclic
/// point loop.
///
/// A blunt trailing edge turns sharply at both of its corners while the rest
/// of a smooth section is nearly straight from vertex to vertex, so every
/// vertex whose interior angle is below the threshold is a candidate.
#[derive(Debug)]
pub struct LocateTrailingEdge<'a> {
    points: &'a [Point2],
    threshold_deg: f64,
}

impl<'a> LocateTrailingEdge<'a> {
    /// Creates a new locator.
    ///
    /// * `threshold_deg` - Interior angle (degrees) below which a vertex is a
    ///   candidate.
    #[must_use]
    pub fn new(points: &'a [Point2], threshold_deg: f64) -> Self {
        Self {
            points,
            threshold_deg,
        }
    }

    /// Computes the interior angle (radians) at every vertex, with wraparound
    /// neighbours.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::Unsupported` for fewer than 3 points, or
    /// `GeometryError::ZeroLengthEdge` if a vertex coincides with a neighbour.
    pub fn interior_angles(&self) -> Result<Vec<f64>> {
        let n = self.points.len();
        if n < 3 {
            return Err(TopologyError::Unsupported(format!(
                "a loop needs at least 3 points, got {n}"
            ))
            .into());
        }
        (0..n)
            .map(|i| {
                let prev = &self.points[(i + n - 1) % n];
                let next = &self.points[(i + 1) % n];
                interior_angle(prev, &self.points[i], next)
                    .ok_or_else(|| GeometryError::ZeroLengthEdge(i).into())
            })
            .collect()
    }

    /// Executes the search.
    ///
    /// With more than two candidates the two with the largest x are kept and
    /// a warning is logged.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::NoBluntTrailingEdge` if fewer than two
    /// vertices qualify, plus any error of [`Self::interior_angles`].
    pub fn execute(&self) -> Result<TrailingEdge> {
        let threshold = self.threshold_deg.to_radians();
        let angles = self.interior_angles()?;
        let mut candidates: Vec<usize> = angles
            .iter()
            .enumerate()
            .filter(|(_, &angle)| angle < threshold)
            .map(|(i, _)| i)
            .collect();

        if candidates.len() < 2 {
            return Err(TopologyError::NoBluntTrailingEdge {
                candidates: candidates.len(),
            }
            .into());
        }
        if candidates.len() > 2 {
            warn!(
                candidates = candidates.len(),
                "more than 2 trailing edge candidates, keeping the two with the largest x"
            );
            candidates.sort_by(|&a, &b| self.points[b].x.total_cmp(&self.points[a].x));
            candidates.truncate(2);
        }

        let (a, b) = (candidates[0], candidates[1]);
        let (upper_index, lower_index) = if self.points[a].y >= self.points[b].y {
            (a, b)
        } else {
            (b, a)
        };
        debug!(upper_index, lower_index, "located trailing edge");

        Ok(TrailingEdge {
            upper: self.points[upper_index],
            lower: self.points[lower_index],
            upper_index,
            lower_index,
        })
    }
}
