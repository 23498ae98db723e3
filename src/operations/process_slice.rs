use tracing::debug;

use crate::config::SectionConfig;
use crate::error::Result;
use crate::geometry::{RawSegment, Section, StitchedLoop, TrailingEdge};

use super::{ExtractSection, LocateTrailingEdge, StitchSegments};

/// Everything computed for one slice.
#[derive(Debug, Clone, PartialEq)]
pub struct SliceResult {
    pub stitched: StitchedLoop,
    /// Trailing edge on the stitched loop (upper corner at index 0).
    pub trailing_edge: TrailingEdge,
    pub section: Section,
}

/// Runs stitching, trailing-edge location and section extraction on the raw
/// segments of one slice.
#[derive(Debug)]
pub struct ProcessSlice<'a> {
    segments: &'a [RawSegment],
    config: SectionConfig,
}

impl<'a> ProcessSlice<'a> {
    /// Creates a new pipeline run.
    #[must_use]
    pub fn new(segments: &'a [RawSegment], config: SectionConfig) -> Self {
        Self { segments, config }
    }

    /// Executes the pipeline.
    ///
    /// # Errors
    ///
    /// Returns the first error of [`StitchSegments::execute`] or
    /// [`ExtractSection::execute_with`].
    pub fn execute(&self) -> Result<SliceResult> {
        let stitched = StitchSegments::new(self.segments, self.config).execute()?;
        let trailing_edge =
            LocateTrailingEdge::new(stitched.points(), self.config.trailing_edge_angle_deg)
                .execute()?;
        let section = ExtractSection::new(&stitched, self.config).execute_with(&trailing_edge)?;
        debug!(
            points = stitched.len(),
            chord = section.chord,
            twist = section.twist_degrees,
            thickness = section.max_thickness,
            thickness_ratio = section.thickness_ratio(),
            trailing_edge_face = trailing_edge.thickness(),
            "processed slice"
        );
        Ok(SliceResult {
            stitched,
            trailing_edge,
            section,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::{FoilError, TopologyError};
    use crate::math::{Point2, Vector2};
    use crate::test_support::{naca_symmetric, place_section, split_into_chains};

    #[test]
    fn chained_naca_slice() {
        let canonical = place_section(&naca_symmetric(0.12, 80), 3.0, 1.5, Vector2::new(0.2, 0.1));
        let raw = split_into_chains(&canonical, &[(1, false), (2, true), (0, false)]);
        let result = ProcessSlice::new(&[raw], SectionConfig::default())
            .execute()
            .unwrap();

        assert_eq!(result.stitched.points(), canonical.as_slice());
        assert_eq!(result.trailing_edge.upper_index, 0);
        assert_eq!(result.trailing_edge.lower_index, canonical.len() - 1);
        assert_abs_diff_eq!(result.section.chord, 1.5, epsilon = 2e-4);
        assert_abs_diff_eq!(result.section.twist_degrees, 3.0, epsilon = 1e-3);
        assert_abs_diff_eq!(result.section.max_thickness, 0.18, epsilon = 2e-3);
        assert_abs_diff_eq!(result.section.thickness_ratio(), 0.12, epsilon = 2e-3);
        // NACA 0012 with an open trailing edge: 0.252% of chord.
        assert_abs_diff_eq!(result.trailing_edge.thickness(), 1.5 * 0.00252, epsilon = 1e-9);
    }

    #[test]
    fn stitched_output_is_a_fixed_point() {
        let mut raw = naca_symmetric(0.12, 60);
        raw.reverse();
        raw.rotate_left(25);
        let config = SectionConfig::default();
        let first = ProcessSlice::new(&[RawSegment::from_points(raw)], config)
            .execute()
            .unwrap();
        let again = ProcessSlice::new(
            &[RawSegment::from_points(first.stitched.points().to_vec())],
            config,
        )
        .execute()
        .unwrap();
        assert_eq!(again.stitched.points(), first.stitched.points());
        assert_eq!(again.section, first.section);
    }

    #[test]
    fn round_slice_fails_at_trailing_edge() {
        let circle: Vec<Point2> = (0..72)
            .map(|i| {
                let t = f64::from(i) * 5f64.to_radians();
                Point2::new(t.cos(), t.sin())
            })
            .collect();
        let err = ProcessSlice::new(&[RawSegment::from_points(circle)], SectionConfig::default())
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            FoilError::Topology(TopologyError::NoBluntTrailingEdge { .. })
        ));
    }
}
