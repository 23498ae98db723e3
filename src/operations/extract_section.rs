use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Rotation2;
use tracing::debug;

use crate::config::SectionConfig;
use crate::error::{GeometryError, NumericalError, Result, TopologyError};
use crate::geometry::{Circle2, Section, StitchedLoop, TrailingEdge};
use crate::math::akima::Akima1D;
use crate::math::optimize::maximize_bounded;
use crate::math::polygon_2d::{farthest_from, first_non_increasing};
use crate::math::Point2;

use super::LocateTrailingEdge;

/// Extracts chord, twist and maximum thickness from a canonical section loop.
///
/// The leading edge is the point of a circle, fitted through the loop vertex
/// farthest from the trailing-edge midpoint and its two neighbours, that lies
/// farthest from that midpoint. Thickness is sampled in the chord frame
/// (leading edge at the origin, chord along +x).
#[derive(Debug)]
pub struct ExtractSection<'a> {
    stitched: &'a StitchedLoop,
    config: SectionConfig,
}

impl<'a> ExtractSection<'a> {
    /// Creates a new extraction.
    #[must_use]
    pub fn new(stitched: &'a StitchedLoop, config: SectionConfig) -> Self {
        Self { stitched, config }
    }

    /// Executes the extraction.
    ///
    /// # Errors
    ///
    /// - `TopologyError` if no blunt trailing edge exists, the farthest
    ///   vertex has no successor, or a surface is empty.
    /// - `GeometryError` if the leading-edge neighbourhood is degenerate, a
    ///   surface is not monotonic in the chord frame, or the thickness is
    ///   not positive.
    /// - `NumericalError::LeadingEdgeNotConverged` if refinement hits its
    ///   iteration cap.
    pub fn execute(&self) -> Result<Section> {
        let te = LocateTrailingEdge::new(
            self.stitched.points(),
            self.config.trailing_edge_angle_deg,
        )
        .execute()?;
        self.execute_with(&te)
    }

    /// Executes the extraction with an already located trailing edge.
    ///
    /// # Errors
    ///
    /// Same as [`Self::execute`], minus the trailing-edge search.
    pub fn execute_with(&self, te: &TrailingEdge) -> Result<Section> {
        self.config.validate()?;
        let points = self.stitched.points();
        let te_mid = te.midpoint();

        let leading_edge = self.leading_edge(points, &te_mid)?;
        let i_max = leading_edge.vertex;
        let le = leading_edge.point;

        let chord = (le - te_mid).norm();
        let twist = (le.y - te_mid.y).atan2(-(le.x - te_mid.x));
        debug!(chord, twist_deg = twist.to_degrees(), "chord line");

        let (upper, lower) = chord_frame_surfaces(points, &le, twist, i_max, te.lower_index)?;
        let max_thickness = self.max_thickness(&upper, &lower, chord)?;
        debug!(max_thickness, "section thickness");

        Ok(Section {
            chord,
            twist_degrees: twist.to_degrees(),
            max_thickness,
            leading_edge: le,
            trailing_edge: te_mid,
        })
    }

    fn leading_edge(&self, points: &[Point2], te_mid: &Point2) -> Result<LeadingEdge> {
        let vertex = farthest_from(points, te_mid, 1)
            .ok_or_else(|| TopologyError::Unsupported("loop has a single point".to_owned()))?;
        if vertex + 1 >= points.len() {
            return Err(TopologyError::LeadingEdgeOnBoundary { index: vertex }.into());
        }

        let circle = Circle2::through_points(
            &points[vertex - 1],
            &points[vertex],
            &points[vertex + 1],
            self.config.collinear_tolerance,
        )?;
        let max_iterations = self.config.optimizer_max_iterations;
        let best = maximize_bounded(
            |theta| (circle.point_at(theta) - te_mid).norm(),
            0.0,
            TAU,
            FRAC_PI_2,
            self.config.optimizer_tolerance,
            max_iterations,
        )
        .ok_or(NumericalError::LeadingEdgeNotConverged {
            iterations: max_iterations,
        })?;
        debug!(
            vertex,
            radius = circle.radius(),
            theta = best.x,
            iterations = best.iterations,
            "refined leading edge"
        );

        Ok(LeadingEdge {
            vertex,
            point: circle.point_at(best.x),
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn max_thickness(&self, upper: &[Point2], lower: &[Point2], chord: f64) -> Result<f64> {
        let upper = surface_interpolant("upper", upper)?;
        let lower = surface_interpolant("lower", lower)?;

        let count = self.config.thickness_samples;
        let start = self.config.sample_start;
        let step = (self.config.sample_end - start) / (count - 1) as f64;
        let mut max_thickness = f64::NEG_INFINITY;
        for k in 0..count {
            let x = chord * (k as f64).mul_add(step, start);
            let t = upper.evaluate(x)? - lower.evaluate(x)?;
            max_thickness = max_thickness.max(t);
        }

        if max_thickness > 0.0 {
            Ok(max_thickness)
        } else {
            Err(GeometryError::NonPositiveThickness(max_thickness).into())
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct LeadingEdge {
    /// Loop vertex the circle was fitted around.
    vertex: usize,
    point: Point2,
}

/// Moves the loop into the chord frame and splits it into upper and lower
/// surfaces, both ordered by increasing x.
///
/// The upper surface runs from the upper trailing-edge corner (index 0) to
/// just before the leading-edge vertex; the lower surface from just after it
/// to the lower trailing-edge corner.
fn chord_frame_surfaces(
    points: &[Point2],
    le: &Point2,
    twist: f64,
    i_max: usize,
    lower_index: usize,
) -> Result<(Vec<Point2>, Vec<Point2>)> {
    if lower_index <= i_max {
        return Err(TopologyError::EmptySurface("lower").into());
    }
    let rotation = Rotation2::new(twist);
    let to_chord = |p: &Point2| Point2::from(rotation * (p - le));

    let upper: Vec<Point2> = points[..i_max].iter().rev().map(to_chord).collect();
    let lower: Vec<Point2> = points[i_max + 1..=lower_index].iter().map(to_chord).collect();
    if upper.len() < 2 {
        return Err(TopologyError::EmptySurface("upper").into());
    }
    if lower.len() < 2 {
        return Err(TopologyError::EmptySurface("lower").into());
    }
    Ok((upper, lower))
}

fn surface_interpolant(surface: &'static str, points: &[Point2]) -> Result<Akima1D> {
    if let Some(index) = first_non_increasing(points.iter().map(|p| p.x)) {
        return Err(GeometryError::NotMonotonic { surface, index }.into());
    }
    Akima1D::new(
        points.iter().map(|p| p.x).collect(),
        points.iter().map(|p| p.y).collect(),
    )
}
