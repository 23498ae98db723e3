use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::SectionConfig;
use crate::error::{InputError, Result};
use crate::geometry::{RawSegment, Section};
use crate::math::Point3;
use crate::operations::ProcessSlice;

use super::{Direction, FlowFrame, SpanStations};

/// Points, arclength and optional surface pressure of one polyline piece
/// returned by a slicer, in model space.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawSegment3 {
    pub points: Vec<Point3>,
    pub arclength: Vec<f64>,
    pub pressure: Option<Vec<f64>>,
}

/// Cuts the surface being analysed with a plane.
///
/// Implementations are typically stateful (a mesh-processing session), so
/// slicing takes `&mut self` and is always called from one thread, one
/// station at a time.
pub trait Slicer {
    type Error: fmt::Display;

    /// Returns the polyline pieces of the cut through `origin` with plane
    /// normal `normal`, in any order and direction.
    ///
    /// # Errors
    ///
    /// Implementation-defined.
    fn slice(
        &mut self,
        origin: &Point3,
        normal: &Direction,
    ) -> std::result::Result<Vec<RawSegment3>, Self::Error>;
}

/// One row of a spanwise geometry distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistributionRecord {
    /// Station origin.
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Degrees.
    pub twist: f64,
    pub chord: f64,
    pub thickness: f64,
}

impl DistributionRecord {
    fn new(origin: &Point3, section: &Section) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            z: origin.z,
            twist: section.twist_degrees,
            chord: section.chord,
            thickness: section.max_thickness,
        }
    }
}

/// Computes section properties at every span station.
///
/// Slices are fetched sequentially, then processed independently; with the
/// `parallel` feature the processing runs on the rayon pool. Results are in
/// station order either way.
#[derive(Debug)]
pub struct SpanSweep<'a> {
    stations: &'a SpanStations,
    frame: FlowFrame,
    config: SectionConfig,
}

impl<'a> SpanSweep<'a> {
    /// Creates a new sweep.
    #[must_use]
    pub fn new(stations: &'a SpanStations, frame: FlowFrame, config: SectionConfig) -> Self {
        Self {
            stations,
            frame,
            config,
        }
    }

    /// Executes the sweep.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Slicer` if the slicer fails, or the error of the
    /// first station (in span order) whose section cannot be computed.
    pub fn execute<S: Slicer>(&self, slicer: &mut S) -> Result<Vec<DistributionRecord>> {
        self.config.validate()?;
        info!(stations = self.stations.len(), "starting span sweep");

        let slices = fetch_slices(self.stations, &self.frame, slicer)?;
        let config = self.config;
        let sections = process_slices(&slices, move |segments| {
            Ok(ProcessSlice::new(segments, config).execute()?.section)
        });

        let records: Vec<DistributionRecord> = first_error(sections)?
            .iter()
            .zip(self.stations.origins())
            .map(|(section, origin)| DistributionRecord::new(origin, section))
            .collect();
        info!(stations = records.len(), "span sweep finished");
        Ok(records)
    }
}

/// Slices every station in order and projects the pieces into the section
/// plane.
pub(super) fn fetch_slices<S: Slicer>(
    stations: &SpanStations,
    frame: &FlowFrame,
    slicer: &mut S,
) -> Result<Vec<Vec<RawSegment>>> {
    let normal = stations.normal();
    let mut slices = Vec::with_capacity(stations.len());
    for (station, origin) in stations.origins().iter().enumerate() {
        let raw = slicer
            .slice(origin, &normal)
            .map_err(|e| InputError::Slicer {
                station,
                message: e.to_string(),
            })?;
        let segments = raw
            .iter()
            .map(|s| frame.project_segment(s))
            .collect::<Result<Vec<_>>>()?;
        slices.push(segments);
    }
    Ok(slices)
}

/// Runs `process` on every slice, on the rayon pool with the `parallel`
/// feature. Results keep station order.
pub(super) fn process_slices<T, F>(slices: &[Vec<RawSegment>], process: F) -> Vec<Result<T>>
where
    T: Send,
    F: Fn(&[RawSegment]) -> Result<T> + Send + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
        slices.par_iter().map(|s| process(s)).collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        slices.iter().map(|s| process(s)).collect()
    }
}

/// Unwraps per-station results, returning the error of the first failing
/// station in span order.
pub(super) fn first_error<T>(results: Vec<Result<T>>) -> Result<Vec<T>> {
    let mut values = Vec::with_capacity(results.len());
    for (station, result) in results.into_iter().enumerate() {
        match result {
            Ok(value) => values.push(value),
            Err(e) => {
                warn!(station, kind = ?e.kind(), error = %e, "section failed");
                return Err(e);
            }
        }
    }
    Ok(values)
}
