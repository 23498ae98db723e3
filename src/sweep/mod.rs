//! Spanwise sweeps: slice a surface at a series of stations and compute the
//! section properties or surface pressure coefficient of each cut.

mod direction;
mod frame;
mod pressure_sweep;
mod span_sweep;
mod stations;

pub use direction::Direction;
pub use frame::FlowFrame;
pub use pressure_sweep::{PressureSweep, StationPressure};
pub use span_sweep::{DistributionRecord, RawSegment3, Slicer, SpanSweep};
pub use stations::SpanStations;
