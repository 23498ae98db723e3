mod extract_section;
mod locate_trailing_edge;
mod pressure_slice;
mod process_slice;
mod stitch_segments;

pub use extract_section::ExtractSection;
pub use locate_trailing_edge::LocateTrailingEdge;
pub use pressure_slice::{PressureRecord, PressureSlice};
pub use process_slice::{ProcessSlice, SliceResult};
pub use stitch_segments::StitchSegments;
