pub mod circle;
pub mod raw_segment;
pub mod section;
pub mod stitched_loop;
pub mod trailing_edge;

pub use circle::Circle2;
pub use raw_segment::RawSegment;
pub use section::Section;
pub use stitched_loop::StitchedLoop;
pub use trailing_edge::TrailingEdge;
