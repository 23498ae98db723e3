pub mod config;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod sweep;

#[cfg(test)]
mod test_support;

pub use config::{DedupRule, Freestream, SectionConfig};
pub use error::{ErrorKind, FoilError, Result};
