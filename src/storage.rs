//! Filesystem stages of the pipeline.
//!
//! [`extract`] reads the CSV exports, [`write_modules`] writes one module per
//! protocol, and [`write_package`] writes the aggregator that re-exports them.

mod extract;
mod write;

pub use extract::{extract, ExtractError};
pub use write::{write_modules, write_package, GeneratedModule, WriteError};
