//! Domain models for header constant generation.
//!
//! This module contains the pure types of the pipeline: parsed CSV records,
//! the definitions derived from them, their grouping by protocol, and the
//! configuration that drives generation.

mod config;
pub use config::{Config, ConfigError};

/// Header field constants and identifier derivation.
pub mod definition;
pub use definition::{constant_name, Definition};

mod group;
pub use group::ProtocolGroup;

pub mod language;
pub use language::Language;

/// Rows of the message-headers CSV exports.
pub mod record;
pub use record::HeaderRecord;

mod timestamp;
pub use timestamp::Timestamp;
