//! Header field constant generation
//!
//! Reads CSV exports of the IANA message-headers registry and writes one
//! source module of constants per protocol, plus a package file that
//! re-exports them all.
//!
//! ```no_run
//! # fn main() -> Result<(), headergen::Error> {
//! let report = headergen::generate()?;
//! for module in &report.modules {
//!     println!("{}", module.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod domain;
pub use domain::{Config, Definition, HeaderRecord, Language, ProtocolGroup, Timestamp};

/// Reading CSV exports and writing generated modules.
pub mod storage;
pub use storage::{ExtractError, GeneratedModule, WriteError};

mod generator;
pub use generator::{default_references, generate, Error, Generator, Report};
