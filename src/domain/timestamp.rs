use std::fmt;

use chrono::{Local, NaiveDateTime};

/// The generation time written at the top of every generated file.
///
/// Captured once per run and shared by every file written in that run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// The current local time.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().naive_local())
    }

    /// Renders the header comment that opens a generated file, followed by a
    /// blank line.
    #[must_use]
    pub fn header(self, comment: &str) -> String {
        format!("{comment} Generated on {self}\n\n")
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.6f"))
    }
}
