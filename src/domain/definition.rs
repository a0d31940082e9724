use super::HeaderRecord;

/// The status written for records with an empty status field.
pub const DEFAULT_STATUS: &str = "standard";

/// A header field constant, ready to be rendered into a module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    constant: String,
    value: String,
    status: String,
    reference: String,
}

impl Definition {
    /// Builds the definition for a CSV record.
    #[must_use]
    pub fn from_record(record: &HeaderRecord) -> Self {
        let status = if record.status.is_empty() {
            DEFAULT_STATUS.to_string()
        } else {
            record.status.clone()
        };

        Self {
            constant: constant_name(&record.name),
            value: record.name.clone(),
            status,
            reference: record.reference.clone(),
        }
    }

    /// The constant identifier, e.g. `CONTENT_TYPE`.
    #[must_use]
    pub fn constant(&self) -> &str {
        &self.constant
    }

    /// The original header field name, e.g. `Content-Type`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The registration status, never empty.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The registration reference.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Whether the constant is a plain `[A-Z0-9_]` identifier that does not
    /// start with a digit.
    ///
    /// Header names outside of letters, digits and hyphens produce constants
    /// that are not valid identifiers in the generated source.
    #[must_use]
    pub fn is_valid_identifier(&self) -> bool {
        let mut chars = self.constant.chars();
        chars
            .next()
            .is_some_and(|c| c.is_ascii_uppercase() || c == '_')
            && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

/// Derives a constant identifier from a header field name.
///
/// Hyphens become underscores and the result is upper-cased.
#[must_use]
pub fn constant_name(name: &str) -> String {
    name.replace('-', "_").to_uppercase()
}
