use serde::Deserialize;

/// Column names of the IANA message-headers export, in file order.
///
/// The exports are read without a header line, so these only document the
/// positional layout that [`HeaderRecord`] is deserialised from.
pub const COLUMNS: [&str; 5] = [
    "Header Field Name",
    "Template",
    "Protocol",
    "Status",
    "Reference",
];

/// A single row of a message-headers CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeaderRecord {
    /// The header field name, e.g. `Content-Type`.
    pub name: String,

    /// The field name template. Not used when generating constants.
    pub template: String,

    /// The protocol the field is registered for, e.g. `http`.
    ///
    /// Used verbatim as the grouping key.
    pub protocol: String,

    /// The registration status. An empty status means "standard".
    pub status: String,

    /// The citation for the registration.
    pub reference: String,
}

impl HeaderRecord {
    /// Whether the record's status is one of `ignored`.
    ///
    /// The comparison is case-sensitive against the status as read.
    #[must_use]
    pub fn is_ignored<S: AsRef<str>>(&self, ignored: &[S]) -> bool {
        ignored.iter().any(|status| status.as_ref() == self.status)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn record(status: &str) -> HeaderRecord {
        HeaderRecord {
            name: "X-Test".to_string(),
            template: String::new(),
            protocol: "http".to_string(),
            status: status.to_string(),
            reference: "RFC0000".to_string(),
        }
    }

    #[test_case("obsoleted", true; "obsoleted")]
    #[test_case("deprecated", true; "deprecated")]
    #[test_case("standard", false; "standard")]
    #[test_case("", false; "empty status")]
    #[test_case("Obsoleted", false; "comparison is case sensitive")]
    #[test_case(" deprecated", false; "no trimming")]
    fn ignored_statuses(status: &str, expected: bool) {
        assert_eq!(
            record(status).is_ignored(&["obsoleted", "deprecated"]),
            expected
        );
    }

    #[test]
    fn deserialises_positionally() {
        let data = "Content-Type,,http,standard,[RFC9110]\n";
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_bytes());

        let record: HeaderRecord = reader.deserialize().next().unwrap().unwrap();

        assert_eq!(record.name, "Content-Type");
        assert_eq!(record.template, "");
        assert_eq!(record.protocol, "http");
        assert_eq!(record.status, "standard");
        assert_eq!(record.reference, "[RFC9110]");
    }
}
