use indexmap::IndexMap;

use super::Definition;

/// Definitions grouped by protocol.
///
/// Protocols iterate in the order they were first seen, and the definitions
/// of each protocol keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtocolGroup {
    protocols: IndexMap<String, Vec<Definition>>,
}

impl ProtocolGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a definition to the list for `protocol`, creating the list on
    /// first use.
    ///
    /// The protocol is used verbatim as the key.
    pub fn push(&mut self, protocol: impl Into<String>, definition: Definition) {
        self.protocols
            .entry(protocol.into())
            .or_default()
            .push(definition);
    }

    /// The definitions recorded for `protocol`, if any.
    #[must_use]
    pub fn get(&self, protocol: &str) -> Option<&[Definition]> {
        self.protocols.get(protocol).map(Vec::as_slice)
    }

    /// Iterates over `(protocol, definitions)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Definition])> {
        self.protocols
            .iter()
            .map(|(protocol, definitions)| (protocol.as_str(), definitions.as_slice()))
    }

    /// The number of distinct protocols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.protocols.len()
    }

    /// Whether no definitions have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.protocols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HeaderRecord;

    fn definition(name: &str) -> Definition {
        Definition::from_record(&HeaderRecord {
            name: name.to_string(),
            template: String::new(),
            protocol: String::new(),
            status: String::new(),
            reference: String::new(),
        })
    }

    #[test]
    fn keeps_insertion_order() {
        let mut group = ProtocolGroup::new();
        group.push("mail", definition("From"));
        group.push("http", definition("Accept"));
        group.push("mail", definition("To"));

        let protocols: Vec<_> = group.iter().map(|(protocol, _)| protocol).collect();
        assert_eq!(protocols, ["mail", "http"]);

        let mail: Vec<_> = group
            .get("mail")
            .unwrap()
            .iter()
            .map(Definition::value)
            .collect();
        assert_eq!(mail, ["From", "To"]);
    }

    #[test]
    fn keys_are_case_sensitive() {
        let mut group = ProtocolGroup::new();
        group.push("http", definition("Accept"));
        group.push("HTTP", definition("Age"));

        assert_eq!(group.len(), 2);
        assert_eq!(group.get("http").unwrap().len(), 1);
        assert_eq!(group.get("HTTP").unwrap().len(), 1);
    }

    #[test]
    fn empty_group() {
        let group = ProtocolGroup::new();
        assert!(group.is_empty());
        assert!(group.get("http").is_none());
    }
}
