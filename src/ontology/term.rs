//! Ontology term identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a phenotype ontology term, e.g. `HP:0001250`.
///
/// Term IDs are treated as opaque CURIEs; the engine assumes they have been
/// sanitized upstream and are resolvable by the configured
/// [`OntologyProvider`](crate::ontology::OntologyProvider).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermId(String);

impl TermId {
    /// Create a term ID from a CURIE string.
    pub fn new(curie: impl Into<String>) -> Self {
        Self(curie.into())
    }

    /// The full CURIE, e.g. `HP:0001250`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The prefix before the colon, e.g. `HP`. Empty if there is no colon.
    pub fn prefix(&self) -> &str {
        self.0.split(':').next().unwrap_or("")
    }
}

impl fmt::Display for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TermId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for TermId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_id_roundtrip() {
        let id = TermId::new("HP:0001250");
        assert_eq!(id.as_str(), "HP:0001250");
        assert_eq!(format!("{}", id), "HP:0001250");
        assert_eq!("HP:0001250".parse::<TermId>().unwrap(), id);
    }

    #[test]
    fn test_term_id_prefix() {
        assert_eq!(TermId::new("HP:0001250").prefix(), "HP");
        assert_eq!(TermId::new("noprefix").prefix(), "noprefix");
    }

    #[test]
    fn test_term_id_ordering() {
        let a = TermId::new("HP:0000001");
        let b = TermId::new("HP:0000002");
        assert!(a < b);
    }
}
