//! Mock ontology provider for testing.

use std::collections::HashMap;

use crate::ontology::provider::OntologyProvider;
use crate::ontology::term::TermId;

/// In-memory ontology provider backed by hand-built is-a edges.
///
/// Useful for tests, doctests, and any consumer that wants to exercise the
/// analysis engine without corpus files.
#[derive(Debug, Clone, Default)]
pub struct MockOntology {
    /// Direct is-a parents per term.
    parents: HashMap<TermId, Vec<TermId>>,
    /// Corpus-wide background frequency per term.
    background: HashMap<TermId, f64>,
    /// Root term, excluded from ancestor chains.
    root: Option<TermId>,
}

impl MockOntology {
    /// Create an empty mock ontology.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ontology root. The root never appears in ancestor chains.
    pub fn set_root(&mut self, root: impl Into<TermId>) {
        self.root = Some(root.into());
    }

    /// Add a term with its direct is-a parents.
    pub fn add_term(&mut self, term: impl Into<TermId>, parents: &[&str]) {
        self.parents
            .insert(term.into(), parents.iter().map(|p| TermId::from(*p)).collect());
    }

    /// Record a background frequency for a term.
    pub fn set_background_frequency(&mut self, term: impl Into<TermId>, frequency: f64) {
        self.background.insert(term.into(), frequency);
    }

    /// A small fixed phenotype ontology with background frequencies.
    ///
    /// Layout (is-a chains, `HP:0000118` is the root):
    ///
    /// ```text
    /// HP:0000707 nervous system
    ///   HP:0012638 nervous system physiology
    ///     HP:0001250 seizure
    ///       HP:0002197 generalized-onset seizure
    ///       HP:0007359 focal-onset seizure
    /// HP:0000924 skeletal system
    ///   HP:0002652 skeletal dysplasia
    ///   HP:0001166 arachnodactyly
    /// HP:0000478 eye
    ///   HP:0000545 myopia
    /// HP:0001627 heart morphology
    ///   HP:0001633 mitral valve morphology
    ///     HP:0001634 mitral valve prolapse
    /// ```
    pub fn with_test_data() -> Self {
        let mut onto = Self::new();
        onto.set_root("HP:0000118");

        onto.add_term("HP:0000707", &["HP:0000118"]);
        onto.add_term("HP:0012638", &["HP:0000707"]);
        onto.add_term("HP:0001250", &["HP:0012638"]);
        onto.add_term("HP:0002197", &["HP:0001250"]);
        onto.add_term("HP:0007359", &["HP:0001250"]);

        onto.add_term("HP:0000924", &["HP:0000118"]);
        onto.add_term("HP:0002652", &["HP:0000924"]);
        onto.add_term("HP:0001166", &["HP:0000924"]);

        onto.add_term("HP:0000478", &["HP:0000118"]);
        onto.add_term("HP:0000545", &["HP:0000478"]);

        onto.add_term("HP:0001627", &["HP:0000118"]);
        onto.add_term("HP:0001633", &["HP:0001627"]);
        onto.add_term("HP:0001634", &["HP:0001633"]);

        onto.set_background_frequency("HP:0000707", 0.30);
        onto.set_background_frequency("HP:0012638", 0.25);
        onto.set_background_frequency("HP:0001250", 0.10);
        onto.set_background_frequency("HP:0002197", 0.05);
        onto.set_background_frequency("HP:0007359", 0.04);
        onto.set_background_frequency("HP:0000924", 0.35);
        onto.set_background_frequency("HP:0002652", 0.08);
        onto.set_background_frequency("HP:0001166", 0.02);
        onto.set_background_frequency("HP:0000478", 0.28);
        onto.set_background_frequency("HP:0000545", 0.06);
        onto.set_background_frequency("HP:0001627", 0.22);
        onto.set_background_frequency("HP:0001633", 0.03);
        onto.set_background_frequency("HP:0001634", 0.02);

        onto
    }
}

impl OntologyProvider for MockOntology {
    fn ancestors(&self, term: &TermId) -> Vec<TermId> {
        // Breadth-first walk over is-a parents, nearest first.
        let mut out = Vec::new();
        let mut frontier = vec![term.clone()];
        while !frontier.is_empty() {
            let mut next = Vec::new();
            for t in &frontier {
                for parent in self.parents.get(t).into_iter().flatten() {
                    if Some(parent) == self.root.as_ref() {
                        continue;
                    }
                    if !out.contains(parent) {
                        out.push(parent.clone());
                        next.push(parent.clone());
                    }
                }
            }
            frontier = next;
        }
        out
    }

    fn contains(&self, term: &TermId) -> bool {
        self.parents.contains_key(term) || self.root.as_ref() == Some(term)
    }

    fn background_frequency(&self, term: &TermId) -> f64 {
        self.background.get(term).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestors_nearest_first() {
        let onto = MockOntology::with_test_data();
        let ancestors = onto.ancestors(&TermId::from("HP:0002197"));
        assert_eq!(
            ancestors,
            vec![
                TermId::from("HP:0001250"),
                TermId::from("HP:0012638"),
                TermId::from("HP:0000707"),
            ]
        );
    }

    #[test]
    fn test_ancestors_exclude_root() {
        let onto = MockOntology::with_test_data();
        let ancestors = onto.ancestors(&TermId::from("HP:0000545"));
        assert!(!ancestors.contains(&TermId::from("HP:0000118")));
        assert_eq!(ancestors, vec![TermId::from("HP:0000478")]);
    }

    #[test]
    fn test_ancestors_unknown_term() {
        let onto = MockOntology::with_test_data();
        assert!(onto.ancestors(&TermId::from("HP:9999999")).is_empty());
    }

    #[test]
    fn test_contains() {
        let onto = MockOntology::with_test_data();
        assert!(onto.contains(&TermId::from("HP:0001250")));
        assert!(onto.contains(&TermId::from("HP:0000118")));
        assert!(!onto.contains(&TermId::from("HP:9999999")));
    }

    #[test]
    fn test_background_frequency_unknown_is_zero() {
        let onto = MockOntology::with_test_data();
        assert_eq!(onto.background_frequency(&TermId::from("HP:9999999")), 0.0);
        assert!(onto.background_frequency(&TermId::from("HP:0001250")) > 0.0);
    }

    #[test]
    fn test_is_ancestor_or_equal() {
        let onto = MockOntology::with_test_data();
        let seizure = TermId::from("HP:0001250");
        let generalized = TermId::from("HP:0002197");
        assert!(onto.is_ancestor_or_equal(&seizure, &generalized));
        assert!(onto.is_ancestor_or_equal(&seizure, &seizure));
        assert!(!onto.is_ancestor_or_equal(&generalized, &seizure));
    }

    #[test]
    fn test_multi_parent_deduplication() {
        let mut onto = MockOntology::new();
        onto.set_root("HP:0000118");
        onto.add_term("HP:0000001", &["HP:0000118"]);
        onto.add_term("HP:0000002", &["HP:0000001"]);
        onto.add_term("HP:0000003", &["HP:0000001"]);
        onto.add_term("HP:0000004", &["HP:0000002", "HP:0000003"]);

        let ancestors = onto.ancestors(&TermId::from("HP:0000004"));
        assert_eq!(ancestors.len(), 3);
        assert_eq!(ancestors[0], TermId::from("HP:0000002"));
        assert_eq!(ancestors[1], TermId::from("HP:0000003"));
        assert_eq!(ancestors[2], TermId::from("HP:0000001"));
    }
}
