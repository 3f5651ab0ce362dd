//! Induced disease graph.
//!
//! A disease-scoped, derived, read-only lookup structure: for every
//! ancestor of each annotated term, the best frequency contributed by any
//! annotated descendant. Built fresh per disease per run inside each
//! evaluation task; never cached across runs or shared mutably.

use std::collections::HashMap;

use crate::catalog::{DiseaseId, DiseaseModel};
use crate::ontology::{OntologyProvider, TermId};

/// Support a disease lends to one ontology term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermSupport {
    /// Best in-disease frequency among the term and its annotated
    /// descendants.
    pub frequency: f64,
    /// Is-a hops from the closest annotated descendant that contributed
    /// `frequency`. Zero means the term itself is annotated.
    pub distance: u32,
}

/// Per-disease term-support index with O(1) lookup.
#[derive(Debug, Clone)]
pub struct InducedDiseaseGraph {
    disease: DiseaseId,
    support: HashMap<TermId, TermSupport>,
}

impl InducedDiseaseGraph {
    /// Build the graph from a disease model and the shared ontology.
    ///
    /// Seeds each annotated term at distance 0 and propagates its
    /// frequency to every ancestor; when annotations collide on a node the
    /// maximum frequency wins, with the smaller distance breaking equal
    /// frequencies.
    pub fn build(disease: &DiseaseModel, ontology: &impl OntologyProvider) -> Self {
        let mut support: HashMap<TermId, TermSupport> = HashMap::new();

        for annotation in &disease.annotations {
            record(&mut support, annotation.term.clone(), annotation.frequency, 0);
            for (hops, ancestor) in ontology.ancestors(&annotation.term).into_iter().enumerate() {
                record(&mut support, ancestor, annotation.frequency, hops as u32 + 1);
            }
        }

        Self {
            disease: disease.id.clone(),
            support,
        }
    }

    /// The disease this graph was induced for.
    pub fn disease(&self) -> &DiseaseId {
        &self.disease
    }

    /// Support for a term, if the term is an ancestor-or-equal of an
    /// annotated term.
    pub fn support(&self, term: &TermId) -> Option<TermSupport> {
        self.support.get(term).copied()
    }

    /// Frequency for a directly annotated term (distance 0 only).
    pub fn annotated_frequency(&self, term: &TermId) -> Option<f64> {
        self.support
            .get(term)
            .filter(|s| s.distance == 0)
            .map(|s| s.frequency)
    }

    /// Number of terms carrying support.
    pub fn len(&self) -> usize {
        self.support.len()
    }

    /// Check whether the graph is empty (disease with no annotations).
    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }
}

fn record(support: &mut HashMap<TermId, TermSupport>, term: TermId, frequency: f64, distance: u32) {
    support
        .entry(term)
        .and_modify(|s| {
            if frequency > s.frequency || (frequency == s.frequency && distance < s.distance) {
                *s = TermSupport {
                    frequency,
                    distance,
                };
            }
        })
        .or_insert(TermSupport {
            frequency,
            distance,
        });
}
