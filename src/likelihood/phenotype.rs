//! Phenotype likelihood-ratio evaluator.
//!
//! Converts one observed or excluded query term, against one disease's
//! induced graph, into a likelihood ratio with a human-readable
//! explanation.

use serde::{Deserialize, Serialize};

use crate::likelihood::graph::InducedDiseaseGraph;
use crate::likelihood::PSEUDO_COUNT;
use crate::ontology::{OntologyProvider, TermId};

/// Fixed likelihood ratio for an observed finding the disease is not
/// annotated with, directly or through the term's ancestors. A low
/// constant rather than zero, so one unexpected finding cannot zero out
/// the composite product.
pub const UNRELATED_TERM_LR: f64 = 0.01;

/// Per-edge attenuation applied when the query term generalizes an
/// annotated term. One hop keeps half the annotated frequency, two hops a
/// quarter, and so on, so a more specific query scores closer to the
/// exact-match value.
pub const ANCESTOR_ATTENUATION: f64 = 0.5;

/// How a query term related to the disease's annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PhenotypeMatch {
    /// The disease annotates the query term itself.
    Exact,
    /// The query term is an ancestor of an annotated term, `distance`
    /// is-a hops above it.
    QueryAncestorOfAnnotation {
        /// Hops between the query term and the closest annotated
        /// descendant.
        distance: u32,
    },
    /// The disease annotates an ancestor of the query term: the patient's
    /// finding is a specialization of an annotated feature.
    AncestorOfQuery,
    /// Neither the query term nor its ancestor closure meets the
    /// disease's annotations.
    Unrelated,
    /// Excluded query term that the disease exhibits.
    ExcludedPresent,
    /// Excluded query term absent from the disease's annotations.
    ExcludedAbsent,
}

/// Likelihood ratio for one query term with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LrWithExplanation {
    /// The query term evaluated.
    pub term: TermId,
    /// Likelihood ratio; may be below, equal to, or above 1.
    pub ratio: f64,
    /// Match classification.
    pub match_type: PhenotypeMatch,
    /// Human-readable explanation for result display.
    pub explanation: String,
}

/// Evaluator for observed and excluded phenotype terms.
pub struct PhenotypeLrEvaluator<'a, O: OntologyProvider> {
    ontology: &'a O,
}

impl<'a, O: OntologyProvider> PhenotypeLrEvaluator<'a, O> {
    /// Create an evaluator over the shared ontology.
    pub fn new(ontology: &'a O) -> Self {
        Self { ontology }
    }

    /// Likelihood ratio for an observed query term.
    pub fn evaluate_observed(
        &self,
        term: &TermId,
        graph: &InducedDiseaseGraph,
    ) -> LrWithExplanation {
        let background = self.ontology.background_frequency(term);

        if let Some(support) = graph.support(term) {
            if support.distance == 0 {
                let ratio = (support.frequency + PSEUDO_COUNT) / (background + PSEUDO_COUNT);
                return LrWithExplanation {
                    term: term.clone(),
                    ratio,
                    match_type: PhenotypeMatch::Exact,
                    explanation: format!(
                        "{} annotated to {} at frequency {:.3} (background {:.3})",
                        term,
                        graph.disease(),
                        support.frequency,
                        background
                    ),
                };
            }

            let attenuated = support.frequency * ANCESTOR_ATTENUATION.powi(support.distance as i32);
            let ratio = ((attenuated + PSEUDO_COUNT) / (background + PSEUDO_COUNT))
                .max(UNRELATED_TERM_LR);
            return LrWithExplanation {
                term: term.clone(),
                ratio,
                match_type: PhenotypeMatch::QueryAncestorOfAnnotation {
                    distance: support.distance,
                },
                explanation: format!(
                    "{} generalizes an annotation of {} at {} hop(s); frequency {:.3} attenuated to {:.3}",
                    term,
                    graph.disease(),
                    support.distance,
                    support.frequency,
                    attenuated
                ),
            };
        }

        // The disease may annotate an ancestor of the query: the patient
        // presents a more specific form of an annotated feature and gets
        // that feature's full support.
        let best_ancestor = self
            .ontology
            .ancestors(term)
            .into_iter()
            .filter_map(|a| graph.annotated_frequency(&a).map(|f| (a, f)))
            .max_by(|(_, fa), (_, fb)| fa.total_cmp(fb));

        if let Some((ancestor, frequency)) = best_ancestor {
            let ratio = (frequency + PSEUDO_COUNT) / (background + PSEUDO_COUNT);
            return LrWithExplanation {
                term: term.clone(),
                ratio,
                match_type: PhenotypeMatch::AncestorOfQuery,
                explanation: format!(
                    "{} specializes {} annotated to {} at frequency {:.3}",
                    term,
                    ancestor,
                    graph.disease(),
                    frequency
                ),
            };
        }

        LrWithExplanation {
            term: term.clone(),
            ratio: UNRELATED_TERM_LR,
            match_type: PhenotypeMatch::Unrelated,
            explanation: format!("{} not expected in {}", term, graph.disease()),
        }
    }

    /// Likelihood ratio for an excluded (negated) query term.
    ///
    /// Polarity is reversed: a disease that commonly exhibits the excluded
    /// feature is penalized, while a disease that never shows it gains
    /// mild support. The complement ratio is deliberately not the
    /// reciprocal of the observed formula, so excluding a near-universal
    /// feature weighs more than excluding a rare one.
    pub fn evaluate_excluded(
        &self,
        term: &TermId,
        graph: &InducedDiseaseGraph,
    ) -> LrWithExplanation {
        let background = self.ontology.background_frequency(term);
        // Any support, at any distance, means the disease exhibits the
        // feature or a subtype of it.
        let frequency = graph.support(term).map(|s| s.frequency).unwrap_or(0.0);

        let ratio = (1.0 - frequency + PSEUDO_COUNT) / (1.0 - background + PSEUDO_COUNT);
        let (match_type, explanation) = if frequency > 0.0 {
            (
                PhenotypeMatch::ExcludedPresent,
                format!(
                    "excluded {} is a feature of {} at frequency {:.3}",
                    term,
                    graph.disease(),
                    frequency
                ),
            )
        } else {
            (
                PhenotypeMatch::ExcludedAbsent,
                format!("excluded {} is not a feature of {}", term, graph.disease()),
            )
        };

        LrWithExplanation {
            term: term.clone(),
            ratio,
            match_type,
            explanation,
        }
    }
}
