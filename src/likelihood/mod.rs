//! Likelihood-ratio evaluators.
//!
//! The heart of the engine: per-disease conversion of phenotype, genotype
//! and onset evidence into likelihood ratios. All evaluators are pure
//! functions of read-only inputs and may run concurrently across diseases.

mod genotype;
mod graph;
mod onset;
mod phenotype;

pub use genotype::{GenotypeLrEvaluator, GenotypeLrWithExplanation, GenotypeMatch};
pub use graph::{InducedDiseaseGraph, TermSupport};
pub use onset::{evaluate_onset, OnsetLr, OnsetProbabilityModel};
pub use phenotype::{LrWithExplanation, PhenotypeLrEvaluator, PhenotypeMatch};

/// Additive pseudo-count keeping every frequency ratio away from 0/0.
///
/// Mirrors the pseudo-count used when binning background frequencies over
/// the annotation corpus.
pub const PSEUDO_COUNT: f64 = 1e-5;
