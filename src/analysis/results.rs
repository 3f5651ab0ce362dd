//! Per-disease test results and the run-level container.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::catalog::DiseaseId;
use crate::likelihood::{GenotypeLrWithExplanation, LrWithExplanation, OnsetLr};

/// Result of evaluating one disease against the sample's evidence.
///
/// Pretest odds, posttest odds, posttest probability and the composite LR
/// are derived by pure functions; nothing mutates after construction.
/// Extending the composite with a new evidence kind means adding another
/// component field, not subclassing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    /// The evaluated disease.
    pub disease_id: DiseaseId,
    /// Prior probability of the disease before any evidence.
    pub pretest_probability: f64,
    /// Likelihood ratios of the observed phenotype terms, in input order.
    pub observed: Vec<LrWithExplanation>,
    /// Likelihood ratios of the excluded phenotype terms, in input order.
    pub excluded: Vec<LrWithExplanation>,
    /// Best-gene genotype likelihood ratio, when genotype evidence was
    /// evaluated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genotype: Option<GenotypeLrWithExplanation>,
    /// Onset likelihood ratio, when an onset model was configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub onset: Option<OnsetLr>,
}

impl TestResult {
    /// Composite likelihood ratio: the product of every component ratio.
    pub fn composite_lr(&self) -> f64 {
        let phenotype: f64 = self
            .observed
            .iter()
            .chain(self.excluded.iter())
            .map(|lr| lr.ratio)
            .product();
        let genotype = self.genotype.as_ref().map(|g| g.ratio).unwrap_or(1.0);
        let onset = self.onset.as_ref().map(|o| o.ratio).unwrap_or(1.0);
        phenotype * genotype * onset
    }

    /// Pretest odds `p / (1 - p)`.
    pub fn pretest_odds(&self) -> f64 {
        self.pretest_probability / (1.0 - self.pretest_probability)
    }

    /// Posttest odds: pretest odds times the composite LR.
    pub fn posttest_odds(&self) -> f64 {
        self.pretest_odds() * self.composite_lr()
    }

    /// Posttest probability `odds / (1 + odds)`.
    pub fn posttest_probability(&self) -> f64 {
        let odds = self.posttest_odds();
        odds / (1.0 + odds)
    }
}

/// All per-disease results of one analysis run.
///
/// One entry per evaluated disease; diseases skipped for missing pretest
/// probability or discarded by the genotype filtering rules are absent.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResults {
    results: Vec<TestResult>,
    #[serde(skip)]
    by_id: HashMap<DiseaseId, usize>,
}

impl AnalysisResults {
    /// Build the container. The first result wins on a duplicate disease
    /// id; the runner produces at most one result per disease.
    pub fn new(results: Vec<TestResult>) -> Self {
        let mut unique = Vec::with_capacity(results.len());
        let mut by_id = HashMap::with_capacity(results.len());
        for result in results {
            if !by_id.contains_key(&result.disease_id) {
                by_id.insert(result.disease_id.clone(), unique.len());
                unique.push(result);
            }
        }
        Self {
            results: unique,
            by_id,
        }
    }

    /// Look up the result for a disease.
    pub fn get(&self, id: &DiseaseId) -> Option<&TestResult> {
        self.by_id.get(id).map(|&idx| &self.results[idx])
    }

    /// Number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check whether the run produced no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Iterate over the results in collection order.
    pub fn iter(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter()
    }

    /// Results ordered by descending posttest probability.
    ///
    /// Equal probabilities are ordered by ascending disease id, so the
    /// published ranking is deterministic for identical inputs regardless
    /// of evaluation order.
    pub fn results_with_descending_posttest_probability(&self) -> Vec<&TestResult> {
        let mut ranked: Vec<&TestResult> = self.results.iter().collect();
        ranked.sort_by(|a, b| {
            b.posttest_probability()
                .total_cmp(&a.posttest_probability())
                .then_with(|| a.disease_id.cmp(&b.disease_id))
        });
        ranked
    }

    /// 1-based rank of a disease in the descending ordering, if present.
    pub fn rank_of(&self, id: &DiseaseId) -> Option<usize> {
        self.results_with_descending_posttest_probability()
            .iter()
            .position(|r| &r.disease_id == id)
            .map(|idx| idx + 1)
    }
}
