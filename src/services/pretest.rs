//! Pretest-probability providers.

use std::collections::HashMap;

use crate::catalog::DiseaseId;

/// Provider of the prior (pretest) probability per disease.
///
/// Probabilities must lie in (0, 1). A disease the provider does not know
/// is skipped by the runner with a logged warning; this is a
/// data-completeness failure, not a crash.
pub trait PretestProbabilityProvider: Sync {
    /// Pretest probability for a disease, if known.
    fn pretest_probability(&self, disease: &DiseaseId) -> Option<f64>;
}

/// Blanket implementation for boxed trait objects.
impl PretestProbabilityProvider for Box<dyn PretestProbabilityProvider> {
    fn pretest_probability(&self, disease: &DiseaseId) -> Option<f64> {
        (**self).pretest_probability(disease)
    }
}

/// Uniform prior over a catalog of known size.
#[derive(Debug, Clone, Copy)]
pub struct UniformPretest {
    probability: f64,
}

impl UniformPretest {
    /// Uniform prior `1 / n` over `n` diseases. An empty catalog yields a
    /// provider that knows no disease.
    pub fn over(n: usize) -> Self {
        Self {
            probability: if n == 0 { 0.0 } else { 1.0 / n as f64 },
        }
    }
}

impl PretestProbabilityProvider for UniformPretest {
    fn pretest_probability(&self, _disease: &DiseaseId) -> Option<f64> {
        (self.probability > 0.0).then_some(self.probability)
    }
}

/// Map-backed pretest probabilities for explicit priors.
#[derive(Debug, Clone, Default)]
pub struct MapPretest {
    probabilities: HashMap<DiseaseId, f64>,
}

impl MapPretest {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a disease's pretest probability.
    pub fn insert(&mut self, disease: DiseaseId, probability: f64) {
        self.probabilities.insert(disease, probability);
    }
}

impl PretestProbabilityProvider for MapPretest {
    fn pretest_probability(&self, disease: &DiseaseId) -> Option<f64> {
        self.probabilities.get(disease).copied()
    }
}
