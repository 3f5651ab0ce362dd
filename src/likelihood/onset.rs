//! Disease onset-probability evaluator.
//!
//! Optional strategy: when a model is configured and the sample has an
//! age, the ratio of "disease observable at this age" to "not observable"
//! becomes one more multiplicative factor in the composite LR. Without a
//! model the factor is absent (neutral).

use serde::{Deserialize, Serialize};

use crate::analysis::Age;
use crate::catalog::DiseaseId;
use crate::likelihood::PSEUDO_COUNT;

/// Disease-specific onset-probability model.
pub trait OnsetProbabilityModel: Sync {
    /// Probability in [0, 1] that the disease is observable at the given
    /// age, or `None` when the model does not cover the disease.
    fn onset_probability(&self, disease: &DiseaseId, age: &Age) -> Option<f64>;
}

/// Blanket implementation for boxed trait objects.
impl OnsetProbabilityModel for Box<dyn OnsetProbabilityModel> {
    fn onset_probability(&self, disease: &DiseaseId, age: &Age) -> Option<f64> {
        (**self).onset_probability(disease, age)
    }
}

/// Onset likelihood ratio with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnsetLr {
    /// Likelihood ratio.
    pub ratio: f64,
    /// Human-readable explanation for result display.
    pub explanation: String,
}

/// Evaluate the onset LR for a disease at the sample's age.
///
/// Returns `None` when the model does not cover the disease; the
/// composite LR then carries no onset factor.
pub fn evaluate_onset(
    model: &dyn OnsetProbabilityModel,
    disease: &DiseaseId,
    age: &Age,
) -> Option<OnsetLr> {
    let observable = model.onset_probability(disease, age)?;
    let ratio = (observable + PSEUDO_COUNT) / (1.0 - observable + PSEUDO_COUNT);
    Some(OnsetLr {
        ratio,
        explanation: format!(
            "{} observable at {:.1} years with probability {:.3}",
            disease,
            age.as_years(),
            observable
        ),
    })
}
