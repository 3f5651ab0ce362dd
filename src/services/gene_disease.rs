//! Gene-to-disease association index.

use std::collections::HashMap;

use crate::catalog::DiseaseId;
use crate::genotype::GeneId;

/// Index from gene to the diseases it is implicated in.
///
/// Built once per run from the external association table; read-only
/// during evaluation.
#[derive(Debug, Clone, Default)]
pub struct GeneDiseaseIndex {
    associations: HashMap<GeneId, Vec<DiseaseId>>,
}

impl GeneDiseaseIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a gene with a disease. Duplicate pairs are ignored.
    pub fn associate(&mut self, gene: GeneId, disease: DiseaseId) {
        let diseases = self.associations.entry(gene).or_default();
        if !diseases.contains(&disease) {
            diseases.push(disease);
        }
    }

    /// Candidate diseases for a gene.
    pub fn diseases_for_gene(&self, gene: &GeneId) -> &[DiseaseId] {
        self.associations
            .get(gene)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Check whether a gene is linked to a particular disease.
    pub fn is_associated(&self, gene: &GeneId, disease: &DiseaseId) -> bool {
        self.diseases_for_gene(gene).contains(disease)
    }
}
