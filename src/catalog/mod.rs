//! Disease catalog: the immutable reference collection of disease models.
//!
//! The catalog is supplied input. Deciding which diseases exist in it is
//! out of scope for the engine; it only filters by database and optional
//! target subset at analysis time.

mod disease;
mod inheritance;

pub use disease::{DiseaseDatabase, DiseaseId, DiseaseModel, PhenotypeAnnotation};
pub use inheritance::ModeOfInheritance;

use std::collections::HashMap;

/// Immutable collection of disease models with id lookup.
#[derive(Debug, Clone, Default)]
pub struct DiseaseCatalog {
    diseases: Vec<DiseaseModel>,
    by_id: HashMap<DiseaseId, usize>,
}

impl DiseaseCatalog {
    /// Build a catalog from disease models.
    ///
    /// A later model with a duplicate id replaces the earlier one.
    pub fn new(diseases: Vec<DiseaseModel>) -> Self {
        let mut catalog = Self::default();
        for disease in diseases {
            catalog.insert(disease);
        }
        catalog
    }

    fn insert(&mut self, disease: DiseaseModel) {
        match self.by_id.get(&disease.id) {
            Some(&idx) => self.diseases[idx] = disease,
            None => {
                self.by_id.insert(disease.id.clone(), self.diseases.len());
                self.diseases.push(disease);
            }
        }
    }

    /// Look up a disease by id.
    pub fn get(&self, id: &DiseaseId) -> Option<&DiseaseModel> {
        self.by_id.get(id).map(|&idx| &self.diseases[idx])
    }

    /// Iterate over all diseases in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &DiseaseModel> {
        self.diseases.iter()
    }

    /// Number of diseases in the catalog.
    pub fn len(&self) -> usize {
        self.diseases.len()
    }

    /// Check whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.diseases.is_empty()
    }
}
