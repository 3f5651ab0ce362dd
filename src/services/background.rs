//! Background variant-frequency service.

use std::collections::HashMap;

use crate::genotype::GeneId;

/// Expected population frequency of deleterious variants per gene.
///
/// Implementations are typically backed by a precomputed table derived
/// from population sequencing data. The runner falls back to the
/// configured default frequency when a gene is unknown.
pub trait BackgroundVariantFrequency: Sync {
    /// Expected deleterious-variant frequency for a gene, if known.
    fn frequency_for(&self, gene: &GeneId) -> Option<f64>;
}

/// Blanket implementation for boxed trait objects.
impl BackgroundVariantFrequency for Box<dyn BackgroundVariantFrequency> {
    fn frequency_for(&self, gene: &GeneId) -> Option<f64> {
        (**self).frequency_for(gene)
    }
}

/// Map-backed background frequency table.
#[derive(Debug, Clone, Default)]
pub struct MapBackgroundFrequency {
    frequencies: HashMap<GeneId, f64>,
}

impl MapBackgroundFrequency {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a gene's background frequency.
    pub fn insert(&mut self, gene: GeneId, frequency: f64) {
        self.frequencies.insert(gene, frequency);
    }
}

impl BackgroundVariantFrequency for MapBackgroundFrequency {
    fn frequency_for(&self, gene: &GeneId) -> Option<f64> {
        self.frequencies.get(gene).copied()
    }
}
