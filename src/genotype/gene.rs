//! Gene identifiers and per-gene genotypes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::genotype::variant::ObservedVariant;

/// Identifier of a gene, e.g. `NCBIGene:2200`, with a display symbol.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneId {
    /// Accession CURIE.
    pub accession: String,
    /// HGNC-style gene symbol, e.g. `FBN1`.
    pub symbol: String,
}

impl GeneId {
    /// Create a gene ID from accession and symbol.
    pub fn new(accession: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            accession: accession.into(),
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.symbol, self.accession)
    }
}

impl FromStr for GeneId {
    type Err = std::convert::Infallible;

    /// Parse `accession` or `accession|symbol`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.split_once('|') {
            Some((accession, symbol)) => Self::new(accession, symbol),
            None => Self::new(s, s),
        })
    }
}

/// All variants called in one gene for the analyzed sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenotypedGene {
    /// The gene the variants are annotated to.
    pub gene: GeneId,
    /// Variants observed in the sample.
    pub variants: Vec<ObservedVariant>,
}

impl GenotypedGene {
    /// Create a per-gene genotype.
    pub fn new(gene: GeneId, variants: Vec<ObservedVariant>) -> Self {
        Self { gene, variants }
    }

    /// Total ClinVar pathogenic / likely-pathogenic allele count.
    pub fn clinvar_pathogenic_alleles(&self) -> u32 {
        self.variants
            .iter()
            .filter(|v| v.clinvar.is_pathogenic())
            .map(|v| v.allele_count)
            .sum()
    }

    /// Pathogenicity-weighted allele count over variants at or above the
    /// deleteriousness threshold.
    pub fn weighted_deleterious_alleles(&self, threshold: f64) -> f64 {
        self.variants
            .iter()
            .filter(|v| v.pathogenicity >= threshold)
            .map(|v| f64::from(v.allele_count) * v.pathogenicity)
            .sum()
    }

    /// Number of alleles at or above the deleteriousness threshold.
    pub fn deleterious_allele_count(&self, threshold: f64) -> u32 {
        self.variants
            .iter()
            .filter(|v| v.pathogenicity >= threshold)
            .map(|v| v.allele_count)
            .sum()
    }
}
