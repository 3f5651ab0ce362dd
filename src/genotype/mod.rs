//! Patient genotype data: genes and the variants called in them.
//!
//! Variant calling and functional annotation happen upstream; the engine
//! receives each variant with its per-sample allele count, pathogenicity
//! estimate, population frequency, and ClinVar classification already
//! attached.

mod clinvar;
mod gene;
mod variant;

pub use clinvar::ClinicalSignificance;
pub use gene::{GeneId, GenotypedGene};
pub use variant::{GenomeBuild, ObservedVariant, TranscriptDatabase};
