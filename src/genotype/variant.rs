//! Observed variant representation.
//!
//! A thin, annotation-complete view of one called variant. Functional
//! annotation and frequency/pathogenicity lookup happen upstream in the
//! annotation service; this type only carries their results into the
//! burden model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::genotype::clinvar::ClinicalSignificance;

/// Genome build / assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GenomeBuild {
    /// GRCh37 / hg19
    GRCh37,
    /// GRCh38 / hg38
    #[default]
    GRCh38,
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeBuild::GRCh37 => write!(f, "GRCh37"),
            GenomeBuild::GRCh38 => write!(f, "GRCh38"),
        }
    }
}

/// Transcript database used by the upstream annotation service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TranscriptDatabase {
    /// RefSeq transcripts.
    #[default]
    RefSeq,
    /// Ensembl transcripts.
    Ensembl,
}

impl fmt::Display for TranscriptDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranscriptDatabase::RefSeq => write!(f, "RefSeq"),
            TranscriptDatabase::Ensembl => write!(f, "Ensembl"),
        }
    }
}

/// One called variant with its annotations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservedVariant {
    /// Chromosome name (e.g., "chr15", "X").
    pub contig: String,
    /// 1-based position of the first base of the reference allele.
    pub position: u64,
    /// Reference allele.
    pub reference: String,
    /// Alternate allele.
    pub alternate: String,
    /// Genome build the coordinates refer to.
    #[serde(default)]
    pub genome_build: GenomeBuild,
    /// Alternate allele count in the analyzed sample (1 = het, 2 = hom alt).
    pub allele_count: u32,
    /// Pathogenicity estimate in [0, 1] from the annotation service.
    pub pathogenicity: f64,
    /// Population frequency as a percentage, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population_frequency: Option<f64>,
    /// ClinVar clinical significance.
    #[serde(default)]
    pub clinvar: ClinicalSignificance,
}

impl ObservedVariant {
    /// Create a heterozygous variant with no annotations.
    pub fn new(
        contig: impl Into<String>,
        position: u64,
        reference: impl Into<String>,
        alternate: impl Into<String>,
    ) -> Self {
        Self {
            contig: contig.into(),
            position,
            reference: reference.into(),
            alternate: alternate.into(),
            genome_build: GenomeBuild::default(),
            allele_count: 1,
            pathogenicity: 0.0,
            population_frequency: None,
            clinvar: ClinicalSignificance::default(),
        }
    }

    /// Set the sample allele count.
    pub fn with_allele_count(mut self, count: u32) -> Self {
        self.allele_count = count;
        self
    }

    /// Set the pathogenicity estimate.
    pub fn with_pathogenicity(mut self, pathogenicity: f64) -> Self {
        self.pathogenicity = pathogenicity;
        self
    }

    /// Set the population frequency (percentage).
    pub fn with_population_frequency(mut self, percent: f64) -> Self {
        self.population_frequency = Some(percent);
        self
    }

    /// Set the ClinVar classification.
    pub fn with_clinvar(mut self, clinvar: ClinicalSignificance) -> Self {
        self.clinvar = clinvar;
        self
    }

    /// Set the genome build.
    pub fn with_genome_build(mut self, build: GenomeBuild) -> Self {
        self.genome_build = build;
        self
    }
}

impl fmt::Display for ObservedVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}{}>{}",
            self.contig, self.position, self.reference, self.alternate
        )
    }
}
