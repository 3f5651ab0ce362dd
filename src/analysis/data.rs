//! Analysis input data.

use serde::{Deserialize, Serialize};

use crate::genotype::GenotypedGene;
use crate::ontology::TermId;

/// Sample sex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sex {
    /// Male
    Male,
    /// Female
    Female,
    /// Not recorded
    #[default]
    Unknown,
}

/// Sample age at analysis time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Age {
    years: u32,
    months: u32,
    days: u32,
}

impl Age {
    /// Age from years, months and days.
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// Age in whole years.
    pub fn years(years: u32) -> Self {
        Self::new(years, 0, 0)
    }

    /// Age as fractional years.
    pub fn as_years(&self) -> f64 {
        f64::from(self.years) + f64::from(self.months) / 12.0 + f64::from(self.days) / 365.25
    }
}

/// Immutable input to one analysis run: the sample's phenotype
/// observations and genotype.
///
/// Constructed once per run from external input (phenopacket, VCF, YAML
/// parsing are upstream concerns) via [`AnalysisDataBuilder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisData {
    /// Sample identifier.
    pub sample_id: String,
    /// Sample age, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    /// Sample sex.
    #[serde(default)]
    pub sex: Sex,
    /// Observed phenotype terms, in input order.
    pub observed: Vec<TermId>,
    /// Excluded phenotype terms, in input order.
    pub excluded: Vec<TermId>,
    /// Genes with variants called in the sample.
    pub genes: Vec<GenotypedGene>,
}

impl AnalysisData {
    /// Start building analysis data for a sample.
    pub fn builder(sample_id: impl Into<String>) -> AnalysisDataBuilder {
        AnalysisDataBuilder::new(sample_id)
    }

    /// Check whether any gene carries at least one variant.
    pub fn has_genotype_data(&self) -> bool {
        self.genes.iter().any(|g| !g.variants.is_empty())
    }
}

/// Builder for [`AnalysisData`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisDataBuilder {
    sample_id: String,
    age: Option<Age>,
    sex: Sex,
    observed: Vec<TermId>,
    excluded: Vec<TermId>,
    genes: Vec<GenotypedGene>,
}

impl AnalysisDataBuilder {
    /// Create a builder for a sample.
    pub fn new(sample_id: impl Into<String>) -> Self {
        Self {
            sample_id: sample_id.into(),
            ..Default::default()
        }
    }

    /// Set the sample age.
    pub fn age(mut self, age: Age) -> Self {
        self.age = Some(age);
        self
    }

    /// Set the sample sex.
    pub fn sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Add one observed phenotype term.
    pub fn observed_term(mut self, term: impl Into<TermId>) -> Self {
        self.observed.push(term.into());
        self
    }

    /// Add one excluded phenotype term.
    pub fn excluded_term(mut self, term: impl Into<TermId>) -> Self {
        self.excluded.push(term.into());
        self
    }

    /// Add a gene with its called variants.
    pub fn gene(mut self, gene: GenotypedGene) -> Self {
        self.genes.push(gene);
        self
    }

    /// Finish building.
    pub fn build(self) -> AnalysisData {
        AnalysisData {
            sample_id: self.sample_id,
            age: self.age,
            sex: self.sex,
            observed: self.observed,
            excluded: self.excluded,
            genes: self.genes,
        }
    }
}
