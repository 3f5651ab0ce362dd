//! Disease models and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::inheritance::ModeOfInheritance;
use crate::ontology::TermId;

/// Source database a disease model comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DiseaseDatabase {
    /// Online Mendelian Inheritance in Man.
    Omim,
    /// Orphanet rare-disease nomenclature.
    Orphanet,
    /// DECIPHER genomic disorder database.
    Decipher,
    /// Unrecognized source prefix.
    Unknown,
}

impl DiseaseDatabase {
    /// Database for a CURIE prefix, e.g. `OMIM`.
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix.to_ascii_uppercase().as_str() {
            "OMIM" => Self::Omim,
            "ORPHA" | "ORPHANET" => Self::Orphanet,
            "DECIPHER" => Self::Decipher,
            _ => Self::Unknown,
        }
    }

    /// Canonical prefix string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Omim => "OMIM",
            Self::Orphanet => "ORPHA",
            Self::Decipher => "DECIPHER",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for DiseaseDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a catalog disease, e.g. `OMIM:154700`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DiseaseId(String);

impl DiseaseId {
    /// Create a disease ID from a CURIE string.
    pub fn new(curie: impl Into<String>) -> Self {
        Self(curie.into())
    }

    /// The full CURIE.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Source database parsed from the CURIE prefix.
    pub fn database(&self) -> DiseaseDatabase {
        DiseaseDatabase::from_prefix(self.0.split(':').next().unwrap_or(""))
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DiseaseId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for DiseaseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One phenotype annotation of a disease: a term plus the frequency with
/// which the feature is seen in affected individuals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhenotypeAnnotation {
    /// Annotated ontology term.
    pub term: TermId,
    /// Frequency of the feature among affected individuals, in (0, 1].
    pub frequency: f64,
}

impl PhenotypeAnnotation {
    /// Annotation frequency used when the corpus gives none.
    pub const DEFAULT_FREQUENCY: f64 = 1.0;

    /// Annotation with an explicit frequency.
    pub fn with_frequency(term: impl Into<TermId>, frequency: f64) -> Self {
        Self {
            term: term.into(),
            frequency,
        }
    }

    /// Annotation with the default (obligate) frequency.
    pub fn new(term: impl Into<TermId>) -> Self {
        Self::with_frequency(term, Self::DEFAULT_FREQUENCY)
    }
}

/// One disease in the reference catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseModel {
    /// Disease identifier.
    pub id: DiseaseId,
    /// Human-readable name.
    pub name: String,
    /// Phenotype annotations with in-disease frequencies.
    pub annotations: Vec<PhenotypeAnnotation>,
    /// Modes of inheritance recorded for the disease.
    pub inheritance: Vec<ModeOfInheritance>,
}

impl DiseaseModel {
    /// Create a disease model with no annotations.
    pub fn new(id: DiseaseId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            annotations: Vec::new(),
            inheritance: Vec::new(),
        }
    }

    /// Add a phenotype annotation.
    pub fn with_annotation(mut self, annotation: PhenotypeAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a mode of inheritance.
    pub fn with_inheritance(mut self, moi: ModeOfInheritance) -> Self {
        self.inheritance.push(moi);
        self
    }

    /// Modes of inheritance, defaulting to `Unknown` when none recorded.
    pub fn inheritance_or_unknown(&self) -> Vec<ModeOfInheritance> {
        if self.inheritance.is_empty() {
            vec![ModeOfInheritance::Unknown]
        } else {
            self.inheritance.clone()
        }
    }
}
