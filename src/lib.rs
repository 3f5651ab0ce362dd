// Copyright (c) 2024-2025 Fulcrum Genomics LLC
// SPDX-License-Identifier: MIT

//! ferro-dx: likelihood-ratio disease ranking
//!
//! Part of the ferro bioinformatics toolkit.
//!
//! Ranks candidate diseases for a patient by combining phenotypic evidence
//! (observed and excluded clinical signs) and optional genomic evidence
//! (variants found in genes) into posttest probabilities, evaluated in
//! parallel across the disease catalog.
//!
//! # Example
//!
//! ```
//! use ferro_dx::{
//!     AnalysisData, AnalysisOptions, AnalysisRunner, DiseaseCatalog, DiseaseId, DiseaseModel,
//!     GeneDiseaseIndex, MapBackgroundFrequency, MockOntology, PhenotypeAnnotation,
//!     UniformPretest,
//! };
//!
//! // A small catalog: a seizure disease and a skeletal disease.
//! let catalog = DiseaseCatalog::new(vec![
//!     DiseaseModel::new(DiseaseId::new("OMIM:100000"), "Seizure syndrome")
//!         .with_annotation(PhenotypeAnnotation::with_frequency("HP:0001250", 0.9)),
//!     DiseaseModel::new(DiseaseId::new("OMIM:200000"), "Skeletal syndrome")
//!         .with_annotation(PhenotypeAnnotation::with_frequency("HP:0001166", 0.8)),
//! ]);
//!
//! // Shared read-only services.
//! let ontology = MockOntology::with_test_data();
//! let index = GeneDiseaseIndex::new();
//! let background = MapBackgroundFrequency::new();
//! let pretest = UniformPretest::over(catalog.len());
//!
//! // A sample observed to have seizures.
//! let data = AnalysisData::builder("sample-1")
//!     .observed_term("HP:0001250")
//!     .build();
//!
//! let runner = AnalysisRunner::new(
//!     &ontology,
//!     &catalog,
//!     &index,
//!     &background,
//!     &pretest,
//!     AnalysisOptions::default(),
//! );
//! let results = runner.run(&data).unwrap();
//!
//! let ranked = results.results_with_descending_posttest_probability();
//! assert_eq!(ranked[0].disease_id, DiseaseId::new("OMIM:100000"));
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod genotype;
pub mod likelihood;
pub mod ontology;
pub mod services;

// Re-export commonly used types
pub use analysis::{
    Age, AnalysisData, AnalysisDataBuilder, AnalysisOptions, AnalysisOptionsBuilder,
    AnalysisProgress, AnalysisResults, AnalysisRunner, Sex, TestResult,
};
pub use catalog::{
    DiseaseCatalog, DiseaseDatabase, DiseaseId, DiseaseModel, ModeOfInheritance,
    PhenotypeAnnotation,
};
pub use error::DxError;
pub use genotype::{
    ClinicalSignificance, GeneId, GenomeBuild, GenotypedGene, ObservedVariant, TranscriptDatabase,
};
pub use likelihood::{
    GenotypeLrEvaluator, GenotypeLrWithExplanation, GenotypeMatch, InducedDiseaseGraph,
    LrWithExplanation, OnsetLr, OnsetProbabilityModel, PhenotypeLrEvaluator, PhenotypeMatch,
};
pub use ontology::{MockOntology, OntologyProvider, TermId};
pub use services::{
    BackgroundVariantFrequency, GeneDiseaseIndex, MapBackgroundFrequency, MapPretest,
    PretestProbabilityProvider, UniformPretest,
};

/// Result type alias for ferro-dx operations
pub type Result<T> = std::result::Result<T, DxError>;
