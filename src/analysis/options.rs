//! Analysis options.

use std::collections::HashSet;

use crate::catalog::{DiseaseDatabase, DiseaseId};
use crate::error::DxError;
use crate::genotype::{GenomeBuild, TranscriptDatabase};

/// Immutable configuration of one analysis run.
///
/// Built via [`AnalysisOptionsBuilder`]; construction validates every
/// numeric range so the runner never sees an out-of-range threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisOptions {
    /// Genome build of the input variants.
    pub genome_build: GenomeBuild,
    /// Transcript database used by the upstream annotation service.
    pub transcript_database: TranscriptDatabase,
    /// Disease databases to evaluate against.
    pub disease_databases: HashSet<DiseaseDatabase>,
    /// Restrict the analysis to these diseases; `None` evaluates all.
    pub target_diseases: Option<Vec<DiseaseId>>,
    /// Pathogenicity score at or above which an allele counts as
    /// deleterious.
    pub pathogenicity_threshold: f64,
    /// Background deleterious-variant frequency for genes the background
    /// service does not know.
    pub default_variant_background_frequency: f64,
    /// Penalize allele configurations inconsistent with the inheritance
    /// model instead of ignoring the mismatch.
    pub strict: bool,
    /// Retain diseases lacking direct genotype evidence rather than
    /// discarding them.
    pub use_global: bool,
    /// Keep diseases whose candidate genes carry no deleterious variant.
    pub include_diseases_with_no_deleterious_variants: bool,
    /// Invoke the progress callback every this many completed diseases.
    pub progress_interval: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            genome_build: GenomeBuild::default(),
            transcript_database: TranscriptDatabase::default(),
            disease_databases: HashSet::from([DiseaseDatabase::Omim]),
            target_diseases: None,
            pathogenicity_threshold: 0.8,
            default_variant_background_frequency: 0.1,
            strict: false,
            use_global: false,
            include_diseases_with_no_deleterious_variants: true,
            progress_interval: 1000,
        }
    }
}

impl AnalysisOptions {
    /// Start building options from the defaults.
    pub fn builder() -> AnalysisOptionsBuilder {
        AnalysisOptionsBuilder::default()
    }

    /// Check whether a disease is in scope for this run.
    pub fn includes_disease(&self, id: &DiseaseId) -> bool {
        if !self.disease_databases.contains(&id.database()) {
            return false;
        }
        match &self.target_diseases {
            Some(targets) => targets.contains(id),
            None => true,
        }
    }
}

/// Builder for [`AnalysisOptions`].
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptionsBuilder {
    options: AnalysisOptions,
}

impl AnalysisOptionsBuilder {
    /// Set the genome build.
    pub fn genome_build(mut self, build: GenomeBuild) -> Self {
        self.options.genome_build = build;
        self
    }

    /// Set the transcript database.
    pub fn transcript_database(mut self, db: TranscriptDatabase) -> Self {
        self.options.transcript_database = db;
        self
    }

    /// Set the disease databases to evaluate against.
    pub fn disease_databases(mut self, dbs: impl IntoIterator<Item = DiseaseDatabase>) -> Self {
        self.options.disease_databases = dbs.into_iter().collect();
        self
    }

    /// Restrict the analysis to the given diseases.
    pub fn target_diseases(mut self, targets: impl IntoIterator<Item = DiseaseId>) -> Self {
        self.options.target_diseases = Some(targets.into_iter().collect());
        self
    }

    /// Set the deleteriousness threshold.
    pub fn pathogenicity_threshold(mut self, threshold: f64) -> Self {
        self.options.pathogenicity_threshold = threshold;
        self
    }

    /// Set the default background variant frequency.
    pub fn default_variant_background_frequency(mut self, frequency: f64) -> Self {
        self.options.default_variant_background_frequency = frequency;
        self
    }

    /// Enable or disable strict genotype penalties.
    pub fn strict(mut self, strict: bool) -> Self {
        self.options.strict = strict;
        self
    }

    /// Enable or disable global analysis mode.
    pub fn use_global(mut self, use_global: bool) -> Self {
        self.options.use_global = use_global;
        self
    }

    /// Keep or discard diseases without deleterious variants.
    pub fn include_diseases_with_no_deleterious_variants(mut self, include: bool) -> Self {
        self.options.include_diseases_with_no_deleterious_variants = include;
        self
    }

    /// Set the progress callback interval.
    pub fn progress_interval(mut self, interval: usize) -> Self {
        self.options.progress_interval = interval;
        self
    }

    /// Validate and build the options.
    pub fn build(self) -> Result<AnalysisOptions, DxError> {
        let options = self.options;
        if !(0.0..=1.0).contains(&options.pathogenicity_threshold) {
            return Err(DxError::InvalidOption {
                name: "pathogenicity_threshold",
                msg: format!(
                    "must be within [0, 1], got {}",
                    options.pathogenicity_threshold
                ),
            });
        }
        if options.default_variant_background_frequency <= 0.0
            || options.default_variant_background_frequency >= 1.0
        {
            return Err(DxError::InvalidOption {
                name: "default_variant_background_frequency",
                msg: format!(
                    "must be within (0, 1), got {}",
                    options.default_variant_background_frequency
                ),
            });
        }
        if options.disease_databases.is_empty() {
            return Err(DxError::InvalidOption {
                name: "disease_databases",
                msg: "at least one disease database is required".to_string(),
            });
        }
        if options.progress_interval == 0 {
            return Err(DxError::InvalidOption {
                name: "progress_interval",
                msg: "must be positive".to_string(),
            });
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = AnalysisOptions::default();
        assert_eq!(options.pathogenicity_threshold, 0.8);
        assert!(!options.strict);
        assert!(!options.use_global);
        assert!(options.include_diseases_with_no_deleterious_variants);
    }

    #[test]
    fn test_builder_roundtrip() {
        let options = AnalysisOptions::builder()
            .pathogenicity_threshold(0.9)
            .strict(true)
            .use_global(true)
            .disease_databases([DiseaseDatabase::Omim, DiseaseDatabase::Orphanet])
            .build()
            .unwrap();

        assert_eq!(options.pathogenicity_threshold, 0.9);
        assert!(options.strict);
        assert!(options.use_global);
        assert_eq!(options.disease_databases.len(), 2);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let err = AnalysisOptions::builder()
            .pathogenicity_threshold(1.5)
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DxError::InvalidOption {
                name: "pathogenicity_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_invalid_background_frequency_rejected() {
        let err = AnalysisOptions::builder()
            .default_variant_background_frequency(0.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, DxError::InvalidOption { .. }));
    }

    #[test]
    fn test_empty_databases_rejected() {
        let err = AnalysisOptions::builder()
            .disease_databases(std::iter::empty())
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            DxError::InvalidOption {
                name: "disease_databases",
                ..
            }
        ));
    }

    #[test]
    fn test_includes_disease() {
        let options = AnalysisOptions::builder()
            .target_diseases([DiseaseId::new("OMIM:154700")])
            .build()
            .unwrap();

        assert!(options.includes_disease(&DiseaseId::new("OMIM:154700")));
        // In the target list requires the right database too.
        assert!(!options.includes_disease(&DiseaseId::new("OMIM:100000")));
        assert!(!options.includes_disease(&DiseaseId::new("ORPHA:558")));
    }

    #[test]
    fn test_includes_disease_database_filter() {
        let options = AnalysisOptions::default();
        assert!(options.includes_disease(&DiseaseId::new("OMIM:154700")));
        assert!(!options.includes_disease(&DiseaseId::new("ORPHA:558")));
    }
}
