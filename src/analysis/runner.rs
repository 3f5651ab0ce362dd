//! Analysis runner: the parallel per-disease fan-out.
//!
//! Every disease evaluation is a pure function of the disease model, the
//! sample's candidate genes, and the shared read-only services; no
//! evaluation mutates shared state or depends on another's outcome. The
//! runner fans out over the catalog with rayon and collects the surviving
//! results into an [`AnalysisResults`] container.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::analysis::data::AnalysisData;
use crate::analysis::options::AnalysisOptions;
use crate::analysis::results::{AnalysisResults, TestResult};
use crate::catalog::{DiseaseCatalog, DiseaseId, DiseaseModel};
use crate::error::DxError;
use crate::genotype::GenotypedGene;
use crate::likelihood::{
    evaluate_onset, GenotypeLrEvaluator, InducedDiseaseGraph, OnsetProbabilityModel,
    PhenotypeLrEvaluator,
};
use crate::ontology::OntologyProvider;
use crate::services::{BackgroundVariantFrequency, GeneDiseaseIndex, PretestProbabilityProvider};

/// Progress of a running analysis.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisProgress {
    /// Diseases selected for evaluation.
    pub total: usize,
    /// Diseases evaluated so far (including discarded ones).
    pub completed: usize,
}

impl AnalysisProgress {
    /// Completion percentage.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            (self.completed as f64 / self.total as f64) * 100.0
        }
    }
}

/// Orchestrates one analysis run across the disease catalog.
pub struct AnalysisRunner<'a, O, B, P>
where
    O: OntologyProvider,
    B: BackgroundVariantFrequency,
    P: PretestProbabilityProvider,
{
    ontology: &'a O,
    catalog: &'a DiseaseCatalog,
    gene_disease_index: &'a GeneDiseaseIndex,
    background: &'a B,
    pretest: &'a P,
    onset_model: Option<&'a dyn OnsetProbabilityModel>,
    options: AnalysisOptions,
}

impl<'a, O, B, P> AnalysisRunner<'a, O, B, P>
where
    O: OntologyProvider,
    B: BackgroundVariantFrequency,
    P: PretestProbabilityProvider,
{
    /// Create a runner over shared, read-only services.
    pub fn new(
        ontology: &'a O,
        catalog: &'a DiseaseCatalog,
        gene_disease_index: &'a GeneDiseaseIndex,
        background: &'a B,
        pretest: &'a P,
        options: AnalysisOptions,
    ) -> Self {
        Self {
            ontology,
            catalog,
            gene_disease_index,
            background,
            pretest,
            onset_model: None,
            options,
        }
    }

    /// Enable onset-aware analysis with the given model.
    pub fn with_onset_model(mut self, model: &'a dyn OnsetProbabilityModel) -> Self {
        self.onset_model = Some(model);
        self
    }

    /// Run the analysis.
    pub fn run(&self, data: &AnalysisData) -> Result<AnalysisResults, DxError> {
        self.run_with_progress(data, |_| {})
    }

    /// Run the analysis, reporting progress every
    /// [`progress_interval`](AnalysisOptions::progress_interval) completed
    /// diseases.
    pub fn run_with_progress<F>(
        &self,
        data: &AnalysisData,
        progress_fn: F,
    ) -> Result<AnalysisResults, DxError>
    where
        F: Fn(AnalysisProgress) + Sync,
    {
        let candidates = self.candidate_genes(data);

        let diseases: Vec<&DiseaseModel> = self
            .catalog
            .iter()
            .filter(|d| self.options.includes_disease(&d.id))
            .collect();
        if diseases.is_empty() {
            return Err(DxError::EmptyCatalog {
                msg: "no diseases matched the configured databases and targets".to_string(),
            });
        }

        let total = diseases.len();
        let interval = self.options.progress_interval;
        let completed = AtomicUsize::new(0);

        let results: Vec<TestResult> = diseases
            .par_iter()
            .filter_map(|disease| {
                let result = self.evaluate_disease(disease, data, &candidates);
                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                if done % interval == 0 || done == total {
                    progress_fn(AnalysisProgress {
                        total,
                        completed: done,
                    });
                }
                result
            })
            .collect();

        Ok(AnalysisResults::new(results))
    }

    /// Map each in-scope disease to the patient's variant-bearing genes
    /// linked to it. Built once per run.
    fn candidate_genes<'d>(
        &self,
        data: &'d AnalysisData,
    ) -> HashMap<DiseaseId, Vec<&'d GenotypedGene>> {
        let mut candidates: HashMap<DiseaseId, Vec<&GenotypedGene>> = HashMap::new();
        for gene in data.genes.iter().filter(|g| !g.variants.is_empty()) {
            for disease in self.gene_disease_index.diseases_for_gene(&gene.gene) {
                candidates.entry(disease.clone()).or_default().push(gene);
            }
        }
        candidates
    }

    /// Evaluate one disease. Returns `None` when the disease is discarded
    /// or skipped.
    fn evaluate_disease(
        &self,
        disease: &DiseaseModel,
        data: &AnalysisData,
        candidates: &HashMap<DiseaseId, Vec<&GenotypedGene>>,
    ) -> Option<TestResult> {
        // Genotype phase first: the discard rules can end the evaluation
        // before any phenotype work.
        let mut genotype = None;
        if data.has_genotype_data() {
            let genes = candidates
                .get(&disease.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            if genes.is_empty() {
                if !self.options.use_global {
                    return None;
                }
                // Global mode retains the disease with no genotype factor.
            } else {
                let evaluator = GenotypeLrEvaluator::new(
                    self.background,
                    self.options.pathogenicity_threshold,
                    self.options.default_variant_background_frequency,
                    self.options.strict,
                );
                if !self.options.include_diseases_with_no_deleterious_variants
                    && genes.iter().all(|g| !evaluator.has_deleterious_variants(g))
                {
                    return None;
                }
                genotype = evaluator.evaluate_best(genes, &disease.inheritance_or_unknown());
            }
        }

        let pretest = match self.pretest.pretest_probability(&disease.id) {
            Some(p) if p > 0.0 && p < 1.0 => p,
            Some(p) => {
                log::warn!(
                    "Pretest probability {} for {} outside (0, 1); skipping disease",
                    p,
                    disease.id
                );
                return None;
            }
            None => {
                log::warn!("No pretest probability for {}; skipping disease", disease.id);
                return None;
            }
        };

        let graph = InducedDiseaseGraph::build(disease, self.ontology);
        let phenotype_evaluator = PhenotypeLrEvaluator::new(self.ontology);
        let observed = data
            .observed
            .iter()
            .map(|term| phenotype_evaluator.evaluate_observed(term, &graph))
            .collect();
        let excluded = data
            .excluded
            .iter()
            .map(|term| phenotype_evaluator.evaluate_excluded(term, &graph))
            .collect();

        let onset = match (self.onset_model, &data.age) {
            (Some(model), Some(age)) => evaluate_onset(model, &disease.id, age),
            _ => None,
        };

        Some(TestResult {
            disease_id: disease.id.clone(),
            pretest_probability: pretest,
            observed,
            excluded,
            genotype,
            onset,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DiseaseModel, ModeOfInheritance, PhenotypeAnnotation};
    use crate::genotype::{ClinicalSignificance, GeneId, ObservedVariant};
    use crate::ontology::MockOntology;
    use crate::services::{MapBackgroundFrequency, MapPretest, UniformPretest};

    fn catalog() -> DiseaseCatalog {
        DiseaseCatalog::new(vec![
            DiseaseModel::new(DiseaseId::new("OMIM:100000"), "Seizure syndrome")
                .with_annotation(PhenotypeAnnotation::with_frequency("HP:0001250", 0.9))
                .with_inheritance(ModeOfInheritance::AutosomalDominant),
            DiseaseModel::new(DiseaseId::new("OMIM:200000"), "Skeletal syndrome")
                .with_annotation(PhenotypeAnnotation::with_frequency("HP:0001166", 0.8))
                .with_inheritance(ModeOfInheritance::AutosomalDominant),
        ])
    }

    fn phenotype_only_data() -> AnalysisData {
        AnalysisData::builder("sample-1")
            .observed_term("HP:0001250")
            .build()
    }

    #[test]
    fn test_phenotype_only_run_keeps_all_diseases() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let index = GeneDiseaseIndex::new();
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());
        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            AnalysisOptions::default(),
        );

        let results = runner.run(&phenotype_only_data()).unwrap();
        assert_eq!(results.len(), 2);

        // The seizure disease must outrank the skeletal one.
        assert_eq!(results.rank_of(&DiseaseId::new("OMIM:100000")), Some(1));
    }

    #[test]
    fn test_missing_pretest_probability_skips_disease() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let index = GeneDiseaseIndex::new();
        let background = MapBackgroundFrequency::new();
        let mut pretest = MapPretest::new();
        pretest.insert(DiseaseId::new("OMIM:100000"), 0.01);
        // OMIM:200000 has no pretest probability.
        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            AnalysisOptions::default(),
        );

        let results = runner.run(&phenotype_only_data()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.get(&DiseaseId::new("OMIM:200000")).is_none());
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let onto = MockOntology::with_test_data();
        let catalog = DiseaseCatalog::new(vec![]);
        let index = GeneDiseaseIndex::new();
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(0);
        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            AnalysisOptions::default(),
        );

        let err = runner.run(&phenotype_only_data()).unwrap_err();
        assert!(matches!(err, DxError::EmptyCatalog { .. }));
    }

    #[test]
    fn test_unlinked_disease_discarded_without_global_mode() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let mut index = GeneDiseaseIndex::new();
        let fbn1 = GeneId::new("NCBIGene:2200", "FBN1");
        index.associate(fbn1.clone(), DiseaseId::new("OMIM:200000"));
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());

        let data = AnalysisData::builder("sample-1")
            .observed_term("HP:0001250")
            .gene(GenotypedGene::new(
                fbn1,
                vec![ObservedVariant::new("chr15", 1, "A", "G").with_pathogenicity(0.95)],
            ))
            .build();

        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            AnalysisOptions::default(),
        );
        let results = runner.run(&data).unwrap();

        // OMIM:100000 has no linked gene and use_global is off.
        assert_eq!(results.len(), 1);
        assert!(results.get(&DiseaseId::new("OMIM:100000")).is_none());
        assert!(results.get(&DiseaseId::new("OMIM:200000")).is_some());
    }

    #[test]
    fn test_global_mode_retains_unlinked_disease_with_neutral_genotype() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let mut index = GeneDiseaseIndex::new();
        let fbn1 = GeneId::new("NCBIGene:2200", "FBN1");
        index.associate(fbn1.clone(), DiseaseId::new("OMIM:200000"));
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());

        let data = AnalysisData::builder("sample-1")
            .observed_term("HP:0001250")
            .gene(GenotypedGene::new(
                fbn1,
                vec![ObservedVariant::new("chr15", 1, "A", "G").with_pathogenicity(0.95)],
            ))
            .build();

        let options = AnalysisOptions::builder().use_global(true).build().unwrap();
        let runner =
            AnalysisRunner::new(&onto, &catalog, &index, &background, &pretest, options);
        let results = runner.run(&data).unwrap();

        assert_eq!(results.len(), 2);
        let unlinked = results.get(&DiseaseId::new("OMIM:100000")).unwrap();
        assert!(unlinked.genotype.is_none());
    }

    #[test]
    fn test_no_deleterious_variants_discard_policy() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let mut index = GeneDiseaseIndex::new();
        let fbn1 = GeneId::new("NCBIGene:2200", "FBN1");
        index.associate(fbn1.clone(), DiseaseId::new("OMIM:200000"));
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());

        // Benign, below-threshold variant only.
        let data = AnalysisData::builder("sample-1")
            .observed_term("HP:0001250")
            .gene(GenotypedGene::new(
                fbn1,
                vec![ObservedVariant::new("chr15", 1, "A", "G")
                    .with_pathogenicity(0.1)
                    .with_clinvar(ClinicalSignificance::Benign)],
            ))
            .build();

        let options = AnalysisOptions::builder()
            .include_diseases_with_no_deleterious_variants(false)
            .build()
            .unwrap();
        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            options,
        );
        let results = runner.run(&data).unwrap();
        assert!(results.get(&DiseaseId::new("OMIM:200000")).is_none());

        // With the default options the disease is retained.
        let runner = AnalysisRunner::new(
            &onto,
            &catalog,
            &index,
            &background,
            &pretest,
            AnalysisOptions::default(),
        );
        let results = runner.run(&data).unwrap();
        assert!(results.get(&DiseaseId::new("OMIM:200000")).is_some());
    }

    #[test]
    fn test_progress_reported() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let index = GeneDiseaseIndex::new();
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());
        let options = AnalysisOptions::builder()
            .progress_interval(1)
            .build()
            .unwrap();
        let runner =
            AnalysisRunner::new(&onto, &catalog, &index, &background, &pretest, options);

        let seen = AtomicUsize::new(0);
        let results = runner
            .run_with_progress(&phenotype_only_data(), |progress| {
                seen.fetch_add(1, Ordering::Relaxed);
                assert!(progress.completed <= progress.total);
            })
            .unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(seen.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_target_disease_filter() {
        let onto = MockOntology::with_test_data();
        let catalog = catalog();
        let index = GeneDiseaseIndex::new();
        let background = MapBackgroundFrequency::new();
        let pretest = UniformPretest::over(catalog.len());
        let options = AnalysisOptions::builder()
            .target_diseases([DiseaseId::new("OMIM:200000")])
            .build()
            .unwrap();
        let runner =
            AnalysisRunner::new(&onto, &catalog, &index, &background, &pretest, options);

        let results = runner.run(&phenotype_only_data()).unwrap();
        assert_eq!(results.len(), 1);
        assert!(results.get(&DiseaseId::new("OMIM:200000")).is_some());
    }
}
