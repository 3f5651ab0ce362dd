//! Genotype likelihood-ratio evaluator.
//!
//! Converts the variant burden of the genes linked to one disease into a
//! single best-gene likelihood ratio, given the disease's inheritance
//! mode(s).

use serde::{Deserialize, Serialize};

use crate::catalog::ModeOfInheritance;
use crate::genotype::{GeneId, GenotypedGene};
use crate::services::BackgroundVariantFrequency;

/// Likelihood ratio granted per ClinVar pathogenic allele when the allele
/// count satisfies the inheritance model.
pub const CLINVAR_PATHOGENIC_LR: f64 = 1000.0;

/// Whether deleterious variants were found in the evaluated gene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenotypeMatch {
    /// ClinVar pathogenic alleles satisfy the inheritance model.
    ClinVarPathogenic,
    /// Deleterious variants present, scored against the burden model.
    DeleteriousVariants,
    /// No ClinVar-pathogenic and no threshold-passing alleles.
    NoDeleteriousVariants,
}

/// Best-gene genotype likelihood ratio with its explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenotypeLrWithExplanation {
    /// The gene providing the best genotype explanation.
    pub gene: GeneId,
    /// Likelihood ratio.
    pub ratio: f64,
    /// Match classification.
    pub match_type: GenotypeMatch,
    /// Human-readable explanation for result display.
    pub explanation: String,
}

/// Evaluator for per-gene variant burden.
pub struct GenotypeLrEvaluator<'a, B: BackgroundVariantFrequency> {
    background: &'a B,
    pathogenicity_threshold: f64,
    default_background_frequency: f64,
    strict: bool,
}

impl<'a, B: BackgroundVariantFrequency> GenotypeLrEvaluator<'a, B> {
    /// Create an evaluator.
    ///
    /// `pathogenicity_threshold` marks alleles as deleterious;
    /// `default_background_frequency` covers genes the background service
    /// does not know; `strict` keeps sub-unit ratios from allele
    /// configurations inconsistent with the inheritance model instead of
    /// clamping them to neutral.
    pub fn new(
        background: &'a B,
        pathogenicity_threshold: f64,
        default_background_frequency: f64,
        strict: bool,
    ) -> Self {
        Self {
            background,
            pathogenicity_threshold,
            default_background_frequency,
            strict,
        }
    }

    /// Evaluate one gene against the disease's inheritance modes, keeping
    /// the best mode.
    pub fn evaluate(
        &self,
        gene: &GenotypedGene,
        inheritance: &[ModeOfInheritance],
    ) -> GenotypeLrWithExplanation {
        let mut best: Option<GenotypeLrWithExplanation> = None;
        for moi in inheritance {
            let candidate = self.evaluate_mode(gene, *moi);
            let better = match &best {
                Some(current) => candidate.ratio > current.ratio,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
        // `inheritance` is never empty: callers pass `Unknown` when the
        // disease records no mode.
        best.unwrap_or_else(|| self.evaluate_mode(gene, ModeOfInheritance::Unknown))
    }

    /// Evaluate all candidate genes for a disease, keeping the single best
    /// gene. Ties keep the first encountered. Returns `None` when there
    /// are no candidate genes.
    pub fn evaluate_best(
        &self,
        genes: &[&GenotypedGene],
        inheritance: &[ModeOfInheritance],
    ) -> Option<GenotypeLrWithExplanation> {
        let mut best: Option<GenotypeLrWithExplanation> = None;
        for gene in genes {
            let candidate = self.evaluate(gene, inheritance);
            let better = match &best {
                Some(current) => candidate.ratio > current.ratio,
                None => true,
            };
            if better {
                best = Some(candidate);
            }
        }
        best
    }

    /// Check whether a gene carries any qualifying allele: ClinVar
    /// pathogenic or at/above the deleteriousness threshold.
    pub fn has_deleterious_variants(&self, gene: &GenotypedGene) -> bool {
        gene.clinvar_pathogenic_alleles() > 0
            || gene.deleterious_allele_count(self.pathogenicity_threshold) > 0
    }

    fn evaluate_mode(
        &self,
        gene: &GenotypedGene,
        moi: ModeOfInheritance,
    ) -> GenotypeLrWithExplanation {
        let expected = moi.expected_pathogenic_alleles();
        let clinvar_alleles = gene.clinvar_pathogenic_alleles();

        if f64::from(clinvar_alleles) >= expected {
            let counted = expected.min(f64::from(clinvar_alleles));
            let ratio = CLINVAR_PATHOGENIC_LR.powf(counted);
            return GenotypeLrWithExplanation {
                gene: gene.gene.clone(),
                ratio,
                match_type: GenotypeMatch::ClinVarPathogenic,
                explanation: format!(
                    "{}: {} ClinVar pathogenic allele(s) satisfy {} inheritance",
                    gene.gene, clinvar_alleles, moi
                ),
            };
        }

        let weighted = gene.weighted_deleterious_alleles(self.pathogenicity_threshold);
        let observed = weighted.round() as u32;
        let lambda_background = self
            .background
            .frequency_for(&gene.gene)
            .unwrap_or(self.default_background_frequency);

        let mut ratio = poisson_pmf(observed, expected) / poisson_pmf(observed, lambda_background);
        let penalized = ratio < 1.0;
        if penalized && !self.strict {
            ratio = 1.0;
        }

        let match_type = if weighted > 0.0 || clinvar_alleles > 0 {
            GenotypeMatch::DeleteriousVariants
        } else {
            GenotypeMatch::NoDeleteriousVariants
        };

        GenotypeLrWithExplanation {
            gene: gene.gene.clone(),
            ratio,
            match_type,
            explanation: format!(
                "{}: weighted deleterious allele count {:.2} vs {:.0} expected under {} inheritance (gene background {:.3}{})",
                gene.gene,
                weighted,
                expected,
                moi,
                lambda_background,
                if penalized && !self.strict {
                    ", mismatch ignored"
                } else {
                    ""
                }
            ),
        }
    }
}

/// Poisson probability mass `λ^k e^{-λ} / k!`.
fn poisson_pmf(k: u32, lambda: f64) -> f64 {
    let mut factorial = 1.0;
    for i in 2..=k {
        factorial *= f64::from(i);
    }
    lambda.powi(k as i32) * (-lambda).exp() / factorial
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genotype::{ClinicalSignificance, ObservedVariant};
    use crate::services::MapBackgroundFrequency;

    fn fbn1() -> GeneId {
        GeneId::new("NCBIGene:2200", "FBN1")
    }

    fn gene_with(variants: Vec<ObservedVariant>) -> GenotypedGene {
        GenotypedGene::new(fbn1(), variants)
    }

    fn variant(allele_count: u32, pathogenicity: f64) -> ObservedVariant {
        ObservedVariant::new("chr15", 48_500_000, "A", "G")
            .with_allele_count(allele_count)
            .with_pathogenicity(pathogenicity)
    }

    #[test]
    fn test_poisson_pmf() {
        assert!((poisson_pmf(0, 1.0) - (-1.0f64).exp()).abs() < 1e-12);
        assert!((poisson_pmf(1, 2.0) - 2.0 * (-2.0f64).exp()).abs() < 1e-12);
        assert!((poisson_pmf(2, 2.0) - 2.0 * (-2.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_clinvar_pathogenic_dominant() {
        let background = MapBackgroundFrequency::new();
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![
            variant(1, 0.9).with_clinvar(ClinicalSignificance::Pathogenic)
        ]);

        let lr = evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalDominant]);
        assert_eq!(lr.match_type, GenotypeMatch::ClinVarPathogenic);
        assert!((lr.ratio - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn test_clinvar_pathogenic_recessive_biallelic() {
        let background = MapBackgroundFrequency::new();
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![
            variant(2, 0.9).with_clinvar(ClinicalSignificance::Pathogenic)
        ]);

        let lr = evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalRecessive]);
        assert_eq!(lr.match_type, GenotypeMatch::ClinVarPathogenic);
        assert!((lr.ratio - 1_000_000.0).abs() < 1e-3);
    }

    #[test]
    fn test_deleterious_burden_dominant() {
        let mut background = MapBackgroundFrequency::new();
        background.insert(fbn1(), 0.05);
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![variant(1, 1.0)]);

        let lr = evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalDominant]);
        assert_eq!(lr.match_type, GenotypeMatch::DeleteriousVariants);
        let expected = poisson_pmf(1, 1.0) / poisson_pmf(1, 0.05);
        assert!((lr.ratio - expected).abs() < 1e-9);
        assert!(lr.ratio > 1.0);
    }

    #[test]
    fn test_below_threshold_variants_ignored() {
        let background = MapBackgroundFrequency::new();
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![variant(2, 0.3)]);

        let lr = evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalDominant]);
        assert_eq!(lr.match_type, GenotypeMatch::NoDeleteriousVariants);
        // Lenient mode clamps the zero-count penalty to neutral.
        assert_eq!(lr.ratio, 1.0);
        assert!(!evaluator.has_deleterious_variants(&gene));
    }

    #[test]
    fn test_strict_mode_penalizes_missing_alleles() {
        let background = MapBackgroundFrequency::new();
        let strict = GenotypeLrEvaluator::new(&background, 0.8, 0.1, true);
        let lenient = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![]);

        let strict_lr = strict.evaluate(&gene, &[ModeOfInheritance::AutosomalDominant]);
        let lenient_lr = lenient.evaluate(&gene, &[ModeOfInheritance::AutosomalDominant]);

        assert!(strict_lr.ratio < 1.0);
        assert_eq!(lenient_lr.ratio, 1.0);
    }

    #[test]
    fn test_single_allele_under_recessive_still_counts() {
        let mut background = MapBackgroundFrequency::new();
        background.insert(fbn1(), 0.1);
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![variant(1, 1.0)]);

        let lr = evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalRecessive]);
        // One deleterious allele is rarer in the background than expected
        // by chance, so it still supports the disease.
        let expected = poisson_pmf(1, 2.0) / poisson_pmf(1, 0.1);
        assert!((lr.ratio - expected).abs() < 1e-9);
        assert!(lr.ratio > 1.0);
    }

    #[test]
    fn test_best_mode_wins() {
        let mut background = MapBackgroundFrequency::new();
        background.insert(fbn1(), 0.05);
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let gene = gene_with(vec![variant(2, 1.0)]);

        let both = evaluator.evaluate(
            &gene,
            &[
                ModeOfInheritance::AutosomalDominant,
                ModeOfInheritance::AutosomalRecessive,
            ],
        );
        let recessive_only =
            evaluator.evaluate(&gene, &[ModeOfInheritance::AutosomalRecessive]);

        // Two deleterious alleles fit the recessive expectation best.
        assert!((both.ratio - recessive_only.ratio).abs() < 1e-12);
    }

    #[test]
    fn test_best_gene_ties_keep_first() {
        let background = MapBackgroundFrequency::new();
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        let first = GenotypedGene::new(
            GeneId::new("NCBIGene:2200", "FBN1"),
            vec![variant(1, 0.9).with_clinvar(ClinicalSignificance::Pathogenic)],
        );
        let second = GenotypedGene::new(
            GeneId::new("NCBIGene:7273", "TTN"),
            vec![variant(1, 0.9).with_clinvar(ClinicalSignificance::Pathogenic)],
        );

        let best = evaluator
            .evaluate_best(&[&first, &second], &[ModeOfInheritance::AutosomalDominant])
            .unwrap();
        assert_eq!(best.gene.symbol, "FBN1");
    }

    #[test]
    fn test_no_candidate_genes() {
        let background = MapBackgroundFrequency::new();
        let evaluator = GenotypeLrEvaluator::new(&background, 0.8, 0.1, false);
        assert!(evaluator
            .evaluate_best(&[], &[ModeOfInheritance::AutosomalDominant])
            .is_none());
    }
}
