//! Modes of inheritance.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mode of inheritance recorded for a disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ModeOfInheritance {
    /// Autosomal dominant: one deleterious allele is expected.
    AutosomalDominant,
    /// Autosomal recessive: two deleterious alleles are expected.
    AutosomalRecessive,
    /// X-linked dominant.
    XLinkedDominant,
    /// X-linked recessive.
    XLinkedRecessive,
    /// Mitochondrial.
    Mitochondrial,
    /// No mode of inheritance recorded.
    #[default]
    Unknown,
}

impl ModeOfInheritance {
    /// Expected number of deleterious alleles in an affected individual.
    ///
    /// Recessive inheritance expects a biallelic genotype; every other mode
    /// is satisfied by a single allele.
    pub fn expected_pathogenic_alleles(&self) -> f64 {
        match self {
            Self::AutosomalRecessive | Self::XLinkedRecessive => 2.0,
            _ => 1.0,
        }
    }

    /// Canonical label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutosomalDominant => "autosomal dominant",
            Self::AutosomalRecessive => "autosomal recessive",
            Self::XLinkedDominant => "X-linked dominant",
            Self::XLinkedRecessive => "X-linked recessive",
            Self::Mitochondrial => "mitochondrial",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ModeOfInheritance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ModeOfInheritance {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s_lower = s.to_lowercase();
        Ok(match s_lower.as_str() {
            "autosomal dominant" | "autosomal_dominant" | "ad" => Self::AutosomalDominant,
            "autosomal recessive" | "autosomal_recessive" | "ar" => Self::AutosomalRecessive,
            "x-linked dominant" | "x_linked_dominant" | "xld" => Self::XLinkedDominant,
            "x-linked recessive" | "x_linked_recessive" | "xlr" => Self::XLinkedRecessive,
            "mitochondrial" | "mt" => Self::Mitochondrial,
            _ => Self::Unknown,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_alleles() {
        assert_eq!(ModeOfInheritance::AutosomalDominant.expected_pathogenic_alleles(), 1.0);
        assert_eq!(ModeOfInheritance::AutosomalRecessive.expected_pathogenic_alleles(), 2.0);
        assert_eq!(ModeOfInheritance::XLinkedRecessive.expected_pathogenic_alleles(), 2.0);
        assert_eq!(ModeOfInheritance::Unknown.expected_pathogenic_alleles(), 1.0);
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "autosomal recessive".parse::<ModeOfInheritance>().unwrap(),
            ModeOfInheritance::AutosomalRecessive
        );
        assert_eq!("AD".parse::<ModeOfInheritance>().unwrap(), ModeOfInheritance::AutosomalDominant);
        assert_eq!("sporadic".parse::<ModeOfInheritance>().unwrap(), ModeOfInheritance::Unknown);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ModeOfInheritance::XLinkedRecessive), "X-linked recessive");
    }
}
