//! External collaborator interfaces.
//!
//! The engine consumes these services read-only during the parallel phase:
//! the gene-to-disease association index, the background variant-frequency
//! service, and the pretest-probability provider. All of them are supplied
//! by the caller and shared by reference across disease evaluations.

mod background;
mod gene_disease;
mod pretest;

pub use background::{BackgroundVariantFrequency, MapBackgroundFrequency};
pub use gene_disease::GeneDiseaseIndex;
pub use pretest::{MapPretest, PretestProbabilityProvider, UniformPretest};
