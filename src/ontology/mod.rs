//! Phenotype ontology interface.
//!
//! The analysis engine never loads ontology files itself. It consumes a
//! precomputed, read-only view of the ontology through the
//! [`OntologyProvider`] trait: ancestor closures, term validity, and
//! corpus-wide background frequencies. [`MockOntology`] provides a small
//! fixed ontology for tests and doctests.

mod mock;
mod provider;
mod term;

pub use mock::MockOntology;
pub use provider::OntologyProvider;
pub use term::TermId;
