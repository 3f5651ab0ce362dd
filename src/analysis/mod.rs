//! Analysis orchestration: input data, options, the parallel runner, and
//! the results container.

mod data;
mod options;
mod results;
mod runner;

pub use data::{Age, AnalysisData, AnalysisDataBuilder, Sex};
pub use options::{AnalysisOptions, AnalysisOptionsBuilder};
pub use results::{AnalysisResults, TestResult};
pub use runner::{AnalysisProgress, AnalysisRunner};
