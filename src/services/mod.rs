pub mod catalog;
pub mod recommendations;
pub mod scoring;
pub mod stats;

pub use catalog::{InMemorySource, JsonFileSource, ProgramSource};
pub use recommendations::RecommendationEngine;
pub use scoring::score_program;
pub use stats::compute_stats;
