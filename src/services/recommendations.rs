use std::sync::Arc;

use crate::{
    models::{Program, ProgramStats, ScoredProgram, StudentProfile},
    services::{catalog::ProgramSource, scoring::score_program, stats::compute_stats},
};

/// Ranks catalog programs for a student profile
///
/// Holds the program dataset as an immutable snapshot taken at construction.
/// Cloning is cheap and shares the same snapshot.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    programs: Arc<[Program]>,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl RecommendationEngine {
    /// Creates an engine over an already loaded dataset
    pub fn new(programs: Vec<Program>) -> Self {
        Self {
            programs: programs.into(),
        }
    }

    /// Loads the dataset once from `source`
    ///
    /// A failed load is logged and leaves the engine empty rather than failing,
    /// so the service still starts and answers with empty results.
    pub async fn load(source: &dyn ProgramSource) -> Self {
        match source.load_programs().await {
            Ok(programs) => {
                tracing::info!(
                    source = source.name(),
                    count = programs.len(),
                    "Loaded program catalog"
                );
                Self::new(programs)
            }
            Err(e) => {
                tracing::error!(
                    source = source.name(),
                    error = %e,
                    "Failed to load program catalog, continuing with no programs"
                );
                Self::default()
            }
        }
    }

    /// All programs, in dataset order
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// Returns at most `limit` programs ranked by match score, best first
    ///
    /// Programs with equal scores keep their dataset order. A non-positive
    /// limit yields no results.
    pub fn recommend(&self, profile: &StudentProfile, limit: i64) -> Vec<ScoredProgram> {
        let limit = usize::try_from(limit).unwrap_or(0);
        if limit == 0 || self.programs.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<ScoredProgram> = self
            .programs
            .iter()
            .map(|program| {
                let result = score_program(program, profile);
                ScoredProgram {
                    program: program.clone(),
                    match_score: result.match_score,
                    score_breakdown: result.breakdown,
                }
            })
            .collect();

        // Stable, so ties stay in dataset order
        ranked.sort_by(|a, b| b.match_score.total_cmp(&a.match_score));
        ranked.truncate(limit);
        ranked
    }

    /// Catalog-wide aggregates, or `None` when there are no programs
    pub fn stats(&self) -> Option<ProgramStats> {
        compute_stats(&self.programs)
    }
}
