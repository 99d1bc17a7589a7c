use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub mod program;
pub mod score;
pub mod student_profile;

pub use program::{Program, ScoredProgram};
pub use score::{Factor, ScoreBreakdown, ScoreResult};
pub use student_profile::{RecommendationRequest, StudentProfile};

/// Success envelope for the recommendation endpoint
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub status: &'static str,
    pub count: usize,
    pub recommendations: Vec<ScoredProgram>,
    pub generated_at: DateTime<Utc>,
}

impl RecommendationResponse {
    pub fn success(recommendations: Vec<ScoredProgram>) -> Self {
        Self {
            status: "success",
            count: recommendations.len(),
            recommendations,
            generated_at: Utc::now(),
        }
    }
}

/// Full catalog listing
#[derive(Debug, Serialize)]
pub struct ProgramsResponse {
    pub total: usize,
    pub programs: Vec<Program>,
}

/// Aggregate figures across the whole catalog
///
/// Mode and location collections are sets; their order carries no meaning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgramStats {
    pub total_programs: usize,
    pub avg_cost: f64,
    pub avg_duration_months: f64,
    /// Mean placement rate as a percentage
    pub avg_placement_rate: f64,
    pub modes: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

/// Liveness payload
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}
