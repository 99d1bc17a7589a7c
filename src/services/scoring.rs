//! Compatibility scoring between a program and a student profile.

use crate::models::{Factor, Program, ScoreBreakdown, ScoreResult, StudentProfile};

/// Currency units over budget that cost one point
const BUDGET_DECAY_STEP: f64 = 100.0;
const STRONG_PLACEMENT: f64 = 0.75;
const FAIR_PLACEMENT: f64 = 0.50;
const MAX_SCORE: f64 = 100.0;

/// Scores a program against a student profile
///
/// Five additive factors are evaluated in fixed order:
/// 1. Budget fit (30, decaying by 1 point per 100 units over budget)
/// 2. Duration fit (25)
/// 3. Placement rate (20 at 75%+, 10 at 50%+)
/// 4. Mode preference (15, exact match)
/// 5. Location preference (10, case-insensitive match)
///
/// Only factors that award points appear in the breakdown, except budget,
/// which is always recorded.
pub fn score_program(program: &Program, profile: &StudentProfile) -> ScoreResult {
    let mut breakdown = ScoreBreakdown::default();

    breakdown.record(Factor::Budget, budget_points(program.cost(), profile.budget));

    if program.duration_months() <= profile.max_duration {
        breakdown.record(Factor::Duration, Factor::Duration.max_points());
    }

    if let Some(points) = placement_points(program.placement_rate()) {
        breakdown.record(Factor::Placement, points);
    }

    if program.mode() == profile.preferred_mode {
        breakdown.record(Factor::Mode, Factor::Mode.max_points());
    }

    if program.location().to_lowercase() == profile.location.to_lowercase() {
        breakdown.record(Factor::Location, Factor::Location.max_points());
    }

    let match_score = round2(breakdown.total().clamp(0.0, MAX_SCORE));

    ScoreResult {
        match_score,
        breakdown,
    }
}

fn budget_points(cost: f64, budget: f64) -> f64 {
    let max = Factor::Budget.max_points();
    if cost <= budget {
        max
    } else {
        (max - (cost - budget) / BUDGET_DECAY_STEP).max(0.0)
    }
}

fn placement_points(rate: f64) -> Option<f64> {
    if rate >= STRONG_PLACEMENT {
        Some(Factor::Placement.max_points())
    } else if rate >= FAIR_PLACEMENT {
        Some(Factor::Placement.max_points() / 2.0)
    } else {
        None
    }
}

/// Rounds to 2 decimal places
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
