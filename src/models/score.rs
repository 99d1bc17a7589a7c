use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A single scoring factor, listed in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Factor {
    Budget,
    Duration,
    Placement,
    Mode,
    Location,
}

impl Factor {
    #[cfg(test)]
    pub(crate) const ALL: [Factor; 5] = [
        Factor::Budget,
        Factor::Duration,
        Factor::Placement,
        Factor::Mode,
        Factor::Location,
    ];

    /// Most points this factor can contribute
    pub fn max_points(self) -> f64 {
        match self {
            Factor::Budget => 30.0,
            Factor::Duration => 25.0,
            Factor::Placement => 20.0,
            Factor::Mode => 15.0,
            Factor::Location => 10.0,
        }
    }
}

impl Display for Factor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Factor::Budget => "budget",
            Factor::Duration => "duration",
            Factor::Placement => "placement",
            Factor::Mode => "mode",
            Factor::Location => "location",
        };
        write!(f, "{}", name)
    }
}

/// Points awarded per factor
///
/// Sparse: a factor that awarded nothing has no entry, except budget which is
/// always recorded by the scorer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScoreBreakdown(BTreeMap<Factor, f64>);

impl ScoreBreakdown {
    pub fn record(&mut self, factor: Factor, points: f64) {
        self.0.insert(factor, points);
    }

    pub fn get(&self, factor: Factor) -> Option<f64> {
        self.0.get(&factor).copied()
    }

    pub fn contains(&self, factor: Factor) -> bool {
        self.0.contains_key(&factor)
    }

    /// Sum of all recorded points
    pub fn total(&self) -> f64 {
        self.0.values().sum()
    }
}

/// Outcome of scoring one program against one profile
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Compatibility in [0, 100], rounded to 2 decimals
    pub match_score: f64,
    pub breakdown: ScoreBreakdown,
}
