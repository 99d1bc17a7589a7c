use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};

use super::ScoreBreakdown;

/// An educational program from the static catalog
///
/// Scoring reads the typed fields; listings echo the dataset record exactly
/// as it was loaded, including integer-valued numbers and unknown fields.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(try_from = "Map<String, Value>")]
pub struct Program {
    name: Option<String>,
    cost: f64,
    duration_months: f64,
    placement_rate: f64,
    mode: String,
    location: String,
    record: Map<String, Value>,
}

/// Fields scoring depends on, pulled out of a dataset record
#[derive(Deserialize)]
struct ScoringFields {
    #[serde(default)]
    name: Option<String>,
    cost: f64,
    duration_months: f64,
    placement_rate: f64,
    mode: String,
    location: String,
}

impl TryFrom<Map<String, Value>> for Program {
    type Error = serde_json::Error;

    fn try_from(record: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: ScoringFields = serde_json::from_value(Value::Object(record.clone()))?;
        Ok(Self {
            name: fields.name,
            cost: fields.cost,
            duration_months: fields.duration_months,
            placement_rate: fields.placement_rate,
            mode: fields.mode,
            location: fields.location,
            record,
        })
    }
}

impl Serialize for Program {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.record.serialize(serializer)
    }
}

impl Program {
    /// Creates a program with no extra fields
    pub fn new(
        name: impl Into<String>,
        cost: f64,
        duration_months: f64,
        placement_rate: f64,
        mode: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let mode = mode.into();
        let location = location.into();

        let record = match json!({
            "name": name,
            "cost": cost,
            "duration_months": duration_months,
            "placement_rate": placement_rate,
            "mode": mode,
            "location": location,
        }) {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        Self {
            name: Some(name),
            cost,
            duration_months,
            placement_rate,
            mode,
            location,
            record,
        }
    }

    /// Display name of the program, when the dataset provides one
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Total fee in currency units
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn duration_months(&self) -> f64 {
        self.duration_months
    }

    /// Fraction of graduates placed, in [0, 1]
    pub fn placement_rate(&self) -> f64 {
        self.placement_rate
    }

    /// Delivery mode (e.g., "online", "offline")
    pub fn mode(&self) -> &str {
        &self.mode
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// The dataset record as loaded
    pub fn record(&self) -> &Map<String, Value> {
        &self.record
    }
}

/// A program together with how well it matches a student profile
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredProgram {
    #[serde(flatten)]
    pub program: Program,
    pub match_score: f64,
    pub score_breakdown: ScoreBreakdown,
}
