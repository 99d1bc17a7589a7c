use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

pub const DEFAULT_BUDGET: f64 = 500_000.0;
pub const DEFAULT_MAX_DURATION: f64 = 12.0;
pub const DEFAULT_PREFERRED_MODE: &str = "online";
pub const DEFAULT_LOCATION: &str = "Bengaluru";
pub const DEFAULT_LIMIT: i64 = 5;

/// Preferences a student submits to be matched against programs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StudentProfile {
    /// Maximum the student is willing to pay, in currency units
    pub budget: f64,
    /// Longest acceptable program, in months
    pub max_duration: f64,
    pub preferred_mode: String,
    pub location: String,
}

impl Default for StudentProfile {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
            max_duration: DEFAULT_MAX_DURATION,
            preferred_mode: DEFAULT_PREFERRED_MODE.to_string(),
            location: DEFAULT_LOCATION.to_string(),
        }
    }
}

/// Body of a recommendation request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub budget: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub max_duration: Option<f64>,
    #[serde(default)]
    pub preferred_mode: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_number")]
    pub limit: Option<f64>,
}

impl RecommendationRequest {
    /// Names of required fields that are absent or null
    pub fn missing_fields(&self) -> Vec<String> {
        let checks = [
            ("budget", self.budget.is_some()),
            ("max_duration", self.max_duration.is_some()),
            ("preferred_mode", self.preferred_mode.is_some()),
            ("location", self.location.is_some()),
        ];

        checks
            .into_iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Checks required fields, then builds the profile and result limit
    pub fn into_profile(self) -> AppResult<(StudentProfile, i64)> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        let limit = self.limit.map(|l| l.trunc() as i64).unwrap_or(DEFAULT_LIMIT);
        let profile = StudentProfile {
            budget: self.budget.unwrap_or(DEFAULT_BUDGET),
            max_duration: self.max_duration.unwrap_or(DEFAULT_MAX_DURATION),
            preferred_mode: self
                .preferred_mode
                .unwrap_or_else(|| DEFAULT_PREFERRED_MODE.to_string()),
            location: self.location.unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
        };

        Ok((profile, limit))
    }
}

/// Accepts either a JSON number or a string holding one
fn deserialize_lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(NumberOrString::Number(n)) => Ok(Some(n)),
        Some(NumberOrString::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("expected a number, got \"{}\"", s))),
    }
}
