use serde::{Deserialize, Serialize};

use super::ScoreResult;

pub(crate) const INTERNAL_ERROR_ALERT: &str = "An internal server error occurred.";

/// Wire representation of a scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResponse {
    pub score: u8,
    pub bio_age_delta: Option<String>,
    pub alerts: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ScoreResponse {
    /// Body returned when the submission fails validation.
    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            score: 0,
            bio_age_delta: None,
            alerts: vec![reason.into()],
            suggestions: Vec::new(),
        }
    }

    pub fn internal_error() -> Self {
        Self::rejected(INTERNAL_ERROR_ALERT)
    }
}

impl From<ScoreResult> for ScoreResponse {
    fn from(result: ScoreResult) -> Self {
        Self {
            score: result.score,
            bio_age_delta: Some(result.bio_age_delta.to_string()),
            alerts: result.alerts,
            suggestions: result.suggestions,
        }
    }
}
