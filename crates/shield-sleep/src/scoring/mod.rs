//! Shield score evaluation for self-reported sleep metrics.
//!
//! Callers validate a [`MetricsSubmission`] into [`SleepMetrics`] and hand the
//! result to [`evaluate`], which applies the rule table and buckets the final
//! score into a [`BioAgeDelta`].

mod age_delta;
pub mod batch;
pub mod domain;
pub mod response;
pub mod router;
mod rules;
pub mod validation;

#[cfg(test)]
mod tests;

pub use age_delta::BioAgeDelta;
pub use batch::{score_csv, BatchError, BatchRow};
pub use domain::{SleepMetrics, SleepRule};
pub use response::ScoreResponse;
pub use router::sleep_router;
pub use validation::{MetricsSubmission, MetricsValidationError};

use serde::Serialize;

/// Single triggered rule, kept so results can be audited and rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreComponent {
    pub rule: SleepRule,
    pub deduction: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<String>,
    pub suggestion: String,
}

impl ScoreComponent {
    pub(crate) fn alert(rule: SleepRule, deduction: u8, alert: &str, suggestion: &str) -> Self {
        Self {
            rule,
            deduction,
            alert: Some(alert.to_string()),
            suggestion: suggestion.to_string(),
        }
    }

    pub(crate) fn suggestion_only(rule: SleepRule, suggestion: &str) -> Self {
        Self {
            rule,
            deduction: 0,
            alert: None,
            suggestion: suggestion.to_string(),
        }
    }
}

/// Outcome of scoring one night of sleep.
///
/// `alerts` and `suggestions` follow rule order. `suggestions` can be longer
/// than `alerts` because some rules only advise.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub score: u8,
    pub bio_age_delta: BioAgeDelta,
    pub alerts: Vec<String>,
    pub suggestions: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

/// Scores validated metrics. Pure: identical input yields an identical result.
pub fn evaluate(metrics: &SleepMetrics) -> ScoreResult {
    let (components, raw_score) = rules::score_metrics(metrics);

    let score = raw_score.clamp(0, rules::BASELINE_SCORE) as u8;
    let bio_age_delta = BioAgeDelta::from_score(score);

    let alerts = components
        .iter()
        .filter_map(|component| component.alert.clone())
        .collect();
    let suggestions = components
        .iter()
        .map(|component| component.suggestion.clone())
        .collect();

    ScoreResult {
        score,
        bio_age_delta,
        alerts,
        suggestions,
        components,
    }
}
