use serde::{Deserialize, Serialize};

use super::domain::SleepMetrics;

const MAX_SLEEP_HOURS: f64 = 24.0;
const MAX_PERCENT: f64 = 100.0;
const MIN_AGE: i64 = 1;
const MAX_AGE: i64 = 120;

/// Raw sleep metrics as received from a caller, before validation.
///
/// Every field is optional so that an absent value surfaces as a
/// [`MetricsValidationError::MissingField`] instead of a decode failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsSubmission {
    pub total_sleep_hours: Option<f64>,
    #[serde(alias = "sleepEfficiency")]
    pub sleep_efficiency_percent: Option<f64>,
    #[serde(alias = "remPercentage")]
    pub rem_percent: Option<f64>,
    pub age: Option<i64>,
    pub sex: Option<String>,
}

/// Reasons a submission is rejected before scoring.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be between {min} and {max} (found {found})")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
        found: f64,
    },
    #[error("age must be between 1 and 120 (found {0})")]
    AgeOutOfRange(i64),
    #[error("sex must not be blank")]
    BlankSex,
}

impl MetricsSubmission {
    /// Checks presence and bounds field by field, reporting the first failure.
    pub fn validate(&self) -> Result<SleepMetrics, MetricsValidationError> {
        let total_sleep_hours =
            bounded_decimal("totalSleepHours", self.total_sleep_hours, MAX_SLEEP_HOURS)?;
        let sleep_efficiency_percent = bounded_decimal(
            "sleepEfficiencyPercent",
            self.sleep_efficiency_percent,
            MAX_PERCENT,
        )?;
        let rem_percent = bounded_decimal("remPercent", self.rem_percent, MAX_PERCENT)?;

        let age = self
            .age
            .ok_or(MetricsValidationError::MissingField("age"))?;
        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(MetricsValidationError::AgeOutOfRange(age));
        }

        let sex = self
            .sex
            .as_deref()
            .ok_or(MetricsValidationError::MissingField("sex"))?
            .trim();
        if sex.is_empty() {
            return Err(MetricsValidationError::BlankSex);
        }

        Ok(SleepMetrics {
            total_sleep_hours,
            sleep_efficiency_percent,
            rem_percent,
            age: age as u8,
            sex: sex.to_string(),
        })
    }
}

impl From<SleepMetrics> for MetricsSubmission {
    fn from(metrics: SleepMetrics) -> Self {
        Self {
            total_sleep_hours: Some(metrics.total_sleep_hours),
            sleep_efficiency_percent: Some(metrics.sleep_efficiency_percent),
            rem_percent: Some(metrics.rem_percent),
            age: Some(i64::from(metrics.age)),
            sex: Some(metrics.sex),
        }
    }
}

fn bounded_decimal(
    field: &'static str,
    value: Option<f64>,
    max: f64,
) -> Result<f64, MetricsValidationError> {
    let value = value.ok_or(MetricsValidationError::MissingField(field))?;
    if value.is_finite() && (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(MetricsValidationError::OutOfRange {
            field,
            min: 0.0,
            max,
            found: value,
        })
    }
}
