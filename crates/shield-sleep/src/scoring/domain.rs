use serde::{Deserialize, Serialize};

/// Nightly sleep metrics that have already passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepMetrics {
    pub total_sleep_hours: f64,
    pub sleep_efficiency_percent: f64,
    pub rem_percent: f64,
    pub age: u8,
    pub sex: String,
}

impl SleepMetrics {
    pub fn is_female(&self) -> bool {
        self.sex.eq_ignore_ascii_case("female")
    }

    pub fn is_older_adult(&self) -> bool {
        self.age >= OLDER_ADULT_AGE
    }

    pub fn is_minor(&self) -> bool {
        self.age < ADULT_AGE
    }
}

pub(crate) const ADULT_AGE: u8 = 18;
pub(crate) const OLDER_ADULT_AGE: u8 = 65;

/// Identifies which scoring rule produced a component of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SleepRule {
    InsufficientSleep,
    CriticallyLowSleepOlderAdult,
    ExcessiveSleep,
    VeryLowEfficiency,
    LowEfficiency,
    LowRem,
    HighRem,
    AgeOutsideAdultRange,
    OlderAdultExcessiveSleep,
    FemaleShortSleep,
}

impl SleepRule {
    pub fn label(&self) -> &'static str {
        match self {
            SleepRule::InsufficientSleep => "insufficient sleep",
            SleepRule::CriticallyLowSleepOlderAdult => "critically low sleep (older adult)",
            SleepRule::ExcessiveSleep => "excessive sleep",
            SleepRule::VeryLowEfficiency => "very low efficiency",
            SleepRule::LowEfficiency => "low efficiency",
            SleepRule::LowRem => "low REM",
            SleepRule::HighRem => "high REM",
            SleepRule::AgeOutsideAdultRange => "age outside adult range",
            SleepRule::OlderAdultExcessiveSleep => "excessive sleep (older adult)",
            SleepRule::FemaleShortSleep => "short sleep (female)",
        }
    }
}
