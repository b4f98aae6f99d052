use super::domain::{SleepMetrics, SleepRule};
use super::ScoreComponent;

pub(crate) const BASELINE_SCORE: i16 = 100;

const MIN_RECOMMENDED_HOURS: f64 = 6.0;
const CRITICAL_HOURS_OLDER_ADULT: f64 = 5.0;
const MAX_RECOMMENDED_HOURS: f64 = 9.5;
const OLDER_ADULT_MAX_HOURS: f64 = 8.0;
const FEMALE_MIN_HOURS: f64 = 7.0;

const VERY_LOW_EFFICIENCY: f64 = 75.0;
const LOW_EFFICIENCY: f64 = 85.0;

const LOW_REM: f64 = 15.0;
const HIGH_REM: f64 = 30.0;

/// Applies the rule table in order, returning the triggered components and
/// the unclamped score.
pub(crate) fn score_metrics(metrics: &SleepMetrics) -> (Vec<ScoreComponent>, i16) {
    let mut components = Vec::new();
    let hours = metrics.total_sleep_hours;

    if hours < MIN_RECOMMENDED_HOURS {
        components.push(ScoreComponent::alert(
            SleepRule::InsufficientSleep,
            15,
            "Insufficient total sleep hours.",
            "Aim for 7-9 hours of sleep per night for optimal health.",
        ));

        if metrics.is_older_adult() && hours < CRITICAL_HOURS_OLDER_ADULT {
            components.push(ScoreComponent::alert(
                SleepRule::CriticallyLowSleepOlderAdult,
                10,
                "Critically low sleep for older adult.",
                "Consistently sleeping under 5 hours is a concern at your age. Consult a doctor about persistent sleep issues.",
            ));
        }
    } else if hours > MAX_RECOMMENDED_HOURS {
        components.push(ScoreComponent::alert(
            SleepRule::ExcessiveSleep,
            5,
            "Excessive total sleep hours.",
            "Regularly sleeping more than 9.5 hours can signal poor sleep quality. Keep a consistent wake time and discuss persistent oversleeping with a doctor.",
        ));
    }

    let efficiency = metrics.sleep_efficiency_percent;
    if efficiency < VERY_LOW_EFFICIENCY {
        components.push(ScoreComponent::alert(
            SleepRule::VeryLowEfficiency,
            20,
            "Very low sleep efficiency.",
            "Only go to bed when sleepy, get up if you cannot fall asleep within 20 minutes, and keep the bedroom dark, quiet and cool.",
        ));
    } else if efficiency < LOW_EFFICIENCY {
        components.push(ScoreComponent::alert(
            SleepRule::LowEfficiency,
            10,
            "Low sleep efficiency.",
            "Improve sleep efficiency by maintaining a consistent sleep schedule and creating a conducive sleep environment.",
        ));
    }

    let rem = metrics.rem_percent;
    if rem < LOW_REM {
        components.push(ScoreComponent::alert(
            SleepRule::LowRem,
            15,
            "Low REM sleep percentage.",
            "To increase REM sleep, prioritize consistent sleep, reduce alcohol intake before bed, and manage stress.",
        ));
    } else if rem > HIGH_REM {
        components.push(ScoreComponent::alert(
            SleepRule::HighRem,
            5,
            "High REM sleep percentage.",
            "Elevated REM can follow sleep deprivation or stress. Keep a regular schedule and monitor how rested you feel.",
        ));
    }

    if metrics.is_minor() {
        components.push(ScoreComponent::alert(
            SleepRule::AgeOutsideAdultRange,
            0,
            "Age out of typical adult range; score thresholds are calibrated for adults.",
            "Teenagers generally need 8-10 hours of sleep. Discuss sleep needs with a pediatrician.",
        ));
    } else if metrics.is_older_adult() && hours > OLDER_ADULT_MAX_HOURS {
        components.push(ScoreComponent::alert(
            SleepRule::OlderAdultExcessiveSleep,
            5,
            "Older adult, potentially excessive sleep.",
            "Adults over 65 typically need 7-8 hours. Long sleep durations may be worth mentioning at your next check-up.",
        ));
    }

    if metrics.is_female() && hours < FEMALE_MIN_HOURS {
        components.push(ScoreComponent::suggestion_only(
            SleepRule::FemaleShortSleep,
            "Women are more prone to insomnia and often benefit from a little extra sleep. Aim for at least 7 hours per night.",
        ));
    }

    let deductions: i16 = components
        .iter()
        .map(|component| i16::from(component.deduction))
        .sum();

    (components, BASELINE_SCORE - deductions)
}
