use shield_sleep::scoring::{evaluate, MetricsSubmission, ScoreResponse, SleepMetrics, SleepRule};

fn metrics(hours: f64, efficiency: f64, rem: f64, age: u8, sex: &str) -> SleepMetrics {
    SleepMetrics {
        total_sleep_hours: hours,
        sleep_efficiency_percent: efficiency,
        rem_percent: rem,
        age,
        sex: sex.to_string(),
    }
}

#[test]
fn validated_submission_flows_into_wire_response() {
    let submission: MetricsSubmission = serde_json::from_str(
        r#"{"totalSleepHours":4.5,"sleepEfficiencyPercent":70,"remPercent":10,"age":70,"sex":"Male"}"#,
    )
    .expect("submission decodes");

    let metrics = submission.validate().expect("submission valid");
    let response = ScoreResponse::from(evaluate(&metrics));
    let body = serde_json::to_value(&response).expect("response encodes");

    assert_eq!(body["score"], 40);
    assert_eq!(body["bioAgeDelta"], "+12.0");
    assert_eq!(body["alerts"].as_array().map(Vec::len), Some(4));
    assert_eq!(body["suggestions"].as_array().map(Vec::len), Some(4));
}

#[test]
fn alerts_follow_rule_table_order() {
    let result = evaluate(&metrics(10.0, 80.0, 40.0, 16, "female"));

    let rules: Vec<SleepRule> = result
        .components
        .iter()
        .map(|component| component.rule)
        .collect();
    assert_eq!(
        rules,
        vec![
            SleepRule::ExcessiveSleep,
            SleepRule::LowEfficiency,
            SleepRule::HighRem,
            SleepRule::AgeOutsideAdultRange,
        ]
    );
    assert_eq!(result.score, 80);
    assert_eq!(result.bio_age_delta.to_string(), "-0.1");
    assert_eq!(result.alerts.len(), result.suggestions.len());
}

#[test]
fn repeated_evaluation_is_identical() {
    for hours in [4.0, 5.5, 7.0, 9.0, 10.0] {
        for efficiency in [60.0, 80.0, 95.0] {
            for rem in [10.0, 20.0, 35.0] {
                let sample = metrics(hours, efficiency, rem, 70, "Female");
                let first = evaluate(&sample);
                let second = evaluate(&sample);
                assert_eq!(first, second);
                assert_eq!(first.bio_age_delta, second.bio_age_delta);
            }
        }
    }
}

#[test]
fn full_result_serializes_audit_trail() {
    let result = evaluate(&metrics(6.5, 90.0, 20.0, 30, "Female"));
    let body = serde_json::to_value(&result).expect("result encodes");

    assert_eq!(body["score"], 100);
    assert_eq!(body["components"][0]["rule"], "female_short_sleep");
    assert!(body["components"][0].get("alert").is_none());
}
