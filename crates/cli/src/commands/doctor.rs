use growthdesk_core::config::{AppConfig, LoadOptions};
use growthdesk_core::domain::roi::RoiInput;
use growthdesk_core::domain::survey::HealthSurvey;
use growthdesk_core::{BenchmarkRoiEngine, HealthScorer, RoiEngine, WeightedHealthScorer};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let checks = vec![check_config(), check_roi_engine(), check_health_scorer()];

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_config() -> DoctorCheck {
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: format!("configuration valid; server would listen on {}", config.listen_address()),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

/// Runs the worked fashion-store projection and compares it with known figures.
fn check_roi_engine() -> DoctorCheck {
    let input = RoiInput {
        current_revenue: 150_000.0,
        conversion_rate: 2.5,
        average_order_value: 2_000.0,
        monthly_traffic: 15_000,
        industry: "fashion".to_string(),
        marketing_channels: vec!["google-ads".to_string()],
    };

    let outcome = BenchmarkRoiEngine.project(&input).map_err(|error| error.to_string()).and_then(
        |projection| {
            let observed = (
                projection.current_metrics.customers,
                projection.potential_metrics.customers,
                projection.improvements.revenue_increase,
            );
            if observed == (375, 1_050, 1_950_000) {
                Ok(())
            } else {
                Err(format!("reference projection drifted: {observed:?}"))
            }
        },
    );

    match outcome {
        Ok(()) => DoctorCheck {
            name: "roi_engine",
            status: CheckStatus::Pass,
            details: "reference projection reproduced".to_string(),
        },
        Err(details) => DoctorCheck { name: "roi_engine", status: CheckStatus::Fail, details },
    }
}

fn check_health_scorer() -> DoctorCheck {
    let survey = HealthSurvey {
        business_age: "1-3-years".to_string(),
        marketing_budget: "2l-5l".to_string(),
        current_channels: vec![
            "seo".to_string(),
            "social-media".to_string(),
            "email-marketing".to_string(),
        ],
        content_strategy: "planned-content".to_string(),
        customer_feedback: "regular-surveys".to_string(),
        competitor_analysis: "monthly".to_string(),
        data_analysis: "weekly".to_string(),
    };

    let report = WeightedHealthScorer.score(&survey);
    if report.health_score == 64 {
        DoctorCheck {
            name: "health_scorer",
            status: CheckStatus::Pass,
            details: "reference survey scored 64 (Average)".to_string(),
        }
    } else {
        DoctorCheck {
            name: "health_scorer",
            status: CheckStatus::Fail,
            details: format!("reference survey scored {} instead of 64", report.health_score),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
