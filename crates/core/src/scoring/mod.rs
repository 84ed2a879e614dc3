//! Marketing health scorer.
//!
//! Seven weighted dimensions are summed and normalized against the best
//! possible answer set:
//!
//! health_score = Σ(tier × weight) / Σ(max_tier × weight) × 100

pub mod rules;
pub mod weights;

use crate::domain::survey::{
    BenchmarkComparison, HealthReport, HealthSurvey, HealthSurveyRequest, Percentile,
    ScoreBreakdown, ScoreCategory,
};
use crate::errors::DomainError;
use crate::lookup::{lookup, Table};
use crate::validation::validate_survey_request;

use self::rules::{priority_actions, recommendations, RuleContext};
use self::weights::{
    channel_diversity_tier, max_score, tier, BUSINESS_AGE, BUSINESS_AGE_TIERS, CHANNEL_DIVERSITY,
    COMPETITOR_ANALYSIS, COMPETITOR_ANALYSIS_TIERS, CONTENT_STRATEGY, CONTENT_STRATEGY_TIERS,
    CUSTOMER_FEEDBACK, CUSTOMER_FEEDBACK_TIERS, DATA_ANALYSIS, DATA_ANALYSIS_TIERS,
    MARKETING_BUDGET, MARKETING_BUDGET_TIERS,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeerBenchmark {
    pub average: u8,
    pub good: u8,
}

pub const DEFAULT_PEER_BENCHMARK: PeerBenchmark = PeerBenchmark { average: 55, good: 75 };

/// Typical scores for businesses of a similar age.
pub const PEER_BENCHMARKS: &Table<PeerBenchmark> = &[
    ("less-than-1-year", PeerBenchmark { average: 45, good: 65 }),
    ("1-3-years", DEFAULT_PEER_BENCHMARK),
    ("3-5-years", PeerBenchmark { average: 62, good: 80 }),
    ("5-plus-years", PeerBenchmark { average: 68, good: 85 }),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImprovementPlan {
    pub min_score: u8,
    pub next_steps: [&'static str; 3],
    pub estimated_time: &'static str,
}

/// Highest `min_score` first; the last entry catches everything else.
pub static IMPROVEMENT_PLANS: [ImprovementPlan; 4] = [
    ImprovementPlan {
        min_score: 80,
        next_steps: [
            "Scale your best-performing channels with increased budget",
            "Introduce marketing automation and personalization",
            "Test new markets and audience segments",
        ],
        estimated_time: "1-2 months",
    },
    ImprovementPlan {
        min_score: 65,
        next_steps: [
            "Optimize conversion funnels on your existing channels",
            "Invest in retention and loyalty programs",
            "Add one new high-potential acquisition channel",
        ],
        estimated_time: "2-3 months",
    },
    ImprovementPlan {
        min_score: 50,
        next_steps: [
            "Document a marketing strategy with measurable quarterly goals",
            "Set up analytics dashboards and weekly reporting",
            "Build a consistent content publishing routine",
        ],
        estimated_time: "3-4 months",
    },
    ImprovementPlan {
        min_score: 0,
        next_steps: [
            "Book a free marketing audit with our strategy team",
            "Put foundational analytics and conversion tracking in place",
            "Define target audience personas and core messaging",
        ],
        estimated_time: "4-6 months",
    },
];

pub trait HealthScorer: Send + Sync {
    fn score(&self, survey: &HealthSurvey) -> HealthReport;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WeightedHealthScorer;

impl HealthScorer for WeightedHealthScorer {
    fn score(&self, survey: &HealthSurvey) -> HealthReport {
        score_survey(survey)
    }
}

/// Validates the raw quiz body and scores it.
pub fn compute_health_score(request: &HealthSurveyRequest) -> Result<HealthReport, DomainError> {
    let survey = validate_survey_request(request)?;
    Ok(score_survey(&survey))
}

pub fn score_survey(survey: &HealthSurvey) -> HealthReport {
    let breakdown = breakdown(survey);
    let health_score = normalize(weighted_total(&breakdown), max_score());
    let context = RuleContext { survey, score: health_score };
    let plan = improvement_plan(health_score);

    HealthReport {
        health_score,
        score_category: ScoreCategory::from_score(health_score),
        breakdown,
        recommendations: recommendations(&context),
        priority_actions: priority_actions(&context),
        next_steps: plan.next_steps.iter().map(|step| step.to_string()).collect(),
        estimated_improvement_time: plan.estimated_time.to_string(),
        benchmark_comparison: compare_with_peers(&survey.business_age, health_score),
    }
}

pub fn breakdown(survey: &HealthSurvey) -> ScoreBreakdown {
    ScoreBreakdown {
        business_age: tier(BUSINESS_AGE_TIERS, &survey.business_age),
        marketing_budget: tier(MARKETING_BUDGET_TIERS, &survey.marketing_budget),
        channel_diversity: channel_diversity_tier(survey.current_channels.len()),
        content_strategy: tier(CONTENT_STRATEGY_TIERS, &survey.content_strategy),
        customer_feedback: tier(CUSTOMER_FEEDBACK_TIERS, &survey.customer_feedback),
        competitor_analysis: tier(COMPETITOR_ANALYSIS_TIERS, &survey.competitor_analysis),
        data_analysis: tier(DATA_ANALYSIS_TIERS, &survey.data_analysis),
    }
}

pub fn weighted_total(breakdown: &ScoreBreakdown) -> u32 {
    [
        (breakdown.business_age, BUSINESS_AGE.weight),
        (breakdown.marketing_budget, MARKETING_BUDGET.weight),
        (breakdown.channel_diversity, CHANNEL_DIVERSITY.weight),
        (breakdown.content_strategy, CONTENT_STRATEGY.weight),
        (breakdown.customer_feedback, CUSTOMER_FEEDBACK.weight),
        (breakdown.competitor_analysis, COMPETITOR_ANALYSIS.weight),
        (breakdown.data_analysis, DATA_ANALYSIS.weight),
    ]
    .into_iter()
    .map(|(tier, weight)| u32::from(tier) * weight)
    .sum()
}

fn normalize(total: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    let percent = (f64::from(total) / f64::from(max) * 100.0).round();
    percent.clamp(0.0, 100.0) as u8
}

pub fn improvement_plan(score: u8) -> &'static ImprovementPlan {
    IMPROVEMENT_PLANS
        .iter()
        .find(|plan| score >= plan.min_score)
        .unwrap_or(&IMPROVEMENT_PLANS[IMPROVEMENT_PLANS.len() - 1])
}

pub fn compare_with_peers(business_age: &str, score: u8) -> BenchmarkComparison {
    let peers = lookup(PEER_BENCHMARKS, business_age, &DEFAULT_PEER_BENCHMARK);
    let percentile = if score > peers.good {
        Percentile::TopQuartile
    } else if score > peers.average {
        Percentile::AboveAverage
    } else {
        Percentile::BelowAverage
    };

    BenchmarkComparison {
        your_score: score,
        industry_average: peers.average,
        good_score: peers.good,
        percentile,
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compare_with_peers, compute_health_score, improvement_plan, score_survey, HealthScorer,
        WeightedHealthScorer,
    };
    use crate::domain::survey::{HealthSurvey, HealthSurveyRequest, Percentile, ScoreCategory};
    use crate::errors::DomainError;

    fn reference_survey() -> HealthSurvey {
        HealthSurvey {
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
        }
    }

    #[test]
    fn reference_survey_scores_sixty_four() {
        let report = score_survey(&reference_survey());

        // 280 of 440 points.
        assert_eq!(report.health_score, 64);
        assert_eq!(report.score_category, ScoreCategory::Average);
        assert_eq!(report.breakdown.business_age, 2);
        assert_eq!(report.breakdown.channel_diversity, 3);
        assert!(report.recommendations.is_empty());
        assert!(report.priority_actions.is_empty());
        assert_eq!(report.estimated_improvement_time, "3-4 months");
        assert_eq!(report.next_steps.len(), 3);
    }

    #[test]
    fn best_answers_score_one_hundred() {
        let survey = HealthSurvey {
            business_age: "5-plus-years".to_string(),
            marketing_budget: "above-10l".to_string(),
            current_channels: (0..8).map(|index| format!("channel-{index}")).collect(),
            content_strategy: "comprehensive-strategy".to_string(),
            customer_feedback: "comprehensive-system".to_string(),
            competitor_analysis: "weekly".to_string(),
            data_analysis: "daily".to_string(),
        };

        let report = score_survey(&survey);
        assert_eq!(report.health_score, 100);
        assert_eq!(report.score_category, ScoreCategory::Excellent);
        assert_eq!(report.benchmark_comparison.percentile, Percentile::TopQuartile);
        assert_eq!(report.estimated_improvement_time, "1-2 months");
    }

    #[test]
    fn unrecognized_answers_score_at_lowest_tier() {
        let survey = HealthSurvey {
            business_age: "ancient".to_string(),
            marketing_budget: "secret".to_string(),
            current_channels: vec!["word-of-mouth".to_string()],
            content_strategy: "improvised".to_string(),
            customer_feedback: "gut-feel".to_string(),
            competitor_analysis: "sometimes".to_string(),
            data_analysis: "yearly".to_string(),
        };

        let report = score_survey(&survey);
        // 100 of 440 points.
        assert_eq!(report.health_score, 23);
        assert_eq!(report.score_category, ScoreCategory::Critical);
        assert_eq!(report.benchmark_comparison.industry_average, 55);
        assert_eq!(report.benchmark_comparison.good_score, 75);
        assert_eq!(report.priority_actions.len(), 1);
        assert!(report.recommendations.last().is_some_and(|text| text.contains("agency")));
    }

    #[test]
    fn weakest_known_answers_fill_every_priority_slot() {
        let survey = HealthSurvey {
            business_age: "less-than-1-year".to_string(),
            marketing_budget: "under-50k".to_string(),
            current_channels: vec!["social-media".to_string()],
            content_strategy: "no-strategy".to_string(),
            customer_feedback: "no-system".to_string(),
            competitor_analysis: "never".to_string(),
            data_analysis: "never".to_string(),
        };

        let report = score_survey(&survey);
        assert_eq!(report.priority_actions.len(), 3);
        assert_eq!(report.recommendations.len(), 6);
        assert_eq!(report.benchmark_comparison.industry_average, 45);
    }

    #[test]
    fn peer_comparison_uses_strict_thresholds() {
        assert_eq!(compare_with_peers("1-3-years", 76).percentile, Percentile::TopQuartile);
        assert_eq!(compare_with_peers("1-3-years", 75).percentile, Percentile::AboveAverage);
        assert_eq!(compare_with_peers("1-3-years", 56).percentile, Percentile::AboveAverage);
        assert_eq!(compare_with_peers("1-3-years", 55).percentile, Percentile::BelowAverage);
        assert_eq!(compare_with_peers("unknown", 60).industry_average, 55);
        assert_eq!(compare_with_peers("3-5-years", 81).percentile, Percentile::TopQuartile);
    }

    #[test]
    fn improvement_plans_share_category_thresholds() {
        assert_eq!(improvement_plan(80).estimated_time, "1-2 months");
        assert_eq!(improvement_plan(79).estimated_time, "2-3 months");
        assert_eq!(improvement_plan(65).estimated_time, "2-3 months");
        assert_eq!(improvement_plan(50).estimated_time, "3-4 months");
        assert_eq!(improvement_plan(49).estimated_time, "4-6 months");
        assert_eq!(improvement_plan(0).estimated_time, "4-6 months");
    }

    #[test]
    fn compute_health_score_requires_channels() {
        let request = HealthSurveyRequest {
            business_age: Some("1-3-years".to_string()),
            marketing_budget: Some("2l-5l".to_string()),
            current_channels: Some(Vec::new()),
            content_strategy: Some("planned-content".to_string()),
            customer_feedback: Some("regular-surveys".to_string()),
            competitor_analysis: Some("monthly".to_string()),
            data_analysis: Some("weekly".to_string()),
            ..HealthSurveyRequest::default()
        };

        match compute_health_score(&request) {
            Err(DomainError::Validation(violations)) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].field, "currentChannels");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn scorer_is_deterministic() {
        let scorer = WeightedHealthScorer;
        let first = serde_json::to_string(&scorer.score(&reference_survey())).expect("json");
        let second = serde_json::to_string(&scorer.score(&reference_survey())).expect("json");

        assert_eq!(first, second);
    }
}
