use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::Coercion;
use crate::errors::FieldViolation;

/// Marketing health quiz body as submitted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawHealthSurveyRequest")]
pub struct HealthSurveyRequest {
    pub business_age: Option<String>,
    pub marketing_budget: Option<String>,
    pub current_channels: Option<Vec<String>>,
    pub content_strategy: Option<String>,
    pub customer_feedback: Option<String>,
    pub competitor_analysis: Option<String>,
    pub data_analysis: Option<String>,
    #[serde(skip)]
    pub type_violations: Vec<FieldViolation>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawHealthSurveyRequest {
    business_age: Option<Value>,
    marketing_budget: Option<Value>,
    current_channels: Option<Value>,
    content_strategy: Option<Value>,
    customer_feedback: Option<Value>,
    competitor_analysis: Option<Value>,
    data_analysis: Option<Value>,
}

impl From<RawHealthSurveyRequest> for HealthSurveyRequest {
    fn from(raw: RawHealthSurveyRequest) -> Self {
        let mut coercion = Coercion::default();
        Self {
            business_age: coercion.text("businessAge", raw.business_age),
            marketing_budget: coercion.text("marketingBudget", raw.marketing_budget),
            current_channels: coercion.text_list("currentChannels", raw.current_channels),
            content_strategy: coercion.text("contentStrategy", raw.content_strategy),
            customer_feedback: coercion.text("customerFeedback", raw.customer_feedback),
            competitor_analysis: coercion.text("competitorAnalysis", raw.competitor_analysis),
            data_analysis: coercion.text("dataAnalysis", raw.data_analysis),
            type_violations: coercion.into_violations(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSurvey {
    pub business_age: String,
    pub marketing_budget: String,
    pub current_channels: Vec<String>,
    pub content_strategy: String,
    pub customer_feedback: String,
    pub competitor_analysis: String,
    pub data_analysis: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCategory {
    Critical,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
    Average,
    Good,
    Excellent,
}

impl ScoreCategory {
    /// Left-inclusive thresholds; the highest matching bucket wins.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            65..=79 => Self::Good,
            50..=64 => Self::Average,
            35..=49 => Self::NeedsImprovement,
            _ => Self::Critical,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::NeedsImprovement => "Needs Improvement",
            Self::Average => "Average",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub health_score: u8,
    pub score_category: ScoreCategory,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
    pub priority_actions: Vec<PriorityAction>,
    pub next_steps: Vec<String>,
    pub estimated_improvement_time: String,
    pub benchmark_comparison: BenchmarkComparison,
}

/// Tier reached on each weighted dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub business_age: u8,
    pub marketing_budget: u8,
    pub channel_diversity: u8,
    pub content_strategy: u8,
    pub customer_feedback: u8,
    pub competitor_analysis: u8,
    pub data_analysis: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityAction {
    pub action: String,
    pub impact: String,
    pub effort: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Percentile {
    #[serde(rename = "Top 25%")]
    TopQuartile,
    #[serde(rename = "Above Average")]
    AboveAverage,
    #[serde(rename = "Below Average")]
    BelowAverage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkComparison {
    pub your_score: u8,
    pub industry_average: u8,
    pub good_score: u8,
    pub percentile: Percentile,
}

#[cfg(test)]
mod tests {
    use super::{Percentile, ScoreCategory};

    #[test]
    fn category_boundaries_are_left_inclusive() {
        let cases = [
            (100, ScoreCategory::Excellent),
            (80, ScoreCategory::Excellent),
            (79, ScoreCategory::Good),
            (65, ScoreCategory::Good),
            (64, ScoreCategory::Average),
            (50, ScoreCategory::Average),
            (49, ScoreCategory::NeedsImprovement),
            (35, ScoreCategory::NeedsImprovement),
            (34, ScoreCategory::Critical),
            (0, ScoreCategory::Critical),
        ];

        for (score, expected) in cases {
            assert_eq!(ScoreCategory::from_score(score), expected, "score {score}");
        }
    }

    #[test]
    fn categories_and_percentiles_serialize_as_display_labels() {
        assert_eq!(
            serde_json::to_string(&ScoreCategory::NeedsImprovement).expect("serialize"),
            "\"Needs Improvement\""
        );
        assert_eq!(ScoreCategory::NeedsImprovement.label(), "Needs Improvement");
        assert_eq!(
            serde_json::to_string(&Percentile::TopQuartile).expect("serialize"),
            "\"Top 25%\""
        );
    }
}
