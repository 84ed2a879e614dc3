use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::fields::Coercion;
use crate::errors::FieldViolation;

/// ROI calculator form body as submitted. Every field is optional so that
/// missing or wrongly typed values surface as field violations rather than a
/// parse failure.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawRoiRequest")]
pub struct RoiRequest {
    pub current_revenue: Option<f64>,
    pub conversion_rate: Option<f64>,
    pub average_order_value: Option<f64>,
    pub monthly_traffic: Option<f64>,
    pub industry: Option<String>,
    pub marketing_channels: Option<Vec<String>>,
    /// Fields whose submitted value had an unusable JSON type.
    #[serde(skip)]
    pub type_violations: Vec<FieldViolation>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawRoiRequest {
    current_revenue: Option<Value>,
    conversion_rate: Option<Value>,
    average_order_value: Option<Value>,
    monthly_traffic: Option<Value>,
    industry: Option<Value>,
    marketing_channels: Option<Value>,
}

impl From<RawRoiRequest> for RoiRequest {
    fn from(raw: RawRoiRequest) -> Self {
        let mut coercion = Coercion::default();
        Self {
            current_revenue: coercion.number("currentRevenue", raw.current_revenue),
            conversion_rate: coercion.number("conversionRate", raw.conversion_rate),
            average_order_value: coercion.number("averageOrderValue", raw.average_order_value),
            monthly_traffic: coercion.number("monthlyTraffic", raw.monthly_traffic),
            industry: coercion.text("industry", raw.industry),
            marketing_channels: coercion.text_list("marketingChannels", raw.marketing_channels),
            type_violations: coercion.into_violations(),
        }
    }
}

/// Business metrics that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiInput {
    pub current_revenue: f64,
    /// Percentage, `0.1..=50`.
    pub conversion_rate: f64,
    pub average_order_value: f64,
    pub monthly_traffic: u64,
    /// Industry key; unknown keys resolve to the `other` benchmark row.
    pub industry: String,
    pub marketing_channels: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiProjection {
    pub current_metrics: BusinessMetrics,
    pub potential_metrics: BusinessMetrics,
    pub improvements: Improvements,
    pub projections: Projections,
    pub investment: Investment,
    pub channel_recommendations: Vec<ChannelRecommendation>,
    pub industry_benchmarks: BenchmarkSummary,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMetrics {
    pub revenue: i64,
    /// One decimal place.
    pub conversion_rate: f64,
    pub customers: i64,
    pub cac: i64,
    pub aov: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Improvements {
    pub revenue_increase: i64,
    pub revenue_increase_percentage: i64,
    pub conversion_improvement: i64,
    pub cac_reduction: i64,
    pub customer_increase: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Projections {
    pub month3: ProjectionPoint,
    pub month6: ProjectionPoint,
    pub month12: ProjectionPoint,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub revenue: i64,
    pub improvement: i64,
    pub customers: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub estimated: i64,
    pub roi: i64,
    /// Months until the investment is recovered. `None` when the projection
    /// shows no revenue increase, since no payback point exists.
    pub payback_period: Option<u32>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelPriority {
    High,
    Medium,
    Low,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRecommendation {
    pub channel: String,
    pub improvement: String,
    pub priority: ChannelPriority,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkSummary {
    pub conversion_improvement: String,
    pub roas_improvement: String,
    pub cac_reduction: String,
}

#[cfg(test)]
mod tests {
    use super::RoiRequest;

    #[test]
    fn request_accepts_camel_case_body_with_missing_fields() {
        let request: RoiRequest = serde_json::from_str(
            r#"{"currentRevenue": 150000, "industry": "fashion", "marketingChannels": ["seo"]}"#,
        )
        .expect("partial body should deserialize");

        assert_eq!(request.current_revenue, Some(150000.0));
        assert_eq!(request.conversion_rate, None);
        assert_eq!(request.industry.as_deref(), Some("fashion"));
        assert_eq!(request.marketing_channels, Some(vec!["seo".to_string()]));
    }

    #[test]
    fn wrongly_typed_values_are_recorded_not_fatal() {
        let request: RoiRequest =
            serde_json::from_str(r#"{"currentRevenue": true, "monthlyTraffic": "15000"}"#)
                .expect("wrong types should still deserialize");

        assert_eq!(request.current_revenue, None);
        assert_eq!(request.monthly_traffic, Some(15_000.0));
        assert_eq!(request.type_violations.len(), 1);
        assert_eq!(request.type_violations[0].field, "currentRevenue");
    }
}
