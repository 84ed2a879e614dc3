//! ROI projection engine.
//!
//! Maps a validated set of business metrics to current and potential
//! performance using the per-industry benchmark table. All intermediate
//! arithmetic is carried at full precision; rounding happens only when the
//! output structs are built.

pub mod benchmarks;
pub mod channels;

use crate::domain::roi::{
    BenchmarkSummary, BusinessMetrics, Improvements, Investment, ProjectionPoint, Projections,
    RoiInput, RoiProjection, RoiRequest,
};
use crate::errors::DomainError;
use crate::validation::validate_roi_request;

use self::benchmarks::{benchmark_for, IndustryBenchmark};
use self::channels::recommend_channels;

/// Industry-realistic ceiling for the projected conversion rate, in percent.
pub const MAX_POTENTIAL_CONVERSION_RATE: f64 = 25.0;
pub const INVESTMENT_REVENUE_SHARE: f64 = 0.15;
pub const MIN_ESTIMATED_INVESTMENT: f64 = 50_000.0;

/// Share of the twelve-month improvement realised at each milestone. Linear
/// interpolation, not a growth curve.
pub const MONTH_3_PROGRESS: f64 = 0.30;
pub const MONTH_6_PROGRESS: f64 = 0.65;
pub const MONTH_12_PROGRESS: f64 = 1.00;

// Absorbs float residue such as 1049.9999999999998 before flooring a count.
const COUNT_EPSILON: f64 = 1e-9;

// 2^53: the largest magnitude below which every integer is an exact f64.
const MAX_REPORTED_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

pub trait RoiEngine: Send + Sync {
    fn project(&self, input: &RoiInput) -> Result<RoiProjection, DomainError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BenchmarkRoiEngine;

impl RoiEngine for BenchmarkRoiEngine {
    fn project(&self, input: &RoiInput) -> Result<RoiProjection, DomainError> {
        project_roi(input)
    }
}

/// Validates the raw form body and projects it.
pub fn compute_roi(request: &RoiRequest) -> Result<RoiProjection, DomainError> {
    let input = validate_roi_request(request)?;
    project_roi(&input)
}

pub fn project_roi(input: &RoiInput) -> Result<RoiProjection, DomainError> {
    let benchmark = benchmark_for(&input.industry);
    let traffic = input.monthly_traffic as f64;

    let current_customers = floor_count(traffic * input.conversion_rate / 100.0);
    if current_customers < 1.0 {
        return Err(DomainError::NoViableCustomerBase);
    }
    let current_cac = input.current_revenue / current_customers;

    let potential_rate = potential_conversion_rate(input.conversion_rate, benchmark);
    let potential_customers = floor_count(traffic * potential_rate / 100.0);
    let potential_revenue = potential_customers * input.average_order_value;
    let potential_cac = current_cac * benchmark.cac_reduction;

    let revenue_increase = potential_revenue - input.current_revenue;
    let revenue_increase_pct = revenue_increase / input.current_revenue * 100.0;
    let customer_increase = potential_customers - current_customers;

    let milestone = |progress: f64| -> Result<ProjectionPoint, DomainError> {
        Ok(ProjectionPoint {
            revenue: whole(input.current_revenue + revenue_increase * progress)?,
            improvement: whole(revenue_increase_pct * progress)?,
            customers: whole(current_customers + customer_increase * progress)?,
        })
    };

    let estimated_investment =
        (input.current_revenue * INVESTMENT_REVENUE_SHARE).max(MIN_ESTIMATED_INVESTMENT);
    let roi = (revenue_increase * 12.0 - estimated_investment) / estimated_investment;

    Ok(RoiProjection {
        current_metrics: BusinessMetrics {
            revenue: whole(input.current_revenue)?,
            conversion_rate: one_decimal(input.conversion_rate),
            customers: whole(current_customers)?,
            cac: whole(current_cac)?,
            aov: whole(input.average_order_value)?,
        },
        potential_metrics: BusinessMetrics {
            revenue: whole(potential_revenue)?,
            conversion_rate: one_decimal(potential_rate),
            customers: whole(potential_customers)?,
            cac: whole(potential_cac)?,
            aov: whole(input.average_order_value)?,
        },
        improvements: Improvements {
            revenue_increase: whole(revenue_increase)?,
            revenue_increase_percentage: whole(revenue_increase_pct)?,
            conversion_improvement: whole(
                (potential_rate - input.conversion_rate) / input.conversion_rate * 100.0,
            )?,
            cac_reduction: whole((1.0 - benchmark.cac_reduction) * 100.0)?,
            customer_increase: whole(customer_increase)?,
        },
        projections: Projections {
            month3: milestone(MONTH_3_PROGRESS)?,
            month6: milestone(MONTH_6_PROGRESS)?,
            month12: milestone(MONTH_12_PROGRESS)?,
        },
        investment: Investment {
            estimated: whole(estimated_investment)?,
            roi: whole(roi * 100.0)?,
            payback_period: payback_period_months(estimated_investment, revenue_increase),
        },
        channel_recommendations: recommend_channels(&input.marketing_channels),
        industry_benchmarks: summarize(benchmark)?,
    })
}

pub fn potential_conversion_rate(conversion_rate: f64, benchmark: &IndustryBenchmark) -> f64 {
    (conversion_rate * benchmark.conversion_improvement).min(MAX_POTENTIAL_CONVERSION_RATE)
}

/// Months of the monthly revenue increase needed to cover the investment.
/// `None` when there is no increase to pay it back with.
pub fn payback_period_months(estimated_investment: f64, revenue_increase: f64) -> Option<u32> {
    if revenue_increase <= 0.0 {
        return None;
    }
    let months = (estimated_investment / (revenue_increase / 12.0)).ceil();
    Some(months.min(u32::MAX as f64) as u32)
}

fn summarize(benchmark: &IndustryBenchmark) -> Result<BenchmarkSummary, DomainError> {
    Ok(BenchmarkSummary {
        conversion_improvement: format!("{:.1}x", benchmark.conversion_improvement),
        roas_improvement: format!("{:.1}x", benchmark.roas_improvement),
        cac_reduction: format!("{}%", whole((1.0 - benchmark.cac_reduction) * 100.0)?),
    })
}

fn floor_count(value: f64) -> f64 {
    (value + COUNT_EPSILON).floor()
}

fn whole(value: f64) -> Result<i64, DomainError> {
    let rounded = value.round();
    if !rounded.is_finite() || rounded.abs() > MAX_REPORTED_MAGNITUDE {
        return Err(DomainError::ProjectionOutOfRange);
    }
    Ok(rounded as i64)
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
