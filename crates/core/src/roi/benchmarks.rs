use crate::lookup::{lookup, Table};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndustryBenchmark {
    /// Multiplier applied to the current conversion rate.
    pub conversion_improvement: f64,
    pub roas_improvement: f64,
    /// Fraction of the current CAC that remains after optimization.
    pub cac_reduction: f64,
}

pub const OTHER_INDUSTRY: IndustryBenchmark =
    IndustryBenchmark { conversion_improvement: 2.0, roas_improvement: 2.5, cac_reduction: 0.75 };

pub const INDUSTRY_BENCHMARKS: &Table<IndustryBenchmark> = &[
    (
        "fashion",
        IndustryBenchmark { conversion_improvement: 2.8, roas_improvement: 3.2, cac_reduction: 0.65 },
    ),
    (
        "electronics",
        IndustryBenchmark { conversion_improvement: 2.2, roas_improvement: 2.8, cac_reduction: 0.70 },
    ),
    (
        "beauty",
        IndustryBenchmark { conversion_improvement: 3.1, roas_improvement: 3.5, cac_reduction: 0.60 },
    ),
    (
        "home-garden",
        IndustryBenchmark { conversion_improvement: 2.4, roas_improvement: 2.9, cac_reduction: 0.68 },
    ),
    (
        "health-wellness",
        IndustryBenchmark { conversion_improvement: 2.6, roas_improvement: 3.0, cac_reduction: 0.65 },
    ),
    (
        "sports-fitness",
        IndustryBenchmark { conversion_improvement: 2.5, roas_improvement: 3.1, cac_reduction: 0.67 },
    ),
    ("other", OTHER_INDUSTRY),
];

/// Benchmark row for `industry`, or the `other` row when the key is unknown.
pub fn benchmark_for(industry: &str) -> &'static IndustryBenchmark {
    lookup(INDUSTRY_BENCHMARKS, industry, &OTHER_INDUSTRY)
}
