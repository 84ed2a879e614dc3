//! Tier tables and point weights for the marketing health score.

use crate::lookup::{lookup, Table};

/// Tier assigned to any categorical answer missing from its table.
pub const DEFAULT_TIER: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimension {
    /// Points per tier.
    pub weight: u32,
    pub max_tier: u8,
}

pub const BUSINESS_AGE: Dimension = Dimension { weight: 20, max_tier: 4 };
pub const MARKETING_BUDGET: Dimension = Dimension { weight: 25, max_tier: 5 };
pub const CHANNEL_DIVERSITY: Dimension = Dimension { weight: 15, max_tier: 5 };
pub const CONTENT_STRATEGY: Dimension = Dimension { weight: 15, max_tier: 4 };
pub const CUSTOMER_FEEDBACK: Dimension = Dimension { weight: 10, max_tier: 4 };
pub const COMPETITOR_ANALYSIS: Dimension = Dimension { weight: 10, max_tier: 4 };
pub const DATA_ANALYSIS: Dimension = Dimension { weight: 5, max_tier: 4 };

pub const DIMENSIONS: [Dimension; 7] = [
    BUSINESS_AGE,
    MARKETING_BUDGET,
    CHANNEL_DIVERSITY,
    CONTENT_STRATEGY,
    CUSTOMER_FEEDBACK,
    COMPETITOR_ANALYSIS,
    DATA_ANALYSIS,
];

pub const BUSINESS_AGE_TIERS: &Table<u8> =
    &[("less-than-1-year", 1), ("1-3-years", 2), ("3-5-years", 3), ("5-plus-years", 4)];

/// Monthly budget bands in rupees (`l` = lakh).
pub const MARKETING_BUDGET_TIERS: &Table<u8> = &[
    ("under-50k", 1),
    ("50k-2l", 2),
    ("2l-5l", 3),
    ("5l-10l", 4),
    ("above-10l", 5),
];

pub const CONTENT_STRATEGY_TIERS: &Table<u8> = &[
    ("no-strategy", 1),
    ("basic-posting", 2),
    ("planned-content", 3),
    ("comprehensive-strategy", 4),
];

pub const CUSTOMER_FEEDBACK_TIERS: &Table<u8> = &[
    ("no-system", 1),
    ("basic-reviews", 2),
    ("regular-surveys", 3),
    ("comprehensive-system", 4),
];

pub const COMPETITOR_ANALYSIS_TIERS: &Table<u8> =
    &[("never", 1), ("rarely", 2), ("monthly", 3), ("weekly", 4)];

pub const DATA_ANALYSIS_TIERS: &Table<u8> =
    &[("never", 1), ("monthly", 2), ("weekly", 3), ("daily", 4)];

pub fn tier(table: &Table<u8>, answer: &str) -> u8 {
    *lookup(table, answer, &DEFAULT_TIER)
}

/// Channel diversity is the channel count itself, capped at the top tier.
pub fn channel_diversity_tier(channel_count: usize) -> u8 {
    channel_count.min(usize::from(CHANNEL_DIVERSITY.max_tier)) as u8
}

/// Points available when every dimension sits at its top tier.
pub fn max_score() -> u32 {
    DIMENSIONS.iter().map(|dimension| u32::from(dimension.max_tier) * dimension.weight).sum()
}

#[cfg(test)]
mod tests {
    use super::{
        channel_diversity_tier, max_score, tier, BUSINESS_AGE_TIERS, DATA_ANALYSIS_TIERS,
        MARKETING_BUDGET_TIERS,
    };

    #[test]
    fn max_score_matches_weight_table() {
        assert_eq!(max_score(), 80 + 125 + 75 + 60 + 40 + 40 + 20);
    }

    #[test]
    fn unknown_answers_default_to_lowest_tier() {
        assert_eq!(tier(BUSINESS_AGE_TIERS, "since-the-dawn-of-time"), 1);
        assert_eq!(tier(DATA_ANALYSIS_TIERS, ""), 1);
        assert_eq!(tier(MARKETING_BUDGET_TIERS, "above-10l"), 5);
    }

    #[test]
    fn channel_diversity_caps_at_five() {
        assert_eq!(channel_diversity_tier(0), 0);
        assert_eq!(channel_diversity_tier(3), 3);
        assert_eq!(channel_diversity_tier(12), 5);
    }
}
