//! Ordered rule lists that turn survey answers into advice.
//!
//! Rules are evaluated top to bottom and each matching rule contributes exactly
//! one entry, so output order always follows table order.

use crate::domain::survey::{HealthSurvey, PriorityAction};

pub const MAX_PRIORITY_ACTIONS: usize = 3;
pub const AGENCY_REFERRAL_BELOW: u8 = 50;

#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub survey: &'a HealthSurvey,
    pub score: u8,
}

#[derive(Clone, Copy)]
pub struct Rule<T> {
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub output: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionTemplate {
    pub action: &'static str,
    pub impact: &'static str,
    pub effort: &'static str,
}

pub const RECOMMENDATION_RULES: &[Rule<&str>] = &[
    Rule {
        applies: fewer_than_three_channels,
        output: "Diversify your marketing channels. Businesses active on three or more channels \
                 reach customers at more points in their buying journey.",
    },
    Rule {
        applies: weak_content_strategy,
        output: "Develop a structured content strategy with a consistent publishing calendar to \
                 build authority and organic reach.",
    },
    Rule {
        applies: weak_feedback_system,
        output: "Implement a systematic customer feedback program to understand customer needs \
                 and improve retention.",
    },
    Rule {
        applies: infrequent_competitor_analysis,
        output: "Run regular competitor analysis to spot market gaps and stay ahead of industry \
                 trends.",
    },
    Rule {
        applies: infrequent_data_analysis,
        output: "Review performance data at least weekly with proper analytics tracking so \
                 budget decisions are driven by results.",
    },
    Rule {
        applies: needs_agency_support,
        output: "Consider partnering with a digital marketing agency to accelerate growth and \
                 build a solid marketing foundation.",
    },
];

pub const PRIORITY_ACTION_RULES: &[Rule<ActionTemplate>] = &[
    Rule {
        applies: no_data_analysis,
        output: ActionTemplate {
            action: "Set up website analytics and conversion tracking",
            impact: "High",
            effort: "Low",
        },
    },
    Rule {
        applies: fewer_than_two_channels,
        output: ActionTemplate {
            action: "Expand to at least two or three marketing channels",
            impact: "High",
            effort: "Medium",
        },
    },
    Rule {
        applies: no_content_strategy,
        output: ActionTemplate {
            action: "Create a 30-day content calendar",
            impact: "Medium",
            effort: "Low",
        },
    },
];

pub fn recommendations(context: &RuleContext<'_>) -> Vec<String> {
    RECOMMENDATION_RULES
        .iter()
        .filter(|rule| (rule.applies)(context))
        .map(|rule| rule.output.to_string())
        .collect()
}

pub fn priority_actions(context: &RuleContext<'_>) -> Vec<PriorityAction> {
    PRIORITY_ACTION_RULES
        .iter()
        .filter(|rule| (rule.applies)(context))
        .take(MAX_PRIORITY_ACTIONS)
        .map(|rule| PriorityAction {
            action: rule.output.action.to_string(),
            impact: rule.output.impact.to_string(),
            effort: rule.output.effort.to_string(),
        })
        .collect()
}

fn answer_is(answer: &str, candidates: &[&str]) -> bool {
    let answer = answer.trim();
    candidates.iter().any(|candidate| candidate.eq_ignore_ascii_case(answer))
}

fn fewer_than_three_channels(context: &RuleContext<'_>) -> bool {
    context.survey.current_channels.len() < 3
}

fn fewer_than_two_channels(context: &RuleContext<'_>) -> bool {
    context.survey.current_channels.len() < 2
}

fn weak_content_strategy(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.content_strategy, &["no-strategy", "basic-posting"])
}

fn no_content_strategy(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.content_strategy, &["no-strategy"])
}

fn weak_feedback_system(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.customer_feedback, &["no-system", "basic-reviews"])
}

fn infrequent_competitor_analysis(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.competitor_analysis, &["never", "rarely"])
}

fn infrequent_data_analysis(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.data_analysis, &["never", "monthly"])
}

fn no_data_analysis(context: &RuleContext<'_>) -> bool {
    answer_is(&context.survey.data_analysis, &["never"])
}

fn needs_agency_support(context: &RuleContext<'_>) -> bool {
    context.score < AGENCY_REFERRAL_BELOW
}
