use std::path::Path;

use growthdesk_core::domain::survey::HealthSurveyRequest;
use growthdesk_core::validation::validate_survey_request;
use growthdesk_core::{HealthScorer, WeightedHealthScorer};

use crate::commands::{evaluate_file, CommandResult};

pub fn run(input: &Path) -> CommandResult {
    let scorer = WeightedHealthScorer;
    evaluate_file("health", input, |request: &HealthSurveyRequest| {
        validate_survey_request(request).map(|survey| scorer.score(&survey))
    })
}
