use std::path::Path;

use growthdesk_core::domain::roi::RoiRequest;
use growthdesk_core::validation::validate_roi_request;
use growthdesk_core::{BenchmarkRoiEngine, RoiEngine};

use crate::commands::{evaluate_file, CommandResult};

pub fn run(input: &Path) -> CommandResult {
    let engine = BenchmarkRoiEngine;
    evaluate_file("roi", input, |request: &RoiRequest| {
        validate_roi_request(request).and_then(|validated| engine.project(&validated))
    })
}
