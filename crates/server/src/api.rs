//! JSON API routes backing the agency website's interactive tools.
//!
//! Endpoints:
//! - `POST /api/roi-calculator`: project revenue and ROI from business metrics
//! - `POST /api/health-score`: score the marketing health quiz
//! - `POST /api/contact`: accept a contact form submission
//!
//! Every response uses the `{ success, data }` envelope; failures carry
//! `{ success: false, message, errors }`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};
use growthdesk_core::domain::contact::{ContactRequest, LeadAcknowledgement};
use growthdesk_core::domain::roi::{RoiProjection, RoiRequest};
use growthdesk_core::domain::survey::{HealthReport, HealthSurveyRequest};
use growthdesk_core::validation::{validate_roi_request, validate_survey_request};
use growthdesk_core::{
    accept_contact, ApplicationError, BenchmarkRoiEngine, DomainError, HealthScorer,
    InterfaceError, RoiEngine, WeightedHealthScorer,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::response::{ApiFailure, ApiResponse};

#[derive(Clone)]
pub struct ApiState {
    roi_engine: Arc<dyn RoiEngine>,
    health_scorer: Arc<dyn HealthScorer>,
}

impl ApiState {
    pub fn new(roi_engine: Arc<dyn RoiEngine>, health_scorer: Arc<dyn HealthScorer>) -> Self {
        Self { roi_engine, health_scorer }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        Self::new(Arc::new(BenchmarkRoiEngine), Arc::new(WeightedHealthScorer))
    }
}

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiFailure>;

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/api/roi-calculator", post(roi_calculator))
        .route("/api/health-score", post(health_score))
        .route("/api/contact", post(contact))
        .with_state(state)
}

pub async fn roi_calculator(
    State(state): State<ApiState>,
    payload: Result<Json<RoiRequest>, JsonRejection>,
) -> ApiResult<RoiProjection> {
    let correlation_id = correlation_id();
    let Json(request) = payload.map_err(|rejection| malformed_body(rejection, &correlation_id))?;

    let projection = validate_roi_request(&request)
        .and_then(|input| state.roi_engine.project(&input))
        .map_err(|error| rejected("api.roi.rejected", error, &correlation_id))?;

    info!(
        event_name = "api.roi.projected",
        correlation_id = %correlation_id,
        revenue_increase = projection.improvements.revenue_increase,
        roi_percent = projection.investment.roi,
        "roi projection computed"
    );

    Ok(ApiResponse::ok(projection))
}

pub async fn health_score(
    State(state): State<ApiState>,
    payload: Result<Json<HealthSurveyRequest>, JsonRejection>,
) -> ApiResult<HealthReport> {
    let correlation_id = correlation_id();
    let Json(request) = payload.map_err(|rejection| malformed_body(rejection, &correlation_id))?;

    let survey = validate_survey_request(&request)
        .map_err(|error| rejected("api.health_score.rejected", error, &correlation_id))?;
    let report = state.health_scorer.score(&survey);

    info!(
        event_name = "api.health_score.scored",
        correlation_id = %correlation_id,
        health_score = report.health_score,
        score_category = report.score_category.label(),
        "marketing health score computed"
    );

    Ok(ApiResponse::ok(report))
}

pub async fn contact(
    payload: Result<Json<ContactRequest>, JsonRejection>,
) -> ApiResult<LeadAcknowledgement> {
    let correlation_id = correlation_id();
    let Json(request) = payload.map_err(|rejection| malformed_body(rejection, &correlation_id))?;

    let intake = accept_contact(&request)
        .map_err(|error| rejected("api.contact.rejected", error, &correlation_id))?;

    info!(
        event_name = "api.contact.received",
        correlation_id = %correlation_id,
        reference = %intake.acknowledgement.reference,
        service = %intake.lead.service,
        email_domain = %intake.lead.email_domain(),
        "contact submission received"
    );

    Ok(ApiResponse::ok(intake.acknowledgement))
}

fn correlation_id() -> String {
    Uuid::new_v4().to_string()
}

fn rejected(event_name: &'static str, error: DomainError, correlation_id: &str) -> ApiFailure {
    let interface = ApplicationError::from(error).into_interface(correlation_id);
    if let InterfaceError::BadRequest { errors, .. } = &interface {
        warn!(
            event_name,
            correlation_id = %correlation_id,
            error_count = errors.len(),
            errors = ?errors,
            "request rejected"
        );
    }
    ApiFailure(interface)
}

/// Field type mismatches are handled during deserialization, so a rejection
/// here means the body as a whole is unusable. Parser detail stays in the log.
fn malformed_body(rejection: JsonRejection, correlation_id: &str) -> ApiFailure {
    warn!(
        event_name = "api.request.malformed_body",
        correlation_id = %correlation_id,
        detail = %rejection.body_text(),
        "request body could not be parsed"
    );
    let error = match rejection {
        JsonRejection::MissingJsonContentType(_) => "Content-Type must be application/json",
        _ => "request body must be a JSON object",
    };
    ApiFailure(InterfaceError::BadRequest {
        message: "malformed request body".to_string(),
        errors: vec![error.to_string()],
        correlation_id: correlation_id.to_string(),
    })
}
