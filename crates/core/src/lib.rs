pub mod config;
pub mod contact;
pub mod domain;
pub mod errors;
pub mod lookup;
pub mod roi;
pub mod scoring;
pub mod validation;

pub use contact::{accept_contact, ContactIntake};
pub use domain::contact::{ContactRequest, Lead, LeadAcknowledgement};
pub use domain::roi::{RoiInput, RoiProjection, RoiRequest};
pub use domain::survey::{HealthReport, HealthSurvey, HealthSurveyRequest, ScoreCategory};
pub use errors::{ApplicationError, DomainError, FieldViolation, InterfaceError};
pub use roi::{compute_roi, BenchmarkRoiEngine, RoiEngine};
pub use scoring::{compute_health_score, HealthScorer, WeightedHealthScorer};
