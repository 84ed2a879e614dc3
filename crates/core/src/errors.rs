use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single rejected input field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field: field.into(), message: message.into() }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("input validation failed with {} violation(s)", .0.len())]
    Validation(Vec<FieldViolation>),
    #[error("input combination yields no viable customer base")]
    NoViableCustomerBase,
    #[error("projected figures exceed the reportable range")]
    ProjectionOutOfRange,
}

impl DomainError {
    /// Field-level messages in the order they were collected.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Validation(violations) => {
                violations.iter().map(|violation| violation.message.clone()).collect()
            }
            Self::NoViableCustomerBase => vec![
                "monthlyTraffic and conversionRate must yield at least one customer per month"
                    .to_string(),
            ],
            Self::ProjectionOutOfRange => vec![
                "currentRevenue is too small for the projected growth to be reported".to_string(),
            ],
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("configuration failure: {0}")]
    Configuration(String),
    #[error("internal failure: {0}")]
    Internal(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InterfaceError {
    #[error("bad request: {message}")]
    BadRequest { message: String, errors: Vec<String>, correlation_id: String },
    #[error("internal error: {message}")]
    Internal { message: String, correlation_id: String },
}

impl InterfaceError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::BadRequest { .. } => "Validation failed. Check inputs and try again.",
            Self::Internal { .. } => "An unexpected internal error occurred.",
        }
    }

    pub fn correlation_id(&self) -> &str {
        match self {
            Self::BadRequest { correlation_id, .. } | Self::Internal { correlation_id, .. } => {
                correlation_id
            }
        }
    }
}

impl ApplicationError {
    pub fn into_interface(self, correlation_id: impl Into<String>) -> InterfaceError {
        let correlation_id = correlation_id.into();
        let mut mapped = InterfaceError::from(self);
        match &mut mapped {
            InterfaceError::BadRequest { correlation_id: id, .. }
            | InterfaceError::Internal { correlation_id: id, .. } => *id = correlation_id,
        }
        mapped
    }
}

impl From<ApplicationError> for InterfaceError {
    fn from(value: ApplicationError) -> Self {
        match value {
            ApplicationError::Domain(domain) => Self::BadRequest {
                message: domain.to_string(),
                errors: domain.messages(),
                correlation_id: "unassigned".to_string(),
            },
            ApplicationError::Configuration(message) | ApplicationError::Internal(message) => {
                Self::Internal { message, correlation_id: "unassigned".to_string() }
            }
        }
    }
}
