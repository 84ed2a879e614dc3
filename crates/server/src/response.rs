use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use growthdesk_core::InterfaceError;
use serde::Serialize;
use tracing::error;

/// Success envelope shared by every API route.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Json<Self> {
        Json(Self { success: true, data })
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiFailure(pub InterfaceError);

impl From<InterfaceError> for ApiFailure {
    fn from(value: InterfaceError) -> Self {
        Self(value)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let message = self.0.user_message();
        match self.0 {
            InterfaceError::BadRequest { errors, .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody { success: false, message, errors: Some(errors) }),
            )
                .into_response(),
            InterfaceError::Internal { .. } => internal_error_response(message),
        }
    }
}

/// Panic handler for `CatchPanicLayer`. The panic payload is logged, never
/// returned to the caller.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(text) = panic.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = panic.downcast_ref::<String>() {
        text.clone()
    } else {
        "unknown panic payload".to_string()
    };

    error!(
        event_name = "api.request.panicked",
        correlation_id = "unknown",
        detail = %detail,
        "request handler panicked"
    );

    let message = InterfaceError::Internal { message: detail, correlation_id: String::new() }
        .user_message();
    internal_error_response(message)
}

fn internal_error_response(message: &'static str) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { success: false, message, errors: None }))
        .into_response()
}
