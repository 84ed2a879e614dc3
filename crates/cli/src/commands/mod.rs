pub mod config;
pub mod doctor;
pub mod health;
pub mod roi;

use std::fs;
use std::path::Path;

use growthdesk_core::{ApplicationError, DomainError, InterfaceError};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const EXIT_OK: u8 = 0;
pub const EXIT_INPUT_FAILURE: u8 = 1;
pub const EXIT_VALIDATION_FAILURE: u8 = 2;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

#[derive(Debug, Serialize)]
struct SuccessEnvelope<T> {
    success: bool,
    data: T,
}

#[derive(Debug, Serialize)]
struct FailureEnvelope<'a> {
    success: bool,
    message: &'a str,
    errors: Vec<String>,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(&payload) }
    }
}

/// Reads a JSON request body from `input`, runs `engine` on it and renders the
/// same envelope the HTTP API returns.
pub(crate) fn evaluate_file<R, T>(
    command: &str,
    input: &Path,
    engine: impl FnOnce(&R) -> Result<T, DomainError>,
) -> CommandResult
where
    R: DeserializeOwned,
    T: Serialize,
{
    let raw = match fs::read_to_string(input) {
        Ok(raw) => raw,
        Err(error) => {
            return CommandResult::failure(
                command,
                "input_read",
                format!("could not read `{}`: {error}", input.display()),
                EXIT_INPUT_FAILURE,
            );
        }
    };

    let request: R = match serde_json::from_str(&raw) {
        Ok(request) => request,
        Err(error) => {
            return CommandResult::failure(
                command,
                "input_parse",
                format!("`{}` is not a valid request body: {error}", input.display()),
                EXIT_INPUT_FAILURE,
            );
        }
    };

    match engine(&request) {
        Ok(data) => CommandResult {
            exit_code: EXIT_OK,
            output: serialize_pretty(&SuccessEnvelope { success: true, data }),
        },
        Err(error) => {
            let interface = ApplicationError::from(error).into_interface(command);
            let message = interface.user_message();
            match interface {
                InterfaceError::BadRequest { errors, .. } => CommandResult {
                    exit_code: EXIT_VALIDATION_FAILURE,
                    output: serialize_pretty(&FailureEnvelope { success: false, message, errors }),
                },
                InterfaceError::Internal { message: detail, .. } => {
                    CommandResult::failure(command, "internal", detail, EXIT_INPUT_FAILURE)
                }
            }
        }
    }
}

fn serialize_payload<T: Serialize>(payload: &T) -> String {
    serde_json::to_string(payload).unwrap_or_else(serialization_fallback)
}

fn serialize_pretty<T: Serialize>(payload: &T) -> String {
    serde_json::to_string_pretty(payload).unwrap_or_else(serialization_fallback)
}

fn serialization_fallback(error: serde_json::Error) -> String {
    format!(
        "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
        error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
    )
}
