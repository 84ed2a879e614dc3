use axum::{routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthCheck {
    pub status: &'static str,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: HealthCheck,
    pub version: &'static str,
    pub checked_at: String,
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ready",
        service: HealthCheck {
            status: "ready",
            detail: "growthdesk-server engines loaded".to_string(),
        },
        version: env!("CARGO_PKG_VERSION"),
        checked_at: Utc::now().to_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use axum::Json;

    use crate::health::health;

    #[tokio::test]
    async fn health_reports_ready_service() {
        let Json(payload) = health().await;

        assert_eq!(payload.status, "ready");
        assert_eq!(payload.service.status, "ready");
        assert_eq!(payload.version, env!("CARGO_PKG_VERSION"));
        assert!(chrono::DateTime::parse_from_rfc3339(&payload.checked_at).is_ok());
    }

    #[test]
    fn health_payload_uses_camel_case() {
        let payload = super::HealthResponse {
            status: "ready",
            service: super::HealthCheck { status: "ready", detail: String::new() },
            version: "0.1.0",
            checked_at: "2026-01-01T00:00:00+00:00".to_string(),
        };

        let value = serde_json::to_value(payload).expect("json");
        assert!(value.get("checkedAt").is_some());
    }
}
