use axum::http::{header, HeaderValue, Method};
use axum::Router;
use growthdesk_core::config::AppConfig;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::api::{self, ApiState};
use crate::health;
use crate::response::panic_response;

pub struct Application {
    pub config: AppConfig,
    pub router: Router,
}

pub fn bootstrap_with_config(config: AppConfig) -> Application {
    info!(
        event_name = "system.bootstrap.start",
        correlation_id = "bootstrap",
        listen_address = %config.listen_address(),
        "starting application bootstrap"
    );

    let router = build_router(&config, ApiState::default());

    info!(
        event_name = "system.bootstrap.router_ready",
        correlation_id = "bootstrap",
        allowed_origins = config.server.allowed_origins.len(),
        "api routes registered"
    );

    Application { config, router }
}

pub fn build_router(config: &AppConfig, state: ApiState) -> Router {
    api::router(state)
        .merge(health::router())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors_layer(&config.server.allowed_origins))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    if allowed_origins.is_empty() {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(
                    event_name = "system.bootstrap.invalid_origin",
                    correlation_id = "bootstrap",
                    origin = %origin,
                    error = %error,
                    "skipping allowed origin that is not a valid header value"
                );
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
