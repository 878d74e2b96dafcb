// src/presentation/http/routes.rs
use crate::config::RateLimitSettings;
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{content, services},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::get,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone, Default)]
pub struct RouterOptions {
    /// Empty or containing `*` means any origin.
    pub allowed_origins: Vec<String>,
    pub rate_limit: Option<RateLimitSettings>,
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origin = if allowed_origins.is_empty() || allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

pub fn build_router(state: HttpState, options: &RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/content", get(content::list_content))
        .route("/api/v1/content/{slug}", get(content::get_content_by_slug))
        .route(
            "/api/v1/content/{slug}/related",
            get(content::related_content),
        )
        .route("/api/v1/services", get(services::list_service_categories))
        .route("/api/v1/services/{id}", get(services::get_service))
        .route(
            "/api/v1/services/{id}/strategy",
            get(services::analyze_strategy),
        );

    let router = match options.rate_limit.and_then(rate_limit_layer) {
        Some(layer) => router.layer(layer),
        None => {
            if options.rate_limit.is_some() {
                tracing::warn!("rate limit settings rejected; serving without a limiter");
            }
            router
        }
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
