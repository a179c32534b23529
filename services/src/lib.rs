//! HTTP API of the manufacturing ERP module: the Master Production Schedule
//! endpoint, a health check and the snapshot side effect.

use crate::config::Config;
use crate::database::MpsStorage;
use axum::{
    Extension, Router,
    extract::{Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::{any, get},
};
use opentelemetry::{global, propagation::Extractor};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub mod config;
pub mod database;
pub mod error;
pub mod mps;
pub mod snapshot;
pub mod telemetry;

/// `{crate version}+{git commit}`, reported in `x-service-version`.
pub const SERVICE_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "+", env!("BUILD_COMMIT"));

struct HeaderExtractor<'a>(&'a axum::http::HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// Shared handler state.
#[derive(Clone)]
pub struct AppState<S> {
    pub storage: S,
}

impl<S: MpsStorage> AppState<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

/// Builds the application router on top of `storage`.
pub fn routes<S: MpsStorage>(storage: S, config: Config) -> Router {
    let state = AppState::new(storage);

    Router::new()
        .route("/is-health", get(health_check::<S>))
        .route("/api/mps", get(mps::list_mps::<S>))
        .fallback(any(catch_all))
        .layer(CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                // Continue the caller's trace when it sent a trace context header
                let parent_context = global::get_text_map_propagator(|propagator| {
                    propagator.extract(&HeaderExtractor(request.headers()))
                });

                let span = tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                );
                span.set_parent(parent_context);

                span
            }),
        )
        .layer(Extension(config))
        .with_state(state)
}

async fn health_check<S: MpsStorage>(
    State(state): State<AppState<S>>,
    Extension(config): Extension<Config>,
) -> impl IntoResponse {
    let mut response = if state.storage.is_connected().await {
        (StatusCode::OK, "OK").into_response()
    } else {
        (StatusCode::BAD_GATEWAY, "502").into_response()
    };

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&config.environment().to_string()) {
        headers.insert(HeaderName::from_static("x-service-env"), value);
    }
    headers.insert(
        HeaderName::from_static("x-service-version"),
        HeaderValue::from_static(SERVICE_VERSION),
    );

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
