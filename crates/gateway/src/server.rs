//! Router assembly: API routes plus the tower middleware stack.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use lw_domain::config::CorsConfig;

use crate::api;
use crate::state::AppState;

/// Build the complete application: routes, tracing, CORS, and the
/// concurrency limit taken from `state.config`.
pub fn build_app(state: AppState) -> Router {
    let server = &state.config.server;
    let cors_layer = build_cors_layer(&server.cors);
    let max_concurrent = server.max_concurrent_requests.max(1);

    api::router()
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .layer(ConcurrencyLimitLayer::new(max_concurrent))
        .with_state(state)
}

const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

/// Build a [`CorsLayer`] from the configured allowed origins.
///
/// Origins may end in `:*` to match any port on that host
/// (e.g. `http://localhost:*`). A lone `"*"` allows all origins.
pub fn build_cors_layer(cors: &CorsConfig) -> CorsLayer {
    if cors.is_wildcard() {
        tracing::warn!("CORS configured with wildcard \"*\": all origins allowed");
        return CorsLayer::new()
            .allow_origin(tower_http::cors::Any)
            .allow_methods(ALLOWED_METHODS)
            .allow_headers([header::CONTENT_TYPE]);
    }

    let mut exact: Vec<HeaderValue> = Vec::new();
    let mut wildcard_prefixes: Vec<String> = Vec::new();

    for origin in &cors.allowed_origins {
        if origin.ends_with(":*") {
            wildcard_prefixes.push(origin.trim_end_matches('*').to_owned());
        } else if let Ok(hv) = origin.parse::<HeaderValue>() {
            exact.push(hv);
        } else {
            tracing::warn!(origin = %origin, "invalid CORS origin, skipping");
        }
    }

    let allow_origin = if wildcard_prefixes.is_empty() {
        AllowOrigin::list(exact)
    } else {
        AllowOrigin::predicate(move |origin, _| {
            if exact.iter().any(|e| e.as_bytes() == origin.as_bytes()) {
                return true;
            }
            let origin_str = origin.to_str().unwrap_or("");
            wildcard_prefixes
                .iter()
                .any(|prefix| matches_any_port(prefix, origin_str))
        })
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE])
}

/// `prefix` is an origin with the port stripped (`http://localhost:`);
/// `origin` matches when the remainder is a non-empty run of digits.
fn matches_any_port(prefix: &str, origin: &str) -> bool {
    origin
        .strip_prefix(prefix)
        .map(|port| !port.is_empty() && port.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
