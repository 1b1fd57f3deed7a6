pub mod error;
pub mod service;
pub mod works;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

pub use error::ApiError;

/// Build the full API router.
///
/// `/literary-works/aggregates` is a static segment and wins over the
/// `/literary-works/:id` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        // Service descriptor / health / API document
        .route("/", get(service::index))
        .route("/health", get(service::health))
        .route("/swagger.json", get(service::openapi_json))
        // Literary works (collection)
        .route("/literary-works", get(works::list_works))
        .route("/literary-works", post(works::create_work))
        // Derived statistics
        .route("/literary-works/aggregates", get(works::aggregates))
        // Literary works (single record)
        .route("/literary-works/:id", get(works::get_work))
        .route("/literary-works/:id", put(works::update_work))
        .route("/literary-works/:id", delete(works::delete_work))
}
