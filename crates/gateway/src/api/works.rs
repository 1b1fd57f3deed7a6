//! Literary works CRUD endpoints.
//!
//! - `GET    /literary-works`            — list, optionally ordered by one field
//! - `POST   /literary-works`            — append a work
//! - `GET    /literary-works/aggregates` — rating / year statistics
//! - `GET    /literary-works/:id`        — fetch by id
//! - `PUT    /literary-works/:id`        — merge a partial update
//! - `DELETE /literary-works/:id`        — remove

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};

use lw_catalog::{Aggregates, SortQuery};
use lw_domain::{LiteraryWork, LiteraryWorkPatch};

use super::ApiError;
use crate::state::AppState;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /literary-works
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn list_works(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Json<Vec<LiteraryWork>> {
    let query = SortQuery::from_pairs(params);
    let requested = query.requested();
    if requested.len() > 1 {
        // Every requested field re-sorts from scratch; only the last sticks.
        tracing::debug!(
            requested = requested.len(),
            "multiple sort fields requested, last one applies"
        );
    }
    if let Some((field, direction)) = query.effective() {
        tracing::debug!(field = field.param(), ?direction, "listing sorted works");
    }

    Json(state.works.list_sorted(&query))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// POST /literary-works
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn create_work(
    State(state): State<AppState>,
    Json(work): Json<LiteraryWork>,
) -> impl IntoResponse {
    let created = state.works.insert(work);
    tracing::info!(id = created.id, title = %created.title, "literary work created");
    (StatusCode::CREATED, Json(created))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /literary-works/aggregates
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn aggregates(State(state): State<AppState>) -> Json<Aggregates> {
    Json(state.works.aggregates())
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /literary-works/:id
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn get_work(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LiteraryWork>, ApiError> {
    let work = state.works.get(id)?;
    Ok(Json(work))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PUT /literary-works/:id
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn update_work(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<LiteraryWorkPatch>,
) -> Result<Json<LiteraryWork>, ApiError> {
    if patch.is_empty() {
        tracing::debug!(id, "update body carries no fields");
    }
    let updated = state.works.update(id, patch)?;
    tracing::info!(id, new_id = updated.id, "literary work updated");
    Ok(Json(updated))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// DELETE /literary-works/:id
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn delete_work(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let removed = state.works.remove(id)?;
    tracing::info!(id, title = %removed.title, "literary work deleted");
    Ok(StatusCode::NO_CONTENT)
}
