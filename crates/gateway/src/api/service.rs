//! Service descriptor, liveness check and OpenAPI document.

use axum::extract::State;
use axum::response::{IntoResponse, Json};

use lw_catalog::SortField;

use crate::state::AppState;

pub const API_TITLE: &str = "Literary Works API";
pub const API_VERSION: &str = "1.0";
pub const API_DESCRIPTION: &str = "Manage Literary Works Dataset";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({
        "title": API_TITLE,
        "version": API_VERSION,
        "description": API_DESCRIPTION,
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /health
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "works": state.works.len(),
    }))
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// GET /swagger.json — OpenAPI 3.0 document
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

pub async fn openapi_json() -> impl IntoResponse {
    use axum::http::header;

    ([(header::CONTENT_TYPE, "application/json")], Json(openapi_document()))
}

/// One optional query parameter per sortable field, in the fixed order.
fn sort_parameters() -> Vec<serde_json::Value> {
    SortField::ALL
        .iter()
        .map(|field| {
            serde_json::json!({
                "name": field.param(),
                "in": "query",
                "required": false,
                "description": format!("Sorting by {} asc or desc", field.param()),
                "schema": { "type": "string", "enum": ["asc", "desc"] }
            })
        })
        .collect()
}

pub fn openapi_document() -> serde_json::Value {
    let id_param = serde_json::json!([{
        "name": "id",
        "in": "path",
        "required": true,
        "description": "The Literary Work identifier",
        "schema": { "type": "integer", "format": "int64" }
    }]);
    let work_body = serde_json::json!({
        "required": true,
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/LiteraryWork" } } }
    });
    let work_response = |description: &str| {
        serde_json::json!({
            "description": description,
            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/LiteraryWork" } } }
        })
    };
    let not_found = serde_json::json!({
        "description": "Literary Work not found",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Error" } } }
    });

    serde_json::json!({
        "openapi": "3.0.3",
        "info": {
            "title": API_TITLE,
            "version": API_VERSION,
            "description": API_DESCRIPTION
        },
        "servers": [{ "url": "/", "description": "Current host" }],
        "tags": [{ "name": "literary-works", "description": "Literary Works operations" }],
        "components": {
            "schemas": {
                "LiteraryWork": {
                    "type": "object",
                    "required": ["id", "title", "author", "year_published", "rating"],
                    "properties": {
                        "id": { "type": "integer", "format": "int64", "description": "The Literary Work identifier" },
                        "title": { "type": "string", "description": "The Literary Work title" },
                        "author": { "type": "string", "description": "The Literary Work author" },
                        "year_published": { "type": "integer", "format": "int64", "description": "The Literary Work year of publication" },
                        "rating": { "type": "number", "format": "double", "description": "The Literary Work rating" }
                    }
                },
                "LiteraryWorkPatch": {
                    "type": "object",
                    "description": "Any subset of LiteraryWork fields; null values are rejected",
                    "properties": {
                        "id": { "type": "integer", "format": "int64" },
                        "title": { "type": "string" },
                        "author": { "type": "string" },
                        "year_published": { "type": "integer", "format": "int64" },
                        "rating": { "type": "number", "format": "double" }
                    }
                },
                "Aggregates": {
                    "type": "object",
                    "required": [
                        "average_rating", "max_rating", "min_rating",
                        "average_year_published", "max_year_published", "min_year_published"
                    ],
                    "properties": {
                        "average_rating": { "type": "number", "format": "double" },
                        "max_rating": { "type": "number", "format": "double" },
                        "min_rating": { "type": "number", "format": "double" },
                        "average_year_published": { "type": "number", "format": "double" },
                        "max_year_published": { "type": "integer", "format": "int64" },
                        "min_year_published": { "type": "integer", "format": "int64" }
                    }
                },
                "Error": {
                    "type": "object",
                    "required": ["message"],
                    "properties": {
                        "message": { "type": "string" }
                    }
                }
            }
        },
        "paths": {
            "/literary-works": {
                "get": {
                    "summary": "List all Literary Works",
                    "operationId": "list_literary_works",
                    "tags": ["literary-works"],
                    "parameters": sort_parameters(),
                    "responses": {
                        "200": {
                            "description": "Literary Works in insertion or requested order",
                            "content": { "application/json": { "schema": {
                                "type": "array",
                                "items": { "$ref": "#/components/schemas/LiteraryWork" }
                            } } }
                        }
                    }
                },
                "post": {
                    "summary": "Create a new Literary Work",
                    "operationId": "create_literary_work",
                    "tags": ["literary-works"],
                    "requestBody": work_body,
                    "responses": { "201": work_response("Literary Work created") }
                }
            },
            "/literary-works/aggregates": {
                "get": {
                    "summary": "Rating and publication year statistics",
                    "operationId": "literary_works_aggregates",
                    "tags": ["literary-works"],
                    "responses": {
                        "200": {
                            "description": "Aggregated values, zeros when the collection is empty",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Aggregates" } } }
                        }
                    }
                }
            },
            "/literary-works/{id}": {
                "get": {
                    "summary": "Fetch a Literary Work given its identifier",
                    "operationId": "get_literary_work",
                    "tags": ["literary-works"],
                    "parameters": id_param.clone(),
                    "responses": { "200": work_response("Literary Work"), "404": not_found.clone() }
                },
                "put": {
                    "summary": "Update a Literary Work given its identifier",
                    "operationId": "update_literary_work",
                    "tags": ["literary-works"],
                    "parameters": id_param.clone(),
                    "requestBody": {
                        "required": true,
                        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/LiteraryWorkPatch" } } }
                    },
                    "responses": { "200": work_response("Literary Work updated"), "404": not_found.clone() }
                },
                "delete": {
                    "summary": "Delete a Literary Work given its identifier",
                    "operationId": "delete_literary_work",
                    "tags": ["literary-works"],
                    "parameters": id_param,
                    "responses": { "204": { "description": "Literary Work deleted" }, "404": not_found }
                }
            }
        }
    })
}
