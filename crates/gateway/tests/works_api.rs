//! End-to-end tests for the literary works HTTP API.
//!
//! Each test builds the real application router over a fresh store and
//! drives it in-process with `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use lw_catalog::WorkStore;
use lw_domain::config::Config;
use lw_domain::LiteraryWork;
use lw_gateway::server::build_app;
use lw_gateway::state::AppState;

fn app_with(works: Vec<LiteraryWork>) -> (Router, AppState) {
    let state = AppState::with_store(Arc::new(Config::default()), WorkStore::with_works(works));
    (build_app(state.clone()), state)
}

fn empty_app() -> (Router, AppState) {
    app_with(Vec::new())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let resp = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    // Extractor rejections answer with plain text.
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, json)
}

fn work_json(id: i64, title: &str, author: &str, year: i64, rating: f64) -> Value {
    json!({
        "id": id,
        "title": title,
        "author": author,
        "year_published": year,
        "rating": rating,
    })
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect()
}

fn library() -> Vec<LiteraryWork> {
    vec![
        LiteraryWork::new(1, "Moby-Dick", "Herman Melville", 1851, 3.5),
        LiteraryWork::new(2, "Anna Karenina", "Leo Tolstoy", 1878, 4.1),
        LiteraryWork::new(3, "Ficciones", "Jorge Luis Borges", 1944, 4.5),
    ]
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Create / get
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn create_then_get_round_trips_fields() {
    let (app, _) = empty_app();
    let body = work_json(7, "Beloved", "Toni Morrison", 1987, 4.6);

    let (status, created) = send(&app, Method::POST, "/literary-works", Some(body.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, body);

    let (status, fetched) = send(&app, Method::GET, "/literary-works/7", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn create_appends_to_end_of_list() {
    let (app, _) = app_with(library());
    let (status, _) = send(
        &app,
        Method::POST,
        "/literary-works",
        Some(work_json(0, "Kindred", "Octavia E. Butler", 1979, 4.4)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, list) = send(&app, Method::GET, "/literary-works", None).await;
    assert_eq!(ids(&list), vec![1, 2, 3, 0]);
}

#[tokio::test]
async fn create_with_missing_field_is_rejected() {
    let (app, state) = empty_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/literary-works",
        Some(json!({ "id": 1, "title": "Untitled" })),
    )
    .await;
    assert!(status.is_client_error());
    assert!(state.works.is_empty());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// List / sort
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn list_without_params_keeps_insertion_order() {
    let (app, _) = app_with(library());
    let (status, list) = send(&app, Method::GET, "/literary-works", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn list_sorts_by_single_field() {
    let (app, _) = app_with(library());

    let (_, list) = send(&app, Method::GET, "/literary-works?title=asc", None).await;
    assert_eq!(ids(&list), vec![2, 3, 1]);

    let (_, list) = send(&app, Method::GET, "/literary-works?year_published=desc", None).await;
    assert_eq!(ids(&list), vec![3, 2, 1]);
}

#[tokio::test]
async fn any_value_other_than_asc_sorts_descending() {
    let (app, _) = app_with(library());
    let (_, list) = send(&app, Method::GET, "/literary-works?id=whatever", None).await;
    assert_eq!(ids(&list), vec![3, 2, 1]);

    let (_, list) = send(&app, Method::GET, "/literary-works?id=", None).await;
    assert_eq!(ids(&list), vec![3, 2, 1]);
}

#[tokio::test]
async fn last_sort_field_in_fixed_order_wins() {
    let works = vec![
        LiteraryWork::new(1, "Zama", "Antonio Di Benedetto", 1956, 4.0),
        LiteraryWork::new(2, "Austerlitz", "W. G. Sebald", 2001, 3.0),
        LiteraryWork::new(3, "Middlemarch", "George Eliot", 1871, 5.0),
    ];
    let (app, _) = app_with(works);

    // Title ascending alone would give [2, 3, 1]; rating descending wins.
    let (status, list) =
        send(&app, Method::GET, "/literary-works?title=asc&rating=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![3, 1, 2]);

    // Same params in the opposite order on the wire: same result.
    let (_, list) = send(&app, Method::GET, "/literary-works?rating=desc&title=asc", None).await;
    assert_eq!(ids(&list), vec![3, 1, 2]);
}

#[tokio::test]
async fn repeated_sort_parameter_uses_first_value() {
    let (app, _) = app_with(library());
    let (status, list) =
        send(&app, Method::GET, "/literary-works?rating=asc&rating=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn unknown_query_parameters_are_ignored() {
    let (app, _) = app_with(library());
    let (status, list) = send(&app, Method::GET, "/literary-works?page=2&id=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&list), vec![3, 2, 1]);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Update
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (app, _) = app_with(library());
    let (status, updated) = send(
        &app,
        Method::PUT,
        "/literary-works/2",
        Some(json!({ "rating": 4.9 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, work_json(2, "Anna Karenina", "Leo Tolstoy", 1878, 4.9));

    let (_, fetched) = send(&app, Method::GET, "/literary-works/2", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_can_move_a_record_to_a_new_id() {
    let (app, _) = app_with(library());
    let (status, _) = send(
        &app,
        Method::PUT,
        "/literary-works/1",
        Some(json!({ "id": 100 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, "/literary-works/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, moved) = send(&app, Method::GET, "/literary-works/100", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["title"], "Moby-Dick");
}

#[tokio::test]
async fn update_with_null_field_is_rejected() {
    let (app, _) = app_with(library());
    let (status, _) = send(
        &app,
        Method::PUT,
        "/literary-works/3",
        Some(json!({ "title": null, "rating": 1.0 })),
    )
    .await;
    assert!(status.is_client_error());

    let (_, fetched) = send(&app, Method::GET, "/literary-works/3", None).await;
    assert_eq!(fetched, work_json(3, "Ficciones", "Jorge Luis Borges", 1944, 4.5));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Delete
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn delete_removes_exactly_one_entry() {
    let (app, _) = app_with(library());

    let (status, body) = send(&app, Method::DELETE, "/literary-works/2", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, "/literary-works/2", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Literary Work 2 not found");

    let (_, list) = send(&app, Method::GET, "/literary-works", None).await;
    assert_eq!(ids(&list), vec![1, 3]);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Not found
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn missing_id_is_404_for_get_put_delete() {
    let (app, _) = empty_app();
    let expected = json!({ "message": "Literary Work 9999 not found" });

    let (status, body) = send(&app, Method::GET, "/literary-works/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send(
        &app,
        Method::PUT,
        "/literary-works/9999",
        Some(json!({ "title": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);

    let (status, body) = send(&app, Method::DELETE, "/literary-works/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, expected);
}

#[tokio::test]
async fn non_integer_id_is_a_client_error() {
    let (app, _) = app_with(library());
    let (status, _) = send(&app, Method::GET, "/literary-works/abc", None).await;
    assert!(status.is_client_error());
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Aggregates
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn aggregates_on_empty_store_are_zero() {
    let (app, _) = empty_app();
    let (status, agg) = send(&app, Method::GET, "/literary-works/aggregates", None).await;
    assert_eq!(status, StatusCode::OK);

    let obj = agg.as_object().unwrap();
    assert_eq!(obj.len(), 6);
    for (key, value) in obj {
        assert_eq!(value.as_f64(), Some(0.0), "{key}");
    }
}

#[tokio::test]
async fn aggregates_over_two_works() {
    let (app, _) = empty_app();
    for body in [
        work_json(1, "A", "X", 2000, 4.0),
        work_json(2, "B", "Y", 2020, 5.0),
    ] {
        let (status, _) = send(&app, Method::POST, "/literary-works", Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, agg) = send(&app, Method::GET, "/literary-works/aggregates", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(agg["average_rating"].as_f64(), Some(4.5));
    assert_eq!(agg["max_rating"].as_f64(), Some(5.0));
    assert_eq!(agg["min_rating"].as_f64(), Some(4.0));
    assert_eq!(agg["average_year_published"].as_f64(), Some(2010.0));
    assert_eq!(agg["max_year_published"].as_i64(), Some(2020));
    assert_eq!(agg["min_year_published"].as_i64(), Some(2000));
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Service endpoints
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[tokio::test]
async fn index_describes_the_api() {
    let (app, _) = empty_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Literary Works API");
    assert_eq!(body["version"], "1.0");
}

#[tokio::test]
async fn health_reports_record_count() {
    let (app, _) = app_with(library());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["works"], 3);
}

#[tokio::test]
async fn swagger_document_lists_every_operation() {
    let (app, _) = empty_app();
    let (status, doc) = send(&app, Method::GET, "/swagger.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["openapi"], "3.0.3");
    assert_eq!(doc["info"]["title"], "Literary Works API");

    let work = &doc["components"]["schemas"]["LiteraryWork"];
    let required: Vec<_> = work["required"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        required,
        vec!["id", "title", "author", "year_published", "rating"]
    );
    assert_eq!(work["properties"]["rating"]["type"], "number");
    assert!(doc["components"]["schemas"]["Aggregates"].is_object());
    assert!(doc["components"]["schemas"]["Error"]["properties"]["message"].is_object());

    let paths = &doc["paths"];
    let collection = &paths["/literary-works"];
    assert!(collection["get"]["responses"]["200"].is_object());
    assert!(collection["post"]["responses"]["201"].is_object());
    let params: Vec<_> = collection["get"]["parameters"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(
        params,
        vec!["id", "title", "author", "year_published", "rating"]
    );

    let single = &paths["/literary-works/{id}"];
    for method in ["get", "put"] {
        assert!(single[method]["responses"]["200"].is_object(), "{method}");
        assert!(single[method]["responses"]["404"].is_object(), "{method}");
    }
    assert!(single["delete"]["responses"]["204"].is_object());
    assert!(single["delete"]["responses"]["404"].is_object());
    assert!(paths["/literary-works/aggregates"]["get"]["responses"]["200"].is_object());
}
