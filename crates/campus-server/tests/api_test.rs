//! End-to-end tests for the campus HTTP API.
//!
//! Requests go through the full stack (axum router -> handler -> collection
//! -> JSON response) with `tower::ServiceExt::oneshot`, without binding a
//! socket. Every test builds a fresh seeded state.

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use campus_server::router::build_router;
use campus_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::seeded())
}

async fn request_json(
    app: &Router,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(path);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(json!(null));
    (status, json)
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    request_json(app, Method::GET, path, None).await
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request_json(app, Method::POST, path, Some(body)).await
}

async fn put_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    request_json(app, Method::PUT, path, Some(body)).await
}

async fn delete(app: &Router, path: &str) -> (StatusCode, Value) {
    request_json(app, Method::DELETE, path, None).await
}

fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_courses_returns_seed() {
    let app = test_app();
    let (status, body) = get_json(&app, "/courses").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ids(&body), vec![1, 2, 3]);
    assert_eq!(body[0]["title"], "Introduction to JavaScript");
}

#[tokio::test]
async fn course_scenario_create_update_delete() {
    let app = test_app();

    let (status, created) =
        post_json(&app, "/courses", json!({ "title": "New", "description": "D" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 4, "title": "New", "description": "D" }));

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(list.as_array().unwrap().len(), 4);

    let original_description = list[1]["description"].clone();
    let (status, updated) = put_json(&app, "/courses/2", json!({ "title": "CSS v2" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], 2);
    assert_eq!(updated["title"], "CSS v2");
    assert_eq!(updated["description"], original_description);

    let (status, deleted) = delete(&app, "/courses/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["course"]["id"], 1);
    assert_eq!(deleted["message"], "Course with ID 1 deleted successfully");

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(ids(&list), vec![2, 3, 4]);
}

#[tokio::test]
async fn create_course_without_description_is_rejected() {
    let app = test_app();
    let (status, body) = post_json(&app, "/courses", json!({ "title": "Only" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert_eq!(body["message"], "Course must include description");
    assert!(body["details"].get("description").is_some());

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn create_course_with_empty_body_names_both_fields() {
    let app = test_app();
    let (status, body) = post_json(&app, "/courses", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Course must include title and description");
}

#[tokio::test]
async fn create_course_honors_integral_id() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/courses",
        json!({ "id": 10, "title": "Rust", "description": "Ownership" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 10);

    let (_, body) = post_json(
        &app,
        "/courses",
        json!({ "id": "x", "title": "Go", "description": "Goroutines" }),
    )
    .await;
    assert_eq!(body["id"], 11);
}

#[tokio::test]
async fn create_course_with_taken_id_conflicts() {
    let app = test_app();
    let (status, body) = post_json(
        &app,
        "/courses",
        json!({ "id": 3, "title": "Dup", "description": "Dup" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["message"].as_str().unwrap().contains('3'));

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let app = test_app();
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/courses")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) =
        post_json(&app, "/courses", json!({ "title": 5, "description": "D" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn update_keeps_path_id() {
    let app = test_app();
    let (status, body) =
        put_json(&app, "/courses/3", json!({ "id": 99, "description": "Async I/O" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 3);
    assert_eq!(body["title"], "Node.js for Beginners");
    assert_eq!(body["description"], "Async I/O");

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn missing_course_is_not_found() {
    let app = test_app();

    let (status, body) = put_json(&app, "/courses/42", json!({ "title": "x" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Course with ID 42 not found");

    let (status, body) = delete(&app, "/courses/42").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["message"].as_str().unwrap().contains("42"));

    let (_, list) = get_json(&app, "/courses").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn non_numeric_path_id_is_bad_request() {
    let app = test_app();
    let (status, body) = delete(&app, "/courses/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

#[tokio::test]
async fn student_lifecycle() {
    let app = test_app();

    let (status, list) = get_json(&app, "/students").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list[0], json!({ "id": 1, "name": "Maria" }));

    let (status, created) = post_json(&app, "/students", json!({ "name": "Ana" })).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, json!({ "id": 4, "name": "Ana" }));

    let (status, updated) = put_json(&app, "/students/2", json!({ "name": "Juana" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated, json!({ "id": 2, "name": "Juana" }));

    let (status, deleted) = delete(&app, "/students/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["student"], json!({ "id": 3, "name": "Jose" }));
    assert_eq!(deleted["message"], "Student with ID 3 deleted successfully");

    let (_, list) = get_json(&app, "/students").await;
    assert_eq!(ids(&list), vec![1, 2, 4]);
}

#[tokio::test]
async fn create_student_requires_name() {
    let app = test_app();
    let (status, body) = post_json(&app, "/students", json!({ "id": 7 })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Student must include name");
}

#[tokio::test]
async fn missing_student_is_not_found() {
    let app = test_app();

    let (status, body) = put_json(&app, "/students/77", json!({ "name": "Nobody" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "Student with ID 77 not found");

    let (status, body) = delete(&app, "/students/77").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Student with ID 77 not found");

    let (_, list) = get_json(&app, "/students").await;
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn create_student_with_taken_id_conflicts() {
    let app = test_app();
    let (status, body) = post_json(&app, "/students", json!({ "id": 2, "name": "Ana" })).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "CONFLICT");
    assert_eq!(body["message"], "Student with ID 2 already exists");

    let (_, list) = get_json(&app, "/students").await;
    assert_eq!(list[1], json!({ "id": 2, "name": "Juan" }));
    assert_eq!(ids(&list), vec![1, 2, 3]);
}

#[tokio::test]
async fn collections_are_independent() {
    let app = test_app();
    delete(&app, "/students/1").await;
    let (_, courses) = get_json(&app, "/courses").await;
    assert_eq!(ids(&courses), vec![1, 2, 3]);
}

#[tokio::test]
async fn concurrent_creates_get_distinct_ids() {
    let app = test_app();
    let mut tasks = Vec::new();
    for n in 0..20 {
        let app = app.clone();
        tasks.push(tokio::spawn(async move {
            post_json(&app, "/students", json!({ "name": format!("student-{n}") })).await
        }));
    }

    let mut created = Vec::new();
    for task in tasks {
        let (status, body) = task.await.unwrap();
        assert_eq!(status, StatusCode::CREATED);
        created.push(body["id"].as_i64().unwrap());
    }
    created.sort_unstable();
    assert_eq!(created, (4..24).collect::<Vec<_>>());
}
