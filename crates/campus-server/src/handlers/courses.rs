//! Course handlers (list, create, update, delete).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use campus_core::{Course, CourseDraft, CoursePatch, Record, RecordId};

use crate::error::ApiError;
use crate::schema::courses::DeleteCourseResponse;
use crate::schema::deleted_message;
use crate::state::AppState;

/// Lists all courses.
///
/// `GET /courses`
pub async fn list_courses(State(state): State<AppState>) -> Json<Vec<Course>> {
    let courses = state.courses.lock().await;
    tracing::debug!(count = courses.len(), "listing courses");
    Json(courses.records().to_vec())
}

/// Creates a course.
///
/// `POST /courses`
pub async fn create_course(
    State(state): State<AppState>,
    payload: Result<Json<CourseDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Course>), ApiError> {
    let Json(draft) = payload?;
    let mut courses = state.courses.lock().await;
    let course = courses.create(draft)?;
    tracing::info!(id = %course.id, "course created");
    Ok((StatusCode::CREATED, Json(course)))
}

/// Merges the supplied fields into a course.
///
/// `PUT /courses/{id}`
pub async fn update_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CoursePatch>, JsonRejection>,
) -> Result<Json<Course>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    let mut courses = state.courses.lock().await;
    let course = courses.update(RecordId(id), patch)?;
    tracing::info!(id, "course updated");
    Ok(Json(course))
}

/// Deletes a course by ID.
///
/// `DELETE /courses/{id}`
pub async fn delete_course(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteCourseResponse>, ApiError> {
    let Path(id) = path?;
    let mut courses = state.courses.lock().await;
    let course = courses.delete(RecordId(id))?;
    tracing::info!(id, remaining = courses.len(), "course deleted");
    Ok(Json(DeleteCourseResponse {
        message: deleted_message(Course::KIND, course.id),
        course,
    }))
}
