//! Student handlers (list, create, update, delete).

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use campus_core::{Record, RecordId, Student, StudentDraft, StudentPatch};

use crate::error::ApiError;
use crate::schema::deleted_message;
use crate::schema::students::DeleteStudentResponse;
use crate::state::AppState;

/// `GET /students`
pub async fn list_students(State(state): State<AppState>) -> Json<Vec<Student>> {
    let students = state.students.lock().await;
    tracing::debug!(count = students.len(), "listing students");
    Json(students.records().to_vec())
}

/// `POST /students`
pub async fn create_student(
    State(state): State<AppState>,
    payload: Result<Json<StudentDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>), ApiError> {
    let Json(draft) = payload?;
    let mut students = state.students.lock().await;
    let student = students.create(draft)?;
    tracing::info!(id = %student.id, "student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// `PUT /students/{id}`
pub async fn update_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<StudentPatch>, JsonRejection>,
) -> Result<Json<Student>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = payload?;
    let mut students = state.students.lock().await;
    let student = students.update(RecordId(id), patch)?;
    tracing::info!(id, "student updated");
    Ok(Json(student))
}

/// `DELETE /students/{id}`
pub async fn delete_student(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteStudentResponse>, ApiError> {
    let Path(id) = path?;
    let mut students = state.students.lock().await;
    let student = students.delete(RecordId(id))?;
    tracing::info!(id, remaining = students.len(), "student deleted");
    Ok(Json(DeleteStudentResponse {
        message: deleted_message(Student::KIND, student.id),
        student,
    }))
}
