//! Course response types.

use campus_core::Course;
use serde::Serialize;

/// Response from `DELETE /courses/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteCourseResponse {
    pub message: String,
    /// The removed course.
    pub course: Course,
}
