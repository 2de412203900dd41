//! Student response types.

use campus_core::Student;
use serde::Serialize;

/// Response from `DELETE /students/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteStudentResponse {
    pub message: String,
    /// The removed student.
    pub student: Student,
}
