//! API schema types for request/response definitions.
//!
//! Request bodies are the drafts and patches from `campus_core`; this module
//! only adds the response envelopes that have no core counterpart.

pub mod courses;
pub mod students;

/// Confirmation text returned by the delete endpoints.
pub fn deleted_message(kind: &str, id: campus_core::RecordId) -> String {
    format!("{kind} with ID {id} deleted successfully")
}
