//! Core error types for campus-core.
//!
//! Uses `thiserror` for structured, matchable variants. Messages are the
//! human-readable text surfaced to API callers, so they name the record kind
//! and the offending identifier.

use thiserror::Error;
use validator::ValidationErrors;

use crate::id::RecordId;

/// Errors produced by collection operations and the demo helpers.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record with the given id exists in the collection.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: &'static str, id: RecordId },

    /// A caller-supplied id is already taken.
    #[error("{kind} with ID {id} already exists")]
    DuplicateId { kind: &'static str, id: RecordId },

    /// The collection already holds `i64::MAX`, so no id is left to assign.
    #[error("no {kind} ID left to assign")]
    IdExhausted { kind: &'static str },

    /// Required descriptive fields are missing or empty on create.
    #[error("{kind} must include {}", .fields.join(" and "))]
    MissingFields {
        kind: &'static str,
        fields: Vec<&'static str>,
        errors: ValidationErrors,
    },

    /// Filesystem failure in the scratch-file helpers.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
