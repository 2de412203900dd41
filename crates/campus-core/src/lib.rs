//! Core data model for the campus course and student services.
//!
//! Records, their create/update body shapes, the generic in-memory
//! [`Collection`], seed data, and the host/file helpers used by the demo
//! entry points. Nothing here knows about HTTP.

pub mod collection;
pub mod course;
pub mod error;
pub mod host;
pub mod id;
pub mod record;
pub mod scratch;
pub mod seed;
pub mod student;

// Re-export commonly used types
pub use collection::Collection;
pub use course::{Course, CourseDraft, CoursePatch};
pub use error::CoreError;
pub use host::HostFacts;
pub use id::RecordId;
pub use record::Record;
pub use scratch::ScratchFile;
pub use student::{Student, StudentDraft, StudentPatch};
