//! Application state holding the shared collections.
//!
//! Each collection sits behind its own `Arc<tokio::sync::Mutex<>>`. Handlers
//! hold the lock for their whole read or mutation, so requests against the
//! same collection run one at a time while courses and students never
//! contend with each other.

use std::sync::Arc;

use campus_core::{seed, Collection, Course, ScratchFile, Student};

/// A collection shared across handler tasks.
pub type SharedCollection<R> = Arc<tokio::sync::Mutex<Collection<R>>>;

/// Shared application state for the courses and students API.
#[derive(Clone)]
pub struct AppState {
    pub courses: SharedCollection<Course>,
    pub students: SharedCollection<Student>,
}

impl AppState {
    /// Creates state over the given collections.
    pub fn new(courses: Collection<Course>, students: Collection<Student>) -> Self {
        AppState {
            courses: Arc::new(tokio::sync::Mutex::new(courses)),
            students: Arc::new(tokio::sync::Mutex::new(students)),
        }
    }

    /// Creates state loaded with the fixed seed data.
    pub fn seeded() -> Self {
        Self::new(seed::courses(), seed::students())
    }
}

/// State for the host information page.
#[derive(Clone)]
pub struct HostPageState {
    /// File whose contents are rendered on every request.
    pub file: ScratchFile,
}
