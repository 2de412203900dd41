//! HTTP handler modules for the campus API.
//!
//! Handlers parse the request, acquire the collection lock, delegate to
//! [`Collection`](campus_core::Collection) and return JSON. No business
//! logic lives in handlers.

pub mod courses;
pub mod demo;
pub mod students;
