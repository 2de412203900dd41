//! HTTP/JSON API server for the campus course and student collections.
//!
//! Provides a REST API over two in-memory collections plus two small demo
//! servers (a plain-text greeting and a host information page). This crate
//! contains the router, handlers, response schema, error mapping,
//! application state and configuration.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
