//! Router assembly for the campus HTTP API and the demo servers.
//!
//! [`build_router`] wires the course and student handlers with CORS and
//! tracing middleware layers. [`serve`] binds a listener and runs any of the
//! routers until the process exits.

use axum::routing::{get, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::{AppState, HostPageState};

/// Builds the courses and students API router.
///
/// Routes use axum 0.8 `/{param}` path syntax.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/courses",
            get(handlers::courses::list_courses).post(handlers::courses::create_course),
        )
        .route(
            "/courses/{id}",
            put(handlers::courses::update_course).delete(handlers::courses::delete_course),
        )
        .route(
            "/students",
            get(handlers::students::list_students).post(handlers::students::create_student),
        )
        .route(
            "/students/{id}",
            put(handlers::students::update_student).delete(handlers::students::delete_student),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Builds the greeting server: every request gets the same text.
pub fn build_hello_router() -> Router {
    Router::new()
        .fallback(handlers::demo::hello)
        .layer(TraceLayer::new_for_http())
}

/// Builds the host information page server.
pub fn build_host_page_router(state: HostPageState) -> Router {
    Router::new()
        .fallback(handlers::demo::host_page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves `app` until the process exits.
pub async fn serve(app: Router, addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await
}
