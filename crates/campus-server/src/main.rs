//! Binary entrypoint for the campus HTTP server.
//!
//! Reads configuration from environment variables:
//! - `CAMPUS_HOST`: listen address (default: "0.0.0.0")
//! - `CAMPUS_PORT`: listen port (default: "3000")

use std::process;

use campus_server::config::ServerConfig;
use campus_server::router::{build_router, serve};
use campus_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("{err}");
            process::exit(2);
        }
    };

    let app = build_router(AppState::seeded());

    tracing::info!("campus server starting on {}", config.addr());
    if let Err(err) = serve(app, &config.addr()).await {
        tracing::error!("server failed: {err}");
        process::exit(1);
    }
}
