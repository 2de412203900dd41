//! Campus command-line entry point.
//!
//! Provides the `campus` binary with subcommands to serve the courses and
//! students API and to run the standalone platform demos (host facts, file
//! write/read/append, greeting server, host information page).
//!
//! `serve` uses the same router as the `campus-server` binary.

use std::path::PathBuf;
use std::process;

use axum::Router;
use clap::{Parser, Subcommand};

use campus_core::{CoreError, HostFacts, ScratchFile};
use campus_server::config::{ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
use campus_server::router::{build_hello_router, build_host_page_router, build_router, serve};
use campus_server::state::{AppState, HostPageState};

const HOST_FILE_MESSAGE: &str = "This is the message that would be written to the file";
const DEMO_FILE_MESSAGE: &str = "Hello, this is a file created with Rust!";
const DEMO_FILE_APPENDIX: &str = "\nAdding a new line of text.";

/// Campus e-learning API and platform demos.
#[derive(Parser)]
#[command(name = "campus", about = "Campus e-learning API and platform demos")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Serve the courses and students REST API.
    Serve {
        /// Listen address (default: CAMPUS_HOST or 0.0.0.0).
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default: CAMPUS_PORT or 3000).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print facts about the host operating system.
    OsInfo {
        /// Print as JSON instead of lines.
        #[arg(long)]
        json: bool,
    },

    /// Write a text file, read it, append a line and read it again.
    FileDemo {
        #[arg(short, long, default_value = "example.txt")]
        path: PathBuf,
    },

    /// Serve a plain-text greeting on every path.
    Hello {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Write a host info file, then serve it with host facts as HTML.
    HostPage {
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// File written at startup and rendered on every request.
        #[arg(short, long, default_value = "os_info.txt")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Serve { host, port } => run_serve(host, port).await,
        Commands::OsInfo { json } => run_os_info(json),
        Commands::FileDemo { path } => run_file_demo(&ScratchFile::new(path)),
        Commands::Hello { host, port } => {
            run_server(build_hello_router(), &format!("{host}:{port}")).await
        }
        Commands::HostPage { host, port, file } => run_host_page(host, port, file).await,
    };
    process::exit(exit_code);
}

/// Execute the serve subcommand.
///
/// Returns exit code: 0 = clean shutdown, 1 = server error,
/// 2 = invalid configuration.
async fn run_serve(host: Option<String>, port: Option<u16>) -> i32 {
    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            return 2;
        }
    };
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    run_server(build_router(AppState::seeded()), &config.addr()).await
}

async fn run_server(app: Router, addr: &str) -> i32 {
    match serve(app, addr).await {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("failed to serve on {addr}: {e}");
            1
        }
    }
}

fn run_os_info(json: bool) -> i32 {
    let facts = HostFacts::collect();
    if json {
        match serde_json::to_string_pretty(&facts) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                tracing::error!("failed to serialize host facts: {e}");
                return 1;
            }
        }
        return 0;
    }

    let memory = |bytes: Option<u64>| bytes.map_or_else(|| "unknown".to_string(), |b| b.to_string());
    println!("Operating System: {}", facts.os_type);
    println!("Platform: {}", facts.platform);
    println!("Release: {}", facts.release_label());
    println!("Architecture: {}", facts.arch);
    println!("CPU Count: {}", facts.cpu_count);
    println!("Total Memory: {}", memory(facts.total_memory));
    println!("Free Memory: {}", memory(facts.free_memory));
    0
}

/// Returns exit code: 0 = success, 3 = I/O error.
fn run_file_demo(file: &ScratchFile) -> i32 {
    match file_demo(file) {
        Ok(()) => 0,
        Err(e) => {
            tracing::error!("{}: {e}", file.path().display());
            3
        }
    }
}

fn file_demo(file: &ScratchFile) -> Result<(), CoreError> {
    file.write(DEMO_FILE_MESSAGE)?;
    println!("File Content: {}", file.read()?);
    file.append(DEMO_FILE_APPENDIX)?;
    println!("Updated File Content: {}", file.read()?);
    Ok(())
}

/// Prepares the host info file, then serves the host page.
///
/// Returns exit code: 0 = clean shutdown, 1 = server error, 3 = I/O error.
async fn run_host_page(host: String, port: u16, path: PathBuf) -> i32 {
    let file = ScratchFile::new(path);
    if let Err(e) = prepare_host_file(&file, &HostFacts::collect()) {
        tracing::error!("{}: {e}", file.path().display());
        return 3;
    }

    let app = build_host_page_router(HostPageState { file });
    run_server(app, &format!("{host}:{port}")).await
}

fn prepare_host_file(file: &ScratchFile, facts: &HostFacts) -> Result<(), CoreError> {
    file.write(HOST_FILE_MESSAGE)?;
    println!("File Content: {}", file.read()?);
    file.append(&format!(
        "\nOperating System Info: {} {}",
        facts.os_type,
        facts.release_label()
    ))?;
    println!("Updated File Content: {}", file.read()?);
    Ok(())
}
