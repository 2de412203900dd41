//! Standalone demo handlers: the plain-text greeting and the host page.
//!
//! Both are mounted as router fallbacks, so they answer every method and
//! path.

use axum::extract::State;
use axum::response::Html;
use html_escape::encode_text;

use campus_core::HostFacts;

use crate::error::ApiError;
use crate::state::HostPageState;

pub const GREETING: &str = "Hello, this is your first Rust server!\n";

/// Answers any request with [`GREETING`] as `text/plain`.
pub async fn hello() -> &'static str {
    GREETING
}

/// Renders host facts and the scratch file as an HTML page.
pub async fn host_page(State(state): State<HostPageState>) -> Result<Html<String>, ApiError> {
    let path = state.file.path().to_path_buf();
    let contents = tokio::fs::read_to_string(&path).await.map_err(|err| {
        ApiError::InternalError(format!("failed to read {}: {err}", path.display()))
    })?;
    let facts = tokio::task::spawn_blocking(HostFacts::collect)
        .await
        .map_err(|err| ApiError::InternalError(format!("host facts task failed: {err}")))?;
    Ok(Html(render_host_page(&facts, &contents)))
}

/// Builds the host information page.
pub fn render_host_page(facts: &HostFacts, file_contents: &str) -> String {
    let free_memory = facts
        .free_memory
        .map_or_else(|| "unknown".to_string(), |bytes| format!("{bytes} bytes"));

    format!(
        r#"<html>
<head>
  <title>OS Information</title>
  <style>
    body {{ font-family: Arial, sans-serif; margin: 20px; }}
    h1 {{ color: #333; }}
    pre {{ background: #abc3d7; padding: 10px; border: 1px solid #ddd; }}
    .box {{ border: 2px solid #000; padding: 20px; border-radius: 5px; width: 50%; margin: 10% auto 0; }}
  </style>
</head>
<body>
  <div class="box">
    <h1>Operating System Information</h1>
    <p><strong>Operating System:</strong> {platform}</p>
    <p><strong>CPU Architecture:</strong> {arch}</p>
    <p><strong>Free Memory:</strong> {free_memory}</p>
    <h2>File Content:</h2>
    <pre>{contents}</pre>
  </div>
</body>
</html>
"#,
        platform = encode_text(&facts.platform),
        arch = encode_text(&facts.arch),
        contents = encode_text(file_contents),
    )
}
