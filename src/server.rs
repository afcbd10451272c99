//! Axum host for the chat window.
//!
//! Serves the HTML page shell, the compiled wasm bundle and static assets, and
//! proxies `/api/chat` to the configured messaging backend.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use serde_json::{Value, json};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::chat::{BackendError, ChatReply, ChatRequest, MessagingBackend, RagBackend};
use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Backend that answers `/api/chat`; `None` when no upstream is configured.
    pub backend: Option<Arc<dyn MessagingBackend>>,
    /// Global configuration.
    pub config: Arc<AppConfig>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("backend", &self.backend.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl AppState {
    /// Build state from configuration, connecting the upstream if one is set.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let backend = match &config.backend.rag_url {
            Some(url) => {
                let backend = RagBackend::new(url)?;
                info!(name: "backend.configured", endpoint = %backend.endpoint(), "Upstream backend configured");
                Some(Arc::new(backend) as Arc<dyn MessagingBackend>)
            }
            None => {
                warn!(name: "backend.missing", "No upstream configured; /api/chat will answer 503");
                None
            }
        };
        Ok(Self { backend, config })
    }
}

/// Build the router.
pub fn router(state: AppState) -> Router {
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);
    let static_dir = ServeDir::new(&state.config.ui.static_dir);
    let pkg_dir = ServeDir::new(&state.config.ui.pkg_dir);

    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/chat", post(api_chat))
        .nest_service("/static", static_dir)
        .nest_service("/pkg", pkg_dir)
        .layer(axum::middleware::from_fn(
            move |req: Request, next: Next| async move {
                match tokio::time::timeout(timeout, next.run(req)).await {
                    Ok(res) => res,
                    Err(_) => (StatusCode::REQUEST_TIMEOUT, "Request timed out").into_response(),
                }
            },
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    let state = AppState::from_config(Arc::clone(&config))?;
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// Generate the HTML shell that loads the wasm bundle.
pub fn page_shell(title: &str) -> String {
    let title = escape_html(title);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/app.css">
    <script type="module">
        import init from "/pkg/chat_window.js";
        init();
    </script>
</head>
<body class="antialiased">
    <noscript>{title} needs JavaScript and WebAssembly enabled.</noscript>
</body>
</html>
"#
    )
}

async fn index_handler(State(state): State<AppState>) -> impl IntoResponse {
    Html(page_shell(&state.config.ui.title))
}

async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn api_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatReply>, (StatusCode, String)> {
    if request.draft_text.trim().is_empty() {
        return Err((StatusCode::BAD_REQUEST, "draftText must not be empty".into()));
    }
    let Some(backend) = state.backend.as_ref() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            BackendError::Unavailable.to_string(),
        ));
    };

    info!(
        name: "api.chat.request",
        draft_len = request.draft_text.len(),
        context_len = request.conversation_context.len(),
        "Forwarding chat request"
    );

    match backend.send(&request).await {
        Ok(reply) if !reply.text.trim().is_empty() => Ok(Json(ChatReply { text: reply.text })),
        Ok(_) => Err((StatusCode::BAD_GATEWAY, BackendError::EmptyReply.to_string())),
        Err(err) => {
            warn!(name: "api.chat.upstream_failed", error = %err, "Upstream backend failed");
            Err((StatusCode::BAD_GATEWAY, err.to_string()))
        }
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
