//! Chat window host server.
//!
//! Entry point that serves the chat page, its wasm bundle and the chat proxy.

#[cfg(not(target_arch = "wasm32"))]
use mimalloc::MiMalloc;

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[cfg(not(target_arch = "wasm32"))]
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use std::sync::Arc;

    use chat_window::config::AppConfig;
    use chat_window::server::start_server;
    use tracing::info;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Load .env (if present) before reading any configuration
    let _ = dotenvy::dotenv();

    // Initialize tracing (M-LOG-STRUCTURED)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json_logs = std::env::var("CHAT_LOG_FORMAT").is_ok_and(|format| format == "json");
    if json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(true))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    }

    let config = Arc::new(AppConfig::load()?);

    info!(
        name: "config.loaded",
        address = %config.bind_address(),
        upstream = config.backend.rag_url.as_deref().unwrap_or("<none>"),
        title = %config.ui.title,
        "Configuration loaded"
    );

    start_server(config).await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
