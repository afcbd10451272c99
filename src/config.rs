//! Layered host configuration.
//!
//! Priority, lowest first: built-in defaults, YAML config file, `CHAT_`
//! environment variables (`CHAT_SERVER__PORT=8080`), CLI flags and their
//! plain env fallbacks (`PORT`, `RAG_URL`).

use std::path::Path;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

/// Config file picked up from the working directory when none is given.
const DEFAULT_CONFIG_FILE: &str = "config.yaml";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<String>,

    /// Address to bind
    #[arg(long, env = "HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Upstream retrieval endpoint, e.g. http://127.0.0.1:8000/rag
    #[arg(long, env = "RAG_URL")]
    pub rag_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct BackendConfig {
    /// Upstream `/rag` endpoint. `/api/chat` answers 503 while unset.
    pub rag_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Page and window title.
    pub title: String,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Directory with the wasm bundle, served under `/pkg`.
    pub pkg_dir: String,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.request_timeout_secs", 60)?
            .set_default("ui.title", crate::ui::chat::DEFAULT_TITLE)?
            .set_default("ui.static_dir", "static")?
            .set_default("ui.pkg_dir", "pkg")?;

        match &cli.config {
            Some(path) => builder = builder.add_source(File::with_name(path)),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                builder = builder.add_source(File::with_name(DEFAULT_CONFIG_FILE));
            }
            None => {}
        }

        builder = builder.add_source(
            Environment::with_prefix("CHAT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(rag_url) = cli.rag_url {
            builder = builder.set_override("backend.rag_url", rag_url)?;
        }

        let cfg = builder.build()?;
        let mut config: Self = cfg.try_deserialize()?;
        config.backend.rag_url = config
            .backend
            .rag_url
            .filter(|url| !url.trim().is_empty());
        Ok(config)
    }

    /// `host:port` to bind.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
