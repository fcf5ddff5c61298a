//! Startup configuration — CLI flags with environment fallbacks.
//!
//! The API key is environment-only and required; its absence is a hard
//! startup failure, never a runtime fallback.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments. Every flag falls back to an environment
/// variable, then to a default.
#[derive(Debug, Parser)]
#[command(name = "file-agent", about = "Gemini-driven file operations over one workspace directory")]
pub struct Args {
    /// Address to listen on (env: BIND_ADDR).
    #[arg(long)]
    pub bind: Option<String>,

    /// Workspace directory for sandboxed file operations (env: WORKSPACE_DIR).
    #[arg(long)]
    pub workspace: Option<PathBuf>,

    /// Gemini model ID or alias (env: GEMINI_MODEL).
    #[arg(long)]
    pub model: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not configured in environment variables")]
    MissingApiKey,

    #[error("invalid bind address '{0}'")]
    InvalidBindAddr(String),
}

/// Resolved configuration.
#[derive(Debug)]
pub struct Config {
    pub bind: SocketAddr,
    pub workspace_dir: PathBuf,
    pub model: String,
    pub api_key: String,
}

impl Config {
    /// Resolve flags, environment, and defaults into a runnable config.
    pub fn load(args: Args) -> Result<Self, ConfigError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let bind = args
            .bind
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| "127.0.0.1:3000".to_string());
        let bind: SocketAddr = bind
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddr(bind.clone()))?;

        let workspace_dir = args
            .workspace
            .or_else(|| std::env::var("WORKSPACE_DIR").ok().map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("workspace"));

        let model = args
            .model
            .or_else(|| std::env::var("GEMINI_MODEL").ok())
            .unwrap_or_else(|| "gemini-1.5-flash".to_string());

        Ok(Self {
            bind,
            workspace_dir,
            model,
            api_key,
        })
    }
}
