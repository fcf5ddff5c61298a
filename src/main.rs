//! file-agent — HTTP service where a Gemini model drives sandboxed file
//! operations inside one workspace directory.

mod agent;
mod config;
mod llm;
mod server;
mod tools;
mod workspace;

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::{Args, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "file_agent=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();
    let config = Config::load(Args::parse())?;

    let workspace = workspace::Workspace::open(&config.workspace_dir).await?;
    tracing::info!(root = %workspace.root().display(), "workspace ready");

    let model = Arc::new(llm::Gemini::new(config.api_key.clone(), &config.model));
    tracing::info!(model = model.model(), "gemini client ready");

    let agent = Arc::new(agent::Agent::new(model, workspace));
    let app = server::router(agent);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C"),
        _ = terminate => tracing::info!("received terminate signal"),
    }
}
