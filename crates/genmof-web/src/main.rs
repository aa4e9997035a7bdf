//! GenMOF Web Server
//!
//! Run with: cargo run -p genmof-web -- --config genmof.toml

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use genmof_common::GenmofConfig;
use genmof_web::router::build_router;
use genmof_web::state::{spawn_session_sweeper, AppState};

#[derive(Debug, Parser)]
#[command(name = "genmof-web", version, about = "GenMOF Studio web front-end")]
struct Args {
    /// Path to genmof.toml (defaults to $GENMOF_CONFIG, then ./genmof.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen address, e.g. 0.0.0.0:8080 (overrides config)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = GenmofConfig::load(args.config.as_deref())?;
    if let Some(bind) = args.bind.as_deref() {
        config.server.apply_bind(bind)?;
    }

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("⚗️ GenMOF Studio starting up...");
    info!("Version: {}", env!("CARGO_PKG_VERSION"));

    let addr = config.server.bind_addr()?;
    let sweep_every = config.sessions.sweep_interval();
    let state = Arc::new(AppState::new(config));
    info!("Candidate generator: {}", state.generator.name());

    spawn_session_sweeper(state.clone(), sweep_every);
    let app = build_router(state);

    info!("🚀 Server listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
