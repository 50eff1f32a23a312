//! Murmur chat API server binary.
//!
//! Prints `{"port": N}` to stdout once bound so callers can discover an
//! ephemeral port.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use murmur_api::AppState;
use murmur_api::config::ApiConfig;

/// CLI arguments for the API server.
#[derive(Parser, Debug)]
#[command(name = "murmur_api_server", version, about = "Murmur chat API server")]
struct Args {
    /// Interface to bind. Overrides the host part of `BIND_ADDR`.
    #[arg(long, env = "HOST")]
    host: Option<String>,

    /// Port to listen on (0 = ephemeral). Overrides the port part of `BIND_ADDR`.
    #[arg(long, env = "PORT")]
    port: Option<u16>,

    /// JSON file holding an array of reply sentences to use instead of the
    /// built-in ones.
    #[arg(long, env = "MURMUR_REPLIES")]
    replies: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout is reserved for the JSON port message.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,murmur_api=debug,murmur_core=debug".into()),
        )
        .init();

    let args = Args::parse();

    let mut config = ApiConfig::from_env();
    config.override_listen(args.host.as_deref(), args.port);
    if args.replies.is_some() {
        config.replies_path = args.replies;
    }
    info!(bind_addr = %config.bind_addr, replies = ?config.replies_path, "starting murmur_api_server");

    let state = AppState::from_config(config)?;
    let listener = tokio::net::TcpListener::bind(&state.config.bind_addr).await?;
    let app = murmur_api::router(state);
    let local_addr = listener.local_addr()?;

    println!("{}", serde_json::json!({ "port": local_addr.port() }));
    info!(addr = %local_addr, "REST API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
