//! # domotz-mcp
//!
//! MCP server exposing the Domotz public API as callable tools. Runs either
//! as a stdio JSON-RPC loop (launched by an agent host) or as an HTTP
//! listener serving MCP over multiplexed SSE sessions.
//!
//! ## Module map
//!
//! ```text
//! main.rs      - entry point, transport selection
//! config.rs    - CLI and environment configuration
//! endpoints.rs - static descriptor table, one entry per API operation
//! request.rs   - descriptor + arguments to concrete upstream request
//! client.rs    - Domotz HTTP client and response normalization
//! tools.rs     - tool schema derivation and call dispatch
//! mcp.rs       - JSON-RPC protocol handler and stdio transport
//! session.rs   - session registry with per-session worker tasks
//! sse.rs       - HTTP/SSE transport listener
//! ```

mod client;
mod config;
mod endpoints;
mod mcp;
mod request;
mod session;
mod sse;
mod tools;

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use crate::client::DomotzClient;
use crate::config::Transport;
use crate::session::SessionRegistry;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = config::Cli::parse();
    let config = match config::load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("domotz-mcp: configuration error: {}", e);
            std::process::exit(1);
        }
    };

    // Stdout carries protocol frames in stdio mode; diagnostics go to stderr.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = match DomotzClient::new(&config.base_url, &config.api_key) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("domotz-mcp: {}", e);
            std::process::exit(1);
        }
    };

    match config.transport {
        Transport::Stdio => {
            eprintln!(
                "domotz-mcp: {} tools ready on stdio, upstream {}",
                endpoints::ROUTES.len(),
                config.base_url
            );
            mcp::run_stdio(client).await;
        }
        Transport::Sse => {
            info!("domotz-mcp {} starting", env!("CARGO_PKG_VERSION"));
            info!("Upstream API: {}", config.base_url);

            let state = sse::AppState {
                client: Arc::new(client),
                registry: SessionRegistry::new(),
            };
            let app = sse::router(state);

            let listener = match tokio::net::TcpListener::bind(&config.listen).await {
                Ok(listener) => listener,
                Err(e) => {
                    eprintln!("domotz-mcp: failed to bind {}: {}", config.listen, e);
                    std::process::exit(1);
                }
            };
            info!("Listening on {}", config.listen);

            let shutdown = async {
                let ctrl_c = async {
                    tokio::signal::ctrl_c()
                        .await
                        .expect("failed to install Ctrl+C handler");
                };

                #[cfg(unix)]
                let terminate = async {
                    tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                        .expect("failed to install SIGTERM handler")
                        .recv()
                        .await;
                };

                #[cfg(not(unix))]
                let terminate = std::future::pending::<()>();

                tokio::select! {
                    _ = ctrl_c => info!("Received SIGINT, shutting down"),
                    _ = terminate => info!("Received SIGTERM, shutting down"),
                }
            };

            if let Err(e) = axum::serve(listener, app)
                .with_graceful_shutdown(shutdown)
                .await
            {
                eprintln!("domotz-mcp: server error: {}", e);
                std::process::exit(1);
            }
            info!("Server stopped");
        }
    }
}
