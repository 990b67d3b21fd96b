//! MCP bridge to an image library backend.
//!
//! Exposes seven read-only tools over MCP stdio and forwards each call as a
//! single HTTP request to the backend API. Configuration comes from the
//! environment:
//! - `IMAGE_API_URL` — backend base URL (default `http://localhost:8080/api`)
//! - `IMAGE_API_KEY` — optional API key sent as `X-API-Key`

mod api;
mod config;
mod format;
mod mcp_server;
mod registry;
mod types;

use anyhow::Result;
use rmcp::{ServiceExt, transport::stdio};

use crate::api::ApiClient;
use crate::config::Config;
use crate::mcp_server::ImageMcpServer;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    // Logging goes to stderr only; stdout carries the MCP stdio transport.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env();
    tracing::info!("image MCP server starting, backend: {}", config.api_base_url);

    let client = ApiClient::new(config.clone());
    let server = ImageMcpServer::new(client, config);

    let service = server.serve(stdio()).await.inspect_err(|err| {
        tracing::error!("MCP serve error: {err:?}");
    })?;
    service.waiting().await?;
    Ok(())
}
