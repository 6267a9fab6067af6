//! Serve command: MCP server on stdio.

use clap::Args;
use remarq_core::Lexicon;
use rmcp::{ServiceExt, transport::stdio};
use tracing::{info, instrument};

use crate::server::ProjectServer;

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {}

/// Run the MCP server until the client disconnects.
///
/// Logs go to stderr; stdout carries the protocol.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(
    _args: ServeArgs,
    lexicon: Lexicon,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    info!(max_input_bytes = ?max_input_bytes, "starting MCP server on stdio");

    let service = ProjectServer::new(lexicon, max_input_bytes)
        .serve(stdio())
        .await?;
    let reason = service.waiting().await?;

    info!(reason = ?reason, "MCP server stopped");
    Ok(())
}
