//! Library root for `ticket-assist`.
//!
//! Ticket-assist is the AI layer of a support-ticket dashboard, designed to:
//! - Summarize and classify tickets (sentiment, suggested priority, tags)
//! - Draft replies in the operator's brand tone for an agent to review
//! - Report "unavailable" explicitly instead of failing the caller
//!
//! The hosted model is reached through the extensible `GenericLlmClient` trait,
//! so providers (or test fakes) can be swapped without touching the assist logic.

#[deny(missing_docs)]
pub mod base;
pub mod assist;
pub mod prelude;
pub mod runtime;
pub mod service;

use std::path::Path;

use anyhow::Context;
use base::{
    config::Config,
    types::{Res, Ticket},
};
use tracing::info;

use assist::TicketAssistance;

/// Public async entry for the binary crate.
///
/// Loads the ticket JSON, builds the runtime from the configuration, and runs the
/// assist operations for that ticket.
pub async fn start(config: Config, ticket_path: &Path, instruction: Option<String>, with_analysis: bool) -> Res<TicketAssistance> {
    info!("Starting ticket-assist ...");

    // Load the ticket.
    let raw = tokio::fs::read_to_string(ticket_path).await.with_context(|| format!("Failed to read ticket file `{}`.", ticket_path.display()))?;
    let ticket: Ticket = serde_json::from_str(&raw).with_context(|| format!("Failed to parse ticket file `{}`.", ticket_path.display()))?;

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config);

    // Run the assist operations.
    let assistance = runtime.assist(&ticket, instruction.as_deref(), with_analysis).await;

    Ok(assistance)
}
