//! AI assistance for support tickets.
//!
//! This module provides the two assist operations and the outcome type they share:
//! - Ticket analysis (structured assessment of a ticket)
//! - Reply drafting (free-text reply for an agent to review)
//!
//! Both are stateless: every call is fully determined by its arguments.

pub mod analyzer;
pub mod drafter;
pub mod outcome;

use serde::Serialize;

use crate::{
    base::types::{AiAnalysisResult, AppConfig, Ticket},
    prelude::{Config, info, instrument},
    service::llm::LlmClient,
};

use self::outcome::AssistOutcome;

/// Everything the assist layer produced for one ticket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketAssistance {
    /// ID of the ticket this was produced for.
    pub ticket_id: String,
    /// Analysis outcome; `None` when analysis was not requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AssistOutcome<AiAnalysisResult>>,
    /// Draft outcome.
    pub draft: AssistOutcome<String>,
}

/// Run analysis (optionally) and drafting for a ticket concurrently.
///
/// The two calls are independent; neither waits on the other's result.
#[instrument(skip_all, fields(ticket_id = %ticket.id))]
pub async fn assist_ticket(config: &Config, llm: &LlmClient, ticket: &Ticket, app: &AppConfig, instruction: Option<&str>, with_analysis: bool) -> TicketAssistance {
    let analysis = async {
        if with_analysis {
            Some(analyzer::analyze_ticket(config, llm, ticket).await)
        } else {
            None
        }
    };
    let draft = drafter::draft_reply(config, llm, ticket, app, instruction);

    let (analysis, draft) = futures::join!(analysis, draft);

    info!("Assistance complete (analysis: {:?}, draft available: {}).", analysis.as_ref().map(|a| a.is_available()), draft.is_available());

    TicketAssistance {
        ticket_id: ticket.id.clone(),
        analysis,
        draft,
    }
}
