//! Reply drafting steered by the operator's tone and knowledge settings.

use crate::{
    base::{
        prompts,
        types::{AppConfig, Ticket},
    },
    prelude::{Config, error, info, instrument, warn},
    service::llm::{CompletionRequest, LlmClient},
};

use super::outcome::{AssistOutcome, UnavailableReason};

/// A request to rework the previous draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Refinement {
    /// Make it shorter.
    Shorter,
    /// Add more detail.
    MoreDetail,
    /// Free-form instruction from the agent.
    Custom(String),
}

impl Refinement {
    /// The instruction text sent to the model.
    pub fn instruction(&self) -> &str {
        match self {
            Refinement::Shorter => "Make it shorter and more concise",
            Refinement::MoreDetail => "Add more detail and explanation",
            Refinement::Custom(text) => text.as_str(),
        }
    }
}

/// Build the outbound request for drafting a reply.
pub fn build_draft_request(config: &Config, ticket: &Ticket, app: &AppConfig, instruction: Option<&str>) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        credential: config.credential().unwrap_or_default().to_string(),
        system_instruction: Some(prompts::drafting_system_instruction(&config.company_name, app, ticket)),
        prompt: prompts::drafting_prompt(ticket, instruction),
        temperature: Some(config.drafter_temperature),
        response_schema: None,
    }
}

/// Draft a reply to a ticket.
///
/// Each call is independent: re-invoke with a different `instruction` or `app`
/// to get a new draft. Failures are reported as [`AssistOutcome::Unavailable`];
/// use [`AssistOutcome::into_draft_text`] to get display text either way.
#[instrument(skip_all, fields(ticket_id = %ticket.id, brand_tone = %app.brand_tone))]
pub async fn draft_reply(config: &Config, llm: &LlmClient, ticket: &Ticket, app: &AppConfig, instruction: Option<&str>) -> AssistOutcome<String> {
    if config.credential().is_none() {
        warn!("No API key configured; reply drafting unavailable.");
        return AssistOutcome::Unavailable(UnavailableReason::MissingCredential);
    }

    let request = build_draft_request(config, ticket, app, instruction);

    match llm.complete(&request).await {
        Ok(text) if text.is_empty() => {
            warn!("Reply draft came back empty.");
            AssistOutcome::Unavailable(UnavailableReason::EmptyResponse)
        }
        Ok(text) => {
            info!("Drafted a reply of {} characters.", text.len());
            AssistOutcome::Available(text)
        }
        Err(err) => {
            error!("Error generating reply: {err:#}");
            AssistOutcome::Unavailable(UnavailableReason::ServiceFailure)
        }
    }
}
