//! Ticket analysis: summary, sentiment, suggested priority, tags and confidence.

use std::sync::OnceLock;

use serde_json::json;

use crate::{
    base::{
        prompts,
        types::{AiAnalysisResult, Ticket},
    },
    prelude::{Config, error, info, instrument, warn},
    service::llm::{CompletionRequest, LlmClient, ResponseSchema},
};

use super::outcome::{AssistOutcome, UnavailableReason};

static ANALYSIS_SCHEMA: OnceLock<ResponseSchema> = OnceLock::new();

/// Get the structured output schema for ticket analysis.
///
/// All five fields are required. Priority and sentiment stay `string` typed but are
/// restricted to the labels `AiAnalysisResult` deserializes, so a strict decode always parses.
pub fn get_analysis_schema() -> &'static ResponseSchema {
    ANALYSIS_SCHEMA.get_or_init(|| ResponseSchema {
        name: "TicketAnalysis".to_string(),
        description: Some("Structured assessment of a customer support ticket.".to_string()),
        schema: json!({
            "type": "object",
            "properties": {
                "summary": { "type": "string" },
                "suggestedPriority": { "type": "string", "enum": ["Low", "Medium", "High", "Critical"] },
                "sentiment": { "type": "string", "enum": ["Positive", "Neutral", "Negative", "Urgent"] },
                "tags": { "type": "array", "items": { "type": "string" } },
                "confidenceScore": { "type": "number" }
            },
            "required": ["summary", "suggestedPriority", "sentiment", "tags", "confidenceScore"],
            "additionalProperties": false
        }),
    })
}

/// Build the outbound request for analyzing a ticket.
pub fn build_analysis_request(config: &Config, ticket: &Ticket) -> CompletionRequest {
    CompletionRequest {
        model: config.model.clone(),
        credential: config.credential().unwrap_or_default().to_string(),
        system_instruction: None,
        prompt: prompts::analysis_prompt(ticket),
        temperature: Some(config.analyzer_temperature),
        response_schema: Some(get_analysis_schema().clone()),
    }
}

/// Analyze a ticket.
///
/// Returns the model's assessment exactly as parsed. Every failure (no API key,
/// service error, empty or malformed output) is logged and reported as
/// [`AssistOutcome::Unavailable`]; nothing is retried.
#[instrument(skip_all, fields(ticket_id = %ticket.id))]
pub async fn analyze_ticket(config: &Config, llm: &LlmClient, ticket: &Ticket) -> AssistOutcome<AiAnalysisResult> {
    if config.credential().is_none() {
        warn!("No API key configured; ticket analysis unavailable.");
        return AssistOutcome::Unavailable(UnavailableReason::MissingCredential);
    }

    let request = build_analysis_request(config, ticket);

    let text = match llm.complete(&request).await {
        Ok(text) => text,
        Err(err) => {
            error!("Error analyzing ticket: {err:#}");
            return AssistOutcome::Unavailable(UnavailableReason::ServiceFailure);
        }
    };

    if text.is_empty() {
        warn!("Ticket analysis returned no text.");
        return AssistOutcome::Unavailable(UnavailableReason::EmptyResponse);
    }

    match serde_json::from_str::<AiAnalysisResult>(&text) {
        Ok(result) => {
            info!("Ticket analyzed with confidence {}.", result.confidence_score);
            AssistOutcome::Available(result)
        }
        Err(err) => {
            error!("Error parsing ticket analysis: {err}");
            AssistOutcome::Unavailable(UnavailableReason::MalformedResponse)
        }
    }
}
