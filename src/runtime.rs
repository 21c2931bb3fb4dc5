//! Runtime services and shared state for ticket-assist.

use tracing::instrument;

use crate::{
    assist::{self, TicketAssistance, analyzer, drafter, outcome::AssistOutcome},
    base::{
        config::Config,
        types::{AiAnalysisResult, AppConfig, Ticket},
    },
    service::llm::LlmClient,
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the configuration and the LLM client. It is designed to be
/// trivially cloneable, so concurrent callers each hold their own handle and no
/// process-wide client exists.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The LLM client instance.
    pub llm: LlmClient,
}

impl Runtime {
    /// Create a new runtime instance backed by the OpenAI-compatible provider.
    #[instrument(skip_all)]
    pub fn new(config: Config) -> Self {
        let llm = LlmClient::openai(&config);

        Self { config, llm }
    }

    /// Analyze a ticket.
    pub async fn analyze(&self, ticket: &Ticket) -> AssistOutcome<AiAnalysisResult> {
        analyzer::analyze_ticket(&self.config, &self.llm, ticket).await
    }

    /// Draft a reply using an explicit tone/knowledge configuration.
    pub async fn draft(&self, ticket: &Ticket, app: &AppConfig, instruction: Option<&str>) -> AssistOutcome<String> {
        drafter::draft_reply(&self.config, &self.llm, ticket, app, instruction).await
    }

    /// Draft a reply using the configured tone/knowledge settings.
    pub async fn draft_with_defaults(&self, ticket: &Ticket, instruction: Option<&str>) -> AssistOutcome<String> {
        self.draft(ticket, &self.config.app, instruction).await
    }

    /// Analyze and draft concurrently, as the dashboard does when a ticket is opened.
    pub async fn assist(&self, ticket: &Ticket, instruction: Option<&str>, with_analysis: bool) -> TicketAssistance {
        assist::assist_ticket(&self.config, &self.llm, ticket, &self.config.app, instruction, with_analysis).await
    }
}
