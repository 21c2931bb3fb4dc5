//! OpenAI-compatible chat completions provider.
//!
//! The hosted model exposes an OpenAI-compatible endpoint, so `async-openai` is pointed
//! at the configured API base rather than at OpenAI itself.

use std::sync::Arc;

use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage, ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage, ChatCompletionRequestUserMessageContent,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::base::{config::Config, types::Res};

use super::{CompletionRequest, GenericLlmClient, LlmClient};

// Extra methods on `LlmClient` applied by the openai implementation.

impl LlmClient {
    /// Build a client for the configured API base.
    ///
    /// The API key is not captured here; each request carries its own.
    pub fn openai(config: &Config) -> Self {
        let client = OpenAiLlmClient::new(config);
        Self { inner: Arc::new(client) }
    }
}

// Specific implementations.

/// OpenAI-compatible LLM client implementation.
///
/// Every call builds a fresh, unpooled HTTP client authenticated with the request's credential.
#[derive(Clone)]
pub struct OpenAiLlmClient {
    api_base: String,
}

impl OpenAiLlmClient {
    /// Create a new client against the configured API base.
    #[instrument(name = "OpenAiLlmClient::new", skip_all)]
    pub fn new(config: &Config) -> Self {
        Self { api_base: config.api_base.clone() }
    }

    /// Build the provider configuration for one request.
    fn openai_config(&self, request: &CompletionRequest) -> OpenAIConfig {
        OpenAIConfig::new().with_api_base(self.api_base.clone()).with_api_key(request.credential.clone())
    }
}

#[async_trait]
impl GenericLlmClient for OpenAiLlmClient {
    #[instrument(name = "OpenAiLlmClient::complete", skip_all, fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Res<String> {
        let client = Client::with_config(self.openai_config(request));
        let request = build_chat_request(request)?;

        debug!("Sending chat completion request ...");

        let response = client.chat().create(request).await?;

        info!("LLM response has {} choices.", response.choices.len());

        let Some(choice) = response.choices.first() else {
            return Err(anyhow::anyhow!("No choices returned."));
        };

        if let Some(reason) = &choice.message.refusal {
            return Err(anyhow::anyhow!("Request refused: {reason}"));
        }

        Ok(choice.message.content.clone().unwrap_or_default())
    }
}

/// Map a provider-agnostic request onto a chat completion request.
pub fn build_chat_request(request: &CompletionRequest) -> Res<CreateChatCompletionRequest> {
    let mut messages = Vec::new();

    if let Some(system_instruction) = &request.system_instruction {
        messages.push(ChatCompletionRequestMessage::System(ChatCompletionRequestSystemMessage {
            content: ChatCompletionRequestSystemMessageContent::Text(system_instruction.clone()),
            name: None,
        }));
    }

    messages.push(ChatCompletionRequestMessage::User(ChatCompletionRequestUserMessage {
        content: ChatCompletionRequestUserMessageContent::Text(request.prompt.clone()),
        name: None,
    }));

    let mut args = CreateChatCompletionRequestArgs::default();
    args.model(&request.model).messages(messages);

    if let Some(temperature) = request.temperature {
        args.temperature(temperature);
    }

    if let Some(schema) = &request.response_schema {
        args.response_format(ResponseFormat::JsonSchema {
            json_schema: ResponseFormatJsonSchema {
                name: schema.name.clone(),
                description: schema.description.clone(),
                schema: Some(schema.schema.clone()),
                strict: Some(true),
            },
        });
    }

    Ok(args.build()?)
}

// Tests.
