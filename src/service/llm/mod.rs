//! Integration with hosted language models.
//!
//! The assist layer talks to models through the provider-agnostic [`GenericLlmClient`]
//! trait, so the concrete provider (or a test fake) is chosen by whoever builds the
//! [`LlmClient`].

pub mod openai;

use std::{fmt, ops::Deref, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use crate::base::types::Res;

// Types.

/// JSON schema the model's output must conform to.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseSchema {
    /// Schema name, as reported to the provider.
    pub name: String,
    /// Optional description of the schema.
    pub description: Option<String>,
    /// The JSON schema itself.
    pub schema: Value,
}

/// A single completion request.
///
/// A request with a [`ResponseSchema`] asks for structured JSON output; one without
/// asks for free text. The credential travels with the request, so whichever
/// configuration passed the credential check is the one that authenticates the call.
#[derive(Clone, PartialEq)]
pub struct CompletionRequest {
    /// Model identifier.
    pub model: String,
    /// API key used for this call.
    pub credential: String,
    /// Optional system-level instruction.
    pub system_instruction: Option<String>,
    /// The user prompt.
    pub prompt: String,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Optional structured output schema.
    pub response_schema: Option<ResponseSchema>,
}

impl fmt::Debug for CompletionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionRequest")
            .field("model", &self.model)
            .field("credential", &"<redacted>")
            .field("system_instruction", &self.system_instruction)
            .field("prompt", &self.prompt)
            .field("temperature", &self.temperature)
            .field("response_schema", &self.response_schema)
            .finish()
    }
}

// Traits.

/// Generic LLM client trait that clients must implement.
///
/// Implementations perform exactly one round trip per call: no retries, no caching.
#[async_trait]
pub trait GenericLlmClient: Send + Sync + 'static {
    /// Send a completion request and return the model's text output.
    async fn complete(&self, request: &CompletionRequest) -> Res<String>;
}

// Structs.

/// LLM client for the application.
///
/// This is trivially cloneable and can be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct LlmClient {
    inner: Arc<dyn GenericLlmClient>,
}

impl Deref for LlmClient {
    type Target = dyn GenericLlmClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl LlmClient {
    pub fn new(inner: Arc<dyn GenericLlmClient>) -> Self {
        Self { inner }
    }
}
