//! Tagged outcome shared by the analyzer and the drafter.

use std::fmt;

use serde::Serialize;

/// Why an assist call produced no value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UnavailableReason {
    /// No API key is configured; no request was sent.
    MissingCredential,
    /// The request failed in transport or was rejected by the service.
    ServiceFailure,
    /// The service answered with no text.
    EmptyResponse,
    /// The service answered, but the output was not the expected JSON shape.
    MalformedResponse,
}

impl UnavailableReason {
    /// Human-readable text a reply editor can show in place of a draft.
    pub fn fallback_text(&self) -> &'static str {
        match self {
            UnavailableReason::MissingCredential => "API Key missing. Cannot generate reply.",
            UnavailableReason::ServiceFailure | UnavailableReason::MalformedResponse => "Error generating reply. Please try again.",
            UnavailableReason::EmptyResponse => "Could not generate reply.",
        }
    }
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            UnavailableReason::MissingCredential => "no API key configured",
            UnavailableReason::ServiceFailure => "service call failed",
            UnavailableReason::EmptyResponse => "service returned no text",
            UnavailableReason::MalformedResponse => "service returned malformed output",
        };

        f.write_str(text)
    }
}

/// Result of an assist call: a value, or the reason there is none.
///
/// Assist calls never fail with an error; callers branch on this instead.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "camelCase")]
pub enum AssistOutcome<T> {
    /// The model produced a value.
    Available(T),
    /// No value is available.
    Unavailable(UnavailableReason),
}

impl<T> AssistOutcome<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, AssistOutcome::Available(_))
    }

    /// The value, if any.
    pub fn ok(self) -> Option<T> {
        match self {
            AssistOutcome::Available(value) => Some(value),
            AssistOutcome::Unavailable(_) => None,
        }
    }

    /// The reason there is no value, if any.
    pub fn reason(&self) -> Option<UnavailableReason> {
        match self {
            AssistOutcome::Available(_) => None,
            AssistOutcome::Unavailable(reason) => Some(*reason),
        }
    }

    pub fn as_ref(&self) -> AssistOutcome<&T> {
        match self {
            AssistOutcome::Available(value) => AssistOutcome::Available(value),
            AssistOutcome::Unavailable(reason) => AssistOutcome::Unavailable(*reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AssistOutcome<U> {
        match self {
            AssistOutcome::Available(value) => AssistOutcome::Available(f(value)),
            AssistOutcome::Unavailable(reason) => AssistOutcome::Unavailable(reason),
        }
    }
}

impl AssistOutcome<String> {
    /// Text for a reply editor: the draft, or the fallback message.
    pub fn into_draft_text(self) -> String {
        match self {
            AssistOutcome::Available(draft) => draft,
            AssistOutcome::Unavailable(reason) => reason.fallback_text().to_string(),
        }
    }
}

// Tests.
