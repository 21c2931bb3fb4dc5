//! Shared result aliases and the ticket data model.
//!
//! Every type here serializes with the dashboard's wire format: camelCase field
//! names, and enum labels exactly as they are shown to operators (e.g. `"In Progress"`).

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Crate-wide error type.
pub type Err = anyhow::Error;
/// Crate-wide result type.
pub type Res<T> = Result<T, Err>;
/// Result with no value.
pub type Void = Res<()>;

// Enums.

/// Lifecycle status of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    /// Newly opened.
    Open,
    /// Being worked on by an agent.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Waiting on the customer or a third party.
    Pending,
    /// Solved, awaiting closure.
    Resolved,
    /// Closed.
    Closed,
    /// Handed to a higher support tier.
    Escalated,
}

/// Priority of a ticket, as set by an agent or suggested by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    /// Low.
    Low,
    /// Medium.
    Medium,
    /// High.
    High,
    /// Critical.
    Critical,
}

impl fmt::Display for TicketPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Critical => "Critical",
        };

        f.write_str(label)
    }
}

/// Customer sentiment as judged by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    /// Positive.
    Positive,
    /// Neutral.
    Neutral,
    /// Negative.
    Negative,
    /// Urgent.
    Urgent,
}

/// Subscription plan of a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CustomerPlan {
    /// Starter.
    Starter,
    /// Pro.
    Pro,
    /// Enterprise.
    Enterprise,
}

impl fmt::Display for CustomerPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerPlan::Starter => "Starter",
            CustomerPlan::Pro => "Pro",
            CustomerPlan::Enterprise => "Enterprise",
        };

        f.write_str(label)
    }
}

// Structs.

/// A customer account that raises tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    /// Customer ID.
    pub id: String,
    /// Contact name.
    pub name: String,
    /// Company name.
    pub company: String,
    /// Subscription plan.
    pub plan: CustomerPlan,
    /// Monthly recurring revenue.
    pub mrr: f64,
    /// Whether the account is flagged as high value.
    pub is_high_value: bool,
    /// When the customer signed up.
    pub joined_at: DateTime<Utc>,
    /// Optional avatar image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A support agent that tickets can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image.
    pub avatar_url: String,
}

/// A customer support request.
///
/// The assist layer only ever reads tickets; ownership stays with the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Ticket ID.
    pub id: String,
    /// Subject line.
    pub subject: String,
    /// Message body.
    pub body: String,
    /// Current status.
    pub status: TicketStatus,
    /// Current priority.
    pub priority: TicketPriority,
    /// Free-text category (e.g. "Billing").
    pub category: String,
    /// The customer who raised the ticket.
    pub customer: Customer,
    /// The agent the ticket is assigned to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_agent: Option<Agent>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// A precomputed summary, if one exists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
}

/// Operator-supplied settings that steer reply drafting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Short tone label (e.g. "Friendly", "Formal").
    #[serde(alias = "brand_tone")]
    pub brand_tone: String,
    /// Free-text description of how replies should sound.
    #[serde(alias = "tone_description")]
    pub tone_description: String,
    /// Knowledge base excerpt the drafter may rely on.
    #[serde(alias = "knowledge_context")]
    pub knowledge_context: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brand_tone: "Friendly".to_string(),
            tone_description: "Warm and approachable, but professional. Use plain language and avoid jargon.".to_string(),
            knowledge_context: "Refunds are available within 30 days of purchase. Password resets can be done from the login page. \
                                Enterprise customers have a dedicated account manager."
                .to_string(),
        }
    }
}

/// Structured assessment of a ticket produced by the analyzer.
///
/// Values are exactly what the model returned: the confidence score is not clamped
/// and the tag count is not enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    /// One or two sentence summary of the issue.
    pub summary: String,
    /// Priority the model suggests.
    pub suggested_priority: TicketPriority,
    /// Customer sentiment.
    pub sentiment: Sentiment,
    /// Short tags (e.g. "billing", "bug").
    pub tags: Vec<String>,
    /// Model-reported confidence, nominally in `[0, 1]`.
    pub confidence_score: f64,
}

// Tests.
