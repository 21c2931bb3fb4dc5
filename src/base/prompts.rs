//! Prompt templates for ticket analysis and reply drafting.

use crate::base::types::{AppConfig, Ticket};

/// Label that introduces a caller-supplied refinement in the drafting prompt.
pub const ADDITIONAL_INSTRUCTION_LABEL: &str = "Additional Instruction:";

/// Build the analysis prompt for a ticket.
pub fn analysis_prompt(ticket: &Ticket) -> String {
    format!(
        r#####"
# Ticket Analysis

Analyze the following customer support ticket.

Subject: {subject}
Body: {body}
Customer Plan: {plan}
Current Priority: {priority}

## Results

Provide a JSON response with:
  - summary: A 1-2 sentence summary of the issue.
  - suggestedPriority: Suggested priority level (Low, Medium, High, Critical).
  - sentiment: Customer sentiment (Positive, Neutral, Negative, Urgent).
  - tags: A list of 1-3 relevant short tags (e.g., "billing", "bug", "feature-request").
  - confidenceScore: A number between 0 and 1 indicating confidence in this analysis.
"#####,
        subject = ticket.subject,
        body = ticket.body,
        plan = ticket.customer.plan,
        priority = ticket.priority,
    )
}

/// Build the drafting system instruction from the operator's tone and knowledge settings.
pub fn drafting_system_instruction(company_name: &str, app: &AppConfig, ticket: &Ticket) -> String {
    format!(
        r#####"
# Prime Directive

You are an expert customer support agent for a B2B SaaS company called {company_name}.
Your goal is to draft a helpful, accurate, and professional reply to the customer.

Brand Tone: {brand_tone}
Tone Description: {tone_description}

## Knowledge Base Context

{knowledge_context}

## Important Rules

  - Do not invent facts. If the Knowledge Base Context doesn't have the answer, state that you will investigate further.
  - Be concise but polite.
  - Address the customer by name if known ({customer_name}).
"#####,
        brand_tone = app.brand_tone,
        tone_description = app.tone_description,
        knowledge_context = app.knowledge_context,
        customer_name = ticket.customer.name,
    )
}

/// Build the drafting user prompt, appending the refinement instruction when one is given.
pub fn drafting_prompt(ticket: &Ticket, instruction: Option<&str>) -> String {
    let mut prompt = format!(
        r#####"
Ticket Details:
Customer: {name} ({company})
Subject: {subject}
Message: "{body}"

Draft a reply.
"#####,
        name = ticket.customer.name,
        company = ticket.customer.company,
        subject = ticket.subject,
        body = ticket.body,
    );

    if let Some(instruction) = instruction {
        prompt.push_str(&format!("\n{ADDITIONAL_INSTRUCTION_LABEL} {instruction}"));
    }

    prompt
}

// Tests.
