//! Service integrations for external APIs and clients.
//!
//! This module contains the LLM service used by ticket-assist. It defines both a
//! generic trait and a concrete implementation, allowing for extensibility and
//! easy testing.

pub mod llm;
