//! Core components, types, and utilities for ticket-assist.
//!
//! This module contains fundamental building blocks used throughout the crate:
//! - Configuration handling and environment variables.
//! - Prompt templates for the analyzer and drafter.
//! - The ticket data model and common result types.

pub mod config;
pub mod prompts;
pub mod types;
