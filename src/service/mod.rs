//! Service integrations for external APIs and clients.
//!
//! This module contains implementations for various services used by the bot:
//! - Chat services (e.g., Discord)
//! - LLM services (e.g., Gemini)
//! - The liveness HTTP endpoint
//!
//! Each service module defines both generic traits and concrete implementations,
//! allowing for extensibility and easy testing.

pub mod chat;
pub mod keepalive;
pub mod llm;
