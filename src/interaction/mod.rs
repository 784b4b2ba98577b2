//! Event handling and user interactions for the bot.
//!
//! This module provides functionality for handling chat messages:
//! - Classifying incoming messages by keyword and mention
//! - Answering canned questions
//! - Coordinating AI chat turns between the session, the LLM, and the chat service

pub mod chat_event;
pub mod message;
pub mod router;
