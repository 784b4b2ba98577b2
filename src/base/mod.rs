//! Core components, types, and utilities for the bot.
//!
//! This module contains fundamental building blocks used throughout the application:
//! - Configuration handling and environment variables.
//! - Persona prompt and canned replies.
//! - Message chunking for the platform length limit.
//! - Common types and result handling.

pub mod chunk;
pub mod config;
pub mod prompts;
pub mod types;
