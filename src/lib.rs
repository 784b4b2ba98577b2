//! Library root for `akane-bot`.
//!
//! Akane is a friendly Discord companion that:
//! - Chats through Gemini when @-mentioned, remembering a short trailing window per user
//! - Rate limits regular members with a talk window followed by a cooldown
//! - Answers a few keyword questions (name, creator) with canned replies
//! - Politely refuses NSFW requests
//!
//! The architecture is built around extensible traits for the chat and LLM
//! services, with all conversational state held in an explicit `Session`.

pub mod base;
pub mod interaction;
pub mod prelude;
pub mod runtime;
pub mod service;
pub mod session;

use base::{config::Config, types::Void};
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the bot runtime:
/// - Starts the keep-alive HTTP endpoint, if enabled
/// - Creates the runtime context with LLM and chat clients
/// - Starts the gateway event loop for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting akane-bot ...");

    // Start the keep-alive endpoint.
    if config.keepalive_enabled {
        service::keepalive::spawn_keepalive_server(&config.keepalive_addr).await?;
    }

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
