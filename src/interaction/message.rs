use tracing::Instrument;

use crate::{
    base::prompts,
    interaction::{
        chat_event::handle_chat_event,
        router::{Route, classify},
    },
    prelude::*,
};

/// Handles an incoming chat message.
///
/// It spawns a new task to handle the message asynchronously, so a slow
/// model call never blocks the gateway.
#[instrument(skip_all)]
pub fn handle_message(message: IncomingMessage, runtime: Runtime) {
    tokio::spawn(async move {
        // Process the message.
        let result = process_message(&message, &runtime).in_current_span().await;

        // Log any errors.
        if let Err(err) = &result {
            error!("Error while handling: {}", err);
        }
    });
}

/// Relay the last reply if applicable, then dispatch to at most one handler.
#[instrument(skip_all, fields(user_id = message.author_id, channel_id = message.channel_id))]
pub async fn process_message(message: &IncomingMessage, runtime: &Runtime) -> Void {
    if message.author_is_bot {
        return Ok(());
    }

    relay_last_reply(message.channel_id, runtime).await;

    let channel_id = message.channel_id;
    let route = classify(message, runtime.chat.bot_user_id());

    debug!(?route, "Classified message.");

    match route {
        Route::Identity => runtime.chat.send_message(channel_id, &prompts::identity_reply(&runtime.config)).await,
        Route::Creator => {
            if runtime.config.creator_embed {
                runtime.chat.send_embed(channel_id, &prompts::creator_embed(&runtime.config)).await
            } else {
                runtime.chat.send_message(channel_id, &prompts::creator_reply(&runtime.config)).await
            }
        }
        Route::Nsfw => runtime.chat.send_message(channel_id, prompts::NSFW_REPLY).await,
        Route::Chat { prompt } => handle_chat_event(message, &prompt, runtime).await,
        Route::Ignore => Ok(()),
    }
}

/// Resend the stored reply into its channel. Failures are logged, never retried.
async fn relay_last_reply(channel_id: u64, runtime: &Runtime) {
    let Some(text) = runtime.session.relay.pending_for(channel_id).await else {
        return;
    };

    if let Err(err) = runtime.chat.send_long_message(channel_id, &text).await {
        warn!("Failed to send message in repeat: {}", err);
    }
}
