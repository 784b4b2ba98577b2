use crate::{
    base::{prompts, types::Turn},
    prelude::*,
    service::llm::LlmClient,
};

/// Run one AI chat turn for a message that mentions the bot.
///
/// Gated by the rate limiter. On success the reply is stored in the repeat
/// slot, sent in chunks, and recorded in the author's conversation window.
#[instrument(skip_all, fields(user_id = message.author_id, channel_id = message.channel_id))]
pub async fn handle_chat_event(message: &IncomingMessage, user_input: &str, runtime: &Runtime) -> Void {
    let session = &runtime.session;
    let channel_id = message.channel_id;

    if !session.rate_limiter.can_talk(message.author_id, message.role).await {
        info!("User is cooling down.");
        return runtime.chat.send_message(channel_id, &prompts::cooldown_reply(&runtime.config)).await;
    }

    let history = session.memory.history(message.author_id).await;
    let prompt = prompts::styled_prompt(&runtime.config, user_input);

    let typing = runtime.chat.start_typing(channel_id);
    let reply = query_llm(&runtime.llm, &history, &prompt).await;
    drop(typing);

    session.relay.record(channel_id, &reply).await;

    runtime.chat.send_long_message(channel_id, &reply).await?;

    session.memory.record_exchange(message.author_id, user_input, &reply).await;

    Ok(())
}

/// Ask the model for a reply, falling back to a fixed apology on any failure.
async fn query_llm(llm: &LlmClient, history: &[Turn], prompt: &str) -> String {
    match llm.generate_reply(history, prompt).await {
        Ok(reply) => reply,
        Err(err) => {
            error!("LLM call failed: {}", err);
            prompts::LLM_FAILURE_REPLY.to_string()
        }
    }
}
