//! Keyword classification of incoming messages.
//!
//! Checks run in a fixed order and the first match wins. The repeat relay is
//! not part of this: it runs before classification regardless of the route.

use crate::base::types::IncomingMessage;

/// Questions about the bot's name.
pub const IDENTITY_TRIGGERS: &[&str] = &["your name", "who are you", "what is your name"];

/// Questions about who built the bot.
pub const CREATOR_TRIGGERS: &[&str] = &["who made you", "your creator", "developer", "built you"];

/// Content the bot refuses to engage with.
pub const NSFW_TRIGGERS: &[&str] = &["nsfw", "18+", "porn", "sex"];

/// What to do with a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Identity,
    Creator,
    Nsfw,
    /// Forward to the model; `prompt` is the content with the bot mention removed.
    Chat { prompt: String },
    Ignore,
}

/// Classify a message. Bot authors are always ignored.
pub fn classify(message: &IncomingMessage, bot_user_id: u64) -> Route {
    if message.author_is_bot {
        return Route::Ignore;
    }

    let content = message.content.to_lowercase();

    if contains_any(&content, IDENTITY_TRIGGERS) {
        Route::Identity
    } else if contains_any(&content, CREATOR_TRIGGERS) {
        Route::Creator
    } else if contains_any(&content, NSFW_TRIGGERS) {
        Route::Nsfw
    } else if message.mentions(bot_user_id) {
        Route::Chat {
            prompt: strip_mention(&message.content, bot_user_id),
        }
    } else {
        Route::Ignore
    }
}

fn contains_any(content: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| content.contains(t))
}

/// Remove both forms of the bot's mention tag and trim.
pub fn strip_mention(content: &str, bot_user_id: u64) -> String {
    content
        .replace(&format!("<@{bot_user_id}>"), "")
        .replace(&format!("<@!{bot_user_id}>"), "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::types::RoleLevel;

    const BOT: u64 = 99;

    fn message(content: &str, mentions_bot: bool) -> IncomingMessage {
        IncomingMessage {
            author_id: 1,
            author_is_bot: false,
            role: RoleLevel::User,
            channel_id: 10,
            content: content.to_string(),
            mentioned_user_ids: if mentions_bot { vec![BOT] } else { vec![] },
        }
    }

    #[test]
    fn identity_questions() {
        assert_eq!(classify(&message("Hey, what is your NAME?", false), BOT), Route::Identity);
        assert_eq!(classify(&message("who are you", true), BOT), Route::Identity);
    }

    #[test]
    fn creator_questions() {
        assert_eq!(classify(&message("who made you?", false), BOT), Route::Creator);
        assert_eq!(classify(&message("<@99> are you a developer", true), BOT), Route::Creator);
    }

    #[test]
    fn identity_wins_over_creator() {
        assert_eq!(classify(&message("who are you and who made you", true), BOT), Route::Identity);
    }

    #[test]
    fn nsfw_short_circuits_chat_even_when_mentioned() {
        assert_eq!(classify(&message("<@99> send nsfw pics", true), BOT), Route::Nsfw);
        assert_eq!(classify(&message("<@99> this is 18+ stuff", true), BOT), Route::Nsfw);
    }

    #[test]
    fn mention_routes_to_chat_with_stripped_prompt() {
        assert_eq!(
            classify(&message("<@99> tell me a joke", true), BOT),
            Route::Chat {
                prompt: "tell me a joke".to_string()
            }
        );
        assert_eq!(
            classify(&message("hey <@!99>  how's it going ", true), BOT),
            Route::Chat {
                prompt: "hey   how's it going".to_string()
            }
        );
    }

    #[test]
    fn unmentioned_chatter_is_ignored() {
        assert_eq!(classify(&message("just chatting", false), BOT), Route::Ignore);
        assert_eq!(classify(&message("<@12> hello", false), BOT), Route::Ignore);
    }

    #[test]
    fn bots_are_ignored() {
        let mut msg = message("<@99> what is your name", true);
        msg.author_is_bot = true;

        assert_eq!(classify(&msg, BOT), Route::Ignore);
    }
}
