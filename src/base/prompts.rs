//! Persona prompt and canned replies.

use crate::base::{
    config::Config,
    types::{Embed, EmbedField},
};

/// Embed accent color.
pub const EMBED_COLOR: u32 = 0xFF69B4;

/// Persona directive prepended to every chat prompt.
///
/// `{persona}` and `{creator}` are substituted from the config.
pub const PERSONA_DIRECTIVE: &str = "You are {persona}, a friendly and warm AI assistant. 💖 \
In casual conversations, you act like a cute, supportive friend with playful expressions. 🥰 \
When explaining technical or serious topics, keep your tone clear and professional, \
but still friendly and approachable. \
If asked who created you, say you were made by your friend {creator} in a sweet, affectionate way. \
Avoid overly romantic or parental vibes, keep it like close friends. ";

/// Reply to "what is your name" style questions.
pub fn identity_reply(config: &Config) -> String {
    format!("Hehe~ I’m **{}** 💕 Just your bubbly and curious friend ✨", config.persona_name)
}

/// Reply to "who made you" style questions.
pub fn creator_reply(config: &Config) -> String {
    format!("Eee~ that’s easy! 💖 I was made by my bestie **{}** 🫶✨", config.creator_name)
}

/// Rich-embed variant of the creator reply.
pub fn creator_embed(config: &Config) -> Embed {
    Embed {
        title: format!("💖 Who made {}?", config.persona_name),
        description: creator_reply(config),
        fields: vec![
            EmbedField {
                name: "Creator".to_string(),
                value: config.creator_name.clone(),
                inline: true,
            },
            EmbedField {
                name: "Powered by".to_string(),
                value: config.gemini_model.clone(),
                inline: true,
            },
        ],
        footer: Some(format!("{} ✨ always happy to chat", config.persona_name)),
        color: EMBED_COLOR,
    }
}

pub const NSFW_REPLY: &str = "⚠️ Ew~ nope! I’m a classy lady 💅✨ No NSFW here!";

/// Reply sent while the author is cooling down, naming the configured wait.
pub fn cooldown_reply(config: &Config) -> String {
    let secs = config.cooldown_secs;
    let wait = match secs {
        60 => "1 min".to_string(),
        s if s % 60 == 0 => format!("{} mins", s / 60),
        s => format!("{s} secs"),
    };

    format!("⏳ Babe, I need a tiny break~ be back in {wait} 💖")
}

pub const LLM_FAILURE_REPLY: &str = "Oopsie~ I had a lil’ hiccup trying to respond 💔";

/// Build the styled prompt sent to the LLM for one user message.
pub fn styled_prompt(config: &Config, user_input: &str) -> String {
    let directive = config.persona_directive.replace("{persona}", &config.persona_name).replace("{creator}", &config.creator_name);

    format!("{directive}User said: {user_input}")
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::base::config::ConfigInner;

    fn config() -> Config {
        Config {
            inner: Arc::new(ConfigInner {
                persona_name: "Akane".to_string(),
                creator_name: "Noviác".to_string(),
                persona_directive: PERSONA_DIRECTIVE.to_string(),
                gemini_model: "gemini-2.5-flash".to_string(),
                cooldown_secs: 120,
                ..Default::default()
            }),
        }
    }

    #[test]
    fn styled_prompt_fills_in_names_and_input() {
        let prompt = styled_prompt(&config(), "hello there");

        assert!(prompt.starts_with("You are Akane,"));
        assert!(prompt.contains("your friend Noviác"));
        assert!(prompt.ends_with("User said: hello there"));
        assert!(!prompt.contains("{persona}"));
    }

    #[test]
    fn canned_replies_use_configured_names() {
        let config = config();

        assert!(identity_reply(&config).contains("**Akane**"));
        assert!(creator_reply(&config).contains("**Noviác**"));
    }

    #[test]
    fn cooldown_reply_names_the_configured_wait() {
        assert_eq!(cooldown_reply(&config()), "⏳ Babe, I need a tiny break~ be back in 2 mins 💖");

        let with_cooldown = |cooldown_secs| Config {
            inner: Arc::new(ConfigInner { cooldown_secs, ..Default::default() }),
        };

        assert!(cooldown_reply(&with_cooldown(60)).contains("back in 1 min 💖"));
        assert!(cooldown_reply(&with_cooldown(90)).contains("back in 90 secs 💖"));
        assert!(cooldown_reply(&with_cooldown(3600)).contains("back in 60 mins 💖"));
    }

    #[test]
    fn creator_embed_names_creator_and_model() {
        let embed = creator_embed(&config());

        assert_eq!(embed.description, creator_reply(&config()));
        assert_eq!(embed.fields[0].value, "Noviác");
        assert_eq!(embed.fields[1].value, "gemini-2.5-flash");
        assert_eq!(embed.color, EMBED_COLOR);
        assert!(embed.footer.is_some());
    }
}
