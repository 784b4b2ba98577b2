//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, sync::Arc, time::Duration};

use chrono::TimeDelta;
use serde::Deserialize;

use crate::base::prompts;

use super::types::Res;

/// Default Gemini model to use
fn default_gemini_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Default Gemini OpenAI-compatible endpoint
fn default_gemini_api_base() -> String {
    "https://generativelanguage.googleapis.com/v1beta/openai".to_string()
}

/// Default timeout for a single LLM call
fn default_llm_timeout_secs() -> u64 {
    60
}

fn default_persona_name() -> String {
    "Akane".to_string()
}

fn default_creator_name() -> String {
    "Noviác".to_string()
}

/// Default persona directive for the chat model.
fn default_persona_directive() -> String {
    prompts::PERSONA_DIRECTIVE.to_string()
}

/// Default length of the active talking window
fn default_active_window_secs() -> u64 {
    5 * 60
}

/// Default length of the cooldown after the active window
fn default_cooldown_secs() -> u64 {
    2 * 60
}

/// Default number of stored turns per user
fn default_memory_turns() -> usize {
    6
}

fn default_keepalive_enabled() -> bool {
    true
}

fn default_keepalive_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Upper bound for the talk window and the cooldown.
pub const MAX_WINDOW_SECS: u64 = 24 * 60 * 60;

/// Configuration for the bot.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Discord bot token (`AKANE_DISCORD_TOKEN`).
    pub discord_token: String,
    /// Gemini API key (`AKANE_GEMINI_API_KEY`).
    pub gemini_api_key: String,
    /// Gemini model to use (`AKANE_GEMINI_MODEL`).
    #[serde(default = "default_gemini_model")]
    pub gemini_model: String,
    /// Base URL of the OpenAI-compatible Gemini API (`AKANE_GEMINI_API_BASE`).
    #[serde(default = "default_gemini_api_base")]
    pub gemini_api_base: String,
    /// Sampling temperature (`AKANE_GEMINI_TEMPERATURE`), between 0 and 2.
    /// Left to the model default when unset.
    #[serde(default)]
    pub gemini_temperature: Option<f32>,
    /// Max output tokens (`AKANE_GEMINI_MAX_TOKENS`).
    /// Left to the model default when unset.
    #[serde(default)]
    pub gemini_max_tokens: Option<u32>,
    /// Seconds before an LLM call is abandoned (`AKANE_LLM_TIMEOUT_SECS`).
    #[serde(default = "default_llm_timeout_secs")]
    pub llm_timeout_secs: u64,
    /// Discord user id that is always treated as owner (`AKANE_OWNER_ID`).
    #[serde(default)]
    pub owner_id: Option<u64>,
    /// Name the bot introduces itself with (`AKANE_PERSONA_NAME`).
    #[serde(default = "default_persona_name")]
    pub persona_name: String,
    /// Name of the bot's creator (`AKANE_CREATOR_NAME`).
    #[serde(default = "default_creator_name")]
    pub creator_name: String,
    /// Optional custom persona directive to override the default (`AKANE_PERSONA_DIRECTIVE`).
    #[serde(default = "default_persona_directive")]
    pub persona_directive: String,
    /// Seconds a user may talk before a cooldown starts (`AKANE_ACTIVE_WINDOW_SECS`).
    #[serde(default = "default_active_window_secs")]
    pub active_window_secs: u64,
    /// Seconds a user must rest once the window has elapsed (`AKANE_COOLDOWN_SECS`).
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,
    /// Number of turns remembered per user (`AKANE_MEMORY_TURNS`).
    #[serde(default = "default_memory_turns")]
    pub memory_turns: usize,
    /// Initial state of the repeat relay (`AKANE_REPEAT_ENABLED`).
    #[serde(default)]
    pub repeat_enabled: bool,
    /// Send the creator reply as a rich embed (`AKANE_CREATOR_EMBED`).
    #[serde(default)]
    pub creator_embed: bool,
    /// Run the liveness HTTP server (`AKANE_KEEPALIVE_ENABLED`).
    #[serde(default = "default_keepalive_enabled")]
    pub keepalive_enabled: bool,
    /// Bind address of the liveness HTTP server (`AKANE_KEEPALIVE_ADDR`).
    #[serde(default = "default_keepalive_addr")]
    pub keepalive_addr: String,
}

impl ConfigInner {
    pub fn active_window(&self) -> TimeDelta {
        seconds_to_delta(self.active_window_secs)
    }

    pub fn cooldown(&self) -> TimeDelta {
        seconds_to_delta(self.cooldown_secs)
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }
}

/// Saturates at `TimeDelta::MAX` instead of wrapping or panicking.
fn seconds_to_delta(secs: u64) -> TimeDelta {
    i64::try_from(secs).ok().and_then(TimeDelta::try_seconds).unwrap_or(TimeDelta::MAX)
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("AKANE"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let result = Config {
            inner: Arc::new(cfg.build()?.try_deserialize()?),
        };

        result.validate()?;

        Ok(result)
    }

    fn validate(&self) -> Res<()> {
        if self.discord_token.trim().is_empty() {
            return Err(anyhow::anyhow!("Discord token must not be empty."));
        }

        if self.gemini_api_key.trim().is_empty() {
            return Err(anyhow::anyhow!("Gemini API key must not be empty."));
        }

        if let Some(temperature) = self.gemini_temperature
            && !(0.0..=2.0).contains(&temperature)
        {
            return Err(anyhow::anyhow!("Gemini temperature must be between 0 and 2."));
        }

        if let Some(max_tokens) = self.gemini_max_tokens
            && !(1..=65536).contains(&max_tokens)
        {
            return Err(anyhow::anyhow!("Gemini max tokens must be between 1 and 65536."));
        }

        if self.active_window_secs == 0 || self.cooldown_secs == 0 {
            return Err(anyhow::anyhow!("Rate limit windows must be positive."));
        }

        if self.active_window_secs > MAX_WINDOW_SECS || self.cooldown_secs > MAX_WINDOW_SECS {
            return Err(anyhow::anyhow!("Rate limit windows must be at most {MAX_WINDOW_SECS} seconds."));
        }

        if self.memory_turns == 0 {
            return Err(anyhow::anyhow!("Memory must keep at least one turn."));
        }

        Ok(())
    }
}
