//! Discord integration on top of `serenity`.
//!
//! This module provides the Discord implementation of `GenericChatClient`:
//! - Connecting to the gateway and receiving message events
//! - Resolving the author's role level from the guild cache
//! - Sending text, embeds, and typing indicators

use std::sync::Arc;

use async_trait::async_trait;
use serenity::{
    Client,
    all::{ChannelId, Context, CreateEmbed, CreateEmbedFooter, CreateMessage, EventHandler, GatewayIntents, Http, Message, Ready},
};
use tracing::{info, instrument};

use crate::{
    base::{
        config::Config,
        types::{Embed, IncomingMessage, Res, RoleLevel, Void},
    },
    interaction,
    runtime::Runtime,
    service::llm::LlmClient,
    session::Session,
};

use super::{ChatClient, GenericChatClient, TypingGuard};

// Extra methods on `ChatClient` applied by the discord implementation.

impl ChatClient {
    /// Creates a new Discord chat client.
    pub async fn discord(config: &Config, llm: LlmClient, session: Session) -> Res<Self> {
        let client = DiscordChatClient::new(config, llm, session).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<DiscordChatClient> for ChatClient {
    fn from(client: DiscordChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// Discord client implementation.
#[derive(Clone)]
struct DiscordChatClient {
    config: Config,
    bot_user_id: u64,
    http: Arc<Http>,
    llm: LlmClient,
    session: Session,
}

impl DiscordChatClient {
    /// Create a new Discord chat client.
    #[instrument(name = "DiscordChatClient::new", skip_all)]
    pub async fn new(config: &Config, llm: LlmClient, session: Session) -> Res<Self> {
        let http = Arc::new(Http::new(&config.discord_token));

        // Get the bot's user ID.

        let bot_user = http.get_current_user().await?;
        let bot_user_id = bot_user.id.get();

        info!("Discord bot user ID: {}", bot_user_id);

        Ok(Self {
            config: config.clone(),
            bot_user_id,
            http,
            llm,
            session,
        })
    }
}

#[async_trait]
impl GenericChatClient for DiscordChatClient {
    fn bot_user_id(&self) -> u64 {
        self.bot_user_id
    }

    async fn start(&self) -> Void {
        let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES | GatewayIntents::MESSAGE_CONTENT;

        let handler = DiscordHandler {
            runtime: Runtime {
                config: self.config.clone(),
                llm: self.llm.clone(),
                chat: ChatClient::from(self.clone()),
                session: self.session.clone(),
            },
        };

        let mut client = Client::builder(&self.config.discord_token, intents).event_handler(handler).await?;

        // Runs until the gateway connection is closed for good.
        client.start().await?;

        Ok(())
    }

    #[instrument(skip(self, text))]
    async fn send_message(&self, channel_id: u64, text: &str) -> Void {
        ChannelId::new(channel_id)
            .say(&self.http, text)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send message: {}", e))?;

        Ok(())
    }

    #[instrument(skip(self, embed))]
    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> Void {
        let mut builder = CreateEmbed::new().title(&embed.title).description(&embed.description).colour(embed.color);

        for field in &embed.fields {
            builder = builder.field(&field.name, &field.value, field.inline);
        }

        if let Some(footer) = &embed.footer {
            builder = builder.footer(CreateEmbedFooter::new(footer));
        }

        ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(builder))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to send embed: {}", e))?;

        Ok(())
    }

    fn start_typing(&self, channel_id: u64) -> TypingGuard {
        TypingGuard::new(ChannelId::new(channel_id).start_typing(&self.http))
    }
}

// Gateway event handler.

struct DiscordHandler {
    runtime: Runtime,
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("Logged in as {}", ready.user.name);
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let role = resolve_role_level(&ctx, &msg, self.runtime.config.owner_id);

        let incoming = IncomingMessage {
            author_id: msg.author.id.get(),
            author_is_bot: msg.author.bot,
            role,
            channel_id: msg.channel_id.get(),
            content: msg.content.clone(),
            mentioned_user_ids: msg.mentions.iter().map(|u| u.id.get()).collect(),
        };

        interaction::message::handle_message(incoming, self.runtime.clone());
    }
}

/// Resolve the author's role level from the guild cache.
///
/// Direct messages and uncached guilds resolve to `User` unless the author is the configured owner.
fn resolve_role_level(ctx: &Context, msg: &Message, owner_id: Option<u64>) -> RoleLevel {
    if owner_id == Some(msg.author.id.get()) {
        return RoleLevel::Owner;
    }

    let Some(guild_id) = msg.guild_id else {
        return RoleLevel::User;
    };

    let Some(guild) = guild_id.to_guild_cached(&ctx.cache) else {
        return RoleLevel::User;
    };

    let is_guild_owner = guild.owner_id == msg.author.id;
    let role_ids = msg.member.as_ref().map(|m| m.roles.clone()).unwrap_or_default();
    let role_names = role_ids.iter().filter_map(|id| guild.roles.get(id).map(|r| r.name.clone()));

    RoleLevel::from_role_names(is_guild_owner, role_names)
}
