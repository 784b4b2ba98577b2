pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Privilege level of a message author.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoleLevel {
    Owner,
    HeadAdmin,
    User,
}

impl RoleLevel {
    /// Resolve a role level from the author's guild role names.
    ///
    /// `is_owner` covers both the configured owner id and the guild owner.
    pub fn from_role_names<I, S>(is_owner: bool, role_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if is_owner {
            return RoleLevel::Owner;
        }

        let names: Vec<String> = role_names.into_iter().map(|n| n.as_ref().to_lowercase()).collect();

        if names.iter().any(|n| n == "owner" || n == "co-owner") {
            RoleLevel::Owner
        } else if names.iter().any(|n| n == "head admin") {
            RoleLevel::HeadAdmin
        } else {
            RoleLevel::User
        }
    }

    /// Privileged roles bypass the rate limiter.
    pub fn is_privileged(&self) -> bool {
        matches!(self, RoleLevel::Owner | RoleLevel::HeadAdmin)
    }
}

/// Platform-neutral view of an inbound chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomingMessage {
    pub author_id: u64,
    pub author_is_bot: bool,
    pub role: RoleLevel,
    pub channel_id: u64,
    pub content: String,
    pub mentioned_user_ids: Vec<u64>,
}

impl IncomingMessage {
    /// Whether the given user is among the message mentions.
    pub fn mentions(&self, user_id: u64) -> bool {
        self.mentioned_user_ids.contains(&user_id)
    }
}

/// Speaker of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnRole {
    User,
    Model,
}

/// A single entry in a user's conversation window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self { role: TurnRole::User, text: text.into() }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self { role: TurnRole::Model, text: text.into() }
    }
}

/// A field on a rich embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Platform-neutral rich embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
    pub color: u32,
}
