//! Remote channel entity.
//!
//! Mirrors the channel object sent by the Discord API.

use serde::{Deserialize, Serialize};

use super::RemoteUser;

/// Channel types the bridge distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ChannelType {
    /// A text channel within a guild
    #[default]
    Text,
    /// A voice channel within a guild
    Voice,
    /// A category that contains channels
    Category,
    /// A direct message between two users
    Dm,
    /// A direct message between multiple users
    GroupDm,
}

impl ChannelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Voice => "voice",
            Self::Category => "category",
            Self::Dm => "dm",
            Self::GroupDm => "group_dm",
        }
    }

    /// Direct and group direct messages live outside any guild.
    pub fn is_dm(&self) -> bool {
        matches!(self, Self::Dm | Self::GroupDm)
    }
}

impl std::fmt::Display for ChannelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A channel on the remote platform.
///
/// Guild channels carry `guild_id` and usually `parent_id` (their category);
/// DM-like channels carry `recipients` and only group DMs may have a name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemoteChannel {
    /// Snowflake ID
    pub id: String,

    /// Channel type
    #[serde(rename = "type", default)]
    pub channel_type: ChannelType,

    /// Channel name
    #[serde(default)]
    pub name: Option<String>,

    /// Channel topic
    #[serde(default)]
    pub topic: Option<String>,

    /// Parent category ID
    #[serde(default)]
    pub parent_id: Option<String>,

    /// Owning guild ID (None for DMs)
    #[serde(default)]
    pub guild_id: Option<String>,

    /// Whether the channel is age-restricted
    #[serde(default)]
    pub nsfw: bool,

    /// Sorting position within the guild
    #[serde(default)]
    pub position: i32,

    /// Members of a DM or group DM
    #[serde(default)]
    pub recipients: Vec<RemoteUser>,
}

impl RemoteChannel {
    /// A named channel inside a guild.
    pub fn guild_channel(
        id: impl Into<String>,
        guild_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_type: ChannelType::Text,
            name: Some(name.into()),
            guild_id: Some(guild_id.into()),
            ..Default::default()
        }
    }

    /// An unnamed one-to-one direct message.
    pub fn direct_message(id: impl Into<String>, recipients: Vec<RemoteUser>) -> Self {
        Self {
            id: id.into(),
            channel_type: ChannelType::Dm,
            recipients,
            ..Default::default()
        }
    }

    /// A group direct message, optionally named.
    pub fn group_dm(
        id: impl Into<String>,
        name: Option<String>,
        recipients: Vec<RemoteUser>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_type: ChannelType::GroupDm,
            name,
            recipients,
            ..Default::default()
        }
    }

    /// Put the channel under a category.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn is_dm(&self) -> bool {
        self.channel_type.is_dm()
    }

    /// The channel name, treating an empty name the same as no name.
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}
