//! In-memory remote lookup.
//!
//! Holds guilds and channels already received from the gateway so names can
//! be resolved without a network round trip.

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{RemoteChannel, RemoteGuild, RemoteLookup};
use crate::shared::error::LookupError;

/// Concurrent guild and channel store implementing [`RemoteLookup`].
#[derive(Debug, Default)]
pub struct InMemoryLookup {
    guilds: DashMap<String, RemoteGuild>,
    channels: DashMap<String, RemoteChannel>,
}

impl InMemoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a guild.
    pub fn insert_guild(&self, guild: RemoteGuild) {
        self.guilds.insert(guild.id.clone(), guild);
    }

    /// Insert or replace a channel.
    pub fn insert_channel(&self, channel: RemoteChannel) {
        self.channels.insert(channel.id.clone(), channel);
    }

    /// Forget a guild, returning it if it was known.
    pub fn remove_guild(&self, guild_id: &str) -> Option<RemoteGuild> {
        self.guilds.remove(guild_id).map(|(_, guild)| guild)
    }

    /// Forget a channel, returning it if it was known.
    pub fn remove_channel(&self, channel_id: &str) -> Option<RemoteChannel> {
        self.channels.remove(channel_id).map(|(_, channel)| channel)
    }
}

#[async_trait]
impl RemoteLookup for InMemoryLookup {
    async fn guild(&self, guild_id: &str) -> Result<RemoteGuild, LookupError> {
        self.guilds
            .get(guild_id)
            .map(|guild| guild.value().clone())
            .ok_or_else(|| LookupError::NotFound {
                kind: "guild",
                id: guild_id.to_string(),
            })
    }

    async fn channel(&self, channel_id: &str) -> Result<RemoteChannel, LookupError> {
        self.channels
            .get(channel_id)
            .map(|channel| channel.value().clone())
            .ok_or_else(|| LookupError::NotFound {
                kind: "channel",
                id: channel_id.to_string(),
            })
    }
}
