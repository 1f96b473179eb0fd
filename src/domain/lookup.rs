//! Remote lookup capability.
//!
//! The naming engine resolves guild and parent channel names through this
//! trait. Implementations decide whether a call hits the network or a local
//! cache; timeouts belong to them as well.

use async_trait::async_trait;

use super::entities::{RemoteChannel, RemoteGuild};
use crate::shared::error::LookupError;

/// Resolves remote platform metadata by ID.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteLookup: Send + Sync {
    /// Find a guild by its Snowflake ID.
    async fn guild(&self, guild_id: &str) -> Result<RemoteGuild, LookupError>;

    /// Find a channel by its Snowflake ID.
    async fn channel(&self, channel_id: &str) -> Result<RemoteChannel, LookupError>;
}
