//! Remote user entity.
//!
//! Mirrors the user object sent by the Discord API.

use serde::{Deserialize, Serialize};

/// A user on the remote platform.
///
/// Every field is exposed to the display name template under its own name:
/// - id: Snowflake ID as a string
/// - username: unique account name
/// - discriminator: legacy four digit tag (`"0"` for migrated accounts)
/// - global_name: display name chosen by the user, if any
/// - bot: whether the account is a bot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemoteUser {
    /// Snowflake ID
    pub id: String,

    /// Account name
    pub username: String,

    /// Legacy tag
    #[serde(default)]
    pub discriminator: String,

    /// User chosen display name
    #[serde(default)]
    pub global_name: Option<String>,

    /// Bot account flag
    #[serde(default)]
    pub bot: bool,
}

impl RemoteUser {
    /// Create a user with only an ID and account name.
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// Set the user chosen display name.
    pub fn with_global_name(mut self, global_name: impl Into<String>) -> Self {
        self.global_name = Some(global_name.into());
        self
    }

    /// Mark the user as a bot account.
    pub fn as_bot(mut self) -> Self {
        self.bot = true;
        self
    }
}
