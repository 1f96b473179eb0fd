//! Remote guild entity.

use serde::{Deserialize, Serialize};

/// A guild (server) on the remote platform.
///
/// Only the fields the naming engine reads are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RemoteGuild {
    /// Snowflake ID
    pub id: String,

    /// Guild name
    pub name: String,
}

impl RemoteGuild {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
