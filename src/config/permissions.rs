//! Bridge permission table.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::error::SettingsError;

/// Entries shipped in the sample configuration.
pub const EXAMPLE_PATTERNS: [&str; 3] = ["*", "example.com", "@admin:example.com"];

/// Access level granted to a Matrix user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionLevel {
    /// May talk through the relay bot only
    Relay,
    /// May log in and puppet a Discord account
    User,
    /// May use administrative commands
    Admin,
}

impl PermissionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relay => "relay",
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for PermissionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Mapping from identity pattern to permission level.
///
/// A pattern is `*`, a homeserver domain (`example.com`) or a full Matrix
/// user ID (`@admin:example.com`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionTable(HashMap<String, PermissionLevel>);

impl PermissionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an entry.
    pub fn with(mut self, pattern: impl Into<String>, level: PermissionLevel) -> Self {
        self.0.insert(pattern.into(), level);
        self
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, pattern: &str) -> Option<PermissionLevel> {
        self.0.get(pattern).copied()
    }

    /// Fail unless the table has at least one entry besides the sample ones.
    ///
    /// This only detects an unedited table; it does not check that the
    /// remaining patterns are well formed.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let example_count = EXAMPLE_PATTERNS
            .iter()
            .filter(|pattern| self.0.contains_key(**pattern))
            .count();

        if self.0.len() <= example_count {
            return Err(SettingsError::PermissionsNotConfigured);
        }

        Ok(())
    }

    /// Resolve the level for a Matrix user ID.
    ///
    /// The exact user ID wins over the user's homeserver domain, which wins
    /// over the `*` wildcard.
    pub fn level_for(&self, mxid: &str) -> Option<PermissionLevel> {
        if let Some(level) = self.get(mxid) {
            return Some(level);
        }

        let domain = mxid
            .strip_prefix('@')
            .and_then(|rest| rest.split_once(':'))
            .map(|(_, domain)| domain);

        domain
            .and_then(|domain| self.get(domain))
            .or_else(|| self.get("*"))
    }
}

impl FromIterator<(String, PermissionLevel)> for PermissionTable {
    fn from_iter<I: IntoIterator<Item = (String, PermissionLevel)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
