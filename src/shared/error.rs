//! Error Types
//!
//! Two tiers: load-time errors (`TemplateError`, `SettingsError`) that stop the
//! bridge from starting, and per-event errors (`LookupError`, `NameError`) that
//! only fail a single formatting call.

use std::fmt;

/// Which of the three name templates an error or log line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Username,
    Displayname,
    Channelname,
}

impl TemplateKind {
    /// Name the template is registered under.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Username => "username",
            Self::Displayname => "displayname",
            Self::Channelname => "channelname",
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Template compilation errors.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("invalid {kind} template: {source}")]
    Syntax {
        kind: TemplateKind,
        #[source]
        source: tera::Error,
    },

    #[error("username template is missing user ID placeholder")]
    MissingUserIdPlaceholder,
}

impl TemplateError {
    /// The template that failed to compile.
    pub fn kind(&self) -> TemplateKind {
        match self {
            Self::Syntax { kind, .. } => *kind,
            Self::MissingUserIdPlaceholder => TemplateKind::Username,
        }
    }
}

/// Configuration load errors.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read configuration: {0}")]
    Source(#[from] config::ConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error("bridge.permissions not configured")]
    PermissionsNotConfigured,
}

/// Remote lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },

    #[error("no {0} ID on record")]
    MissingId(&'static str),

    #[error("remote request failed: {0}")]
    Remote(String),
}

/// Channel name formatting errors.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    #[error("find guild: {0}")]
    FindGuild(#[source] LookupError),
}
