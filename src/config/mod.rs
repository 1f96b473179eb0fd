//! # Configuration Module
//!
//! Loads the bridge configuration and gates startup on it. Configuration can
//! be loaded from:
//! - Environment variables (prefixed with APP__)
//! - Configuration files (config/default.yaml, config/{environment}.yaml)
//! - .env files (via dotenvy)
//!
//! Loading either succeeds completely, yielding a [`LoadedConfig`] with
//! compiled name templates, or fails with a single [`SettingsError`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_naming::config::Settings;
//!
//! let loaded = Settings::load()?;
//! println!("Command prefix: {}", loaded.bridge().command_prefix());
//! ```
//!
//! [`SettingsError`]: crate::shared::error::SettingsError

mod bridge;
mod permissions;
mod settings;

pub use bridge::{BridgeConfig, ProvisioningSettings};
pub use permissions::{PermissionLevel, PermissionTable, EXAMPLE_PATTERNS};
pub use settings::*;
