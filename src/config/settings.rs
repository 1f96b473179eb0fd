//! Application settings and the configuration load gate.

use std::sync::Arc;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use super::bridge::BridgeConfig;
use crate::application::templates::NameTemplates;
use crate::shared::error::SettingsError;

/// Default username template, `discord_<user id>`.
pub const DEFAULT_USERNAME_TEMPLATE: &str = "discord_{{.}}";

/// Default display name template: global name when set, account name otherwise.
pub const DEFAULT_DISPLAYNAME_TEMPLATE: &str =
    "{% if global_name %}{{ global_name }}{% else %}{{ username }}{% endif %}{% if bot %} (bot){% endif %}";

/// Default channel name template: the channel name, prefixed by its category.
pub const DEFAULT_CHANNELNAME_TEMPLATE: &str =
    "{% if folder %}{{ folder }} / {% endif %}{{ name }}";

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Bridge behaviour and naming templates
    pub bridge: BridgeConfig,

    /// Current environment (development, staging, production)
    pub environment: String,
}

/// Settings that passed validation, together with their compiled templates.
///
/// Only produced by the load gate, so holding one means the permission table
/// was checked and every template compiled.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    settings: Settings,
    templates: Arc<NameTemplates>,
}

impl Settings {
    /// Load settings from configuration files and environment variables.
    ///
    /// The loading order is:
    /// 1. Built-in defaults
    /// 2. config/default.{yaml,toml,...} (base configuration)
    /// 3. config/{RUN_ENV}.{yaml,toml,...} (environment-specific overrides)
    /// 4. Environment variables (highest priority), e.g.
    ///    `APP__BRIDGE__USERNAME_TEMPLATE=discord_{{.}}`
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if configuration cannot be read or parsed, a
    /// template does not compile, or the permission table was left unedited.
    pub fn load() -> Result<LoadedConfig, SettingsError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let environment = std::env::var("RUN_ENV").unwrap_or_else(|_| "development".into());

        let config = Self::defaults(&environment)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::default()
                    .prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Self::from_config(config)
    }

    /// Load settings from a YAML document on top of the built-in defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<LoadedConfig, SettingsError> {
        let config = Self::defaults("development")?
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()?;

        Self::from_config(config)
    }

    fn defaults(environment: &str) -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("environment", environment)?
            .set_default("bridge.username_template", DEFAULT_USERNAME_TEMPLATE)?
            .set_default("bridge.displayname_template", DEFAULT_DISPLAYNAME_TEMPLATE)?
            .set_default("bridge.channelname_template", DEFAULT_CHANNELNAME_TEMPLATE)?)
    }

    fn from_config(config: Config) -> Result<LoadedConfig, SettingsError> {
        let settings: Settings = config.try_deserialize()?;
        let templates = settings.compile_templates()?;
        settings.bridge.permissions.validate()?;

        tracing::info!(
            environment = %settings.environment,
            permissions = settings.bridge.permissions.len(),
            "Bridge configuration loaded"
        );

        Ok(LoadedConfig {
            settings,
            templates: Arc::new(templates),
        })
    }

    /// Compile the bridge naming templates.
    pub fn compile_templates(&self) -> Result<NameTemplates, SettingsError> {
        Ok(NameTemplates::compile(
            &self.bridge.username_template,
            &self.bridge.displayname_template,
            &self.bridge.channelname_template,
        )?)
    }
}

impl LoadedConfig {
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Templates compiled from `settings().bridge`.
    pub fn templates(&self) -> &Arc<NameTemplates> {
        &self.templates
    }

    pub fn bridge(&self) -> &BridgeConfig {
        &self.settings.bridge
    }
}
