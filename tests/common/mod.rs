//! Common Test Utilities
//!
//! Shared fixtures for configuration and remote data.

use std::sync::Arc;

use bridge_naming::application::NamingService;
use bridge_naming::config::{LoadedConfig, Settings};
use bridge_naming::domain::{ChannelType, RemoteChannel, RemoteGuild, RemoteUser};
use bridge_naming::infrastructure::InMemoryLookup;

/// A complete bridge section with edited permissions.
pub const BRIDGE_CONFIG: &str = r#"
environment: testing
bridge:
  username_template: "discord_{{.}}"
  displayname_template: "{% if global_name %}{{ global_name }}{% else %}{{ .username }}{% endif %}{% if bot %} (bot){% endif %}"
  channelname_template: "{% if guild %}{{ guild }} / {% endif %}{% if folder %}{{ folder }} / {% endif %}{{ name }}"
  delivery_receipts: true
  message_status_events: true
  message_error_notices: false
  command_prefix: "!dc"
  portal_message_buffer: 64
  resend_bridge_info: true
  double_puppet_server_map:
    example.org: https://matrix.example.org
  login_shared_secret_map:
    example.org: s3cr3t
  encryption:
    allow: true
    default: false
  provisioning:
    prefix: /_matrix/provision
    shared_secret: generate
  management_room_text:
    welcome: Hello, I'm a Discord bridge bot.
  permissions:
    "*": relay
    "example.org": user
    "@admin:example.org": admin
"#;

pub const GUILD_ID: &str = "100";
pub const CATEGORY_ID: &str = "200";

/// Load [`BRIDGE_CONFIG`].
pub fn loaded_config() -> LoadedConfig {
    Settings::from_yaml_str(BRIDGE_CONFIG).expect("fixture config should load")
}

/// Naming service over [`BRIDGE_CONFIG`].
pub fn naming_service() -> NamingService {
    NamingService::new(Arc::clone(loaded_config().templates()))
}

/// Lookup holding one guild with one category.
pub fn populated_lookup() -> InMemoryLookup {
    let lookup = InMemoryLookup::new();
    lookup.insert_guild(RemoteGuild::new(GUILD_ID, "Rust Community"));
    lookup.insert_channel(RemoteChannel {
        channel_type: ChannelType::Category,
        ..RemoteChannel::guild_channel(CATEGORY_ID, GUILD_ID, "Text Channels")
    });
    lookup
}

pub fn alice() -> RemoteUser {
    RemoteUser::new("111", "alice").with_global_name("Alice")
}

pub fn bob() -> RemoteUser {
    RemoteUser::new("222", "Bob")
}
