//! # Bridge Naming
//!
//! Checks a bridge configuration the way the bridge does at startup:
//! - Tracing/logging subsystem
//! - Configuration loading and permission check
//! - Template compilation, followed by a preview of the rendered names

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use bridge_naming::application::{NamingService, USER_ID_PROBE};
use bridge_naming::config::Settings;
use bridge_naming::domain::{ChannelType, RemoteChannel, RemoteGuild, RemoteUser};
use bridge_naming::infrastructure::InMemoryLookup;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        bridge_naming::telemetry::init_json_tracing();
    } else {
        bridge_naming::telemetry::init_tracing();
    }

    let loaded = Settings::load()?;
    let naming = NamingService::new(Arc::clone(loaded.templates()));

    // Sample data for the preview
    let lookup = InMemoryLookup::new();
    lookup.insert_guild(RemoteGuild::new("100", "Example Guild"));
    lookup.insert_channel(RemoteChannel {
        channel_type: ChannelType::Category,
        ..RemoteChannel::guild_channel("200", "100", "Text Channels")
    });
    let channel = RemoteChannel::guild_channel("300", "100", "general").with_parent("200");
    let channelname = naming.format_channelname(&channel, &lookup).await?;
    let sample = RemoteUser::new(USER_ID_PROBE, "example").with_global_name("Example User");

    info!(
        username = %naming.format_username(USER_ID_PROBE),
        displayname = %naming.format_displayname(&sample),
        channelname = %channelname,
        command_prefix = %loaded.bridge().command_prefix(),
        "Configuration is valid"
    );

    Ok(())
}
