//! Naming Service
//!
//! Derives bridge-side names for remote users and channels.

use std::sync::Arc;

use serde::Serialize;

use crate::application::templates::NameTemplates;
use crate::domain::{RemoteChannel, RemoteLookup, RemoteUser};
use crate::shared::error::{LookupError, NameError, TemplateKind};

/// Input bound to the channel name template.
#[derive(Debug, Serialize)]
struct ChannelNameInput<'a> {
    #[serde(flatten)]
    channel: &'a RemoteChannel,
    guild: &'a str,
    folder: &'a str,
}

/// Formats usernames, display names and channel names from compiled templates.
#[derive(Debug, Clone)]
pub struct NamingService {
    templates: Arc<NameTemplates>,
}

impl NamingService {
    pub fn new(templates: Arc<NameTemplates>) -> Self {
        Self { templates }
    }

    /// Matrix localpart for a remote user ID.
    pub fn format_username(&self, user_id: &str) -> String {
        self.templates.render_username(user_id)
    }

    /// Display name for a remote user.
    pub fn format_displayname(&self, user: &RemoteUser) -> String {
        self.templates.render(TemplateKind::Displayname, user)
    }

    /// Room name for a remote channel.
    ///
    /// Guild channels need their guild resolved; failing that is an error.
    /// Their category is resolved too, but a missing category only leaves
    /// `folder` empty. DMs without a name are named after their recipients
    /// and never go through the channel name template.
    pub async fn format_channelname<L>(
        &self,
        channel: &RemoteChannel,
        lookup: &L,
    ) -> Result<String, NameError>
    where
        L: RemoteLookup + ?Sized,
    {
        let mut guild_name = String::new();
        let mut folder_name = String::new();

        if !channel.is_dm() {
            let guild_id = channel
                .guild_id
                .as_deref()
                .ok_or(NameError::FindGuild(LookupError::MissingId("guild")))?;
            let guild = lookup.guild(guild_id).await.map_err(NameError::FindGuild)?;
            guild_name = guild.name;

            if let Some(parent_id) = channel.parent_id.as_deref() {
                match lookup.channel(parent_id).await {
                    Ok(folder) => folder_name = folder.name.unwrap_or_default(),
                    Err(e) => {
                        tracing::debug!(
                            channel_id = %channel.id,
                            channel_type = %channel.channel_type,
                            parent_id = %parent_id,
                            error = %e,
                            "Parent channel lookup failed, using empty folder name"
                        );
                    }
                }
            }
        } else if channel.display_name().is_none() {
            let recipients: Vec<String> = channel
                .recipients
                .iter()
                .map(|user| self.format_displayname(user))
                .collect();

            return Ok(recipients.join(", "));
        }

        Ok(self.templates.render(
            TemplateKind::Channelname,
            &ChannelNameInput {
                channel,
                guild: &guild_name,
                folder: &folder_name,
            },
        ))
    }
}
