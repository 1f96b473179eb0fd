//! The `bridge` configuration section.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use super::permissions::PermissionTable;

/// Bridge behaviour settings.
///
/// The three templates are kept here as raw text; the compiled form lives in
/// [`NameTemplates`](crate::application::templates::NameTemplates).
#[derive(Debug, Clone, Deserialize)]
pub struct BridgeConfig {
    /// Template for puppet Matrix localparts, must reference the Discord user ID
    pub username_template: String,

    /// Template for puppet display names
    pub displayname_template: String,

    /// Template for portal room names
    pub channelname_template: String,

    /// Send read receipts for bridged messages
    #[serde(default)]
    pub delivery_receipts: bool,

    /// Send message status events for delivery state
    #[serde(default)]
    pub message_status_events: bool,

    /// Post a notice in the room when a message fails to bridge
    #[serde(default)]
    pub message_error_notices: bool,

    /// Restrict guild rooms to members of the guild space
    #[serde(default)]
    pub restricted_rooms: bool,

    /// Prefix for management commands
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,

    /// Management room help texts (passed through)
    #[serde(default)]
    pub management_room_text: Value,

    /// Per-portal buffer for incoming messages
    #[serde(default = "default_portal_message_buffer")]
    pub portal_message_buffer: usize,

    /// Keep the Matrix direct chat list in sync with Discord DMs
    #[serde(default)]
    pub sync_direct_chat_list: bool,

    /// Resend bridge info state events on startup
    #[serde(default)]
    pub resend_bridge_info: bool,

    /// Allow other homeservers to join portal rooms
    #[serde(default)]
    pub federate_rooms: bool,

    /// Homeserver domain -> client-server API URL used for double puppeting
    #[serde(default)]
    pub double_puppet_server_map: HashMap<String, String>,

    /// Look up double puppeting servers through .well-known
    #[serde(default)]
    pub double_puppet_allow_discovery: bool,

    /// Homeserver domain -> shared secret for automatic double puppet login
    #[serde(default)]
    pub login_shared_secret_map: HashMap<String, String>,

    /// End-to-bridge encryption settings (passed through)
    #[serde(default)]
    pub encryption: Value,

    /// Provisioning API settings (passed through)
    #[serde(default)]
    pub provisioning: ProvisioningSettings,

    /// Who may use the bridge
    #[serde(default)]
    pub permissions: PermissionTable,
}

/// Provisioning API configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProvisioningSettings {
    /// Path prefix the API is mounted under
    #[serde(default)]
    pub prefix: String,

    /// Shared secret for authenticating API requests
    #[serde(default)]
    pub shared_secret: String,
}

fn default_command_prefix() -> String {
    "!discord".to_string()
}

fn default_portal_message_buffer() -> usize {
    128
}

impl BridgeConfig {
    pub fn resend_bridge_info(&self) -> bool {
        self.resend_bridge_info
    }

    pub fn message_status_events_enabled(&self) -> bool {
        self.message_status_events
    }

    pub fn message_error_notices_enabled(&self) -> bool {
        self.message_error_notices
    }

    pub fn command_prefix(&self) -> &str {
        &self.command_prefix
    }

    pub fn encryption(&self) -> &Value {
        &self.encryption
    }

    pub fn management_room_texts(&self) -> &Value {
        &self.management_room_text
    }
}
