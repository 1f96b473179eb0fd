//! # Domain Entities
//!
//! Read-only records received from the remote platform. The naming engine
//! never mutates them; they are only bound as template input.
//!
//! - **RemoteUser**: a user account, input to the display name template
//! - **RemoteGuild**: a guild, resolved for its name
//! - **RemoteChannel**: a guild channel, DM or group DM

mod channel;
mod guild;
mod user;

pub use channel::{ChannelType, RemoteChannel};
pub use guild::RemoteGuild;
pub use user::RemoteUser;
