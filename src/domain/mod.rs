//! # Domain Layer
//!
//! Records from the remote platform and the capability used to resolve them.
//!
//! ## Structure
//!
//! - **entities**: Remote users, guilds and channels
//! - **lookup**: The `RemoteLookup` trait implemented by the infrastructure layer

pub mod entities;
pub mod lookup;

pub use entities::*;
pub use lookup::RemoteLookup;

#[cfg(test)]
pub use lookup::MockRemoteLookup;
