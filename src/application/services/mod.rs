//! Application Services
//!
//! - **NamingService**: usernames, display names and channel names for bridged entities

pub mod naming_service;

pub use naming_service::NamingService;
