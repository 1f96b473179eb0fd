//! # Bridge Naming Library
//!
//! Naming engine and configuration gate for a Matrix-Discord puppeting bridge:
//! - Loads and validates the `bridge` configuration section
//! - Compiles the username, display name and channel name templates
//! - Formats bridge-side names for Discord users and channels
//!
//! ## Module Structure
//!
//! ```text
//! bridge_naming/
//! +-- config/         Configuration loading, bridge section, permission table
//! +-- domain/         Remote users, guilds, channels and the lookup trait
//! +-- application/    Template compilation and the naming service
//! +-- infrastructure/ In-memory lookup implementation
//! +-- shared/         Error types
//! ```

// Configuration module
pub mod config;

// Domain layer - Remote records
pub mod domain;

// Application layer - Templates and naming
pub mod application;

// Infrastructure layer - Lookup implementations
pub mod infrastructure;

// Shared utilities
pub mod shared;

// Telemetry and observability
pub mod telemetry;
