//! # Infrastructure Layer
//!
//! Implementations of the domain capabilities.

pub mod lookup;

pub use lookup::InMemoryLookup;
