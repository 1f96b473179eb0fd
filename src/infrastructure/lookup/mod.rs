//! Remote lookup implementations.

mod in_memory;

pub use in_memory::InMemoryLookup;
