//! # Application Layer
//!
//! Template compilation and the services that render names from it.

pub mod services;
pub mod templates;

pub use services::NamingService;
pub use templates::{NameTemplates, ROOT_VARIABLE, USER_ID_PROBE};
