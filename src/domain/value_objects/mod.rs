//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod missing_id_policy;
mod portal_key;

pub use config_warning::ConfigWarning;
pub use missing_id_policy::MissingIdPolicy;
pub use portal_key::portal_key;
