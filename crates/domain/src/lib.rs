//! Hesiod Domain Layer
pub mod config;
pub mod errors;
pub mod question;
pub mod service_entry;

pub use config::{AppConfig, CliOverrides, ConfigError, HesiodConfig};
pub use errors::{HesiodError, LookupFailure, RealmFailure};
pub use question::{Question, RealmRef};
pub use service_entry::ServiceEntry;
