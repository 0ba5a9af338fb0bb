pub mod errors;
pub mod hesiod;
pub mod logging;
pub mod lookup;
pub mod root;

pub use errors::ConfigError;
pub use hesiod::HesiodConfig;
pub use logging::LoggingConfig;
pub use lookup::LookupConfig;
pub use root::{AppConfig, CliOverrides};
