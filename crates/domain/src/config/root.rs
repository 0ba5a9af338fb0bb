use serde::{Deserialize, Serialize};
use std::path::Path;

use super::errors::ConfigError;
use super::hesiod::HesiodConfig;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;

const LOCAL_CONFIG_PATH: &str = "hesiod.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/hesiod/config.toml";

/// Configuration for the `hesinfo` tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct AppConfig {
    /// Name layout handed to the resolver
    #[serde(default)]
    pub hesiod: HesiodConfig,

    /// TXT lookup backend
    #[serde(default)]
    pub lookup: LookupConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. hesiod.toml in current directory
    /// 3. /etc/hesiod/config.toml
    /// 4. Default configuration (Athena)
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path.map(str::to_string).or_else(Self::get_config_path) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(nameserver) = overrides.nameserver {
            self.hesiod.nameserver = nameserver;
        }
        if let Some(realm) = overrides.realm {
            self.hesiod.realm = realm;
        }
        if let Some(server) = overrides.server {
            self.lookup.server = Some(server);
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.lookup.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hesiod.realm.is_empty() {
            return Err(ConfigError::Validation("Realm cannot be empty".to_string()));
        }

        for (label, suffix) in [
            ("nameserver", &self.hesiod.nameserver),
            ("realm", &self.hesiod.realm),
        ] {
            if !suffix.is_empty() && !suffix.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "The {} suffix '{}' must start with '.'",
                    label, suffix
                )));
            }
        }

        if self.lookup.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout cannot be 0".to_string(),
            ));
        }

        self.lookup.server_addr()?;
        Ok(())
    }

    /// Get the path to the configuration file that `load` would pick
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG_PATH, SYSTEM_CONFIG_PATH]
            .into_iter()
            .find(|path| Path::new(path).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub nameserver: Option<String>,
    pub realm: Option<String>,
    pub server: Option<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
}
