use hesiod_domain::{AppConfig, CliOverrides};
use tracing::debug;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<AppConfig> {
    let config = AppConfig::load(path, overrides)?;
    config.validate()?;

    debug!(
        nameserver = %config.hesiod.nameserver,
        realm = %config.hesiod.realm,
        server = ?config.lookup.server,
        "Configuration loaded"
    );

    Ok(config)
}
