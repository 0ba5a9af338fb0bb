use hesiod_application::ports::TxtLookup;
use hesiod_application::HesiodResolver;
use hesiod_domain::AppConfig;
use hesiod_infrastructure::dns::SystemTxtLookup;
use std::sync::Arc;

/// Wire the resolver to the lookup backend chosen by `config.lookup`.
pub fn build_resolver(config: &AppConfig) -> anyhow::Result<HesiodResolver> {
    let timeout = config.lookup.timeout();

    let lookup: Arc<dyn TxtLookup> = match config.lookup.server_addr()? {
        Some(addr) => Arc::new(SystemTxtLookup::with_nameserver(addr, timeout)),
        None => Arc::new(SystemTxtLookup::from_system_conf(timeout)?),
    };

    Ok(HesiodResolver::with_config(&config.hesiod, lookup))
}
