use async_trait::async_trait;
use hesiod_application::ports::TxtLookup;
use hesiod_domain::LookupFailure;
use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::TXT;
use hickory_proto::ProtoErrorKind;
use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig};
use hickory_resolver::name_server::TokioConnectionProvider;
use hickory_resolver::{Name, ResolveError, Resolver, ResolverBuilder, TokioResolver};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, info};

/// TXT lookup through hickory's stub resolver.
///
/// Truncated UDP answers are retried over TCP by the resolver, so a
/// successful lookup always carries the complete record set.
pub struct SystemTxtLookup {
    resolver: TokioResolver,
}

impl SystemTxtLookup {
    /// Build from the host's configuration (`/etc/resolv.conf` on Unix).
    pub fn from_system_conf(timeout: Duration) -> Result<Self, LookupFailure> {
        let builder = Resolver::builder_tokio().map_err(|e| {
            LookupFailure::Transport(format!("Failed to read system resolver config: {}", e))
        })?;

        info!(timeout_secs = timeout.as_secs(), "Using system resolver for Hesiod lookups");

        Ok(Self::finish(builder, timeout))
    }

    /// Send every query to one nameserver, over UDP with TCP fallback.
    pub fn with_nameserver(server: SocketAddr, timeout: Duration) -> Self {
        let name_servers = NameServerConfigGroup::from_ips_clear(&[server.ip()], server.port(), true);
        let config = ResolverConfig::from_parts(None, vec![], name_servers);

        info!(server = %server, timeout_secs = timeout.as_secs(), "Using explicit nameserver for Hesiod lookups");

        Self::with_config(config, timeout)
    }

    /// Build from an explicit resolver configuration.
    pub fn with_config(config: ResolverConfig, timeout: Duration) -> Self {
        let builder = Resolver::builder_with_config(config, TokioConnectionProvider::default());
        Self::finish(builder, timeout)
    }

    fn finish(mut builder: ResolverBuilder<TokioConnectionProvider>, timeout: Duration) -> Self {
        let options = builder.options_mut();
        options.timeout = timeout;
        options.attempts = 1;

        Self {
            resolver: builder.build(),
        }
    }

    // Search domains must never be appended to a Hesiod name.
    fn fully_qualified(name: &str) -> Result<Name, LookupFailure> {
        let mut parsed = Name::from_ascii(name)
            .map_err(|e| LookupFailure::InvalidName(format!("{}: {}", name, e)))?;
        parsed.set_fqdn(true);
        Ok(parsed)
    }

    /// NXDOMAIN and NODATA mean the name does not exist. Every other
    /// failure, SERVFAIL and REFUSED included, is a transport problem.
    fn map_error(name: &str, error: ResolveError) -> LookupFailure {
        match error.proto().map(|proto| proto.kind()) {
            Some(ProtoErrorKind::NoRecordsFound { response_code, .. }) => match *response_code {
                ResponseCode::NXDomain | ResponseCode::NoError => {
                    LookupFailure::NotFound(name.to_string())
                }
                code => LookupFailure::Transport(format!("{} answering {}", code, name)),
            },
            Some(ProtoErrorKind::Timeout) => LookupFailure::Timeout(name.to_string()),
            _ => LookupFailure::Transport(error.to_string()),
        }
    }
}

#[async_trait]
impl TxtLookup for SystemTxtLookup {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure> {
        let fqdn = Self::fully_qualified(name)?;

        let lookup = self.resolver.txt_lookup(fqdn).await.map_err(|e| {
            debug!(name, error = %e, "TXT lookup failed");
            Self::map_error(name, e)
        })?;

        let records: Vec<String> = lookup.iter().map(txt_to_string).collect();
        if records.is_empty() {
            return Err(LookupFailure::NotFound(name.to_string()));
        }

        debug!(name, records = records.len(), "TXT lookup succeeded");
        Ok(records)
    }
}

/// Join a TXT record's character-strings into one string.
fn txt_to_string(txt: &TXT) -> String {
    txt.txt_data()
        .iter()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .collect()
}
