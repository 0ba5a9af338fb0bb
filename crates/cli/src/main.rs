use clap::Parser;
use hesiod_application::HesiodResolver;
use hesiod_domain::CliOverrides;
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;

const EXIT_LOOKUP_FAILED: u8 = 1;
const EXIT_CONFIG_ERROR: u8 = 2;

const SERVICE_QUERY_TYPE: &str = "service";

#[derive(Parser)]
#[command(name = "hesinfo")]
#[command(version)]
#[command(about = "Look up Hesiod directory records")]
struct Cli {
    /// Hesiod name, optionally redirected with `name@realm`
    name: String,

    /// Hesiod query type (sloc, passwd, pobox, filsys, ...)
    #[arg(required_unless_present = "service")]
    query_type: Option<String>,

    /// Look up the service record for NAME with this protocol
    #[arg(short = 's', long, value_name = "PROTO", conflicts_with = "query_type")]
    service: Option<String>,

    /// Print the DNS name that would be queried, without querying it
    #[arg(short = 'b', long)]
    show_name: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Nameserver to query directly (ip or ip:port) instead of the system resolver
    #[arg(long, value_name = "ADDR")]
    server: Option<String>,

    /// Lookup timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Realm suffix, e.g. .athena.mit.edu
    #[arg(long)]
    realm: Option<String>,

    /// Nameserver suffix, e.g. .ns
    #[arg(long)]
    nameserver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn query_type(&self) -> &str {
        match (&self.service, &self.query_type) {
            (None, Some(query_type)) => query_type,
            // clap guarantees a type whenever --service is absent
            _ => SERVICE_QUERY_TYPE,
        }
    }

    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nameserver: self.nameserver.clone(),
            realm: self.realm.clone(),
            server: self.server.clone(),
            timeout_secs: self.timeout,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match bootstrap::load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("hesinfo: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    bootstrap::init_logging(&config.logging);

    info!(
        "Starting hesinfo v{} (realm {})",
        env!("CARGO_PKG_VERSION"),
        config.hesiod.realm
    );

    let resolver = match di::build_resolver(&config) {
        Ok(resolver) => resolver,
        Err(e) => {
            error!(error = %e, "Failed to initialize lookup backend");
            eprintln!("hesinfo: {:#}", e);
            return ExitCode::from(EXIT_CONFIG_ERROR);
        }
    };

    match run(&cli, &resolver).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_LOOKUP_FAILED),
        Err(e) => {
            eprintln!("hesinfo: {:#}", e);
            ExitCode::from(EXIT_LOOKUP_FAILED)
        }
    }
}

/// Returns `Ok(false)` when a service lookup found no matching protocol.
async fn run(cli: &Cli, resolver: &HesiodResolver) -> anyhow::Result<bool> {
    let query_type = cli.query_type();

    if cli.show_name {
        let name = resolver.prepare_dns_name(&cli.name, query_type).await?;
        println!("{}", name);
        return Ok(true);
    }

    if let Some(protocol) = &cli.service {
        return match resolver.find_service(&cli.name, protocol).await? {
            Some(entry) => {
                println!("{}", entry);
                Ok(true)
            }
            None => {
                eprintln!("hesinfo: no {} service record for {}", protocol, cli.name);
                Ok(false)
            }
        };
    }

    for record in resolver.resolve(&cli.name, query_type).await? {
        println!("{}", record);
    }
    Ok(true)
}
