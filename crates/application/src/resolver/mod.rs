mod name_builder;
mod service;

use crate::ports::TxtLookup;
use futures::future::BoxFuture;
use hesiod_domain::{HesiodConfig, HesiodError};
use std::sync::Arc;
use tracing::{debug, trace};

/// How many `rhs-extension` indirections one question may trigger.
pub const MAX_REALM_REDIRECTS: usize = 4;

/// Query type used to turn a symbolic realm into its domain suffix.
pub const RHS_EXTENSION: &str = "rhs-extension";

/// Hesiod resolver: builds Hesiod DNS names and fetches their TXT records
/// through an injected [`TxtLookup`].
///
/// Every call runs to completion on the caller's task. Nothing is cached
/// and failed lookups are not retried.
#[derive(Clone)]
pub struct HesiodResolver {
    // "lhs" in the Hesiod documentation
    nameserver: String,
    // "rhs"
    realm: String,
    lookup: Arc<dyn TxtLookup>,
}

impl HesiodResolver {
    /// Default-configuration constructor: the Athena layout (`.ns`,
    /// `.athena.mit.edu`). The production lookup backend,
    /// `SystemTxtLookup`, lives in `hesiod-infrastructure`.
    pub fn new(lookup: Arc<dyn TxtLookup>) -> Self {
        Self::with_config(&HesiodConfig::athena(), lookup)
    }

    pub fn with_config(config: &HesiodConfig, lookup: Arc<dyn TxtLookup>) -> Self {
        Self {
            nameserver: config.nameserver.clone(),
            realm: config.realm.clone(),
            lookup,
        }
    }

    /// Swap the lookup backend, keeping the name layout.
    pub fn with_lookup(mut self, lookup: Arc<dyn TxtLookup>) -> Self {
        self.lookup = lookup;
        self
    }

    pub fn nameserver(&self) -> &str {
        &self.nameserver
    }

    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Return the TXT strings for `question` under `query_type`, exactly as
    /// the lookup backend returned them.
    ///
    /// For example `resolve("zephyr", "sloc")` lists the Zephyr servers and
    /// `resolve("achernya", "passwd")` returns a passwd line.
    pub async fn resolve(
        &self,
        question: &str,
        query_type: &str,
    ) -> Result<Vec<String>, HesiodError> {
        self.resolve_at_depth(question, query_type, 0).await
    }

    // Boxed so that realm redirection can recurse back into resolution.
    fn resolve_at_depth<'a>(
        &'a self,
        question: &'a str,
        query_type: &'a str,
        depth: usize,
    ) -> BoxFuture<'a, Result<Vec<String>, HesiodError>> {
        Box::pin(async move {
            let name = self.build_name(question, query_type, depth).await?;

            debug!(question, query_type, name = %name, "Performing Hesiod TXT lookup");

            match self.lookup.lookup_txt(&name).await {
                Ok(records) => {
                    trace!(name = %name, records = ?records, "Hesiod lookup returned");
                    Ok(records)
                }
                Err(source) => {
                    debug!(name = %name, error = %source, "Hesiod lookup failed");
                    Err(HesiodError::Lookup { name, source })
                }
            }
        })
    }
}
