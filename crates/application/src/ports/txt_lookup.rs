use async_trait::async_trait;
use hesiod_domain::LookupFailure;

/// Fetches the TXT records published at a fully composed DNS name.
///
/// Implementations return every record's text in answer order. A name with
/// no TXT data is an error (`LookupFailure::NotFound`), never an empty list.
#[async_trait]
pub trait TxtLookup: Send + Sync {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupFailure>;
}
