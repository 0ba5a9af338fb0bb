use super::HesiodResolver;
use hesiod_domain::{HesiodError, ServiceEntry};
use tracing::debug;

const SERVICE_QUERY_TYPE: &str = "service";

impl HesiodResolver {
    /// Find the first `service` record for `service` whose protocol is
    /// `protocol`.
    ///
    /// Records are scanned in answer order. Records for other protocols are
    /// skipped, but a record that does not parse as `name protocol port`
    /// aborts the scan with `MalformedRecord`, even if a later record would
    /// have matched.
    pub async fn find_service(
        &self,
        service: &str,
        protocol: &str,
    ) -> Result<Option<ServiceEntry>, HesiodError> {
        let candidates = self.resolve(service, SERVICE_QUERY_TYPE).await?;

        for candidate in &candidates {
            let entry: ServiceEntry = candidate.parse()?;
            if entry.protocol != protocol {
                continue;
            }

            debug!(service, protocol, port = entry.port, "Hesiod service found");
            return Ok(Some(entry));
        }

        debug!(
            service,
            protocol,
            candidates = candidates.len(),
            "No Hesiod service record for protocol"
        );
        Ok(None)
    }

    /// Like [`find_service`](Self::find_service), but reports "no matching
    /// protocol" as `ServiceEntry::default()` instead of `None`.
    ///
    /// An `Ok` result therefore does not imply a match; check
    /// [`ServiceEntry::is_empty`] or the fields.
    pub async fn get_service_by_name(
        &self,
        service: &str,
        protocol: &str,
    ) -> Result<ServiceEntry, HesiodError> {
        self.find_service(service, protocol)
            .await
            .map(Option::unwrap_or_default)
    }
}
