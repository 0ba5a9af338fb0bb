use crate::errors::HesiodError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `getservbyname(3)`-style record carried in a Hesiod `service` TXT answer.
///
/// The `Default` value (empty strings, port 0) is what the zero-value
/// service lookup returns when no record matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub service_name: String,
    pub protocol: String,
    pub port: u16,
}

impl ServiceEntry {
    pub fn new(service_name: impl Into<String>, protocol: impl Into<String>, port: u16) -> Self {
        Self {
            service_name: service_name.into(),
            protocol: protocol.into(),
            port,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl FromStr for ServiceEntry {
    type Err = HesiodError;

    /// Parses `"<name> <protocol> <port>"`. Fields past the third are ignored.
    ///
    /// Stricter than a C-style `%s %s %d` scan: the whole port token must be
    /// a decimal `u16`. `"x udp 70000"` and `"x udp 2102abc"` are
    /// `MalformedRecord` here, and a malformed record stops a service scan.
    fn from_str(record: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| HesiodError::MalformedRecord {
            record: record.to_string(),
            reason: reason.to_string(),
        };

        let mut fields = record.split_whitespace();
        let service_name = fields.next().ok_or_else(|| malformed("missing service name"))?;
        let protocol = fields.next().ok_or_else(|| malformed("missing protocol"))?;
        let port = fields.next().ok_or_else(|| malformed("missing port"))?;
        let port = port
            .parse::<u16>()
            .map_err(|e| malformed(&format!("invalid port '{}': {}", port, e)))?;

        Ok(Self::new(service_name, protocol, port))
    }
}

impl fmt::Display for ServiceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.service_name, self.protocol, self.port)
    }
}
