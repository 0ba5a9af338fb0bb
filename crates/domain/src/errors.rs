use thiserror::Error;

/// Failure reported by a TXT lookup adapter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupFailure {
    #[error("Name not found: {0}")]
    NotFound(String),

    #[error("Query timeout for {0}")]
    Timeout(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS name: {0}")]
    InvalidName(String),
}

/// Why a symbolic realm could not be turned into a domain suffix.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RealmFailure {
    #[error("rhs-extension lookup failed: {0}")]
    Lookup(#[source] Box<HesiodError>),

    #[error("rhs-extension returned no candidates")]
    NoCandidates,

    #[error("redirection nested deeper than {0} levels")]
    TooDeep(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HesiodError {
    #[error("Failed to resolve realm '{realm}': {cause}")]
    Resolution {
        realm: String,
        #[source]
        cause: RealmFailure,
    },

    #[error("TXT lookup for {name} failed: {source}")]
    Lookup {
        name: String,
        #[source]
        source: LookupFailure,
    },

    #[error("Malformed service record '{record}': {reason}")]
    MalformedRecord { record: String, reason: String },
}

impl HesiodError {
    /// True when the underlying lookup reported that the name does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            HesiodError::Lookup {
                source: LookupFailure::NotFound(_),
                ..
            }
        )
    }
}
