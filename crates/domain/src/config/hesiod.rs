use serde::{Deserialize, Serialize};

/// Hesiod name layout: the nameserver ("lhs") and realm ("rhs") suffixes.
///
/// Both suffixes carry their leading dot, so a question `zephyr` of type
/// `sloc` becomes `zephyr.sloc` + `nameserver` + `realm`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct HesiodConfig {
    #[serde(default = "default_nameserver")]
    pub nameserver: String,

    #[serde(default = "default_realm")]
    pub realm: String,
}

impl HesiodConfig {
    pub fn new(nameserver: impl Into<String>, realm: impl Into<String>) -> Self {
        Self {
            nameserver: nameserver.into(),
            realm: realm.into(),
        }
    }

    /// MIT Project Athena layout, the historical Hesiod default.
    pub fn athena() -> Self {
        Self::new(default_nameserver(), default_realm())
    }
}

impl Default for HesiodConfig {
    fn default() -> Self {
        Self::athena()
    }
}

fn default_nameserver() -> String {
    ".ns".to_string()
}

fn default_realm() -> String {
    ".athena.mit.edu".to_string()
}
