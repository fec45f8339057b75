//! Environment-driven configuration. Every table name is the entity's base
//! literal plus one global deployment suffix, so a single env knob selects the
//! environment all seven tables live in.

/// Suffix appended to every table name. Overridden by `TABLE_SUFFIX`.
pub const DEFAULT_TABLE_SUFFIX: &str = "__warehouse-management";

/// Listen address for the binary. Overridden by `BIND_ADDR`.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into())
}

/// Resolves per-entity table names from the global suffix.
#[derive(Clone, Debug)]
pub struct TableNames {
    suffix: String,
}

impl TableNames {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// Reads `TABLE_SUFFIX` from the environment, falling back to the default.
    pub fn from_env() -> Self {
        Self::new(std::env::var("TABLE_SUFFIX").unwrap_or_else(|_| DEFAULT_TABLE_SUFFIX.into()))
    }

    pub fn resolve(&self, base: &str) -> String {
        format!("{}{}", base, self.suffix)
    }
}

impl Default for TableNames {
    fn default() -> Self {
        Self::new(DEFAULT_TABLE_SUFFIX)
    }
}
