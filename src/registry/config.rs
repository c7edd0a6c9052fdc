//! Registry configuration.

/// Identifier resolved when nothing else is configured.
pub const DEFAULT_PROVIDER_ID: &str = "drools-compiler/jaxb-helper-provider";

/// Environment variable overriding the provider identifier.
pub const PROVIDER_ENV_VAR: &str = "SCHEMA_BRIDGE_PROVIDER";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Well-known identifier looked up in the factory table.
    pub identifier: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            identifier: DEFAULT_PROVIDER_ID.to_string(),
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Default configuration, with the identifier taken from
    /// `SCHEMA_BRIDGE_PROVIDER` when that is set and non-blank.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(PROVIDER_ENV_VAR).ok())
    }

    fn from_env_value(value: Option<String>) -> Self {
        match value.map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => Self::default().with_identifier(v),
            _ => Self::default(),
        }
    }
}
