use thiserror::Error;

/// Boxed cause carried by collaborator errors.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or key that caused the error (e.g., "options.target_package", "type_names[2]")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., the system id or schema location)
    pub details: Option<String>,
    /// Component that raised the error (e.g., "provider_registry", "schema_compiler")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for schema-bridge.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured identifier could not be resolved or its factory failed.
    #[error("Provider {identifier} could not be set: {source}")]
    ProviderUnavailable {
        identifier: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("Schema generation error: {message}{}", format_context(.context))]
    SchemaGeneration {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Marshalling context error: {message}{}", format_context(.context))]
    MarshallingContext {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<BoxError>,
    },

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML syntax error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn provider_unavailable(identifier: impl Into<String>, source: anyhow::Error) -> Self {
        Error::ProviderUnavailable {
            identifier: identifier.into(),
            source,
        }
    }

    /// Schema generation failure without an underlying cause.
    pub fn schema_generation(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::SchemaGeneration {
            message: msg.into(),
            context,
            source: None,
        }
    }

    /// Schema generation failure wrapping the compiler's own error.
    pub fn schema_generation_caused_by(
        msg: impl Into<String>,
        context: ErrorContext,
        cause: impl Into<BoxError>,
    ) -> Self {
        Error::SchemaGeneration {
            message: msg.into(),
            context,
            source: Some(cause.into()),
        }
    }

    pub fn marshalling_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MarshallingContext {
            message: msg.into(),
            context,
            source: None,
        }
    }

    pub fn marshalling_context_caused_by(
        msg: impl Into<String>,
        context: ErrorContext,
        cause: impl Into<BoxError>,
    ) -> Self {
        Error::MarshallingContext {
            message: msg.into(),
            context,
            source: Some(cause.into()),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::SchemaGeneration { context, .. }
            | Error::MarshallingContext { context, .. }
            | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }

    pub fn is_provider_unavailable(&self) -> bool {
        matches!(self, Error::ProviderUnavailable { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_unavailable_names_identifier() {
        let err = Error::provider_unavailable("acme/provider", anyhow::anyhow!("boom"));
        let msg = err.to_string();
        assert!(msg.contains("acme/provider"));
        assert!(msg.contains("boom"));
        assert!(err.is_provider_unavailable());
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_context_suffix() {
        let err = Error::marshalling_context(
            "unknown type",
            ErrorContext::new()
                .with_field_path("type_names[1]")
                .with_source("marshaller"),
        );
        assert_eq!(
            err.to_string(),
            "Marshalling context error: unknown type (field: type_names[1], source: marshaller)"
        );
        assert_eq!(
            err.context().and_then(|c| c.source.as_deref()),
            Some("marshaller")
        );
    }

    #[test]
    fn test_context_only_on_message_variants() {
        let cfg = Error::configuration_with_context(
            "bad identifier",
            ErrorContext::new().with_source("registry_config"),
        );
        assert_eq!(
            cfg.context().and_then(|c| c.source.as_deref()),
            Some("registry_config")
        );

        let io: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(io.context().is_none());
        let unavailable = Error::provider_unavailable("x", anyhow::anyhow!("nope"));
        assert!(unavailable.context().is_none());
    }

    #[test]
    fn test_schema_generation_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "order.xsd");
        let err = Error::schema_generation_caused_by("cannot read schema", ErrorContext::new(), io);
        let cause = std::error::Error::source(&err).map(|c| c.to_string());
        assert_eq!(cause.as_deref(), Some("order.xsd"));
    }
}
