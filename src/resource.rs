//! Locators for externally stored schema documents.

use std::fmt;
use std::path::PathBuf;

use url::Url;

/// Where a schema document lives.
///
/// Providers decide how to fetch `Url` and `Classpath` resources; only
/// in-memory and filesystem resources can be read directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Path(PathBuf),
    Url(Url),
    /// Resource looked up by name on the provider's search path.
    Classpath { name: String },
    Bytes { name: String, data: Vec<u8> },
}

impl Resource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Resource::Path(path.into())
    }

    pub fn classpath(name: impl Into<String>) -> Self {
        Resource::Classpath { name: name.into() }
    }

    pub fn bytes(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Resource::Bytes {
            name: name.into(),
            data: data.into(),
        }
    }

    /// Parse a URL locator. `file:` URLs become `Resource::Path`.
    pub fn url(raw: &str) -> crate::Result<Self> {
        let url = Url::parse(raw).map_err(|e| {
            crate::Error::configuration_with_context(
                format!("invalid resource URL '{}': {}", raw, e),
                crate::ErrorContext::new().with_source("resource"),
            )
        })?;
        if url.scheme() == "file" {
            if let Ok(p) = url.to_file_path() {
                return Ok(Resource::Path(p));
            }
        }
        Ok(Resource::Url(url))
    }

    /// Human-readable name, used as the default system id and in error messages.
    pub fn source_name(&self) -> String {
        match self {
            Resource::Path(p) => p.display().to_string(),
            Resource::Url(u) => u.to_string(),
            Resource::Classpath { name } => format!("classpath:{}", name),
            Resource::Bytes { name, .. } => name.clone(),
        }
    }

    /// Read the document into memory.
    pub fn read_bytes(&self) -> crate::Result<Vec<u8>> {
        match self {
            Resource::Path(p) => Ok(std::fs::read(p)?),
            Resource::Bytes { data, .. } => Ok(data.clone()),
            other => Err(std::io::Error::new(
                std::io::ErrorKind::Unsupported,
                format!("resource {} must be fetched by the provider", other.source_name()),
            )
            .into()),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_name())
    }
}
