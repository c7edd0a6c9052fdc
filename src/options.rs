//! Option bag handed to the schema compiler.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Schema languages a compiler may accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaLanguage {
    #[default]
    XmlSchema,
    RelaxNg,
    Dtd,
    Wsdl,
}

/// Compiler options, forwarded untouched to the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    pub schema_language: SchemaLanguage,
    /// Package/module the generated types are placed in.
    pub target_package: Option<String>,
    pub strict_validation: bool,
    /// Allow vendor extensions in binding customizations.
    pub extensions: bool,
    pub bindings: Vec<PathBuf>,
    /// Provider-specific settings.
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            schema_language: SchemaLanguage::XmlSchema,
            target_package: None,
            strict_validation: true,
            extensions: false,
            bindings: Vec::new(),
            extra: HashMap::new(),
        }
    }
}

impl GeneratorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schema_language(mut self, lang: SchemaLanguage) -> Self {
        self.schema_language = lang;
        self
    }

    pub fn with_target_package(mut self, package: impl Into<String>) -> Self {
        self.target_package = Some(package.into());
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn with_extensions(mut self, enable: bool) -> Self {
        self.extensions = enable;
        self
    }

    pub fn with_binding(mut self, path: impl Into<PathBuf>) -> Self {
        self.bindings.push(path.into());
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn from_yaml_str(s: &str) -> crate::Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load options from disk. `.json` files are parsed as JSON, everything else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
