//! Per-conversion configuration

use crate::rdf::RdfFormat;

/// Schema name used when neither a name nor a default prefix is given
pub const DEFAULT_SCHEMA_NAME: &str = "example";

/// Options for one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportConfig {
    /// Serialization of the input document
    pub format: RdfFormat,

    /// Schema name
    pub name: Option<String>,

    /// Prefix whose namespace becomes the schema id
    pub default_prefix: Option<String>,

    /// Namespace for the default prefix when the document does not declare it
    pub model_uri: Option<String>,

    /// Name of an identifier field to attach to every root class
    pub identifier: Option<String>,

    /// Base IRI for resolving relative IRIs in the document
    pub base_iri: Option<String>,
}

impl ImportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(mut self, format: RdfFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_default_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.default_prefix = Some(prefix.into());
        self
    }

    pub fn with_model_uri(mut self, model_uri: impl Into<String>) -> Self {
        self.model_uri = Some(model_uri.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_base_iri(mut self, base_iri: impl Into<String>) -> Self {
        self.base_iri = Some(base_iri.into());
        self
    }

    /// Effective schema name and default prefix.
    ///
    /// A name without a default prefix doubles as the prefix; a prefix
    /// without a name doubles as the name; with neither the schema is
    /// called `example` and has no default prefix.
    pub fn schema_naming(&self) -> (String, Option<String>) {
        let default_prefix = match (&self.name, &self.default_prefix) {
            (Some(name), None) => Some(name.clone()),
            (_, prefix) => prefix.clone(),
        };
        let name = self
            .name
            .clone()
            .or_else(|| default_prefix.clone())
            .unwrap_or_else(|| DEFAULT_SCHEMA_NAME.to_string());
        (name, default_prefix)
    }
}
