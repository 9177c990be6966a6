//! RDF namespace and prefix management
//!
//! Handles namespace prefixes for compact IRI notation. Prefixes keep their
//! declaration order so that everything derived from them (schema prefix
//! tables, compact URIs) is reproducible.

use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

const LOCAL_NAME_SEPARATORS: [char; 3] = ['#', '/', ':'];

/// Local part of an IRI.
///
/// The first separator present, checked in the order `#`, `/`, `:`, splits
/// the IRI; the text after its last occurrence is the local name. An IRI
/// without any separator is its own local name.
pub fn local_name(iri: &str) -> &str {
    for separator in LOCAL_NAME_SEPARATORS {
        if let Some(pos) = iri.rfind(separator) {
            return &iri[pos + separator.len_utf8()..];
        }
    }
    iri
}

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager with common prefixes
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with common prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();

        mgr.add_prefix("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#");
        mgr.add_prefix("rdfs", "http://www.w3.org/2000/01/rdf-schema#");
        mgr.add_prefix("xsd", "http://www.w3.org/2001/XMLSchema#");
        mgr.add_prefix("owl", "http://www.w3.org/2002/07/owl#");
        mgr.add_prefix("skos", "http://www.w3.org/2004/02/skos/core#");
        mgr.add_prefix("dcterms", "http://purl.org/dc/terms/");

        mgr
    }

    /// Create a namespace manager without any prefixes
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Add a prefix, replacing any previous binding of the same prefix
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Check whether a prefix is bound
    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains_key(prefix)
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        if let Some(pos) = compact_iri.find(':') {
            let prefix = &compact_iri[..pos];
            let local = &compact_iri[pos + 1..];
            let iri = self.get_iri(prefix)?;
            Ok(format!("{}{}", iri, local))
        } else {
            Err(PrefixError::InvalidIri(compact_iri.to_string()))
        }
    }

    /// Compact an IRI using the longest matching namespace.
    ///
    /// The empty prefix is never used. A namespace only matches when the
    /// remaining local part is exactly the IRI's [`local_name`] and holds no
    /// separator, so `local_name` of the compact form gives the same name.
    pub fn compact(&self, iri: &str) -> Option<String> {
        let name = local_name(iri);
        if name.is_empty() || name.contains(&LOCAL_NAME_SEPARATORS[..]) {
            return None;
        }
        self.prefixes
            .iter()
            .filter(|(prefix, ns)| {
                !prefix.is_empty() && iri.starts_with(ns.as_str()) && &iri[ns.len()..] == name
            })
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, _)| format!("{}:{}", prefix, name))
    }

    /// Compact an IRI, falling back to the full IRI
    pub fn compact_or_full(&self, iri: &str) -> String {
        self.compact(iri).unwrap_or_else(|| iri.to_string())
    }

    /// Get all registered prefixes in declaration order
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }

    /// Number of bound prefixes
    pub fn len(&self) -> usize {
        self.prefixes.len()
    }

    /// Check if no prefix is bound
    pub fn is_empty(&self) -> bool {
        self.prefixes.is_empty()
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefixes() {
        let mgr = NamespaceManager::new();

        assert_eq!(
            mgr.get_iri("rdf").unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        );
        assert_eq!(
            mgr.get_iri("skos").unwrap(),
            "http://www.w3.org/2004/02/skos/core#"
        );
        assert!(mgr.get_iri("foaf").is_err());
    }

    #[test]
    fn test_expand() {
        let mgr = NamespaceManager::new();

        let expanded = mgr.expand("rdfs:label").unwrap();
        assert_eq!(expanded, "http://www.w3.org/2000/01/rdf-schema#label");

        assert!(mgr.expand("nocolon").is_err());
        assert!(mgr.expand("nope:thing").is_err());
    }

    #[test]
    fn test_compact_prefers_longest_namespace() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("ex", "http://example.org/");
        mgr.add_prefix("exv", "http://example.org/vocab/");

        assert_eq!(
            mgr.compact("http://example.org/vocab/name"),
            Some("exv:name".to_string())
        );
        assert_eq!(
            mgr.compact("http://example.org/Person"),
            Some("ex:Person".to_string())
        );
        assert_eq!(mgr.compact("http://other.org/x"), None);
        assert_eq!(mgr.compact("http://example.org/"), None);
    }

    #[test]
    fn test_compact_keeps_local_name() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("ex", "http://example.org/");
        mgr.add_prefix("o", "http://ex.org/o#");
        mgr.add_prefix("oa", "http://ex.org/o#a/");

        // local part would still contain a separator
        assert_eq!(mgr.compact("http://example.org/a:b"), None);
        assert_eq!(mgr.compact("http://ex.org/o#a/b"), None);
        // "ex:vocab/name" would not name the same thing
        assert_eq!(mgr.compact("http://example.org/vocab/name"), None);
        assert_eq!(mgr.compact("http://ex.org/o#c"), Some("o:c".to_string()));
    }

    #[test]
    fn test_compact_skips_empty_prefix() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("", "http://example.org/");

        assert_eq!(mgr.compact("http://example.org/name"), None);
        assert_eq!(
            mgr.compact_or_full("http://example.org/name"),
            "http://example.org/name"
        );
    }

    #[test]
    fn test_rebinding_keeps_position() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("a", "http://a.org/");
        mgr.add_prefix("b", "http://b.org/");
        mgr.add_prefix("a", "http://a2.org/");

        let prefixes = mgr.prefixes();
        assert_eq!(prefixes[0], Namespace::new("a", "http://a2.org/"));
        assert_eq!(prefixes[1], Namespace::new("b", "http://b.org/"));
    }
}
