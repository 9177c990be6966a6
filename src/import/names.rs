//! IRI → local name resolution

pub use crate::rdf::local_name;
use indexmap::IndexMap;
use serde::Serialize;

/// Derives names from IRIs and remembers where each name came from.
///
/// The registry maps each derived name to the last IRI it was derived from;
/// names equal to their input are not recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameResolver {
    registry: IndexMap<String, String>,
}

impl NameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Local name of `iri`, recorded in the registry
    pub fn resolve(&mut self, iri: &str) -> String {
        let name = local_name(iri);
        if name != iri {
            self.registry.insert(name.to_string(), iri.to_string());
        }
        name.to_string()
    }

    /// IRI a name was last derived from
    pub fn iri_for(&self, name: &str) -> Option<&str> {
        self.registry.get(name).map(String::as_str)
    }

    pub fn registry(&self) -> &IndexMap<String, String> {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_separators() {
        assert_eq!(local_name("http://example.org/onto#Person"), "Person");
        assert_eq!(local_name("http://schema.org/name"), "name");
        assert_eq!(local_name("urn:isbn"), "isbn");
        assert_eq!(local_name("Person"), "Person");
    }

    #[test]
    fn test_hash_takes_priority_over_slash() {
        // '#' is present, so the later '/' is not a separator
        assert_eq!(local_name("http://example.org/a#b/c"), "b/c");
    }

    #[test]
    fn test_last_occurrence_wins() {
        assert_eq!(local_name("http://example.org/a/b/c"), "c");
        assert_eq!(local_name("a#b#c"), "c");
    }

    #[test]
    fn test_trailing_separator_gives_empty_name() {
        assert_eq!(local_name("http://example.org/"), "");
    }

    #[test]
    fn test_local_name_is_stable() {
        for iri in [
            "http://example.org/onto#Person",
            "http://xmlns.com/foaf/0.1/name",
            "ex:thing",
        ] {
            let name = local_name(iri);
            assert_eq!(local_name(name), name);
        }
    }

    #[test]
    fn test_registry_records_derived_names() {
        let mut names = NameResolver::new();
        assert_eq!(names.resolve("http://example.org/Person"), "Person");
        assert_eq!(names.iri_for("Person"), Some("http://example.org/Person"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_registry_skips_identity() {
        let mut names = NameResolver::new();
        assert_eq!(names.resolve("Person"), "Person");
        assert!(names.is_empty());
    }

    #[test]
    fn test_registry_last_writer_wins() {
        let mut names = NameResolver::new();
        names.resolve("http://example.org/a/Person");
        names.resolve("http://example.org/b/Person");
        assert_eq!(names.iri_for("Person"), Some("http://example.org/b/Person"));
        assert_eq!(names.len(), 1);
    }

    #[test]
    fn test_registry_serializes_as_map() {
        let mut names = NameResolver::new();
        names.resolve("http://example.org/Person");
        assert_eq!(
            serde_json::to_value(&names).unwrap(),
            serde_json::json!({"Person": "http://example.org/Person"})
        );
    }
}
