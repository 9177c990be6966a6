//! Bidirectional mapping between metamodel names and vocabulary IRIs
//!
//! The forward table answers "which IRIs stand for `is_a`?"; the reverse
//! table answers "which metamodel name does `rdfs:subClassOf` stand for?".
//! [`MappingTable::build`] seeds both in three tiers:
//!
//! 1. built-in defaults ([`DEFAULT_MAPPINGS`])
//! 2. caller overrides ([`MetamodelMappings`]), appended
//! 3. the metamodel's own element mappings: the forward entry of each element
//!    is replaced, while its reverse entries are appended
//!
//! Because of tier 3, `forward("range")` no longer lists the
//! schema.org `rangeIncludes` IRIs once a metamodel is loaded, yet
//! `reverse(schema:rangeIncludes)` still resolves to `range`.

use super::error::ImportResult;
use crate::metamodel::MetamodelDescription;
use crate::rdf::vocab;
use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Mappings present before any override or metamodel is applied
pub const DEFAULT_MAPPINGS: &[(&str, &[&str])] = &[
    ("is_a", &[vocab::RDFS_SUB_CLASS_OF, vocab::SKOS_BROADER]),
    (
        "domain_of",
        &[vocab::SCHEMA_HTTP_DOMAIN_INCLUDES, vocab::SCHEMA_HTTPS_DOMAIN_INCLUDES],
    ),
    (
        "range",
        &[vocab::SCHEMA_HTTP_RANGE_INCLUDES, vocab::SCHEMA_HTTPS_RANGE_INCLUDES],
    ),
    ("exact_mappings", &[vocab::OWL_SAME_AS, vocab::SCHEMA_HTTP_SAME_AS]),
    (
        "ClassDefinition",
        &[vocab::RDFS_CLASS, vocab::OWL_CLASS, vocab::SKOS_CONCEPT],
    ),
    (
        "SlotDefinition",
        &[
            vocab::RDF_PROPERTY,
            vocab::OWL_OBJECT_PROPERTY,
            vocab::OWL_DATATYPE_PROPERTY,
            vocab::OWL_ANNOTATION_PROPERTY,
        ],
    ),
];

/// One IRI or a list of IRIs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MappingTargets {
    One(String),
    Many(Vec<String>),
}

impl MappingTargets {
    pub fn iris(&self) -> &[String] {
        match self {
            MappingTargets::One(iri) => std::slice::from_ref(iri),
            MappingTargets::Many(iris) => iris,
        }
    }
}

/// Caller-supplied mappings from metamodel names to vocabulary IRIs
///
/// In YAML, each entry is either a single IRI or a list:
///
/// ```yaml
/// domain_of: http://www.w3.org/2000/01/rdf-schema#domain
/// range:
///   - http://www.w3.org/2000/01/rdf-schema#range
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetamodelMappings {
    entries: IndexMap<String, MappingTargets>,
}

impl MetamodelMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an IRI for a metamodel name, after any already given
    pub fn insert(&mut self, name: impl Into<String>, iri: impl Into<String>) {
        let iri = iri.into();
        let targets = self
            .entries
            .entry(name.into())
            .or_insert_with(|| MappingTargets::Many(Vec::new()));
        match targets {
            MappingTargets::Many(iris) => iris.push(iri),
            MappingTargets::One(existing) => {
                *targets = MappingTargets::Many(vec![existing.clone(), iri]);
            }
        }
    }

    /// Parse overrides from YAML text
    pub fn from_yaml_str(text: &str) -> ImportResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load overrides from a YAML file
    pub fn from_path(path: &Path) -> ImportResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, targets)| (name.as_str(), targets.iris()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Outcome of mapping one vocabulary IRI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingResolution<'a> {
    /// The winning metamodel name (first registered)
    pub name: &'a str,
    /// Every name registered for the IRI, in registration order
    pub candidates: &'a [String],
}

impl<'a> MappingResolution<'a> {
    /// Distinct candidate names, in registration order
    pub fn distinct_candidates(&self) -> Vec<&'a str> {
        let distinct: IndexSet<&str> = self.candidates.iter().map(String::as_str).collect();
        distinct.into_iter().collect()
    }

    /// More than one distinct name claims the IRI
    pub fn is_ambiguous(&self) -> bool {
        self.distinct_candidates().len() > 1
    }
}

/// Forward and reverse mapping tables
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    forward: IndexMap<String, Vec<String>>,
    reverse: IndexMap<String, Vec<String>>,
}

impl MappingTable {
    /// Empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Table holding only the built-in defaults
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for (name, iris) in DEFAULT_MAPPINGS {
            for iri in iris.iter() {
                table.register(*name, *iri);
            }
        }
        table
    }

    /// Build the full table: defaults, then overrides, then metamodel elements
    pub fn build(overrides: &MetamodelMappings, metamodel: &MetamodelDescription) -> Self {
        let mut table = Self::with_defaults();

        for (name, iris) in overrides.iter() {
            for iri in iris {
                info!("Adding mapping {} -> {}", name, iri);
                table.register(name, iri.as_str());
            }
        }

        for (name, iris) in metamodel.element_mappings() {
            table.replace_forward(name, iris.to_vec());
            for iri in iris {
                table.register_reverse(iri.as_str(), name);
            }
        }

        debug!(
            "Mapping table: {} names, {} IRIs",
            table.forward.len(),
            table.reverse.len()
        );
        table
    }

    /// IRIs registered for a metamodel name (empty when none)
    pub fn forward(&self, name: &str) -> &[String] {
        self.forward.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Metamodel names registered for an IRI (empty when none)
    pub fn reverse(&self, iri: &str) -> &[String] {
        self.reverse.get(iri).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Register a name/IRI pair in both directions
    pub fn register(&mut self, name: impl Into<String>, iri: impl Into<String>) {
        let name = name.into();
        let iri = iri.into();
        push_unique(self.forward.entry(name.clone()).or_default(), iri.clone());
        push_unique(self.reverse.entry(iri).or_default(), name);
    }

    /// Replace the forward entry of a name, leaving the reverse table alone
    pub fn replace_forward(&mut self, name: impl Into<String>, iris: Vec<String>) {
        self.forward.insert(name.into(), iris);
    }

    /// Append a name to the reverse entry of an IRI
    pub fn register_reverse(&mut self, iri: impl Into<String>, name: impl Into<String>) {
        push_unique(self.reverse.entry(iri.into()).or_default(), name.into());
    }

    /// Map an IRI to a metamodel name
    pub fn resolve(&self, iri: &str) -> Option<MappingResolution<'_>> {
        let candidates = self.reverse(iri);
        candidates.first().map(|name| MappingResolution {
            name: name.as_str(),
            candidates,
        })
    }

    /// True if the IRI is registered for the name in the reverse table
    pub fn maps_to(&self, iri: &str, name: &str) -> bool {
        self.reverse(iri).iter().any(|n| n == name)
    }

    /// Forward entries, in registration order
    pub fn iter_forward(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.forward
            .iter()
            .map(|(name, iris)| (name.as_str(), iris.as_slice()))
    }

    /// Reverse entries, in registration order
    pub fn iter_reverse(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.reverse
            .iter()
            .map(|(iri, names)| (iri.as_str(), names.as_slice()))
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !values.contains(&value) {
        values.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINKML_IS_A: &str = "https://w3id.org/linkml/is_a";
    const LINKML_RANGE: &str = "https://w3id.org/linkml/range";
    const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    fn built(overrides: &MetamodelMappings) -> MappingTable {
        let metamodel = MetamodelDescription::builtin().unwrap();
        MappingTable::build(overrides, &metamodel)
    }

    #[test]
    fn test_defaults_both_directions() {
        let table = MappingTable::with_defaults();
        assert_eq!(
            table.forward("is_a"),
            &[vocab::RDFS_SUB_CLASS_OF.to_string(), vocab::SKOS_BROADER.to_string()][..]
        );
        assert_eq!(table.reverse(vocab::OWL_CLASS), &["ClassDefinition".to_string()][..]);
        assert_eq!(table.forward("SlotDefinition").len(), 4);
    }

    #[test]
    fn test_absent_mappings_are_empty() {
        let table = MappingTable::with_defaults();
        assert!(table.forward("no_such_name").is_empty());
        assert!(table.reverse("http://example.org/nothing").is_empty());
        assert!(table.resolve("http://example.org/nothing").is_none());
    }

    #[test]
    fn test_register_skips_identical_pair() {
        let mut table = MappingTable::new();
        table.register("a", "http://example.org/p");
        table.register("a", "http://example.org/p");
        assert_eq!(table.forward("a").len(), 1);
        assert_eq!(table.reverse("http://example.org/p").len(), 1);
    }

    #[test]
    fn test_overrides_are_appended() {
        let mut overrides = MetamodelMappings::new();
        overrides.insert("ClassDefinition", "http://example.org/Kind");
        let table = built(&overrides);

        let classes = table.forward("ClassDefinition");
        assert_eq!(classes.len(), 4);
        assert_eq!(classes[3], "http://example.org/Kind");
    }

    #[test]
    fn test_metamodel_replaces_forward_appends_reverse() {
        let table = built(&MetamodelMappings::new());

        // forward replaced by the metamodel's own mappings
        assert_eq!(table.forward("is_a"), &[LINKML_IS_A.to_string()][..]);
        assert_eq!(table.forward("range"), &[LINKML_RANGE.to_string()][..]);

        // reverse keeps the defaults first
        assert_eq!(table.reverse(vocab::RDFS_SUB_CLASS_OF)[0], "is_a");
        assert!(table.maps_to(vocab::SCHEMA_HTTP_RANGE_INCLUDES, "range"));
        assert!(table.maps_to(vocab::SCHEMA_HTTPS_DOMAIN_INCLUDES, "domain_of"));
        assert_eq!(table.reverse(LINKML_IS_A), &["is_a".to_string()][..]);
    }

    #[test]
    fn test_typing_keys_survive_metamodel() {
        let table = built(&MetamodelMappings::new());
        assert!(table
            .forward("ClassDefinition")
            .contains(&vocab::OWL_CLASS.to_string()));
        assert!(table
            .forward("SlotDefinition")
            .contains(&vocab::OWL_DATATYPE_PROPERTY.to_string()));
    }

    #[test]
    fn test_resolve_ambiguous() {
        let table = built(&MetamodelMappings::new());
        let resolution = table.resolve(vocab::RDFS_SUB_CLASS_OF).unwrap();
        assert_eq!(resolution.name, "is_a");
        assert!(resolution.is_ambiguous());
        assert_eq!(resolution.distinct_candidates(), vec!["is_a", "subclass_of"]);

        let label = table.resolve(RDFS_LABEL).unwrap();
        assert_eq!(label.name, "name");
        assert!(!label.is_ambiguous());
    }

    #[test]
    fn test_build_with_overrides() {
        let overrides =
            MetamodelMappings::from_yaml_str("domain_of: http://www.w3.org/2000/01/rdf-schema#domain\n")
                .unwrap();
        let table = built(&overrides);
        assert!(table.maps_to("http://www.w3.org/2000/01/rdf-schema#domain", "domain_of"));
    }

    #[test]
    fn test_mappings_yaml_one_or_many() {
        let yaml = "is_a: http://example.org/parent\nrange:\n  - http://example.org/r1\n  - http://example.org/r2\n";
        let overrides = MetamodelMappings::from_yaml_str(yaml).unwrap();
        let entries: Vec<_> = overrides.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1.len(), 1);
        assert_eq!(entries[1].1.len(), 2);
    }

    #[test]
    fn test_mappings_insert_promotes_to_list() {
        let mut overrides = MetamodelMappings::from_yaml_str("is_a: http://example.org/a\n").unwrap();
        overrides.insert("is_a", "http://example.org/b");
        let (_, iris) = overrides.iter().next().unwrap();
        assert_eq!(iris, &["http://example.org/a".to_string(), "http://example.org/b".to_string()][..]);
    }

    #[test]
    fn test_malformed_mappings_file() {
        assert!(MetamodelMappings::from_yaml_str("is_a: {nested: 1}").is_err());
    }
}
