//! Static description of the target metamodel
//!
//! The importer needs three facts about the metamodel:
//! - which attribute names are legal on a class and on a field definition
//! - for each slot, whether it is multi-valued, its declared range, and the
//!   vocabulary IRIs it corresponds to
//! - the vocabulary IRIs of the non-slot elements (classes, types)
//!
//! A versioned description ships embedded in the crate ([`MetamodelDescription::builtin`]);
//! an alternative can be loaded from a YAML file with the same layout.
//! CURIEs in the description are expanded once, at load time, against the
//! description's own prefix table.

use crate::rdf::{NamespaceManager, PrefixError};
use indexmap::{IndexMap, IndexSet};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

const BUILTIN_DESCRIPTION: &str = include_str!("linkml_meta.yaml");

/// Metamodel description errors
#[derive(Error, Debug)]
pub enum MetamodelError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed description
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A CURIE uses a prefix the description does not declare
    #[error("Cannot expand {curie} in {element}: {source}")]
    Curie {
        element: String,
        curie: String,
        #[source]
        source: PrefixError,
    },
}

pub type MetamodelResult<T> = Result<T, MetamodelError>;

/// Definition kind an attribute record is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Class,
    Field,
}

impl ElementKind {
    /// Mapping-table key whose IRIs type a subject as this kind
    pub fn metaclass(&self) -> &'static str {
        match self {
            ElementKind::Class => "ClassDefinition",
            ElementKind::Field => "SlotDefinition",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Class => write!(f, "class"),
            ElementKind::Field => write!(f, "field"),
        }
    }
}

/// Description of one metamodel slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInfo {
    pub name: String,
    pub multivalued: bool,
    pub range: String,
    /// Expanded IRIs: the slot's own uri, its native IRI, then other mappings
    pub mappings: Vec<String>,
}

impl SlotInfo {
    /// True when values of this slot are IRIs to keep verbatim
    pub fn has_uri_range(&self) -> bool {
        matches!(self.range.as_str(), "uri" | "uriorcurie")
    }

    /// True when values of this slot name other schema elements
    pub fn has_definition_range(&self) -> bool {
        self.range == "element" || self.range.ends_with("definition")
    }
}

#[derive(Debug, Deserialize)]
struct RawDescription {
    id: String,
    version: String,
    default_prefix: String,
    prefixes: IndexMap<String, String>,
    attributes: RawAttributes,
    slots: IndexMap<String, Option<RawSlot>>,
    #[serde(default)]
    classes: IndexMap<String, RawElement>,
    #[serde(default)]
    types: IndexMap<String, RawElement>,
}

#[derive(Debug, Deserialize)]
struct RawAttributes {
    #[serde(default)]
    shared: Vec<String>,
    #[serde(default)]
    class_definition: Vec<String>,
    #[serde(default)]
    slot_definition: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct RawSlot {
    #[serde(default)]
    multivalued: bool,
    range: Option<String>,
    uri: Option<String>,
    #[serde(default)]
    mappings: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawElement {
    uri: String,
    #[serde(default)]
    mappings: Vec<String>,
}

/// Loaded metamodel description
#[derive(Debug, Clone)]
pub struct MetamodelDescription {
    id: String,
    version: String,
    class_attributes: IndexSet<String>,
    field_attributes: IndexSet<String>,
    slots: IndexMap<String, SlotInfo>,
    /// Element name -> expanded IRIs, slots first, then classes, then types
    element_mappings: IndexMap<String, Vec<String>>,
}

impl MetamodelDescription {
    /// The description embedded in this crate
    pub fn builtin() -> MetamodelResult<Self> {
        Self::from_yaml_str(BUILTIN_DESCRIPTION)
    }

    /// Load a description from a YAML file
    pub fn from_path(path: &Path) -> MetamodelResult<Self> {
        let text = fs::read_to_string(path)?;
        debug!("Loading metamodel description from {}", path.display());
        Self::from_yaml_str(&text)
    }

    /// Parse a description from YAML text
    pub fn from_yaml_str(text: &str) -> MetamodelResult<Self> {
        let raw: RawDescription = serde_yaml::from_str(text)?;

        let mut namespaces = NamespaceManager::empty();
        for (prefix, iri) in &raw.prefixes {
            namespaces.add_prefix(prefix.clone(), iri.clone());
        }
        let expand = |element: &str, curie: &str| -> MetamodelResult<String> {
            if curie.contains("://") {
                return Ok(curie.to_string());
            }
            namespaces.expand(curie).map_err(|source| MetamodelError::Curie {
                element: element.to_string(),
                curie: curie.to_string(),
                source,
            })
        };

        let class_attributes: IndexSet<String> = raw
            .attributes
            .shared
            .iter()
            .chain(&raw.attributes.class_definition)
            .cloned()
            .collect();
        let field_attributes: IndexSet<String> = raw
            .attributes
            .shared
            .iter()
            .chain(&raw.attributes.slot_definition)
            .cloned()
            .collect();

        let mut slots = IndexMap::new();
        let mut element_mappings = IndexMap::new();

        for (name, raw_slot) in raw.slots {
            let raw_slot = raw_slot.unwrap_or_default();
            let native = expand(&name, &format!("{}:{}", raw.default_prefix, name))?;

            let mut mappings: Vec<String> = Vec::new();
            if let Some(uri) = &raw_slot.uri {
                mappings.push(expand(&name, uri)?);
            }
            mappings.push(native);
            for curie in &raw_slot.mappings {
                mappings.push(expand(&name, curie)?);
            }
            mappings.dedup();

            element_mappings.insert(name.clone(), mappings.clone());
            slots.insert(
                name.clone(),
                SlotInfo {
                    name,
                    multivalued: raw_slot.multivalued,
                    range: raw_slot.range.unwrap_or_else(|| "string".to_string()),
                    mappings,
                },
            );
        }

        for (name, element) in raw.classes.into_iter().chain(raw.types) {
            let mut mappings = vec![expand(&name, &element.uri)?];
            for curie in &element.mappings {
                mappings.push(expand(&name, curie)?);
            }
            element_mappings.insert(name, mappings);
        }

        debug!(
            "Metamodel {} {}: {} slots, {} elements",
            raw.id,
            raw.version,
            slots.len(),
            element_mappings.len()
        );

        Ok(Self {
            id: raw.id,
            version: raw.version,
            class_attributes,
            field_attributes,
            slots,
            element_mappings,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Attribute names legal on a definition of the given kind
    pub fn legal_attributes(&self, kind: ElementKind) -> &IndexSet<String> {
        match kind {
            ElementKind::Class => &self.class_attributes,
            ElementKind::Field => &self.field_attributes,
        }
    }

    pub fn is_legal(&self, kind: ElementKind, name: &str) -> bool {
        self.legal_attributes(kind).contains(name)
    }

    /// Description of a slot, if the metamodel has one
    pub fn slot(&self, name: &str) -> Option<&SlotInfo> {
        self.slots.get(name)
    }

    pub fn slots(&self) -> impl Iterator<Item = &SlotInfo> {
        self.slots.values()
    }

    /// Every element's expanded mappings, in declaration order
    pub fn element_mappings(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.element_mappings
            .iter()
            .map(|(name, iris)| (name.as_str(), iris.as_slice()))
    }
}
