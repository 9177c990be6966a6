//! Schema document model
//!
//! A [`Schema`] is the output of one import: a prefix table plus ordered
//! maps of class and field definitions. Field definitions are written out
//! under the `slots` key.

use super::value::AttributeValue;
use indexmap::IndexMap;
use serde::Serialize;

pub const LINKML_PREFIX: &str = "linkml";
pub const LINKML_IRI: &str = "https://w3id.org/linkml/";
pub const LINKML_TYPES_IMPORT: &str = "linkml:types";
pub const DEFAULT_RANGE: &str = "string";
pub const DEFAULT_SCHEMA_BASE: &str = "http://example.org/";

/// Descriptive metadata shared by class and field definitions
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ElementMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exact_mappings: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub close_mappings: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub related_mappings: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub narrow_mappings: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub broad_mappings: Vec<String>,

    /// Legal attributes without a typed home, in resolution order
    #[serde(flatten)]
    pub extra: IndexMap<String, AttributeValue>,
}

/// One alternative of a field's `any_of` disjunction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnonymousSlotExpression {
    pub range: String,
}

impl AnonymousSlotExpression {
    pub fn new(range: impl Into<String>) -> Self {
        Self {
            range: range.into(),
        }
    }
}

/// A field (slot) definition
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FieldDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub slot_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<AnonymousSlotExpression>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub multivalued: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subproperty_of: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverse: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    #[serde(flatten)]
    pub metadata: ElementMetadata,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The `{identifier: true, range: uriorcurie}` field attached to root classes
    pub fn identifier(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            identifier: Some(true),
            range: Some("uriorcurie".to_string()),
            ..Default::default()
        }
    }

    /// Every range this field admits: `range` or the `any_of` alternatives
    pub fn ranges(&self) -> Vec<&str> {
        match &self.range {
            Some(range) => vec![range.as_str()],
            None => self.any_of.iter().map(|e| e.range.as_str()).collect(),
        }
    }
}

/// A class definition
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassDefinition {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_uri: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_a: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mixins: Vec<String>,

    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub is_abstract: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mixin: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tree_root: Option<bool>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub union_of: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub disjoint_with: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<String>,

    #[serde(flatten)]
    pub metadata: ElementMetadata,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// A root class has neither a parent nor mixins
    pub fn is_root(&self) -> bool {
        self.is_a.is_none() && self.mixins.is_empty()
    }

    /// Append a slot name unless the class already lists it
    pub fn add_slot(&mut self, slot: impl Into<String>) -> bool {
        let slot = slot.into();
        if self.slots.contains(&slot) {
            false
        } else {
            self.slots.push(slot);
            true
        }
    }
}

/// A complete schema document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub id: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_prefix: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_range: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,

    pub prefixes: IndexMap<String, String>,

    #[serde(rename = "slots", skip_serializing_if = "IndexMap::is_empty")]
    pub fields: IndexMap<String, FieldDefinition>,

    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub classes: IndexMap<String, ClassDefinition>,
}

impl Schema {
    /// Empty schema with id `http://example.org/<name>`
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("{}{}", DEFAULT_SCHEMA_BASE, name),
            name,
            default_prefix: None,
            default_range: None,
            imports: Vec::new(),
            prefixes: IndexMap::new(),
            fields: IndexMap::new(),
            classes: IndexMap::new(),
        }
    }

    /// Add the linkml prefix, the linkml:types import and the string default range
    pub fn add_defaults(&mut self) {
        self.add_prefix(LINKML_PREFIX, LINKML_IRI, true);
        if !self.imports.iter().any(|i| i == LINKML_TYPES_IMPORT) {
            self.imports.push(LINKML_TYPES_IMPORT.to_string());
        }
        self.default_range = Some(DEFAULT_RANGE.to_string());
    }

    /// Declare a prefix. Returns false when the prefix was already declared
    /// and `replace_if_present` is false.
    pub fn add_prefix(
        &mut self,
        prefix: impl Into<String>,
        reference: impl Into<String>,
        replace_if_present: bool,
    ) -> bool {
        let prefix = prefix.into();
        if !replace_if_present && self.prefixes.contains_key(&prefix) {
            return false;
        }
        self.prefixes.insert(prefix, reference.into());
        true
    }

    pub fn prefix_reference(&self, prefix: &str) -> Option<&str> {
        self.prefixes.get(prefix).map(String::as_str)
    }

    /// Insert a field; a field of the same name is replaced in place
    pub fn add_field(&mut self, field: FieldDefinition) -> Option<FieldDefinition> {
        self.fields.insert(field.name.clone(), field)
    }

    /// Insert a class; a class of the same name is replaced in place
    pub fn add_class(&mut self, class: ClassDefinition) -> Option<ClassDefinition> {
        self.classes.insert(class.name.clone(), class)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    pub fn class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    pub fn class_mut(&mut self, name: &str) -> Option<&mut ClassDefinition> {
        self.classes.get_mut(name)
    }

    /// Names of classes without a parent or mixins
    pub fn root_classes(&self) -> Vec<&str> {
        self.classes
            .values()
            .filter(|c| c.is_root())
            .map(|c| c.name.as_str())
            .collect()
    }
}
