//! Typed construction of definitions from resolved attribute records
//!
//! Attributes with a typed home are moved into their field; everything
//! else stays in [`ElementMetadata::extra`] in resolution order. A value that
//! does not fit its typed field (say, a non-boolean `required`) is kept in
//! `extra` rather than dropped.

use super::model::{ClassDefinition, ElementMetadata, FieldDefinition};
use super::value::{AttributeRecord, AttributeValue};

/// Consumes an [`AttributeRecord`] one typed attribute at a time
struct RecordReader {
    record: AttributeRecord,
}

impl RecordReader {
    fn new(record: AttributeRecord) -> Self {
        Self { record }
    }

    fn text(&mut self, key: &str) -> Option<String> {
        self.record.remove(key).and_then(|v| v.to_text())
    }

    fn texts(&mut self, key: &str) -> Vec<String> {
        self.record
            .remove(key)
            .map(|v| v.to_texts())
            .unwrap_or_default()
    }

    fn flag(&mut self, key: &str) -> Option<bool> {
        let flag = self.record.get(key).and_then(AttributeValue::as_boolean)?;
        self.record.remove(key);
        Some(flag)
    }

    fn metadata(mut self) -> ElementMetadata {
        let mut metadata = ElementMetadata {
            title: self.text("title"),
            description: self.text("description"),
            deprecated: self.text("deprecated"),
            aliases: self.texts("aliases"),
            comments: self.texts("comments"),
            notes: self.texts("notes"),
            see_also: self.texts("see_also"),
            exact_mappings: self.texts("exact_mappings"),
            close_mappings: self.texts("close_mappings"),
            related_mappings: self.texts("related_mappings"),
            narrow_mappings: self.texts("narrow_mappings"),
            broad_mappings: self.texts("broad_mappings"),
            ..Default::default()
        };
        metadata.extra.extend(self.record);
        metadata
    }
}

impl FieldDefinition {
    /// Build a field definition from a resolved field record
    pub fn from_record(name: impl Into<String>, record: AttributeRecord) -> Self {
        let mut reader = RecordReader::new(record);
        Self {
            name: name.into(),
            slot_uri: reader.text("slot_uri"),
            is_a: reader.text("is_a"),
            mixins: reader.texts("mixins"),
            domain: reader.text("domain"),
            range: reader.text("range"),
            any_of: Vec::new(),
            identifier: reader.flag("identifier"),
            key: reader.flag("key"),
            required: reader.flag("required"),
            recommended: reader.flag("recommended"),
            multivalued: reader.flag("multivalued"),
            subproperty_of: reader.text("subproperty_of"),
            inverse: reader.text("inverse"),
            pattern: reader.text("pattern"),
            metadata: reader.metadata(),
        }
    }
}

impl ClassDefinition {
    /// Build a class definition from a resolved class record
    pub fn from_record(name: impl Into<String>, record: AttributeRecord) -> Self {
        let mut reader = RecordReader::new(record);
        Self {
            name: name.into(),
            class_uri: reader.text("class_uri"),
            is_a: reader.text("is_a"),
            mixins: reader.texts("mixins"),
            is_abstract: reader.flag("abstract"),
            mixin: reader.flag("mixin"),
            tree_root: reader.flag("tree_root"),
            union_of: reader.texts("union_of"),
            disjoint_with: reader.texts("disjoint_with"),
            slots: reader.texts("slots"),
            metadata: reader.metadata(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Value;

    #[test]
    fn test_field_from_record() {
        let mut record = AttributeRecord::new();
        record.set("title", Value::from("full name"));
        record.set("description", Value::from("The name of a person"));
        record.push("aliases", Value::from("label"));
        record.set("required", Value::from(true));
        record.set("subproperty_of", Value::from("label"));
        record.set("rank", Value::from(2i64));

        let field = FieldDefinition::from_record("name", record);
        assert_eq!(field.name, "name");
        assert_eq!(field.metadata.title.as_deref(), Some("full name"));
        assert_eq!(field.metadata.aliases, vec!["label"]);
        assert_eq!(field.required, Some(true));
        assert_eq!(field.subproperty_of.as_deref(), Some("label"));
        assert_eq!(
            field.metadata.extra.get("rank"),
            Some(&AttributeValue::Single(Value::from(2i64)))
        );
    }

    #[test]
    fn test_non_boolean_flag_kept_in_extra() {
        let mut record = AttributeRecord::new();
        record.set("required", Value::from("sometimes"));

        let field = FieldDefinition::from_record("x", record);
        assert_eq!(field.required, None);
        assert!(field.metadata.extra.contains_key("required"));
    }

    #[test]
    fn test_scalar_slot_given_list_takes_last() {
        let mut record = AttributeRecord::new();
        record.push("description", Value::from("first"));
        record.push("description", Value::from("second"));

        let class = ClassDefinition::from_record("Thing", record);
        assert_eq!(class.metadata.description.as_deref(), Some("second"));
    }

    #[test]
    fn test_class_from_record() {
        let mut record = AttributeRecord::new();
        record.set("is_a", Value::from("Agent"));
        record.push("slots", Value::from("name"));
        record.push("comments", Value::from("a comment"));
        record.set("abstract", Value::from(true));

        let class = ClassDefinition::from_record("Person", record);
        assert_eq!(class.is_a.as_deref(), Some("Agent"));
        assert_eq!(class.slots, vec!["name"]);
        assert_eq!(class.metadata.comments, vec!["a comment"]);
        assert_eq!(class.is_abstract, Some(true));
        assert!(!class.is_root());
        assert!(class.metadata.extra.is_empty());
    }
}
