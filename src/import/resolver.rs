//! Folding a subject's triples into a metamodel attribute record

use super::diagnostics::{Diagnostic, Diagnostics};
use super::mapping::MappingTable;
use super::names::NameResolver;
use crate::metamodel::{ElementKind, MetamodelDescription, SlotInfo};
use crate::rdf::{vocab, Literal, NamedNode, RdfObject, RdfStore, RdfSubject};
use crate::schema::{AttributeRecord, Value};
use tracing::{debug, warn};

/// Resolves the attributes of one subject for a given definition kind
pub struct SubjectAttributeResolver<'a> {
    store: &'a RdfStore,
    mappings: &'a MappingTable,
    metamodel: &'a MetamodelDescription,
}

impl<'a> SubjectAttributeResolver<'a> {
    pub fn new(
        store: &'a RdfStore,
        mappings: &'a MappingTable,
        metamodel: &'a MetamodelDescription,
    ) -> Self {
        Self {
            store,
            mappings,
            metamodel,
        }
    }

    /// Build the attribute record of `subject` as a definition of `kind`.
    ///
    /// Triples are visited in store order. `rdf:type` is skipped, unmapped
    /// predicates are reported and skipped, and names not legal for `kind`
    /// are dropped silently. Blank-node objects of slots that name other
    /// elements (`is_a`, `range`, ...) are skipped. Multi-valued (or undescribed) slots collect a
    /// list; single-valued slots keep the last value seen.
    pub fn resolve(
        &self,
        subject: &NamedNode,
        kind: ElementKind,
        names: &mut NameResolver,
        diagnostics: &mut Diagnostics,
    ) -> AttributeRecord {
        let mut record = AttributeRecord::new();
        let key = RdfSubject::NamedNode(subject.clone());

        for triple in self.store.get_triples_with_subject(&key) {
            let predicate = triple.predicate.as_str();
            if predicate == vocab::RDF_TYPE {
                continue;
            }

            let Some(resolution) = self.mappings.resolve(predicate) else {
                warn!("No mapping for {} on {}", predicate, subject.as_str());
                diagnostics.push(Diagnostic::UnmappedPredicate {
                    subject: subject.as_str().to_string(),
                    predicate: predicate.to_string(),
                });
                continue;
            };
            if resolution.is_ambiguous() {
                let candidates: Vec<String> = resolution
                    .distinct_candidates()
                    .into_iter()
                    .map(String::from)
                    .collect();
                debug!("Multiple mappings for {}: {:?}", predicate, candidates);
                diagnostics.push(Diagnostic::AmbiguousMapping {
                    iri: predicate.to_string(),
                    candidates,
                    chosen: resolution.name.to_string(),
                });
            }

            let mut name = resolution.name;
            if !self.metamodel.is_legal(kind, name) {
                continue;
            }
            if name == "name" {
                name = "title";
            }

            let slot = self.metamodel.slot(name);
            if matches!(triple.object, RdfObject::BlankNode(_))
                && slot.is_some_and(SlotInfo::has_definition_range)
            {
                debug!("Skipping anonymous {} on {}", name, subject.as_str());
                continue;
            }
            let value = self.object_value(&triple.object, slot, names);
            let attribute = name.replace(' ', "_");

            match slot {
                Some(slot) if !slot.multivalued => record.set(attribute, value),
                Some(_) => record.push(attribute, value),
                None => {
                    debug!("No metamodel slot named {}", name);
                    diagnostics.push(Diagnostic::MissingMetamodelSlot {
                        name: name.to_string(),
                    });
                    record.push(attribute, value);
                }
            }
        }

        record
    }

    fn object_value(
        &self,
        object: &RdfObject,
        slot: Option<&SlotInfo>,
        names: &mut NameResolver,
    ) -> Value {
        match object {
            RdfObject::NamedNode(node) => {
                if slot.is_some_and(SlotInfo::has_uri_range) {
                    Value::from(node.as_str())
                } else {
                    Value::from(names.resolve(node.as_str()))
                }
            }
            RdfObject::Literal(literal) => literal_value(literal),
            RdfObject::BlankNode(node) => Value::from(node.as_str()),
        }
    }
}

/// Typed value of a literal; lexical forms that do not parse stay strings
pub fn literal_value(literal: &Literal) -> Value {
    let lexical = literal.value();
    let Some(datatype) = literal.datatype().strip_prefix(vocab::XSD_NS) else {
        return Value::from(lexical);
    };

    let trimmed = lexical.trim();
    if vocab::XSD_INTEGER_TYPES.contains(&datatype) {
        trimmed
            .parse::<i64>()
            .map(Value::Integer)
            .unwrap_or_else(|_| Value::from(lexical))
    } else if matches!(datatype, "decimal" | "double" | "float") {
        trimmed
            .parse::<f64>()
            .map(Value::Float)
            .unwrap_or_else(|_| Value::from(lexical))
    } else if datatype == "boolean" {
        match trimmed {
            "true" | "1" => Value::Boolean(true),
            "false" | "0" => Value::Boolean(false),
            _ => Value::from(lexical),
        }
    } else {
        Value::from(lexical)
    }
}
