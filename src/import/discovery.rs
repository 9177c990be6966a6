//! Candidate field and class subjects
//!
//! Candidates are named nodes only. Each pass walks the store once, so the
//! result is in document order.

use super::mapping::MappingTable;
use crate::metamodel::ElementKind;
use crate::rdf::{vocab, NamedNode, RdfObject, RdfStore, Triple};
use indexmap::IndexSet;

/// Enumerates subjects that should become field or class definitions
pub struct EntityDiscovery<'a> {
    store: &'a RdfStore,
    mappings: &'a MappingTable,
}

impl<'a> EntityDiscovery<'a> {
    pub fn new(store: &'a RdfStore, mappings: &'a MappingTable) -> Self {
        Self { store, mappings }
    }

    /// Field candidates: subjects typed as a slot, plus subjects of any
    /// triple whose predicate maps to `domain_of` or `range`
    pub fn fields(&self) -> IndexSet<NamedNode> {
        let mut fields = IndexSet::new();
        for triple in self.store.iter() {
            let predicate = triple.predicate.as_str();
            let implied = self.mappings.maps_to(predicate, "domain_of")
                || self.mappings.maps_to(predicate, "range");
            if implied || self.is_typed_as(triple, ElementKind::Field) {
                if let Some(subject) = triple.subject.as_named_node() {
                    fields.insert(subject.clone());
                }
            }
        }
        fields
    }

    /// Class candidates: subjects typed as a class, plus both ends of every
    /// `rdfs:subClassOf` triple
    pub fn classes(&self) -> IndexSet<NamedNode> {
        let mut classes = IndexSet::new();
        for triple in self.store.iter() {
            let subclass_edge = triple.predicate.as_str() == vocab::RDFS_SUB_CLASS_OF;
            if subclass_edge || self.is_typed_as(triple, ElementKind::Class) {
                if let Some(subject) = triple.subject.as_named_node() {
                    classes.insert(subject.clone());
                }
            }
            if subclass_edge {
                if let RdfObject::NamedNode(object) = &triple.object {
                    classes.insert(object.clone());
                }
            }
        }
        classes
    }

    fn is_typed_as(&self, triple: &Triple, kind: ElementKind) -> bool {
        if triple.predicate.as_str() != vocab::RDF_TYPE {
            return false;
        }
        match triple.object.as_named_node() {
            Some(class) => self
                .mappings
                .forward(kind.metaclass())
                .iter()
                .any(|iri| iri == class.as_str()),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::mapping::MetamodelMappings;
    use crate::metamodel::MetamodelDescription;
    use crate::rdf::{RdfFormat, RdfParser};

    fn discover(turtle: &str) -> (Vec<String>, Vec<String>) {
        discover_with(turtle, &MetamodelMappings::new())
    }

    fn discover_with(turtle: &str, overrides: &MetamodelMappings) -> (Vec<String>, Vec<String>) {
        let metamodel = MetamodelDescription::builtin().unwrap();
        let mappings = MappingTable::build(overrides, &metamodel);
        let store = RdfParser::parse(turtle, RdfFormat::Turtle, None)
            .unwrap()
            .into_store();
        let discovery = EntityDiscovery::new(&store, &mappings);
        let names = |set: IndexSet<NamedNode>| {
            set.iter()
                .map(|n| n.as_str().trim_start_matches("http://example.org/").to_string())
                .collect()
        };
        (names(discovery.fields()), names(discovery.classes()))
    }

    const PREFIXES: &str = r#"
        @prefix ex: <http://example.org/> .
        @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
        @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
        @prefix owl: <http://www.w3.org/2002/07/owl#> .
        @prefix schema: <http://schema.org/> .
        @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
    "#;

    #[test]
    fn test_explicitly_typed() {
        let (fields, classes) = discover(&format!(
            "{}\nex:Person a owl:Class .\nex:name a owl:DatatypeProperty .\nex:knows a rdf:Property .",
            PREFIXES
        ));
        assert_eq!(fields, vec!["name", "knows"]);
        assert_eq!(classes, vec!["Person"]);
    }

    #[test]
    fn test_fields_implied_by_domain_and_range() {
        let (fields, classes) = discover(&format!(
            "{}\nex:color schema:domainIncludes ex:Widget .\nex:size schema:rangeIncludes xsd:integer .\n\
             ex:weight <https://schema.org/domainIncludes> ex:Widget .",
            PREFIXES
        ));
        assert_eq!(fields, vec!["color", "size", "weight"]);
        // domain classes are not class candidates
        assert!(classes.is_empty());
    }

    #[test]
    fn test_subclass_edges_imply_both_ends() {
        let (_, classes) = discover(&format!(
            "{}\nex:Person rdfs:subClassOf ex:Agent .\nex:Agent rdfs:subClassOf ex:Thing .",
            PREFIXES
        ));
        assert_eq!(classes, vec!["Person", "Agent", "Thing"]);
    }

    #[test]
    fn test_no_duplicates_document_order() {
        let (fields, classes) = discover(&format!(
            "{}\nex:name schema:domainIncludes ex:Person .\nex:Person a owl:Class .\n\
             ex:name a owl:DatatypeProperty ; schema:rangeIncludes xsd:string .\n\
             ex:Person rdfs:subClassOf ex:Agent .",
            PREFIXES
        ));
        assert_eq!(fields, vec!["name"]);
        assert_eq!(classes, vec!["Person", "Agent"]);
    }

    #[test]
    fn test_blank_nodes_skipped() {
        let (fields, classes) = discover(&format!(
            "{}\n[] a owl:Class .\n[] schema:domainIncludes ex:Person .\nex:A rdfs:subClassOf [ a owl:Restriction ] .",
            PREFIXES
        ));
        assert!(fields.is_empty());
        assert_eq!(classes, vec!["A"]);
    }

    #[test]
    fn test_override_adds_implied_predicate() {
        let mut overrides = MetamodelMappings::new();
        overrides.insert("domain_of", "http://www.w3.org/2000/01/rdf-schema#domain");
        let (fields, _) = discover_with(
            &format!("{}\nex:name rdfs:domain ex:Person .", PREFIXES),
            &overrides,
        );
        assert_eq!(fields, vec!["name"]);
    }

    #[test]
    fn test_other_predicates_imply_nothing() {
        let (fields, classes) = discover(&format!(
            "{}\nex:x rdfs:label \"x\" .",
            PREFIXES
        ));
        assert!(fields.is_empty());
        assert!(classes.is_empty());
    }
}
