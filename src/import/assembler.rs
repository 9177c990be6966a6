//! Assembly of a complete schema from a graph
//!
//! Order of work:
//! 1. schema naming and defaults
//! 2. prefixes copied from the graph, default prefix and schema id
//! 3. field definitions; `domain_of` becomes class → field associations and
//!    `range` becomes `range` or `any_of`
//! 4. class definitions, plus classes known only from domain associations
//! 5. the optional identifier field on every root class

use super::config::ImportConfig;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::discovery::EntityDiscovery;
use super::mapping::MappingTable;
use super::names::NameResolver;
use super::resolver::SubjectAttributeResolver;
use crate::metamodel::{ElementKind, MetamodelDescription};
use crate::rdf::{local_name, vocab, NamedNode, RdfStore, RdfSubject};
use crate::schema::{AnonymousSlotExpression, ClassDefinition, FieldDefinition, Schema};
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

/// Fields declared for one class through `domain_of`
#[derive(Debug, Default)]
struct Association {
    /// IRI the class name was derived from, when the domain was an IRI
    iri: Option<String>,
    fields: Vec<String>,
}

/// Class name -> its domain association
type Associations = IndexMap<String, Association>;

/// Builds a [`Schema`] for one conversion
pub struct SchemaAssembler<'a> {
    store: &'a RdfStore,
    mappings: &'a MappingTable,
    metamodel: &'a MetamodelDescription,
    config: &'a ImportConfig,
}

impl<'a> SchemaAssembler<'a> {
    pub fn new(
        store: &'a RdfStore,
        mappings: &'a MappingTable,
        metamodel: &'a MetamodelDescription,
        config: &'a ImportConfig,
    ) -> Self {
        Self {
            store,
            mappings,
            metamodel,
            config,
        }
    }

    /// Run every assembly step and return the schema
    pub fn assemble(&self, names: &mut NameResolver, diagnostics: &mut Diagnostics) -> Schema {
        let (name, default_prefix) = self.config.schema_naming();
        let mut schema = Schema::new(name);
        schema.add_defaults();

        self.add_prefixes(&mut schema, default_prefix, diagnostics);

        let discovery = EntityDiscovery::new(self.store, self.mappings);
        let resolver = SubjectAttributeResolver::new(self.store, self.mappings, self.metamodel);

        let associations = self.add_fields(&mut schema, &discovery, &resolver, names, diagnostics);
        self.add_classes(&mut schema, &discovery, &resolver, associations, names, diagnostics);

        if let Some(identifier) = &self.config.identifier {
            add_identifier(&mut schema, identifier);
        }

        info!(
            "Assembled schema {}: {} classes, {} slots",
            schema.name,
            schema.classes.len(),
            schema.fields.len()
        );
        schema
    }

    fn add_prefixes(
        &self,
        schema: &mut Schema,
        default_prefix: Option<String>,
        diagnostics: &mut Diagnostics,
    ) {
        for ns in self.store.namespaces().prefixes() {
            if ns.prefix.is_empty() {
                continue;
            }
            if ns.prefix == "schema" && ns.iri != vocab::SCHEMA_HTTP_NS {
                debug!("Dropping prefix schema: {}", ns.iri);
                diagnostics.push(Diagnostic::DroppedSchemaPrefix { reference: ns.iri });
                continue;
            }
            schema.add_prefix(ns.prefix, ns.iri, true);
        }

        let Some(prefix) = default_prefix else {
            return;
        };
        if let Some(model_uri) = &self.config.model_uri {
            schema.add_prefix(prefix.as_str(), model_uri.as_str(), false);
        }
        match schema.prefix_reference(&prefix) {
            Some(reference) => schema.id = reference.to_string(),
            None => {
                warn!("Default prefix {} is not declared; keeping id {}", prefix, schema.id);
                diagnostics.push(Diagnostic::UndeclaredDefaultPrefix {
                    prefix: prefix.clone(),
                });
            }
        }
        schema.default_prefix = Some(prefix);
    }

    fn add_fields(
        &self,
        schema: &mut Schema,
        discovery: &EntityDiscovery<'_>,
        resolver: &SubjectAttributeResolver<'_>,
        names: &mut NameResolver,
        diagnostics: &mut Diagnostics,
    ) -> Associations {
        let mut associations = Associations::new();
        let fields = discovery.fields();
        info!("Discovered {} slots", fields.len());

        for iri in &fields {
            let field_name = names.resolve(iri.as_str());
            let mut record = resolver.resolve(iri, ElementKind::Field, names, diagnostics);

            if let Some(domains) = record.remove("domain_of") {
                let domain_iris = self.domain_iris(iri);
                for class_name in domains.to_texts() {
                    let domain_iri = domain_iris.get(&class_name).cloned();
                    let association = associations.entry(class_name).or_default();
                    if association.iri.is_none() {
                        association.iri = domain_iri;
                    }
                    if !association.fields.contains(&field_name) {
                        association.fields.push(field_name.clone());
                    }
                }
            }

            let ranges: IndexSet<String> = record
                .remove("range")
                .map(|r| r.to_texts().into_iter().collect())
                .unwrap_or_default();

            let mut field = FieldDefinition::from_record(field_name, record);
            if ranges.len() > 1 {
                field.range = None;
                field.any_of = ranges.into_iter().map(AnonymousSlotExpression::new).collect();
            } else if let Some(range) = ranges.into_iter().next() {
                field.range = Some(range);
            }
            field.slot_uri = Some(self.store.compact(iri.as_str()));

            if schema.add_field(field).is_some() {
                debug!("Slot name collision on {}; last definition kept", iri.as_str());
            }
        }

        associations
    }

    fn add_classes(
        &self,
        schema: &mut Schema,
        discovery: &EntityDiscovery<'_>,
        resolver: &SubjectAttributeResolver<'_>,
        associations: Associations,
        names: &mut NameResolver,
        diagnostics: &mut Diagnostics,
    ) {
        let classes = discovery.classes();
        info!("Discovered {} classes", classes.len());

        for iri in &classes {
            let class_name = names.resolve(iri.as_str());
            let record = resolver.resolve(iri, ElementKind::Class, names, diagnostics);

            let mut class = ClassDefinition::from_record(class_name, record);
            if let Some(association) = associations.get(&class.name) {
                for field in &association.fields {
                    class.add_slot(field.as_str());
                }
            }
            class.class_uri = Some(self.store.compact(iri.as_str()));

            if schema.add_class(class).is_some() {
                debug!("Class name collision on {}; last definition kept", iri.as_str());
            }
        }

        for (class_name, association) in associations {
            if schema.classes.contains_key(&class_name) {
                continue;
            }
            debug!("Adding class {} implied by slot domains", class_name);
            let mut class = ClassDefinition::new(class_name);
            class.class_uri = association.iri.map(|iri| self.store.compact(&iri));
            class.slots = association.fields;
            schema.add_class(class);
        }
    }

    /// Local name -> IRI of every IRI-valued domain of a field
    fn domain_iris(&self, field: &NamedNode) -> IndexMap<String, String> {
        let subject = RdfSubject::NamedNode(field.clone());
        let mut iris = IndexMap::new();
        for triple in self.store.get_triples_with_subject(&subject) {
            let is_domain = self
                .mappings
                .resolve(triple.predicate.as_str())
                .is_some_and(|resolution| resolution.name == "domain_of");
            if !is_domain {
                continue;
            }
            if let Some(class) = triple.object.as_named_node() {
                iris.entry(local_name(class.as_str()).to_string())
                    .or_insert_with(|| class.as_str().to_string());
            }
        }
        iris
    }
}

/// Add an identifier field and attach it once to every root class
fn add_identifier(schema: &mut Schema, identifier: &str) {
    schema.add_field(FieldDefinition::identifier(identifier));
    for class in schema.classes.values_mut() {
        if class.is_root() {
            class.add_slot(identifier);
        }
    }
}
