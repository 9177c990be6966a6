//! RDFS / OWL / SKOS → schema import
//!
//! The engine reads a graph and produces a [`Schema`](crate::schema::Schema):
//!
//! - [`MappingTable`]: vocabulary IRIs ↔ metamodel names
//! - [`EntityDiscovery`]: which subjects become fields and classes
//! - [`SubjectAttributeResolver`]: one subject's triples → attribute record
//! - [`NameResolver`]: IRI → local name, with a name registry
//! - [`SchemaAssembler`]: runs the passes and builds the schema
//!
//! [`ImportEngine`] ties them together. Parsing failures are the only
//! errors; everything else is recorded in [`Diagnostics`].

mod assembler;
mod config;
mod diagnostics;
mod discovery;
mod engine;
mod error;
mod mapping;
mod names;
mod resolver;

pub use assembler::SchemaAssembler;
pub use config::{ImportConfig, DEFAULT_SCHEMA_NAME};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use discovery::EntityDiscovery;
pub use engine::{Conversion, ImportEngine};
pub use error::{ImportError, ImportResult};
pub use mapping::{
    MappingResolution, MappingTable, MappingTargets, MetamodelMappings, DEFAULT_MAPPINGS,
};
pub use names::{local_name, NameResolver};
pub use resolver::{literal_value, SubjectAttributeResolver};
