//! Import engine entry point

use super::assembler::SchemaAssembler;
use super::config::ImportConfig;
use super::diagnostics::Diagnostics;
use super::error::ImportResult;
use super::mapping::{MappingTable, MetamodelMappings};
use super::names::NameResolver;
use crate::metamodel::MetamodelDescription;
use crate::rdf::{RdfParser, RdfStore};
use crate::schema::Schema;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Result of one conversion
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub schema: Schema,
    pub diagnostics: Diagnostics,
}

/// Converts RDFS/OWL/SKOS ontologies into schemas.
///
/// The engine owns the metamodel description, the mapping table built from
/// it, and a name registry shared by every conversion it runs.
#[derive(Debug, Clone)]
pub struct ImportEngine {
    metamodel: MetamodelDescription,
    mappings: MappingTable,
    names: NameResolver,
}

impl ImportEngine {
    /// Create an engine for a metamodel, applying caller mapping overrides
    pub fn new(metamodel: MetamodelDescription, overrides: &MetamodelMappings) -> Self {
        let mappings = MappingTable::build(overrides, &metamodel);
        Self {
            metamodel,
            mappings,
            names: NameResolver::new(),
        }
    }

    /// Create an engine for the embedded metamodel, without overrides
    pub fn with_builtin_metamodel() -> ImportResult<Self> {
        let metamodel = MetamodelDescription::builtin()?;
        Ok(Self::new(metamodel, &MetamodelMappings::new()))
    }

    /// Parse a document file and convert it
    pub fn convert_file(&mut self, path: &Path, config: &ImportConfig) -> ImportResult<Conversion> {
        info!("Importing {} ({})", path.display(), config.format);
        let document = RdfParser::parse_file(path, config.format, config.base_iri.as_deref())?;
        Ok(self.convert_store(&document.into_store(), config))
    }

    /// Parse a document held in memory and convert it
    pub fn convert_str(&mut self, input: &str, config: &ImportConfig) -> ImportResult<Conversion> {
        let document = RdfParser::parse(input, config.format, config.base_iri.as_deref())?;
        Ok(self.convert_store(&document.into_store(), config))
    }

    /// Convert an already loaded graph
    pub fn convert_store(&mut self, store: &RdfStore, config: &ImportConfig) -> Conversion {
        let mut diagnostics = Diagnostics::new();
        let schema = SchemaAssembler::new(store, &self.mappings, &self.metamodel, config)
            .assemble(&mut self.names, &mut diagnostics);
        if !diagnostics.is_empty() {
            info!("{} diagnostics recorded", diagnostics.len());
        }
        Conversion {
            schema,
            diagnostics,
        }
    }

    pub fn mappings(&self) -> &MappingTable {
        &self.mappings
    }

    pub fn metamodel(&self) -> &MetamodelDescription {
        &self.metamodel
    }

    /// Name → IRI registry accumulated over all conversions
    pub fn names(&self) -> &NameResolver {
        &self.names
    }
}
