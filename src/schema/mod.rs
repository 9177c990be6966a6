//! Output schema model and writers
//!
//! - [`Value`] / [`AttributeValue`] / [`AttributeRecord`]: attribute values
//!   resolved from the graph before typing
//! - [`Schema`], [`ClassDefinition`], [`FieldDefinition`]: the typed result
//! - [`writer`]: YAML and JSON rendering

mod builder;
mod model;
mod value;
pub mod writer;

pub use model::{
    AnonymousSlotExpression, ClassDefinition, ElementMetadata, FieldDefinition, Schema,
    DEFAULT_RANGE, DEFAULT_SCHEMA_BASE, LINKML_IRI, LINKML_PREFIX, LINKML_TYPES_IMPORT,
};
pub use value::{AttributeRecord, AttributeValue, Value};
pub use writer::{OutputFormat, WriteError, WriteResult};
