//! Import errors

use crate::metamodel::MetamodelError;
use crate::rdf::ParseError;
use thiserror::Error;

/// Fatal import errors. Everything recoverable is reported as a
/// [`Diagnostic`](super::Diagnostic) instead.
#[derive(Error, Debug)]
pub enum ImportError {
    /// The input document could not be parsed
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The metamodel description could not be loaded
    #[error("Metamodel error: {0}")]
    Metamodel(#[from] MetamodelError),

    /// A mapping override file is malformed
    #[error("Mapping file error: {0}")]
    Mappings(#[from] serde_yaml::Error),
}

pub type ImportResult<T> = Result<T, ImportError>;
