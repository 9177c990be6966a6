//! RDF document parsing
//!
//! Supports:
//! - Turtle (TTL)
//! - N-Triples (NT)
//! - RDF/XML
//!
//! Parsing is the only fatal step of an import: a document that cannot be
//! read as a graph never reaches the conversion passes.

mod rdfxml;
mod turtle;

use super::namespace::Namespace;
use super::{RdfStore, Triple};
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub use rdfxml::RdfXmlParserWrapper;
pub use turtle::{NTriplesParserWrapper, TurtleParserWrapper};

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    #[default]
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf, .owl)
    RdfXml,
}

impl RdfFormat {
    /// Guess the format from a file extension
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "ttl" | "turtle" => Some(RdfFormat::Turtle),
            "nt" => Some(RdfFormat::NTriples),
            "rdf" | "owl" | "xml" => Some(RdfFormat::RdfXml),
            _ => None,
        }
    }

    /// Canonical name of the format
    pub fn name(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "ntriples",
            RdfFormat::RdfXml => "xml",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RdfFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "turtle" | "ttl" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" => Ok(RdfFormat::NTriples),
            "xml" | "rdfxml" | "rdf/xml" | "pretty-xml" => Ok(RdfFormat::RdfXml),
            other => Err(ParseError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Turtle / N-Triples syntax error
    #[error("Turtle parse error: {0}")]
    Turtle(#[from] rio_turtle::TurtleError),

    /// RDF/XML syntax error
    #[error("RDF/XML parse error: {0}")]
    RdfXml(#[from] rio_xml::RdfXmlError),

    /// A parsed term could not be represented
    #[error("Invalid term: {0}")]
    InvalidTerm(String),

    /// Base IRI is not a valid absolute IRI
    #[error("Invalid base IRI: {0}")]
    InvalidBaseIri(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Triples plus the prefixes a document declared
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    /// Triples in document order
    pub triples: Vec<Triple>,
    /// Prefix declarations, sorted by prefix
    pub prefixes: Vec<Namespace>,
}

impl ParsedDocument {
    /// Load the document into a store carrying the common prefixes plus the
    /// document's own declarations
    pub fn into_store(self) -> RdfStore {
        let mut store = RdfStore::new();
        for ns in self.prefixes {
            store.namespaces_mut().add_prefix(ns.prefix, ns.iri);
        }
        let total = self.triples.len();
        let inserted = store.extend_triples(self.triples);
        if inserted < total {
            debug!("Skipped {} duplicate triples", total - inserted);
        }
        store
    }
}

/// RDF parser
pub struct RdfParser;

impl RdfParser {
    /// Parse RDF data from a string
    pub fn parse(input: &str, format: RdfFormat, base_iri: Option<&str>) -> ParseResult<ParsedDocument> {
        Self::parse_reader(BufReader::new(Cursor::new(input)), format, base_iri)
    }

    /// Parse RDF data from a file
    pub fn parse_file(path: &Path, format: RdfFormat, base_iri: Option<&str>) -> ParseResult<ParsedDocument> {
        let file = File::open(path)?;
        debug!("Parsing {} as {}", path.display(), format);
        Self::parse_reader(BufReader::new(file), format, base_iri)
    }

    /// Parse RDF data from any buffered reader
    pub fn parse_reader(
        reader: impl BufRead,
        format: RdfFormat,
        base_iri: Option<&str>,
    ) -> ParseResult<ParsedDocument> {
        let base = base_iri
            .map(|b| {
                oxiri::Iri::parse(b.to_string()).map_err(|e| ParseError::InvalidBaseIri(e.to_string()))
            })
            .transpose()?;

        let document = match format {
            RdfFormat::Turtle => TurtleParserWrapper::parse(reader, base)?,
            RdfFormat::NTriples => NTriplesParserWrapper::parse(reader)?,
            RdfFormat::RdfXml => RdfXmlParserWrapper::parse(reader, base)?,
        };
        debug!(
            "Parsed {} triples and {} prefixes",
            document.triples.len(),
            document.prefixes.len()
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("turtle".parse::<RdfFormat>().unwrap(), RdfFormat::Turtle);
        assert_eq!("TTL".parse::<RdfFormat>().unwrap(), RdfFormat::Turtle);
        assert_eq!("nt".parse::<RdfFormat>().unwrap(), RdfFormat::NTriples);
        assert_eq!("xml".parse::<RdfFormat>().unwrap(), RdfFormat::RdfXml);
        assert!(matches!(
            "json-ld".parse::<RdfFormat>(),
            Err(ParseError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(
            RdfFormat::from_extension(Path::new("schema.ttl")),
            Some(RdfFormat::Turtle)
        );
        assert_eq!(
            RdfFormat::from_extension(Path::new("onto.OWL")),
            Some(RdfFormat::RdfXml)
        );
        assert_eq!(RdfFormat::from_extension(Path::new("README")), None);
    }

    #[test]
    fn test_default_format_is_turtle() {
        assert_eq!(RdfFormat::default(), RdfFormat::Turtle);
        assert_eq!(RdfFormat::default().to_string(), "turtle");
    }

    #[test]
    fn test_into_store_adds_document_prefixes() {
        let input = r#"
            @prefix ex: <http://example.org/> .
            ex:a ex:b ex:c .
            ex:a ex:b ex:c .
        "#;
        let store = RdfParser::parse(input, RdfFormat::Turtle, None)
            .unwrap()
            .into_store();
        assert_eq!(store.len(), 1);
        assert_eq!(store.namespaces().get_iri("ex").unwrap(), "http://example.org/");
        assert!(store.namespaces().contains_prefix("rdfs"));
    }

    #[test]
    fn test_invalid_base_iri() {
        let result = RdfParser::parse("", RdfFormat::Turtle, Some("not a base"));
        assert!(matches!(result, Err(ParseError::InvalidBaseIri(_))));
    }
}
