//! RDF/XML parsing

use super::turtle::convert_triple;
use super::{ParseError, ParseResult, ParsedDocument};
use oxiri::Iri;
use rio_api::parser::TriplesParser;
use rio_xml::RdfXmlParser;
use std::io::BufRead;

/// RDF/XML parser
///
/// rio_xml does not surface the document's xmlns declarations, so an RDF/XML
/// import only sees the built-in prefixes.
pub struct RdfXmlParserWrapper;

impl RdfXmlParserWrapper {
    /// Parse an RDF/XML document
    pub fn parse(reader: impl BufRead, base_iri: Option<Iri<String>>) -> ParseResult<ParsedDocument> {
        let mut parser = RdfXmlParser::new(reader, base_iri);
        let mut triples = Vec::new();

        parser.parse_all(&mut |t| -> Result<(), ParseError> {
            triples.push(convert_triple(&t)?);
            Ok(())
        })?;

        Ok(ParsedDocument {
            triples,
            prefixes: Vec::new(),
        })
    }
}
