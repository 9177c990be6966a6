//! Turtle and N-Triples parsing, plus the rio → store term conversions shared
//! with the RDF/XML parser

use super::{ParseError, ParseResult, ParsedDocument};
use crate::rdf::namespace::Namespace;
use crate::rdf::{BlankNode, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple};
use oxiri::Iri;
use rio_api::model;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesParser, TurtleParser};
use std::io::BufRead;

/// Turtle parser
pub struct TurtleParserWrapper;

impl TurtleParserWrapper {
    /// Parse a Turtle document, keeping its prefix declarations
    pub fn parse(reader: impl BufRead, base_iri: Option<Iri<String>>) -> ParseResult<ParsedDocument> {
        let mut parser = TurtleParser::new(reader, base_iri);
        let mut triples = Vec::new();

        parser.parse_all(&mut |t| -> Result<(), ParseError> {
            triples.push(convert_triple(&t)?);
            Ok(())
        })?;

        let mut prefixes: Vec<Namespace> = parser
            .prefixes()
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect();
        prefixes.sort_by(|a, b| a.prefix.cmp(&b.prefix));

        Ok(ParsedDocument { triples, prefixes })
    }
}

/// N-Triples parser
pub struct NTriplesParserWrapper;

impl NTriplesParserWrapper {
    /// Parse an N-Triples document (which has no prefixes)
    pub fn parse(reader: impl BufRead) -> ParseResult<ParsedDocument> {
        let mut parser = NTriplesParser::new(reader);
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

pub(super) fn convert_triple(t: &model::Triple<'_>) -> ParseResult<Triple> {
    Ok(Triple::new(
        convert_subject(t.subject)?,
        convert_predicate(t.predicate)?,
        convert_object(t.object)?,
    ))
}

fn invalid(e: impl std::fmt::Display) -> ParseError {
    ParseError::InvalidTerm(e.to_string())
}

fn convert_subject(s: model::Subject<'_>) -> ParseResult<RdfSubject> {
    match s {
        model::Subject::NamedNode(n) => Ok(RdfSubject::NamedNode(NamedNode::new(n.iri).map_err(invalid)?)),
        model::Subject::BlankNode(b) => Ok(RdfSubject::BlankNode(BlankNode::with_id(b.id).map_err(invalid)?)),
        #[allow(unreachable_patterns)]
        _ => Err(ParseError::InvalidTerm("RDF-star subjects are not supported".to_string())),
    }
}

fn convert_predicate(p: model::NamedNode<'_>) -> ParseResult<RdfPredicate> {
    RdfPredicate::new(p.iri).map_err(invalid)
}

fn convert_object(o: model::Term<'_>) -> ParseResult<RdfObject> {
    match o {
        model::Term::NamedNode(n) => Ok(RdfObject::NamedNode(NamedNode::new(n.iri).map_err(invalid)?)),
        model::Term::BlankNode(b) => Ok(RdfObject::BlankNode(BlankNode::with_id(b.id).map_err(invalid)?)),
        model::Term::Literal(l) => match l {
            model::Literal::Simple { value } => Ok(RdfObject::Literal(Literal::new_simple_literal(value))),
            model::Literal::LanguageTaggedString { value, language } => Ok(RdfObject::Literal(
                Literal::new_language_tagged_literal(value, language).map_err(invalid)?,
            )),
            model::Literal::Typed { value, datatype } => {
                let dt = NamedNode::new(datatype.iri).map_err(invalid)?;
                Ok(RdfObject::Literal(Literal::new_typed_literal(value, dt)))
            }
        },
        #[allow(unreachable_patterns)]
        _ => Err(ParseError::InvalidTerm("RDF-star objects are not supported".to_string())),
    }
}
