//! RDF graph support for the import engine
//!
//! This module provides the graph collaborator the importer reads from:
//! - RDF terms and triples (oxrdf-backed)
//! - an insertion-ordered triple store with wildcard pattern queries
//! - namespace prefixes and compact IRI rendering
//! - Turtle, N-Triples and RDF/XML parsing (rio)
//!
//! # Example
//!
//! ```rust
//! use ontoschema::rdf::{RdfFormat, RdfParser, RdfPredicate};
//!
//! let doc = r#"
//!     @prefix ex: <http://example.org/> .
//!     @prefix owl: <http://www.w3.org/2002/07/owl#> .
//!     ex:Person a owl:Class .
//! "#;
//! let store = RdfParser::parse(doc, RdfFormat::Turtle, None).unwrap().into_store();
//!
//! let rdf_type = RdfPredicate::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#type").unwrap();
//! assert_eq!(store.triples_matching(None, Some(&rdf_type), None).len(), 1);
//! assert_eq!(store.compact("http://example.org/Person"), "ex:Person");
//! ```

mod namespace;
mod serialization;
mod store;
mod types;
pub mod vocab;

pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    Triple, TriplePattern,
};

pub use store::{RdfStore, RdfStoreError, RdfStoreResult};

pub use namespace::{local_name, Namespace, NamespaceManager, PrefixError, PrefixResult};

pub use serialization::{
    NTriplesParserWrapper, ParseError, ParseResult, ParsedDocument, RdfFormat, RdfParser,
    RdfXmlParserWrapper, TurtleParserWrapper,
};
