//! RDF triple store implementation
//!
//! An in-memory, read-mostly store with subject and predicate indices.
//! Triples keep their insertion (document) order, which makes every pass
//! over the store deterministic.

use super::namespace::NamespaceManager;
use super::types::{RdfObject, RdfPredicate, RdfSubject, Triple, TriplePattern};
use indexmap::IndexSet;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// RDF store errors
#[derive(Error, Debug)]
pub enum RdfStoreError {
    /// Duplicate triple
    #[error("Duplicate triple: {0}")]
    DuplicateTriple(String),
}

pub type RdfStoreResult<T> = Result<T, RdfStoreError>;

/// RDF triple store with subject and predicate indices
///
/// Implements the graph side of the import engine:
/// - wildcard pattern iteration
/// - declared namespace prefixes
/// - compact rendering of IRIs against those prefixes
#[derive(Debug, Clone)]
pub struct RdfStore {
    /// All triples, in insertion order
    triples: IndexSet<Triple>,

    /// Subject -> positions in `triples`
    subject_index: FxHashMap<RdfSubject, Vec<usize>>,

    /// Predicate IRI -> positions in `triples`
    predicate_index: FxHashMap<String, Vec<usize>>,

    /// Namespace prefixes (built-in + document declarations)
    namespaces: NamespaceManager,
}

impl RdfStore {
    /// Create a new empty RDF store with the common prefixes bound
    pub fn new() -> Self {
        Self::with_namespaces(NamespaceManager::new())
    }

    /// Create a new empty RDF store with the given namespace table
    pub fn with_namespaces(namespaces: NamespaceManager) -> Self {
        Self {
            triples: IndexSet::new(),
            subject_index: FxHashMap::default(),
            predicate_index: FxHashMap::default(),
            namespaces,
        }
    }

    /// Insert a triple into the store
    pub fn insert(&mut self, triple: Triple) -> RdfStoreResult<()> {
        if self.triples.contains(&triple) {
            return Err(RdfStoreError::DuplicateTriple(triple.to_string()));
        }

        let position = self.triples.len();
        self.subject_index
            .entry(triple.subject.clone())
            .or_default()
            .push(position);
        self.predicate_index
            .entry(triple.predicate.as_str().to_string())
            .or_default()
            .push(position);
        self.triples.insert(triple);

        Ok(())
    }

    /// Insert many triples, skipping duplicates. Returns how many were new.
    pub fn extend_triples(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        triples
            .into_iter()
            .filter(|triple| self.insert(triple.clone()).is_ok())
            .count()
    }

    /// Check if a triple exists in the store
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Get the total number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Get an iterator over all triples, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Query triples matching a pattern
    pub fn query(&self, pattern: &TriplePattern) -> Vec<&Triple> {
        self.triples_matching(
            pattern.subject.as_ref(),
            pattern.predicate.as_ref(),
            pattern.object.as_ref(),
        )
    }

    /// Triples matching the given positions; `None` is a wildcard.
    pub fn triples_matching(
        &self,
        subject: Option<&RdfSubject>,
        predicate: Option<&RdfPredicate>,
        object: Option<&RdfObject>,
    ) -> Vec<&Triple> {
        let matches = |triple: &Triple| {
            subject.map_or(true, |s| s == &triple.subject)
                && predicate.map_or(true, |p| p == &triple.predicate)
                && object.map_or(true, |o| o == &triple.object)
        };

        if let Some(s) = subject {
            self.positions(self.subject_index.get(s))
                .filter(|t| matches(*t))
                .collect()
        } else if let Some(p) = predicate {
            self.positions(self.predicate_index.get(p.as_str()))
                .filter(|t| matches(*t))
                .collect()
        } else {
            self.triples.iter().filter(|t| matches(*t)).collect()
        }
    }

    /// Get triples with a specific subject
    pub fn get_triples_with_subject(&self, subject: &RdfSubject) -> Vec<&Triple> {
        self.positions(self.subject_index.get(subject)).collect()
    }

    /// Get triples whose predicate has the given IRI
    pub fn get_triples_with_predicate(&self, predicate_iri: &str) -> Vec<&Triple> {
        self.positions(self.predicate_index.get(predicate_iri)).collect()
    }

    /// Subjects of all `(?s <predicate_iri> <object_iri>)` triples
    pub fn subjects_with(&self, predicate_iri: &str, object_iri: &str) -> Vec<&RdfSubject> {
        self.get_triples_with_predicate(predicate_iri)
            .into_iter()
            .filter(|t| {
                t.object
                    .as_named_node()
                    .is_some_and(|o| o.as_str() == object_iri)
            })
            .map(|t| &t.subject)
            .collect()
    }

    /// Distinct predicate IRIs, in first-use order
    pub fn predicates(&self) -> Vec<&str> {
        self.triples
            .iter()
            .map(|t| t.predicate.as_str())
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Namespace table of this graph
    pub fn namespaces(&self) -> &NamespaceManager {
        &self.namespaces
    }

    /// Mutable namespace table, for document prefix declarations
    pub fn namespaces_mut(&mut self) -> &mut NamespaceManager {
        &mut self.namespaces
    }

    /// Compact form of an IRI against this graph's namespaces
    /// (the full IRI when no namespace matches)
    pub fn compact(&self, iri: &str) -> String {
        self.namespaces.compact_or_full(iri)
    }

    fn positions<'a>(
        &'a self,
        positions: Option<&'a Vec<usize>>,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        positions
            .into_iter()
            .flatten()
            .filter_map(move |&i| self.triples.get_index(i))
    }
}

impl Default for RdfStore {
    fn default() -> Self {
        Self::new()
    }
}
