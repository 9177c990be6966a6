//! Recoverable events recorded during a conversion

use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// A recoverable anomaly. The conversion carries on; the event is logged
/// and returned alongside the schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A predicate on a subject has no metamodel mapping; the triple was skipped
    UnmappedPredicate { subject: String, predicate: String },

    /// A predicate maps to several metamodel names; `chosen` was used
    AmbiguousMapping {
        iri: String,
        candidates: Vec<String>,
        chosen: String,
    },

    /// A legal attribute has no slot description; it was collected as a list
    MissingMetamodelSlot { name: String },

    /// A `schema` prefix bound to something other than http://schema.org/ was not copied
    DroppedSchemaPrefix { reference: String },

    /// The default prefix has no namespace, so the schema id was left at its default
    UndeclaredDefaultPrefix { prefix: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnmappedPredicate { subject, predicate } => {
                write!(f, "no mapping for {} (on {})", predicate, subject)
            }
            Diagnostic::AmbiguousMapping {
                iri,
                candidates,
                chosen,
            } => write!(
                f,
                "{} maps to {}; using {}",
                iri,
                candidates.join(", "),
                chosen
            ),
            Diagnostic::MissingMetamodelSlot { name } => {
                write!(f, "metamodel has no description of slot {}", name)
            }
            Diagnostic::DroppedSchemaPrefix { reference } => {
                write!(f, "dropped prefix schema: {}", reference)
            }
            Diagnostic::UndeclaredDefaultPrefix { prefix } => {
                write!(f, "default prefix {} is not declared", prefix)
            }
        }
    }
}

/// Diagnostics of one conversion, in first-occurrence order.
/// Repeats of an identical event are recorded once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Diagnostics {
    events: IndexSet<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event. Returns false if it was already recorded.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        self.events.insert(diagnostic)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Predicates that had no mapping, each once, in first-occurrence order
    pub fn unmapped_predicates(&self) -> Vec<&str> {
        let predicates: IndexSet<&str> = self
            .events
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnmappedPredicate { predicate, .. } => Some(predicate.as_str()),
                _ => None,
            })
            .collect();
        predicates.into_iter().collect()
    }

    pub fn ambiguous_mappings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.events
            .iter()
            .filter(|d| matches!(d, Diagnostic::AmbiguousMapping { .. }))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = indexmap::set::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unmapped(subject: &str, predicate: &str) -> Diagnostic {
        Diagnostic::UnmappedPredicate {
            subject: subject.to_string(),
            predicate: predicate.to_string(),
        }
    }

    #[test]
    fn test_push_deduplicates() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.push(unmapped("ex:a", "ex:p")));
        assert!(!diagnostics.push(unmapped("ex:a", "ex:p")));
        assert!(diagnostics.push(unmapped("ex:b", "ex:p")));
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_unmapped_predicates() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.push(unmapped("ex:a", "ex:p"));
        diagnostics.push(Diagnostic::MissingMetamodelSlot {
            name: "x".to_string(),
        });
        diagnostics.push(unmapped("ex:b", "ex:p"));
        diagnostics.push(unmapped("ex:b", "ex:q"));

        assert_eq!(diagnostics.unmapped_predicates(), vec!["ex:p", "ex:q"]);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::AmbiguousMapping {
            iri: "rdfs:subClassOf".to_string(),
            candidates: vec!["is_a".to_string(), "subclass_of".to_string()],
            chosen: "is_a".to_string(),
        };
        assert_eq!(d.to_string(), "rdfs:subClassOf maps to is_a, subclass_of; using is_a");
    }

    #[test]
    fn test_serialize_tagged() {
        let d = Diagnostic::UndeclaredDefaultPrefix {
            prefix: "ex".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            serde_json::json!({"kind": "undeclared_default_prefix", "prefix": "ex"})
        );
    }
}
