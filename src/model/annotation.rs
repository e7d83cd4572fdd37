//! Annotations and their subjects and values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::graph::{BlankId, Iri, Literal, Term};

/// What an annotation assertion is about.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnotationSubject {
    Iri(Iri),
    Anonymous(BlankId),
}

impl AnnotationSubject {
    pub fn from_term(term: &Term) -> Option<Self> {
        match term {
            Term::Iri(iri) => Some(Self::Iri(iri.clone())),
            Term::Blank(b) => Some(Self::Anonymous(b.clone())),
            Term::Literal(_) => None,
        }
    }

    pub fn to_term(&self) -> Term {
        match self {
            Self::Iri(iri) => Term::Iri(iri.clone()),
            Self::Anonymous(b) => Term::Blank(b.clone()),
        }
    }
}

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(BlankId),
}

impl AnnotationValue {
    pub fn from_term(term: &Term) -> Self {
        match term {
            Term::Iri(iri) => Self::Iri(iri.clone()),
            Term::Blank(b) => Self::Anonymous(b.clone()),
            Term::Literal(l) => Self::Literal(l.clone()),
        }
    }

    pub fn to_term(&self) -> Term {
        match self {
            Self::Iri(iri) => Term::Iri(iri.clone()),
            Self::Literal(l) => Term::Literal(l.clone()),
            Self::Anonymous(b) => Term::Blank(b.clone()),
        }
    }
}

impl From<Literal> for AnnotationValue {
    fn from(l: Literal) -> Self {
        Self::Literal(l)
    }
}

impl From<Iri> for AnnotationValue {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

/// A property/value pair, itself possibly annotated.
///
/// Nested annotations are a set, so two annotations are equal regardless of
/// the order their sub-annotations were added in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Annotation {
    pub property: Iri,
    pub value: AnnotationValue,
    pub annotations: BTreeSet<Annotation>,
}

impl Annotation {
    pub fn new(property: impl Into<Iri>, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
            annotations: BTreeSet::new(),
        }
    }

    /// Attach a nested annotation.
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }
}

impl std::fmt::Display for Annotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Annotation({} {})", self.property, self.value.to_term())
    }
}
