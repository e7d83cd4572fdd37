//! Axiom value model.
//!
//! Plain, graph-independent values: entities, class expressions, data ranges,
//! individuals, annotations, SWRL atoms and the [`Axiom`] enum itself. Values
//! are immutable in practice, compare structurally, and order deterministically.
//! Sets inside axioms are `BTreeSet`s so two axioms built from the same members
//! in a different order are equal.

pub mod annotation;
pub mod axiom;
pub mod entity;
pub mod expr;
pub mod swrl;

use serde::{Deserialize, Serialize};

pub use annotation::{Annotation, AnnotationSubject, AnnotationValue};
pub use axiom::{AnnotatedAxiom, Axiom, AxiomKind, Shape};
pub use entity::{Entity, EntityKind};
pub use expr::{Cardinality, ClassExpression, DataRange, Individual, ObjectPropertyExpression};
pub use swrl::{DArg, IArg, SwrlAtom};

use crate::graph::{Iri, Literal};

/// One structural component of an axiom.
///
/// `Axiom::components()` flattens an axiom into these and `Axiom::build()`
/// reassembles them, so the pair doubles as the value builder keyed by kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SubObject {
    Entity(Entity),
    Class(ClassExpression),
    ObjectProperty(ObjectPropertyExpression),
    DataProperty(Iri),
    AnnotationProperty(Iri),
    DataRange(DataRange),
    Individual(Individual),
    Literal(Literal),
    AnnotationSubject(AnnotationSubject),
    AnnotationValue(AnnotationValue),
    Iri(Iri),
    Atoms(Vec<SwrlAtom>),
}

impl SubObject {
    /// Whether this component is a directly named node (or a literal).
    ///
    /// Axioms whose components are all named and carry no annotations can be
    /// represented by their three triple terms alone.
    pub fn is_named(&self) -> bool {
        match self {
            SubObject::Entity(_)
            | SubObject::DataProperty(_)
            | SubObject::AnnotationProperty(_)
            | SubObject::Literal(_)
            | SubObject::Iri(_) => true,
            SubObject::Class(ce) => ce.is_named(),
            SubObject::ObjectProperty(ope) => ope.is_named(),
            SubObject::DataRange(dr) => dr.is_named(),
            SubObject::Individual(i) => i.is_named(),
            SubObject::AnnotationSubject(s) => matches!(s, AnnotationSubject::Iri(_)),
            SubObject::AnnotationValue(v) => !matches!(v, AnnotationValue::Anonymous(_)),
            SubObject::Atoms(_) => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubObject::Entity(_) => "entity",
            SubObject::Class(_) => "class expression",
            SubObject::ObjectProperty(_) => "object property expression",
            SubObject::DataProperty(_) => "data property",
            SubObject::AnnotationProperty(_) => "annotation property",
            SubObject::DataRange(_) => "data range",
            SubObject::Individual(_) => "individual",
            SubObject::Literal(_) => "literal",
            SubObject::AnnotationSubject(_) => "annotation subject",
            SubObject::AnnotationValue(_) => "annotation value",
            SubObject::Iri(_) => "IRI",
            SubObject::Atoms(_) => "atom list",
        }
    }
}
