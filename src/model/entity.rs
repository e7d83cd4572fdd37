//! Named OWL2 entities.

use serde::{Deserialize, Serialize};

use crate::graph::Iri;
use crate::vocab::{owl, rdfs};

/// The six OWL2 entity kinds, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Datatype,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityKind {
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Class,
        EntityKind::Datatype,
        EntityKind::ObjectProperty,
        EntityKind::DataProperty,
        EntityKind::AnnotationProperty,
        EntityKind::NamedIndividual,
    ];

    /// The `rdf:type` object that declares an entity of this kind.
    pub fn type_iri(self) -> &'static str {
        match self {
            EntityKind::Class => owl::CLASS,
            EntityKind::Datatype => rdfs::DATATYPE,
            EntityKind::ObjectProperty => owl::OBJECT_PROPERTY,
            EntityKind::DataProperty => owl::DATATYPE_PROPERTY,
            EntityKind::AnnotationProperty => owl::ANNOTATION_PROPERTY,
            EntityKind::NamedIndividual => owl::NAMED_INDIVIDUAL,
        }
    }

    /// Derive the entity kind declared by an `rdf:type` object, if any.
    pub fn from_type_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.type_iri() == iri)
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Class => "Class",
            EntityKind::Datatype => "Datatype",
            EntityKind::ObjectProperty => "ObjectProperty",
            EntityKind::DataProperty => "DataProperty",
            EntityKind::AnnotationProperty => "AnnotationProperty",
            EntityKind::NamedIndividual => "NamedIndividual",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An IRI committed to one entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub iri: Iri,
}

impl Entity {
    pub fn new(kind: EntityKind, iri: impl Into<Iri>) -> Self {
        Self {
            kind,
            iri: iri.into(),
        }
    }

    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::Class, iri)
    }

    pub fn object_property(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::ObjectProperty, iri)
    }

    pub fn data_property(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::DataProperty, iri)
    }

    pub fn annotation_property(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::AnnotationProperty, iri)
    }

    pub fn individual(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::NamedIndividual, iri)
    }

    pub fn datatype(iri: impl Into<Iri>) -> Self {
        Self::new(EntityKind::Datatype, iri)
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.kind, self.iri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_iris_round_trip() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_type_iri(kind.type_iri()), Some(kind));
        }
        assert_eq!(EntityKind::from_type_iri(owl::RESTRICTION), None);
    }

    #[test]
    fn entity_display() {
        let e = Entity::class("http://example.org/Dog");
        assert_eq!(e.to_string(), "Class(<http://example.org/Dog>)");
    }
}
