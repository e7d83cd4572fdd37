//! Role casting: can this graph node be viewed as a class, a property, an
//! individual, a list, ...?
//!
//! Casting never mutates the graph. An IRI gets an entity role from the
//! built-in vocabulary or from an explicit `rdf:type` declaration, and loses
//! it again when its declared kinds break the configured punning mode.
//! Anonymous structure (restrictions, inverse properties, data ranges) is
//! recognised from its typing triples.

use std::collections::BTreeSet;

use super::{Graph, Iri, Term};
use crate::config::AxiomsConfig;
use crate::model::EntityKind;
use crate::vocab::{builtins, owl, rdf, rdfs, swrl};

/// A role a node may play inside an axiom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Class,
    /// A named class or an anonymous class expression.
    ClassExpression,
    Datatype,
    /// A named datatype or an anonymous data range.
    DataRange,
    ObjectProperty,
    /// A named object property or an anonymous inverse.
    ObjectPropertyExpression,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
    AnonymousIndividual,
    Individual,
    List,
    Literal,
    SwrlVariable,
    AnyIri,
}

/// A node viewed in a role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedNode {
    pub role: Role,
    pub term: Term,
}

/// Result of a role cast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleCast {
    Typed(TypedNode),
    NotThisRole,
}

impl RoleCast {
    pub fn is_typed(&self) -> bool {
        matches!(self, RoleCast::Typed(_))
    }

    pub fn into_typed(self) -> Option<TypedNode> {
        match self {
            RoleCast::Typed(node) => Some(node),
            RoleCast::NotThisRole => None,
        }
    }
}

/// View `term` in `role`, or report that it cannot play it.
pub fn cast(graph: &Graph, term: &Term, role: Role, config: &AxiomsConfig) -> RoleCast {
    if can_as(graph, term, role, config) {
        RoleCast::Typed(TypedNode {
            role,
            term: term.clone(),
        })
    } else {
        RoleCast::NotThisRole
    }
}

/// Whether `term` can be viewed in `role`.
pub fn can_as(graph: &Graph, term: &Term, role: Role, config: &AxiomsConfig) -> bool {
    match role {
        Role::Class => entity_role(graph, term, EntityKind::Class, config),
        Role::Datatype => entity_role(graph, term, EntityKind::Datatype, config),
        Role::ObjectProperty => entity_role(graph, term, EntityKind::ObjectProperty, config),
        Role::DataProperty => entity_role(graph, term, EntityKind::DataProperty, config),
        Role::AnnotationProperty => {
            entity_role(graph, term, EntityKind::AnnotationProperty, config)
        }
        Role::NamedIndividual => entity_role(graph, term, EntityKind::NamedIndividual, config),
        Role::ClassExpression => match term {
            Term::Iri(_) => entity_role(graph, term, EntityKind::Class, config),
            Term::Blank(_) => has_type(graph, term, owl::CLASS) || has_type(graph, term, owl::RESTRICTION),
            Term::Literal(_) => false,
        },
        Role::DataRange => match term {
            Term::Iri(_) => entity_role(graph, term, EntityKind::Datatype, config),
            Term::Blank(_) => has_type(graph, term, rdfs::DATATYPE),
            Term::Literal(_) => false,
        },
        Role::ObjectPropertyExpression => match term {
            Term::Iri(_) => entity_role(graph, term, EntityKind::ObjectProperty, config),
            Term::Blank(_) => graph
                .object(term, owl::INVERSE_OF)
                .is_some_and(|p| p.is_iri() && entity_role(graph, &p, EntityKind::ObjectProperty, config)),
            Term::Literal(_) => false,
        },
        Role::AnonymousIndividual => term.is_blank() && !is_structural(graph, term),
        Role::Individual => {
            can_as(graph, term, Role::NamedIndividual, config)
                || can_as(graph, term, Role::AnonymousIndividual, config)
        }
        Role::List => is_list_node(graph, term),
        Role::Literal => term.is_literal(),
        Role::SwrlVariable => term.is_iri() && has_type(graph, term, swrl::VARIABLE),
        Role::AnyIri => term.is_iri(),
    }
}

/// Entity kinds explicitly declared for `iri` by `rdf:type` triples.
pub fn declared_kinds(graph: &Graph, iri: &Iri) -> BTreeSet<EntityKind> {
    graph
        .objects(&Term::Iri(iri.clone()), rdf::TYPE)
        .iter()
        .filter_map(|t| t.as_iri())
        .filter_map(|t| EntityKind::from_type_iri(t.as_str()))
        .collect()
}

fn has_type(graph: &Graph, term: &Term, type_iri: &str) -> bool {
    graph.has(term, rdf::TYPE, &Term::iri(type_iri))
}

fn is_builtin_of_kind(iri: &str, kind: EntityKind) -> bool {
    let b = builtins();
    match kind {
        EntityKind::Class => b.is_class(iri),
        EntityKind::Datatype => b.is_datatype(iri),
        EntityKind::ObjectProperty => b.is_object_property(iri),
        EntityKind::DataProperty => b.is_data_property(iri),
        EntityKind::AnnotationProperty => b.is_annotation_property(iri),
        EntityKind::NamedIndividual => false,
    }
}

fn entity_role(graph: &Graph, term: &Term, kind: EntityKind, config: &AxiomsConfig) -> bool {
    let Term::Iri(iri) = term else {
        return false;
    };
    if is_builtin_of_kind(iri.as_str(), kind) {
        return true;
    }
    let b = builtins();
    if b.is_builtin(iri.as_str()) || b.is_reserved(iri.as_str()) {
        return false;
    }

    let mut kinds = declared_kinds(graph, iri);
    let granted = kinds.contains(&kind)
        || (kind == EntityKind::NamedIndividual && typed_by_class(graph, term, config));
    if !granted {
        return false;
    }
    kinds.insert(kind);
    config.punning.allows(&kinds)
}

/// Whether `term` has an `rdf:type` pointing at a class expression.
fn typed_by_class(graph: &Graph, term: &Term, config: &AxiomsConfig) -> bool {
    graph
        .objects(term, rdf::TYPE)
        .iter()
        .any(|t| can_as(graph, t, Role::ClassExpression, config))
}

fn is_list_node(graph: &Graph, term: &Term) -> bool {
    term.is(rdf::NIL) || (term.is_blank() && graph.object(term, rdf::FIRST).is_some())
}

/// Whether a blank node is OWL/RDF structure rather than an anonymous individual.
///
/// Structure is anything typed with reserved vocabulary (`owl:Axiom`,
/// `owl:Restriction`, `swrl:Imp`, ...), list cells, and inverse property
/// nodes.
pub(crate) fn is_structural(graph: &Graph, term: &Term) -> bool {
    let b = builtins();
    graph
        .objects(term, rdf::TYPE)
        .iter()
        .any(|t| t.as_iri().is_some_and(|iri| b.is_reserved(iri.as_str())))
        || graph.object(term, rdf::FIRST).is_some()
        || !graph.objects(term, rdf::REST).is_empty()
        || !graph.objects(term, owl::INVERSE_OF).is_empty()
}
