//! Re-deriving axiom values from a bare triple.
//!
//! A Simple axiom object stores nothing but its triple; every read accessor
//! goes through [`simple_axiom`] to rebuild the value on demand.

use std::collections::BTreeSet;

use crate::graph::Triple;
use crate::model::{
    AnnotationSubject, AnnotationValue, Axiom, AxiomKind, ClassExpression, DataRange, Entity,
    EntityKind, Individual, ObjectPropertyExpression,
};

fn pair<T: Ord>(a: T, b: T) -> BTreeSet<T> {
    [a, b].into_iter().collect()
}

/// The axiom a single named triple encodes for `kind`, if it has a
/// single-triple form at all.
pub(crate) fn simple_axiom(kind: AxiomKind, triple: &Triple) -> Option<Axiom> {
    let s = triple.subject.as_iri()?.clone();
    let p = triple.predicate.clone();
    let o = &triple.object;
    let o_iri = || o.as_iri().cloned();
    let class = ClassExpression::Class;
    let op = ObjectPropertyExpression::Named;

    Some(match kind {
        AxiomKind::Declaration => {
            let entity_kind = EntityKind::from_type_iri(o_iri()?.as_str())?;
            Axiom::Declaration(Entity::new(entity_kind, s))
        }
        AxiomKind::SubClassOf => Axiom::SubClassOf {
            sub: class(s),
            sup: class(o_iri()?),
        },
        AxiomKind::EquivalentClasses => Axiom::EquivalentClasses(pair(class(s), class(o_iri()?))),
        AxiomKind::DisjointClasses => Axiom::DisjointClasses(pair(class(s), class(o_iri()?))),
        AxiomKind::SubObjectPropertyOf => Axiom::SubObjectPropertyOf {
            sub: op(s),
            sup: op(o_iri()?),
        },
        AxiomKind::SubDataPropertyOf => Axiom::SubDataPropertyOf { sub: s, sup: o_iri()? },
        AxiomKind::SubAnnotationPropertyOf => Axiom::SubAnnotationPropertyOf { sub: s, sup: o_iri()? },
        AxiomKind::EquivalentObjectProperties => {
            Axiom::EquivalentObjectProperties(pair(op(s), op(o_iri()?)))
        }
        AxiomKind::DisjointObjectProperties => {
            Axiom::DisjointObjectProperties(pair(op(s), op(o_iri()?)))
        }
        AxiomKind::EquivalentDataProperties => Axiom::EquivalentDataProperties(pair(s, o_iri()?)),
        AxiomKind::DisjointDataProperties => Axiom::DisjointDataProperties(pair(s, o_iri()?)),
        AxiomKind::InverseObjectProperties => {
            Axiom::InverseObjectProperties(s, o_iri()?).normalized()
        }
        AxiomKind::ObjectPropertyDomain => Axiom::ObjectPropertyDomain {
            property: op(s),
            domain: class(o_iri()?),
        },
        AxiomKind::ObjectPropertyRange => Axiom::ObjectPropertyRange {
            property: op(s),
            range: class(o_iri()?),
        },
        AxiomKind::DataPropertyDomain => Axiom::DataPropertyDomain {
            property: s,
            domain: class(o_iri()?),
        },
        AxiomKind::DataPropertyRange => Axiom::DataPropertyRange {
            property: s,
            range: DataRange::Datatype(o_iri()?),
        },
        AxiomKind::AnnotationPropertyDomain => Axiom::AnnotationPropertyDomain {
            property: s,
            domain: o_iri()?,
        },
        AxiomKind::AnnotationPropertyRange => Axiom::AnnotationPropertyRange {
            property: s,
            range: o_iri()?,
        },
        AxiomKind::FunctionalObjectProperty => Axiom::FunctionalObjectProperty(op(s)),
        AxiomKind::InverseFunctionalObjectProperty => Axiom::InverseFunctionalObjectProperty(op(s)),
        AxiomKind::ReflexiveObjectProperty => Axiom::ReflexiveObjectProperty(op(s)),
        AxiomKind::IrreflexiveObjectProperty => Axiom::IrreflexiveObjectProperty(op(s)),
        AxiomKind::SymmetricObjectProperty => Axiom::SymmetricObjectProperty(op(s)),
        AxiomKind::AsymmetricObjectProperty => Axiom::AsymmetricObjectProperty(op(s)),
        AxiomKind::TransitiveObjectProperty => Axiom::TransitiveObjectProperty(op(s)),
        AxiomKind::FunctionalDataProperty => Axiom::FunctionalDataProperty(s),
        AxiomKind::ClassAssertion => Axiom::ClassAssertion {
            class: class(o_iri()?),
            individual: Individual::Named(s),
        },
        AxiomKind::ObjectPropertyAssertion => Axiom::ObjectPropertyAssertion {
            property: p,
            subject: Individual::Named(s),
            object: Individual::Named(o_iri()?),
        },
        AxiomKind::DataPropertyAssertion => Axiom::DataPropertyAssertion {
            property: p,
            subject: Individual::Named(s),
            value: o.as_literal()?.clone(),
        },
        AxiomKind::SameIndividual => {
            Axiom::SameIndividual(pair(Individual::Named(s), Individual::Named(o_iri()?)))
        }
        AxiomKind::DifferentIndividuals => {
            Axiom::DifferentIndividuals(pair(Individual::Named(s), Individual::Named(o_iri()?)))
        }
        AxiomKind::AnnotationAssertion => Axiom::AnnotationAssertion {
            subject: AnnotationSubject::Iri(s),
            property: p,
            value: match o.as_literal() {
                Some(lit) => AnnotationValue::Literal(lit.clone()),
                None => AnnotationValue::Iri(o_iri()?),
            },
        },
        AxiomKind::DatatypeDefinition => Axiom::DatatypeDefinition {
            datatype: s,
            range: DataRange::Datatype(o_iri()?),
        },
        AxiomKind::DisjointUnion
        | AxiomKind::SubPropertyChainOf
        | AxiomKind::HasKey
        | AxiomKind::NegativeObjectPropertyAssertion
        | AxiomKind::NegativeDataPropertyAssertion
        | AxiomKind::Rule => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Literal, Term};
    use crate::vocab::{owl, rdf, rdfs};

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    #[test]
    fn subclass_from_triple() {
        let t = Triple::new(ex("Dog"), rdfs::SUB_CLASS_OF, ex("Mammal"));
        let axiom = simple_axiom(AxiomKind::SubClassOf, &t).unwrap();
        assert_eq!(
            axiom,
            Axiom::SubClassOf {
                sub: ClassExpression::class("http://example.org/Dog"),
                sup: ClassExpression::class("http://example.org/Mammal"),
            }
        );
    }

    #[test]
    fn declaration_kind_comes_from_type() {
        let t = Triple::new(ex("p"), rdf::TYPE, Term::iri(owl::OBJECT_PROPERTY));
        let axiom = simple_axiom(AxiomKind::Declaration, &t).unwrap();
        assert_eq!(axiom, Axiom::Declaration(Entity::object_property("http://example.org/p")));
        let bad = Triple::new(ex("p"), rdf::TYPE, ex("NotAKind"));
        assert!(simple_axiom(AxiomKind::Declaration, &bad).is_none());
    }

    #[test]
    fn blank_subjects_have_no_simple_form() {
        let t = Triple::new(Term::blank("b"), rdfs::SUB_CLASS_OF, ex("A"));
        assert!(simple_axiom(AxiomKind::SubClassOf, &t).is_none());
    }

    #[test]
    fn every_pair_shaped_kind_builds_from_a_triple() {
        let t = Triple::new(ex("a"), owl::SAME_AS, ex("b"));
        assert_eq!(
            simple_axiom(AxiomKind::SameIndividual, &t),
            Some(Axiom::SameIndividual(pair(
                Individual::named("http://example.org/a"),
                Individual::named("http://example.org/b"),
            )))
        );
        let t = Triple::new(ex("p"), owl::EQUIVALENT_PROPERTY, ex("q"));
        assert!(simple_axiom(AxiomKind::EquivalentObjectProperties, &t).is_some());
        assert!(simple_axiom(AxiomKind::EquivalentDataProperties, &t).is_some());
        let t = Triple::new(ex("p"), owl::PROPERTY_DISJOINT_WITH, ex("q"));
        assert!(simple_axiom(AxiomKind::DisjointObjectProperties, &t).is_some());
    }

    #[test]
    fn reversed_inverse_triple_reads_the_same_axiom() {
        let forward = Triple::new(ex("hasChild"), owl::INVERSE_OF, ex("hasParent"));
        let reversed = Triple::new(ex("hasParent"), owl::INVERSE_OF, ex("hasChild"));
        assert_eq!(
            simple_axiom(AxiomKind::InverseObjectProperties, &forward),
            simple_axiom(AxiomKind::InverseObjectProperties, &reversed)
        );
    }

    #[test]
    fn data_assertion_needs_a_literal() {
        let t = Triple::new(ex("rex"), "http://example.org/age", Literal::integer(3));
        assert!(simple_axiom(AxiomKind::DataPropertyAssertion, &t).is_some());
        let t = Triple::new(ex("rex"), "http://example.org/age", ex("three"));
        assert!(simple_axiom(AxiomKind::DataPropertyAssertion, &t).is_none());
    }
}
