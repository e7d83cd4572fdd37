//! Property assertions: the triple's predicate is the asserted property.

use super::family::Family;
use super::{expect_role, render, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::roles::{Role, can_as, is_structural};
use crate::graph::{Graph, Term, Triple};
use crate::model::{AnnotatedAxiom, AnnotationSubject, AxiomKind, SubObject};
use crate::vocab::{owl, rdf};

pub(crate) struct Assertion {
    kind: AxiomKind,
    property: Role,
}

impl Assertion {
    pub(crate) fn all() -> Vec<Assertion> {
        [
            (AxiomKind::ObjectPropertyAssertion, Role::ObjectProperty),
            (AxiomKind::DataPropertyAssertion, Role::DataProperty),
            (AxiomKind::AnnotationAssertion, Role::AnnotationProperty),
        ]
        .into_iter()
        .map(|(kind, property)| Assertion { kind, property })
        .collect()
    }

    fn check_subject(&self, graph: &Graph, subject: &Term, config: &AxiomsConfig) -> Result<(), String> {
        if self.kind != AxiomKind::AnnotationAssertion {
            return expect_role(graph, subject, Role::Individual, config);
        }
        match subject {
            Term::Literal(_) => Err("annotation subject cannot be a literal".into()),
            Term::Blank(_) if is_structural(graph, subject) => {
                Err(format!("{subject} is OWL structure, not an annotation subject"))
            }
            _ if graph.has(subject, rdf::TYPE, &Term::iri(owl::ONTOLOGY)) => {
                Err(format!("{subject} is an ontology header"))
            }
            _ => Ok(()),
        }
    }
}

impl Family for Assertion {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        Box::new(
            graph
                .predicates()
                .into_iter()
                .filter(move |p| can_as(graph, &Term::Iri(p.clone()), self.property, config))
                .flat_map(move |p| graph.find(None, Some(&p), None)),
        )
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        expect_role(graph, &Term::Iri(triple.predicate.clone()), self.property, config)?;
        self.check_subject(graph, &triple.subject, config)?;
        match self.kind {
            AxiomKind::ObjectPropertyAssertion => {
                expect_role(graph, &triple.object, Role::Individual, config)
            }
            AxiomKind::DataPropertyAssertion => {
                expect_role(graph, &triple.object, Role::Literal, config)
            }
            _ => Ok(()),
        }
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        let property = factory.resolve(graph, &Term::Iri(triple.predicate.clone()), self.property, config)?;
        Ok(match self.kind {
            AxiomKind::AnnotationAssertion => {
                let subject = AnnotationSubject::from_term(&triple.subject)
                    .ok_or_else(|| crate::factory::mismatch(&triple.subject, Role::AnyIri))?;
                vec![
                    SubObject::AnnotationSubject(subject),
                    property,
                    SubObject::AnnotationValue(factory.annotation_value(&triple.object)),
                ]
            }
            AxiomKind::DataPropertyAssertion => vec![
                factory.resolve(graph, &triple.subject, Role::Individual, config)?,
                property,
                factory.resolve(graph, &triple.object, Role::Literal, config)?,
            ],
            _ => vec![
                factory.resolve(graph, &triple.subject, Role::Individual, config)?,
                property,
                factory.resolve(graph, &triple.object, Role::Individual, config)?,
            ],
        })
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let [subject, property, object] = components.as_slice() else {
            return Err(write_invariant(self.kind, "expected subject, property and object"));
        };
        let subject = render::render_sub(graph, subject);
        let Term::Iri(property) = render::render_sub(graph, property) else {
            return Err(write_invariant(self.kind, "asserted property must be named"));
        };
        let object = render::render_sub(graph, object);
        let triple = Triple::new(subject, property, object);
        graph.add(triple.clone());
        Ok(vec![triple])
    }
}
