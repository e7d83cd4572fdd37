//! Fixed-predicate pair axioms: `s P o` with a role for each end.

use super::family::Family;
use super::{expect_role, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::roles::Role;
use crate::graph::{Graph, Triple};
use crate::model::{AnnotatedAxiom, AxiomKind, SubObject};
use crate::vocab::{owl, rdf, rdfs};

pub(crate) struct Pair {
    kind: AxiomKind,
    predicate: &'static str,
    subject: Role,
    object: Role,
}

impl Pair {
    pub(crate) fn all() -> Vec<Pair> {
        use AxiomKind as K;
        use Role as R;
        let ce = R::ClassExpression;
        let ope = R::ObjectPropertyExpression;
        [
            (K::SubClassOf, rdfs::SUB_CLASS_OF, ce, ce),
            (K::SubObjectPropertyOf, rdfs::SUB_PROPERTY_OF, ope, ope),
            (K::SubDataPropertyOf, rdfs::SUB_PROPERTY_OF, R::DataProperty, R::DataProperty),
            (
                K::SubAnnotationPropertyOf,
                rdfs::SUB_PROPERTY_OF,
                R::AnnotationProperty,
                R::AnnotationProperty,
            ),
            (K::InverseObjectProperties, owl::INVERSE_OF, R::ObjectProperty, R::ObjectProperty),
            (K::ObjectPropertyDomain, rdfs::DOMAIN, ope, ce),
            (K::ObjectPropertyRange, rdfs::RANGE, ope, ce),
            (K::DataPropertyDomain, rdfs::DOMAIN, R::DataProperty, ce),
            (K::DataPropertyRange, rdfs::RANGE, R::DataProperty, R::DataRange),
            (K::AnnotationPropertyDomain, rdfs::DOMAIN, R::AnnotationProperty, R::AnyIri),
            (K::AnnotationPropertyRange, rdfs::RANGE, R::AnnotationProperty, R::AnyIri),
            (K::DatatypeDefinition, owl::EQUIVALENT_CLASS, R::Datatype, R::DataRange),
            (K::ClassAssertion, rdf::TYPE, R::Individual, ce),
        ]
        .into_iter()
        .map(|(kind, predicate, subject, object)| Pair {
            kind,
            predicate,
            subject,
            object,
        })
        .collect()
    }
}

impl Family for Pair {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        with_predicate(graph, self.predicate, None)
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        if triple.predicate.as_str() != self.predicate {
            return Err(format!("predicate is not {}", self.predicate));
        }
        expect_role(graph, &triple.subject, self.subject, config)?;
        expect_role(graph, &triple.object, self.object, config)?;
        if self.kind.is_symmetric()
            && triple.object < triple.subject
            && graph.has(&triple.object, self.predicate, &triple.subject)
        {
            return Err("the reversed triple states the same axiom".into());
        }
        Ok(())
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        Ok(vec![
            factory.resolve(graph, &triple.subject, self.subject, config)?,
            factory.resolve(graph, &triple.object, self.object, config)?,
        ])
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let [subject, object] = components.as_slice() else {
            return Err(write_invariant(self.kind, "expected two components"));
        };
        let subject = render::render_sub(graph, subject);
        let object = render::render_sub(graph, object);
        let triple = Triple::new(subject, self.predicate, object);
        graph.add(triple.clone());
        Ok(vec![triple])
    }
}
