//! Negative property assertions, reified on an `owl:NegativePropertyAssertion`
//! node with `owl:sourceIndividual`, `owl:assertionProperty` and a target.

use super::family::Family;
use super::{expect_role, malformed, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::roles::Role;
use crate::graph::{Graph, Term, Triple};
use crate::model::{AnnotatedAxiom, AxiomKind, SubObject};
use crate::vocab::{owl, rdf};

pub(crate) struct Negative {
    kind: AxiomKind,
    target: &'static str,
    property: Role,
    value: Role,
}

impl Negative {
    pub(crate) fn all() -> Vec<Negative> {
        vec![
            Negative {
                kind: AxiomKind::NegativeObjectPropertyAssertion,
                target: owl::TARGET_INDIVIDUAL,
                property: Role::ObjectPropertyExpression,
                value: Role::Individual,
            },
            Negative {
                kind: AxiomKind::NegativeDataPropertyAssertion,
                target: owl::TARGET_VALUE,
                property: Role::DataProperty,
                value: Role::Literal,
            },
        ]
    }

    /// Source, property and target of the node, each required exactly once.
    fn parts(&self, graph: &Graph, node: &Term) -> Result<[Term; 3], String> {
        let one = |predicate: &str| {
            graph
                .object(node, predicate)
                .ok_or_else(|| format!("needs exactly one {predicate}"))
        };
        Ok([
            one(owl::SOURCE_INDIVIDUAL)?,
            one(owl::ASSERTION_PROPERTY)?,
            one(self.target)?,
        ])
    }
}

impl Family for Negative {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        with_predicate(graph, rdf::TYPE, Some(owl::NEGATIVE_PROPERTY_ASSERTION))
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        if triple.predicate.as_str() != rdf::TYPE || !triple.object.is(owl::NEGATIVE_PROPERTY_ASSERTION) {
            return Err("not a negative property assertion node".into());
        }
        if triple.subject.is_literal() {
            return Err("assertion node cannot be a literal".into());
        }
        let [source, property, target] = self.parts(graph, &triple.subject)?;
        expect_role(graph, &source, Role::Individual, config)?;
        expect_role(graph, &property, self.property, config)?;
        expect_role(graph, &target, self.value, config)
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        let [source, property, target] = self
            .parts(graph, &triple.subject)
            .map_err(|reason| malformed(self.kind, triple, reason))?;
        Ok(vec![
            factory.resolve(graph, &source, Role::Individual, config)?,
            factory.resolve(graph, &property, self.property, config)?,
            factory.resolve(graph, &target, self.value, config)?,
        ])
    }

    fn allocates(&self, _axiom: &AnnotatedAxiom) -> bool {
        true
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let [source, property, target] = components.as_slice() else {
            return Err(write_invariant(self.kind, "expected source, property and target"));
        };
        let source = render::render_sub(graph, source);
        let property = render::render_sub(graph, property);
        let target = render::render_sub(graph, target);

        let node = graph.fresh_blank();
        let anchor = Triple::new(node.clone(), rdf::TYPE, Term::iri(owl::NEGATIVE_PROPERTY_ASSERTION));
        graph.add(anchor.clone());
        graph.insert(node.clone(), owl::SOURCE_INDIVIDUAL, source);
        graph.insert(node.clone(), owl::ASSERTION_PROPERTY, property);
        graph.insert(node, self.target, target);
        Ok(vec![anchor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::GraphObjectFactory;
    use crate::graph::Literal;
    use crate::model::{Annotation, Axiom, Individual, ObjectPropertyExpression};
    use crate::translate::AxiomTranslator;
    use crate::vocab::rdfs;

    fn negative(kind: AxiomKind) -> Negative {
        Negative::all().into_iter().find(|n| n.kind == kind).unwrap()
    }

    #[test]
    fn negative_object_assertion_roundtrip() {
        let axiom = AnnotatedAxiom::new(
            Axiom::NegativeObjectPropertyAssertion {
                property: ObjectPropertyExpression::named("http://example.org/owns"),
                subject: Individual::named("http://example.org/alice"),
                object: Individual::named("http://example.org/rex"),
            },
            [Annotation::new(rdfs::COMMENT, Literal::string("checked"))],
        );
        let translator = negative(AxiomKind::NegativeObjectPropertyAssertion);
        let mut g = Graph::new();
        let written = translator.write(&axiom, &mut g).unwrap();
        let node = written[0].subject().clone();
        assert!(g.has(&node, rdfs::COMMENT, &Term::Literal(Literal::string("checked"))));

        let config = AxiomsConfig::default();
        let found: Vec<_> = translator.scan(&g, &config).collect();
        assert_eq!(found.len(), 1);
        let object = translator
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert_eq!(object.axiom().unwrap(), axiom);

        let other = negative(AxiomKind::NegativeDataPropertyAssertion);
        assert_eq!(other.scan(&g, &config).count(), 0);
    }

    #[test]
    fn data_target_must_be_a_literal() {
        let axiom = AnnotatedAxiom::from(Axiom::NegativeDataPropertyAssertion {
            property: "http://example.org/age".into(),
            subject: Individual::named("http://example.org/rex"),
            value: Literal::integer(7),
        });
        let translator = negative(AxiomKind::NegativeDataPropertyAssertion);
        let mut g = Graph::new();
        translator.write(&axiom, &mut g).unwrap();
        let config = AxiomsConfig::default();
        assert_eq!(translator.scan(&g, &config).count(), 1);

        let node = g
            .subjects(owl::TARGET_VALUE, &Term::Literal(Literal::integer(7)))
            .pop()
            .unwrap();
        g.insert(node, owl::TARGET_VALUE, Literal::integer(8));
        assert_eq!(translator.scan(&g, &config).count(), 0);
    }
}
