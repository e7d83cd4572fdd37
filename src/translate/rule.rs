//! SWRL rules: a `swrl:Imp` node with `swrl:body` and `swrl:head` atom lists.

use super::family::Family;
use super::{malformed, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::list::read_list;
use crate::graph::{Graph, Term, Triple};
use crate::model::{AnnotatedAxiom, AxiomKind, SubObject};
use crate::vocab::{rdf, swrl};

pub(crate) struct Rule;

impl Rule {
    /// Atom nodes under `predicate`; a missing list is an empty one.
    fn atoms(graph: &Graph, node: &Term, predicate: &str) -> Result<Vec<Term>, String> {
        match graph.objects(node, predicate).as_slice() {
            [] => Ok(Vec::new()),
            [head] => read_list(graph, head).map_err(|e| e.to_string()),
            more => Err(format!("{} values for {predicate}", more.len())),
        }
    }
}

impl Family for Rule {
    fn kind(&self) -> AxiomKind {
        AxiomKind::Rule
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        with_predicate(graph, rdf::TYPE, Some(swrl::IMP))
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, _config: &AxiomsConfig) -> Result<(), String> {
        if triple.predicate.as_str() != rdf::TYPE || !triple.object.is(swrl::IMP) {
            return Err("not a swrl:Imp node".into());
        }
        if triple.subject.is_literal() {
            return Err("rule node cannot be a literal".into());
        }
        let body = Self::atoms(graph, &triple.subject, swrl::BODY)?;
        let head = Self::atoms(graph, &triple.subject, swrl::HEAD)?;
        if body.is_empty() && head.is_empty() {
            return Err("rule has no atoms".into());
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
        [swrl::BODY, swrl::HEAD]
            .into_iter()
            .map(|predicate| {
                let nodes = Self::atoms(graph, &triple.subject, predicate)
                    .map_err(|reason| malformed(AxiomKind::Rule, triple, reason))?;
                let atoms = nodes
                    .iter()
                    .map(|n| factory.swrl_atom(graph, n, config))
                    .collect::<TranslateResult<Vec<_>>>()?;
                Ok(SubObject::Atoms(atoms))
            })
            .collect()
    }

    fn needs_deep_check(&self, _triple: &Triple) -> bool {
        true
    }

    fn allocates(&self, _axiom: &AnnotatedAxiom) -> bool {
        true
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let [body, head] = components.as_slice() else {
            return Err(write_invariant(AxiomKind::Rule, "expected body and head"));
        };
        let body = render::render_sub(graph, body);
        let head = render::render_sub(graph, head);
        let node = graph.fresh_blank();
        let anchor = Triple::new(node.clone(), rdf::TYPE, Term::iri(swrl::IMP));
        graph.add(anchor.clone());
        graph.insert(node.clone(), swrl::BODY, body);
        graph.insert(node, swrl::HEAD, head);
        Ok(vec![anchor])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::GraphObjectFactory;
    use crate::graph::Literal;
    use crate::model::{Axiom, ClassExpression, DArg, IArg, ObjectPropertyExpression, SwrlAtom};
    use crate::translate::AxiomTranslator;

    fn var(name: &str) -> IArg {
        IArg::Variable(format!("urn:swrl#{name}").into())
    }

    fn uncle_rule() -> Axiom {
        Axiom::Rule {
            body: vec![
                SwrlAtom::ObjectProperty {
                    property: ObjectPropertyExpression::named("http://example.org/hasParent"),
                    first: var("x"),
                    second: var("y"),
                },
                SwrlAtom::ObjectProperty {
                    property: ObjectPropertyExpression::named("http://example.org/hasBrother"),
                    first: var("y"),
                    second: var("z"),
                },
                SwrlAtom::BuiltIn {
                    builtin: "http://www.w3.org/2003/11/swrlb#greaterThan".into(),
                    args: vec![
                        DArg::Variable("urn:swrl#age".into()),
                        DArg::Literal(Literal::integer(18)),
                    ],
                },
            ],
            head: vec![SwrlAtom::ObjectProperty {
                property: ObjectPropertyExpression::named("http://example.org/hasUncle"),
                first: var("x"),
                second: var("z"),
            }],
        }
    }

    #[test]
    fn rule_roundtrip_keeps_atom_order() {
        let axiom = AnnotatedAxiom::from(uncle_rule());
        let mut g = Graph::new();
        Rule.write(&axiom, &mut g).unwrap();

        let config = AxiomsConfig::default();
        let found: Vec<_> = Rule.scan(&g, &config).collect();
        assert_eq!(found.len(), 1);
        let object = Rule
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert_eq!(object.axiom().unwrap(), axiom);
    }

    #[test]
    fn missing_head_reads_as_empty() {
        let axiom = AnnotatedAxiom::from(Axiom::Rule {
            body: vec![SwrlAtom::Class {
                class: ClassExpression::class("http://example.org/Dog"),
                arg: var("d"),
            }],
            head: Vec::new(),
        });
        let mut g = Graph::new();
        let written = Rule.write(&axiom, &mut g).unwrap();
        let node = written[0].subject().clone();
        let nil = g.object(&node, swrl::HEAD).unwrap();
        g.remove(&Triple::new(node, swrl::HEAD, nil));

        let config = AxiomsConfig::default();
        let found: Vec<_> = Rule.scan(&g, &config).collect();
        let object = Rule
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert_eq!(object.axiom().unwrap(), axiom);
    }

    #[test]
    fn empty_rule_is_rejected() {
        let mut g = Graph::new();
        g.insert(Term::blank("r"), rdf::TYPE, Term::iri(swrl::IMP));
        assert_eq!(Rule.scan(&g, &AxiomsConfig::default()).count(), 0);
    }
}
