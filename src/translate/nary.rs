//! N-ary axioms over sets of members.
//!
//! Disjointness and difference have both a pairwise triple form and a
//! reified collection form (`owl:AllDisjointClasses`, `owl:AllDifferent`,
//! `owl:AllDisjointProperties`). Only an unannotated pair is written as a
//! triple. Equivalence and sameness only have the pairwise form: larger sets
//! are written as a chain of pairs over shared member nodes, and on read every
//! chain of pairs carrying the same annotations is one axiom, found from its
//! smallest triple.

use std::collections::{BTreeSet, HashSet};

use super::family::Family;
use super::{annotations, expect_role, malformed, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::list::{collection_members, write_collection};
use crate::graph::roles::{Role, can_as};
use crate::graph::{Graph, Iri, Statement, Term, Triple};
use crate::model::{AnnotatedAxiom, Annotation, AxiomKind, SubObject};
use crate::vocab::{owl, rdf};

fn distinct_pair(
    graph: &Graph,
    triple: &Triple,
    predicate: &str,
    role: Role,
    config: &AxiomsConfig,
) -> Result<(), String> {
    if triple.predicate.as_str() != predicate {
        return Err(format!("predicate is not {predicate}"));
    }
    if triple.subject == triple.object {
        return Err("a member cannot be paired with itself".into());
    }
    expect_role(graph, &triple.subject, role, config)?;
    expect_role(graph, &triple.object, role, config)
}

fn emit_pair(
    kind: AxiomKind,
    predicate: &str,
    members: &[SubObject],
    graph: &mut Graph,
) -> TranslateResult<Triple> {
    let [first, second] = members else {
        return Err(write_invariant(kind, "expected two members"));
    };
    let subject = render::render_sub(graph, first);
    let object = render::render_sub(graph, second);
    let triple = Triple::new(subject, predicate, object);
    graph.add(triple.clone());
    Ok(triple)
}

/// Disjointness or difference: pair triples plus the collection form.
pub(crate) struct Collection {
    kind: AxiomKind,
    predicate: &'static str,
    node_type: &'static str,
    member_predicates: &'static [&'static str],
    role: Role,
}

impl Collection {
    pub(crate) fn all() -> Vec<Collection> {
        const MEMBERS: &[&str] = &[owl::MEMBERS];
        vec![
            Collection {
                kind: AxiomKind::DisjointClasses,
                predicate: owl::DISJOINT_WITH,
                node_type: owl::ALL_DISJOINT_CLASSES,
                member_predicates: MEMBERS,
                role: Role::ClassExpression,
            },
            Collection {
                kind: AxiomKind::DifferentIndividuals,
                predicate: owl::DIFFERENT_FROM,
                node_type: owl::ALL_DIFFERENT,
                member_predicates: &[owl::MEMBERS, owl::DISTINCT_MEMBERS],
                role: Role::Individual,
            },
            Collection {
                kind: AxiomKind::DisjointObjectProperties,
                predicate: owl::PROPERTY_DISJOINT_WITH,
                node_type: owl::ALL_DISJOINT_PROPERTIES,
                member_predicates: MEMBERS,
                role: Role::ObjectPropertyExpression,
            },
            Collection {
                kind: AxiomKind::DisjointDataProperties,
                predicate: owl::PROPERTY_DISJOINT_WITH,
                node_type: owl::ALL_DISJOINT_PROPERTIES,
                member_predicates: MEMBERS,
                role: Role::DataProperty,
            },
        ]
    }

    fn is_collection(&self, triple: &Triple) -> bool {
        triple.predicate.as_str() == rdf::TYPE && triple.object.is(self.node_type)
    }

    fn members(&self, graph: &Graph, node: &Term) -> Result<Vec<Term>, String> {
        collection_members(graph, node, self.member_predicates).map_err(|e| e.to_string())
    }

    /// Two members and no annotations fit a single triple; anything else gets a node.
    fn pair_form(axiom: &AnnotatedAxiom, members: &[SubObject]) -> bool {
        members.len() == 2 && axiom.annotations.is_empty()
    }
}

impl Family for Collection {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        _config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        Box::new(
            with_predicate(graph, self.predicate, None)
                .chain(with_predicate(graph, rdf::TYPE, Some(self.node_type))),
        )
    }

    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Result<(), String> {
        if !self.is_collection(triple) {
            return distinct_pair(graph, triple, self.predicate, self.role, config);
        }
        if !triple.subject.is_blank() {
            return Err("collection node must be anonymous".into());
        }
        let members = self.members(graph, &triple.subject)?;
        if members.len() < 2 {
            return Err(format!("collection has {} members, needs at least 2", members.len()));
        }
        match members.iter().find(|m| !can_as(graph, m, self.role, config)) {
            Some(m) => Err(format!("{m} cannot be read as {:?}", self.role)),
            None => Ok(()),
        }
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        let members = if self.is_collection(triple) {
            self.members(graph, &triple.subject)
                .map_err(|reason| malformed(self.kind, triple, reason))?
        } else {
            vec![triple.subject.clone(), triple.object.clone()]
        };
        members
            .iter()
            .map(|m| factory.resolve(graph, m, self.role, config))
            .collect()
    }

    fn needs_deep_check(&self, triple: &Triple) -> bool {
        self.is_collection(triple) || !triple.subject.is_iri() || triple.object.is_blank()
    }

    fn allocates(&self, axiom: &AnnotatedAxiom) -> bool {
        let components = axiom.axiom.components();
        !Self::pair_form(axiom, &components) || components.iter().any(|c| !c.is_named())
    }

    fn written_form(&self, axiom: &AnnotatedAxiom, triple: &Triple) -> bool {
        self.is_collection(triple) != Self::pair_form(axiom, &axiom.axiom.components())
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let members = axiom.axiom.components();
        if Self::pair_form(axiom, &members) {
            return Ok(vec![emit_pair(self.kind, self.predicate, &members, graph)?]);
        }
        let nodes: Vec<Term> = members.iter().map(|m| render::render_sub(graph, m)).collect();
        let node = write_collection(graph, self.node_type, self.member_predicates[0], nodes);
        Ok(vec![Triple::new(node, rdf::TYPE, Term::iri(self.node_type))])
    }
}

/// Equivalence or sameness: pair triples only.
pub(crate) struct Pairwise {
    kind: AxiomKind,
    predicate: &'static str,
    role: Role,
}

impl Pairwise {
    pub(crate) fn all() -> Vec<Pairwise> {
        [
            (AxiomKind::EquivalentClasses, owl::EQUIVALENT_CLASS, Role::ClassExpression),
            (
                AxiomKind::EquivalentObjectProperties,
                owl::EQUIVALENT_PROPERTY,
                Role::ObjectPropertyExpression,
            ),
            (AxiomKind::EquivalentDataProperties, owl::EQUIVALENT_PROPERTY, Role::DataProperty),
            (AxiomKind::SameIndividual, owl::SAME_AS, Role::Individual),
        ]
        .into_iter()
        .map(|(kind, predicate, role)| Pairwise {
            kind,
            predicate,
            role,
        })
        .collect()
    }

    fn annotations_on(graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> BTreeSet<Annotation> {
        annotations::read_annotations(graph, &Statement::new(triple.clone()), config)
            .unwrap_or_default()
    }

    /// Every pair triple reachable from `triple` through shared members whose
    /// annotations equal those of `triple`, in triple order.
    fn linked(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig) -> Vec<Triple> {
        let predicate = Iri::new(self.predicate);
        let wanted = Self::annotations_on(graph, triple, config);
        let mut found = BTreeSet::from([triple.clone()]);
        let mut visited = HashSet::new();
        let mut frontier = vec![triple.subject.clone(), triple.object.clone()];
        while let Some(node) = frontier.pop() {
            if !visited.insert(node.clone()) {
                continue;
            }
            let touching = graph
                .find(Some(&node), Some(&predicate), None)
                .chain(graph.find(None, Some(&predicate), Some(&node)));
            for t in touching {
                if found.contains(&t)
                    || distinct_pair(graph, &t, self.predicate, self.role, config).is_err()
                    || Self::annotations_on(graph, &t, config) != wanted
                {
                    continue;
                }
                frontier.push(t.subject.clone());
                frontier.push(t.object.clone());
                found.insert(t);
            }
        }
        found.into_iter().collect()
    }
}

impl Family for Pairwise {
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
        distinct_pair(graph, triple, self.predicate, self.role, config)?;
        match self.linked(graph, triple, config).first() {
            Some(first) if first != triple => Err(format!("part of the axiom stated by {first}")),
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
        let members: BTreeSet<Term> = self
            .linked(graph, triple, config)
            .into_iter()
            .flat_map(|t| [t.subject, t.object])
            .collect();
        members
            .iter()
            .map(|m| factory.resolve(graph, m, self.role, config))
            .collect()
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let members = axiom.axiom.components();
        if members.len() < 2 {
            return Err(write_invariant(self.kind, "expected at least two members"));
        }
        let nodes: Vec<Term> = members.iter().map(|m| render::render_sub(graph, m)).collect();
        Ok(nodes
            .windows(2)
            .map(|pair| {
                let triple = Triple::new(pair[0].clone(), self.predicate, pair[1].clone());
                graph.add(triple.clone());
                triple
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::GraphObjectFactory;
    use crate::graph::list::write_list;
    use crate::model::{Axiom, ClassExpression, Individual};
    use crate::translate::AxiomTranslator;
    use crate::vocab::rdfs;

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    fn class(s: &str) -> ClassExpression {
        ClassExpression::class(format!("http://example.org/{s}"))
    }

    fn collection(kind: AxiomKind) -> Collection {
        Collection::all().into_iter().find(|c| c.kind == kind).unwrap()
    }

    fn pairwise(kind: AxiomKind) -> Pairwise {
        Pairwise::all().into_iter().find(|c| c.kind == kind).unwrap()
    }

    #[test]
    fn three_disjoint_classes_use_a_collection() {
        let axiom = AnnotatedAxiom::from(Axiom::DisjointClasses(
            [class("A"), class("B"), class("C")].into_iter().collect(),
        ));
        let translator = collection(AxiomKind::DisjointClasses);
        let mut g = Graph::new();
        let written = translator.write(&axiom, &mut g).unwrap();
        assert_eq!(written.len(), 1);
        assert!(written[0].subject().is_blank());

        let config = AxiomsConfig::default();
        let found: Vec<_> = translator.scan(&g, &config).collect();
        assert_eq!(found.len(), 1);
        let object = translator
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert!(!object.is_simple());
        assert_eq!(object.axiom().unwrap(), axiom);

        let size = g.len();
        translator.write(&axiom, &mut g).unwrap();
        assert_eq!(g.len(), size);
    }

    #[test]
    fn plain_write_does_not_reuse_an_annotated_collection() {
        let members: BTreeSet<_> = [class("A"), class("B"), class("C")].into_iter().collect();
        let annotated = AnnotatedAxiom::new(
            Axiom::DisjointClasses(members.clone()),
            [Annotation::new(rdfs::COMMENT, crate::graph::Literal::string("noted"))],
        );
        let plain = AnnotatedAxiom::from(Axiom::DisjointClasses(members));
        let translator = collection(AxiomKind::DisjointClasses);
        let mut g = Graph::new();
        let first = translator.write(&annotated, &mut g).unwrap();
        let second = translator.write(&plain, &mut g).unwrap();
        assert_ne!(first[0].subject(), second[0].subject());

        let config = AxiomsConfig::default();
        let factory = GraphObjectFactory::new();
        let read: BTreeSet<AnnotatedAxiom> = translator
            .scan(&g, &config)
            .map(|s| translator.to_axiom(&g, &s, &factory, &config).unwrap().axiom().unwrap())
            .collect();
        assert_eq!(read, BTreeSet::from([annotated, plain]));
    }

    #[test]
    fn two_disjoint_classes_use_a_triple() {
        let axiom = AnnotatedAxiom::from(Axiom::DisjointClasses(
            [class("A"), class("B")].into_iter().collect(),
        ));
        let translator = collection(AxiomKind::DisjointClasses);
        let mut g = Graph::new();
        let written = translator.write(&axiom, &mut g).unwrap();
        assert_eq!(written[0].predicate().as_str(), owl::DISJOINT_WITH);

        let config = AxiomsConfig::default();
        let found: Vec<_> = translator.scan(&g, &config).collect();
        let object = translator
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert!(object.is_simple());
    }

    #[test]
    fn single_member_collection_is_rejected() {
        let mut g = Graph::new();
        g.insert(ex("A"), rdf::TYPE, Term::iri(owl::CLASS));
        let list = write_list(&mut g, [ex("A")]);
        let node = Term::blank("all");
        g.insert(node.clone(), rdf::TYPE, Term::iri(owl::ALL_DISJOINT_CLASSES));
        g.insert(node, owl::MEMBERS, list);
        let translator = collection(AxiomKind::DisjointClasses);
        assert_eq!(translator.scan(&g, &AxiomsConfig::default()).count(), 0);
    }

    #[test]
    fn legacy_distinct_members_are_read() {
        let mut g = Graph::new();
        for name in ["a", "b", "c"] {
            g.insert(ex(name), rdf::TYPE, Term::iri(owl::NAMED_INDIVIDUAL));
        }
        let list = write_list(&mut g, [ex("a"), ex("b"), ex("c")]);
        let node = Term::blank("diff");
        g.insert(node.clone(), rdf::TYPE, Term::iri(owl::ALL_DIFFERENT));
        g.insert(node, owl::DISTINCT_MEMBERS, list);

        let translator = collection(AxiomKind::DifferentIndividuals);
        let config = AxiomsConfig::default();
        let found: Vec<_> = translator.scan(&g, &config).collect();
        assert_eq!(found.len(), 1);
        let object = translator
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert_eq!(object.components().len(), 3);
        assert!(
            object
                .components()
                .iter()
                .all(|c| matches!(c, SubObject::Individual(Individual::Named(_))))
        );
    }

    #[test]
    fn reflexive_pairs_are_rejected() {
        let mut g = Graph::new();
        g.insert(ex("A"), rdf::TYPE, Term::iri(owl::CLASS));
        g.insert(ex("A"), owl::EQUIVALENT_CLASS, ex("A"));
        let translator = pairwise(AxiomKind::EquivalentClasses);
        assert_eq!(translator.scan(&g, &AxiomsConfig::default()).count(), 0);
    }

    #[test]
    fn equivalence_chain_reads_back_as_one_axiom() {
        let axiom = AnnotatedAxiom::new(
            Axiom::EquivalentClasses([class("A"), class("B"), class("C")].into_iter().collect()),
            [Annotation::new(rdfs::COMMENT, crate::graph::Literal::string("same"))],
        );
        let translator = pairwise(AxiomKind::EquivalentClasses);
        let mut g = Graph::new();
        let written = translator.write(&axiom, &mut g).unwrap();
        assert_eq!(written.len(), 2);

        let config = AxiomsConfig::default();
        let factory = GraphObjectFactory::new();
        let objects: Vec<_> = translator
            .scan(&g, &config)
            .map(|s| translator.to_axiom(&g, &s, &factory, &config).unwrap())
            .collect();
        assert_eq!(objects.len(), 1);
        assert!(!objects[0].is_simple());
        assert_eq!(objects[0].axiom().unwrap(), axiom);
        assert!(!translator.matches(&g, &Statement::new(written[1].triple.clone()), &config));
    }

    #[test]
    fn differently_annotated_pairs_stay_apart() {
        let translator = pairwise(AxiomKind::EquivalentClasses);
        let mut g = Graph::new();
        let first = AnnotatedAxiom::new(
            Axiom::EquivalentClasses([class("A"), class("B")].into_iter().collect()),
            [Annotation::new(rdfs::COMMENT, crate::graph::Literal::string("one"))],
        );
        let second = AnnotatedAxiom::from(Axiom::EquivalentClasses(
            [class("B"), class("C")].into_iter().collect(),
        ));
        translator.write(&first, &mut g).unwrap();
        translator.write(&second, &mut g).unwrap();

        let config = AxiomsConfig::default();
        let factory = GraphObjectFactory::new();
        let mut read: Vec<AnnotatedAxiom> = translator
            .scan(&g, &config)
            .map(|s| translator.to_axiom(&g, &s, &factory, &config).unwrap().axiom().unwrap())
            .collect();
        read.sort();
        let mut expected = vec![first, second];
        expected.sort();
        assert_eq!(read, expected);
    }

    #[test]
    fn equivalent_members_written_by_hand_in_any_order_merge() {
        let mut g = Graph::new();
        for name in ["A", "B", "C", "D"] {
            g.insert(ex(name), rdf::TYPE, Term::iri(owl::CLASS));
        }
        g.insert(ex("C"), owl::EQUIVALENT_CLASS, ex("B"));
        g.insert(ex("A"), owl::EQUIVALENT_CLASS, ex("D"));
        g.insert(ex("D"), owl::EQUIVALENT_CLASS, ex("C"));

        let translator = pairwise(AxiomKind::EquivalentClasses);
        let config = AxiomsConfig::default();
        let found: Vec<_> = translator.scan(&g, &config).collect();
        assert_eq!(found.len(), 1);
        let object = translator
            .to_axiom(&g, &found[0], &GraphObjectFactory::new(), &config)
            .unwrap();
        assert_eq!(object.components().len(), 4);
    }
}
