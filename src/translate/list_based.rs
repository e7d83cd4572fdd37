//! Axioms whose object is an RDF list: `s P (m1 .. mn)`.

use super::family::Family;
use super::{expect_role, render, with_predicate, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::list::{read_list, write_list};
use crate::graph::roles::{Role, can_as};
use crate::graph::{Graph, Term, Triple};
use crate::model::{AnnotatedAxiom, AxiomKind, SubObject};
use crate::vocab::owl;

pub(crate) struct ListBased {
    kind: AxiomKind,
    predicate: &'static str,
    subject: Role,
    min: usize,
}

impl ListBased {
    pub(crate) fn all() -> Vec<ListBased> {
        vec![
            ListBased {
                kind: AxiomKind::HasKey,
                predicate: owl::HAS_KEY,
                subject: Role::ClassExpression,
                min: 1,
            },
            ListBased {
                kind: AxiomKind::DisjointUnion,
                predicate: owl::DISJOINT_UNION_OF,
                subject: Role::Class,
                min: 2,
            },
            ListBased {
                kind: AxiomKind::SubPropertyChainOf,
                predicate: owl::PROPERTY_CHAIN_AXIOM,
                subject: Role::ObjectPropertyExpression,
                min: 2,
            },
        ]
    }

    /// The role a list member plays. Key members may be either property kind.
    fn member_role(&self, graph: &Graph, member: &Term, config: &AxiomsConfig) -> Role {
        match self.kind {
            AxiomKind::DisjointUnion => Role::ClassExpression,
            AxiomKind::HasKey
                if !can_as(graph, member, Role::ObjectPropertyExpression, config)
                    && can_as(graph, member, Role::DataProperty, config) =>
            {
                Role::DataProperty
            }
            _ => Role::ObjectPropertyExpression,
        }
    }
}

impl Family for ListBased {
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
        let members = read_list(graph, &triple.object).map_err(|e| e.to_string())?;
        if members.len() < self.min {
            return Err(format!(
                "list has {} members, needs at least {}",
                members.len(),
                self.min
            ));
        }
        members
            .iter()
            .try_for_each(|m| expect_role(graph, m, self.member_role(graph, m, config), config))
    }

    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>> {
        let head = factory.resolve(graph, &triple.subject, self.subject, config)?;
        let mut members = read_list(graph, &triple.object)?
            .iter()
            .map(|m| factory.resolve(graph, m, self.member_role(graph, m, config), config))
            .collect::<TranslateResult<Vec<_>>>()?;
        if self.kind == AxiomKind::HasKey {
            // Object properties precede data properties.
            members.sort_by_key(|m| matches!(m, SubObject::DataProperty(_)));
        }
        Ok(std::iter::once(head).chain(members).collect())
    }

    fn needs_deep_check(&self, _triple: &Triple) -> bool {
        true
    }

    fn allocates(&self, _axiom: &AnnotatedAxiom) -> bool {
        true
    }

    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>> {
        let components = axiom.axiom.components();
        let Some((head, members)) = components.split_first() else {
            return Err(write_invariant(self.kind, "no components"));
        };
        let subject = render::render_sub(graph, head);
        let members: Vec<Term> = members.iter().map(|m| render::render_sub(graph, m)).collect();
        let list = write_list(graph, members);
        let triple = Triple::new(subject, self.predicate, list);
        graph.add(triple.clone());
        Ok(vec![triple])
    }
}
