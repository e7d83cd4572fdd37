//! Sub-object factory: turns graph nodes into model values.
//!
//! Translators never walk anonymous structure themselves. They ask an
//! [`ObjectFactory`] to resolve a node in a role (class expression, property
//! expression, data range, individual, SWRL atom, ...) and to collect the
//! annotations of a statement.
//!
//! [`GraphObjectFactory`] is the working implementation. It memoises resolved
//! anonymous class expressions and data ranges per graph revision, so a
//! restriction shared by several axioms is parsed once per read pass.

use std::collections::BTreeSet;

use dashmap::DashMap;

use crate::config::{AxiomsConfig, PunningMode};
use crate::error::{TranslateError, TranslateResult};
use crate::graph::list::read_list;
use crate::graph::roles::{Role, can_as};
use crate::graph::{Graph, GraphId, Iri, Literal, Statement, Term};
use crate::model::{
    Annotation, AnnotationValue, Cardinality, ClassExpression, DArg, DataRange,
    IArg, Individual, ObjectPropertyExpression, SubObject, SwrlAtom,
};
use crate::vocab::{owl, rdf, swrl};

/// Deepest nesting of anonymous expressions accepted before giving up.
pub const MAX_DEPTH: usize = 64;

/// Resolves graph nodes into axiom components.
pub trait ObjectFactory: Send + Sync {
    fn class_expression(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<ClassExpression>;

    fn object_property(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<ObjectPropertyExpression>;

    fn data_range(&self, graph: &Graph, node: &Term, config: &AxiomsConfig)
    -> TranslateResult<DataRange>;

    fn individual(&self, graph: &Graph, node: &Term, config: &AxiomsConfig)
    -> TranslateResult<Individual>;

    fn literal(&self, node: &Term) -> TranslateResult<Literal> {
        node.as_literal()
            .cloned()
            .ok_or_else(|| mismatch(node, Role::Literal))
    }

    fn annotation_value(&self, node: &Term) -> AnnotationValue {
        AnnotationValue::from_term(node)
    }

    fn swrl_atom(&self, graph: &Graph, node: &Term, config: &AxiomsConfig)
    -> TranslateResult<SwrlAtom>;

    /// Resolve `node` in `role` as an axiom component.
    fn resolve(
        &self,
        graph: &Graph,
        node: &Term,
        role: Role,
        config: &AxiomsConfig,
    ) -> TranslateResult<SubObject> {
        let named = |role: Role| -> TranslateResult<Iri> {
            match node {
                Term::Iri(iri) if can_as(graph, node, role, config) => Ok(iri.clone()),
                _ => Err(mismatch(node, role)),
            }
        };
        Ok(match role {
            Role::Class | Role::ClassExpression => {
                if role == Role::Class {
                    named(role)?;
                }
                SubObject::Class(self.class_expression(graph, node, config)?)
            }
            Role::Datatype => SubObject::DataRange(DataRange::Datatype(named(role)?)),
            Role::DataRange => SubObject::DataRange(self.data_range(graph, node, config)?),
            Role::ObjectProperty => {
                SubObject::ObjectProperty(ObjectPropertyExpression::Named(named(role)?))
            }
            Role::ObjectPropertyExpression => {
                SubObject::ObjectProperty(self.object_property(graph, node, config)?)
            }
            Role::DataProperty => SubObject::DataProperty(named(role)?),
            Role::AnnotationProperty => SubObject::AnnotationProperty(named(role)?),
            Role::NamedIndividual | Role::AnonymousIndividual | Role::Individual => {
                if !can_as(graph, node, role, config) {
                    return Err(mismatch(node, role));
                }
                SubObject::Individual(self.individual(graph, node, config)?)
            }
            Role::Literal => SubObject::Literal(self.literal(node)?),
            Role::AnyIri | Role::SwrlVariable => SubObject::Iri(named(role)?),
            Role::List => {
                return Err(TranslateError::Unsupported {
                    node: node.to_string(),
                    construct: "RDF list as an axiom component".into(),
                });
            }
        })
    }

    /// Annotations attached to `statement`.
    fn annotations_of(
        &self,
        graph: &Graph,
        statement: &Statement,
        config: &AxiomsConfig,
    ) -> TranslateResult<BTreeSet<Annotation>> {
        crate::translate::annotations::read_annotations(graph, statement, config)
    }
}

pub(crate) fn mismatch(node: &Term, role: Role) -> TranslateError {
    TranslateError::RoleMismatch {
        node: node.to_string(),
        role: format!("{role:?}"),
    }
}

fn unsupported(node: &Term, construct: impl Into<String>) -> TranslateError {
    TranslateError::Unsupported {
        node: node.to_string(),
        construct: construct.into(),
    }
}

/// Entries are per graph and per punning mode, since role checks depend on it.
type CacheKey = (GraphId, PunningMode, Term);

/// Caching factory reading directly from a [`Graph`].
///
/// Cache entries are tagged with the graph revision they were computed at;
/// an entry from an older revision is treated as a miss and overwritten.
#[derive(Debug, Default)]
pub struct GraphObjectFactory {
    classes: DashMap<CacheKey, (u64, ClassExpression)>,
    ranges: DashMap<CacheKey, (u64, DataRange)>,
}

impl GraphObjectFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of memoised anonymous expressions.
    pub fn cached(&self) -> usize {
        self.classes.len() + self.ranges.len()
    }

    pub fn clear(&self) {
        self.classes.clear();
        self.ranges.clear();
    }

    fn class_at(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
        depth: usize,
    ) -> TranslateResult<ClassExpression> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::Class, config) => {
                Ok(ClassExpression::Class(iri.clone()))
            }
            Term::Blank(_) if can_as(graph, node, Role::ClassExpression, config) => {
                if depth > MAX_DEPTH {
                    return Err(unsupported(node, format!("nesting deeper than {MAX_DEPTH}")));
                }
                let key = (graph.id(), config.punning, node.clone());
                if let Some(hit) = self.classes.get(&key) {
                    let (revision, ce) = hit.value();
                    if *revision == graph.revision() {
                        return Ok(ce.clone());
                    }
                }
                let ce = self.parse_class(graph, node, config, depth)?;
                self.classes.insert(key, (graph.revision(), ce.clone()));
                Ok(ce)
            }
            _ => Err(mismatch(node, Role::ClassExpression)),
        }
    }

    fn parse_class(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
        depth: usize,
    ) -> TranslateResult<ClassExpression> {
        let next = depth + 1;
        let classes = |head: Term| -> TranslateResult<BTreeSet<ClassExpression>> {
            read_list(graph, &head)?
                .iter()
                .map(|m| self.class_at(graph, m, config, next))
                .collect()
        };

        if let Some(head) = graph.object(node, owl::INTERSECTION_OF) {
            return Ok(ClassExpression::IntersectionOf(classes(head)?));
        }
        if let Some(head) = graph.object(node, owl::UNION_OF) {
            return Ok(ClassExpression::UnionOf(classes(head)?));
        }
        if let Some(inner) = graph.object(node, owl::COMPLEMENT_OF) {
            let inner = self.class_at(graph, &inner, config, next)?;
            return Ok(ClassExpression::ComplementOf(Box::new(inner)));
        }
        if let Some(head) = graph.object(node, owl::ONE_OF) {
            let members = read_list(graph, &head)?
                .iter()
                .map(|m| self.individual(graph, m, config))
                .collect::<TranslateResult<_>>()?;
            return Ok(ClassExpression::OneOf(members));
        }
        if let Some(property) = graph.object(node, owl::ON_PROPERTY) {
            return self.parse_restriction(graph, node, &property, config, next);
        }
        Err(unsupported(node, "class expression without a recognised constructor"))
    }

    fn parse_restriction(
        &self,
        graph: &Graph,
        node: &Term,
        property: &Term,
        config: &AxiomsConfig,
        depth: usize,
    ) -> TranslateResult<ClassExpression> {
        let some = graph.object(node, owl::SOME_VALUES_FROM);
        let all = graph.object(node, owl::ALL_VALUES_FROM);
        let value = graph.object(node, owl::HAS_VALUE);

        if is_data_restriction(graph, node, property, config) {
            let Term::Iri(property) = property else {
                return Err(mismatch(property, Role::DataProperty));
            };
            let property = property.clone();
            if let Some(range) = some {
                let range = self.range_at(graph, &range, config, depth)?;
                return Ok(ClassExpression::DataSomeValuesFrom { property, range });
            }
            if let Some(range) = all {
                let range = self.range_at(graph, &range, config, depth)?;
                return Ok(ClassExpression::DataAllValuesFrom { property, range });
            }
            if let Some(value) = value {
                let value = self.literal(&value)?;
                return Ok(ClassExpression::DataHasValue { property, value });
            }
            let (kind, n, qualified) = cardinality(graph, node)?;
            let range = match (qualified, graph.object(node, owl::ON_DATA_RANGE)) {
                (true, Some(range)) => Some(self.range_at(graph, &range, config, depth)?),
                (true, None) => {
                    return Err(unsupported(node, "qualified cardinality without owl:onDataRange"));
                }
                (false, _) => None,
            };
            return Ok(ClassExpression::DataCardinality {
                kind,
                n,
                property,
                range,
            });
        }

        let property = self.object_property(graph, property, config)?;
        if let Some(filler) = some {
            let filler = self.class_at(graph, &filler, config, depth)?;
            return Ok(ClassExpression::some(property, filler));
        }
        if let Some(filler) = all {
            let filler = self.class_at(graph, &filler, config, depth)?;
            return Ok(ClassExpression::all(property, filler));
        }
        if let Some(value) = value {
            let value = self.individual(graph, &value, config)?;
            return Ok(ClassExpression::HasValue { property, value });
        }
        if graph.object(node, owl::HAS_SELF).is_some() {
            return Ok(ClassExpression::HasSelf(property));
        }
        let (kind, n, qualified) = cardinality(graph, node)?;
        let filler = match (qualified, graph.object(node, owl::ON_CLASS)) {
            (true, Some(filler)) => Some(Box::new(self.class_at(graph, &filler, config, depth)?)),
            (true, None) => {
                return Err(unsupported(node, "qualified cardinality without owl:onClass"));
            }
            (false, _) => None,
        };
        Ok(ClassExpression::ObjectCardinality {
            kind,
            n,
            property,
            filler,
        })
    }

    fn range_at(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
        depth: usize,
    ) -> TranslateResult<DataRange> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::Datatype, config) => {
                Ok(DataRange::Datatype(iri.clone()))
            }
            Term::Blank(_) if can_as(graph, node, Role::DataRange, config) => {
                if depth > MAX_DEPTH {
                    return Err(unsupported(node, format!("nesting deeper than {MAX_DEPTH}")));
                }
                let key = (graph.id(), config.punning, node.clone());
                if let Some(hit) = self.ranges.get(&key) {
                    let (revision, range) = hit.value();
                    if *revision == graph.revision() {
                        return Ok(range.clone());
                    }
                }
                let range = self.parse_range(graph, node, config, depth)?;
                self.ranges.insert(key, (graph.revision(), range.clone()));
                Ok(range)
            }
            _ => Err(mismatch(node, Role::DataRange)),
        }
    }

    fn parse_range(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
        depth: usize,
    ) -> TranslateResult<DataRange> {
        let next = depth + 1;
        let ranges = |head: Term| -> TranslateResult<BTreeSet<DataRange>> {
            read_list(graph, &head)?
                .iter()
                .map(|m| self.range_at(graph, m, config, next))
                .collect()
        };

        if graph.object(node, owl::ON_DATATYPE).is_some()
            || graph.object(node, owl::WITH_RESTRICTIONS).is_some()
        {
            return Err(unsupported(node, "datatype restriction with facets"));
        }
        if let Some(head) = graph.object(node, owl::ONE_OF) {
            let values = read_list(graph, &head)?
                .iter()
                .map(|m| self.literal(m))
                .collect::<TranslateResult<_>>()?;
            return Ok(DataRange::OneOf(values));
        }
        if let Some(inner) = graph.object(node, owl::DATATYPE_COMPLEMENT_OF) {
            let inner = self.range_at(graph, &inner, config, next)?;
            return Ok(DataRange::Complement(Box::new(inner)));
        }
        if let Some(head) = graph.object(node, owl::INTERSECTION_OF) {
            return Ok(DataRange::Intersection(ranges(head)?));
        }
        if let Some(head) = graph.object(node, owl::UNION_OF) {
            return Ok(DataRange::Union(ranges(head)?));
        }
        Err(unsupported(node, "data range without a recognised constructor"))
    }

    fn i_arg(&self, graph: &Graph, node: &Term, config: &AxiomsConfig) -> TranslateResult<IArg> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::SwrlVariable, config) => {
                Ok(IArg::Variable(iri.clone()))
            }
            _ => Ok(IArg::Individual(self.individual(graph, node, config)?)),
        }
    }

    fn d_arg(&self, graph: &Graph, node: &Term, config: &AxiomsConfig) -> TranslateResult<DArg> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::SwrlVariable, config) => {
                Ok(DArg::Variable(iri.clone()))
            }
            _ => Ok(DArg::Literal(self.literal(node)?)),
        }
    }
}

/// Whether a restriction on `property` is a data restriction.
///
/// Decided by the property's role; a property punned as both object and data
/// property falls back to the filler.
fn is_data_restriction(graph: &Graph, node: &Term, property: &Term, config: &AxiomsConfig) -> bool {
    let data = can_as(graph, property, Role::DataProperty, config);
    let object = can_as(graph, property, Role::ObjectPropertyExpression, config);
    if data != object {
        return data;
    }
    if graph.object(node, owl::ON_DATA_RANGE).is_some() {
        return true;
    }
    if graph.object(node, owl::HAS_VALUE).is_some_and(|v| v.is_literal()) {
        return true;
    }
    [owl::SOME_VALUES_FROM, owl::ALL_VALUES_FROM]
        .iter()
        .filter_map(|p| graph.object(node, p))
        .any(|filler| {
            can_as(graph, &filler, Role::DataRange, config)
                && !can_as(graph, &filler, Role::ClassExpression, config)
        })
}

/// The cardinality constraint on a restriction node: kind, bound, qualified.
fn cardinality(graph: &Graph, node: &Term) -> TranslateResult<(Cardinality, u32, bool)> {
    const PREDICATES: [(&str, Cardinality, bool); 6] = [
        (owl::MIN_CARDINALITY, Cardinality::Min, false),
        (owl::MAX_CARDINALITY, Cardinality::Max, false),
        (owl::CARDINALITY, Cardinality::Exact, false),
        (owl::MIN_QUALIFIED_CARDINALITY, Cardinality::Min, true),
        (owl::MAX_QUALIFIED_CARDINALITY, Cardinality::Max, true),
        (owl::QUALIFIED_CARDINALITY, Cardinality::Exact, true),
    ];
    for (predicate, kind, qualified) in PREDICATES {
        let Some(value) = graph.object(node, predicate) else {
            continue;
        };
        let n = value
            .as_literal()
            .and_then(|l| l.lexical().trim().parse::<u32>().ok())
            .ok_or_else(|| unsupported(&value, "cardinality that is not a non-negative integer"))?;
        return Ok((kind, n, qualified));
    }
    Err(unsupported(node, "restriction without a recognised constraint"))
}

impl ObjectFactory for GraphObjectFactory {
    fn class_expression(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<ClassExpression> {
        self.class_at(graph, node, config, 0)
    }

    fn object_property(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<ObjectPropertyExpression> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::ObjectProperty, config) => {
                Ok(ObjectPropertyExpression::Named(iri.clone()))
            }
            Term::Blank(_) if can_as(graph, node, Role::ObjectPropertyExpression, config) => {
                match graph.object(node, owl::INVERSE_OF) {
                    Some(Term::Iri(iri)) => Ok(ObjectPropertyExpression::Inverse(iri)),
                    _ => Err(mismatch(node, Role::ObjectPropertyExpression)),
                }
            }
            _ => Err(mismatch(node, Role::ObjectPropertyExpression)),
        }
    }

    fn data_range(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<DataRange> {
        self.range_at(graph, node, config, 0)
    }

    fn individual(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<Individual> {
        match node {
            Term::Iri(iri) if can_as(graph, node, Role::NamedIndividual, config) => {
                Ok(Individual::Named(iri.clone()))
            }
            Term::Blank(b) if can_as(graph, node, Role::AnonymousIndividual, config) => {
                Ok(Individual::Anonymous(b.clone()))
            }
            _ => Err(mismatch(node, Role::Individual)),
        }
    }

    fn swrl_atom(
        &self,
        graph: &Graph,
        node: &Term,
        config: &AxiomsConfig,
    ) -> TranslateResult<SwrlAtom> {
        let required = |predicate: &str| {
            graph.object(node, predicate).ok_or_else(|| TranslateError::MissingStructure {
                kind: "SWRL atom".into(),
                statement: node.to_string(),
                what: predicate.to_string(),
            })
        };
        let typed = |class: &str| graph.has(node, rdf::TYPE, &Term::iri(class));

        if typed(swrl::CLASS_ATOM) {
            return Ok(SwrlAtom::Class {
                class: self.class_expression(graph, &required(swrl::CLASS_PREDICATE)?, config)?,
                arg: self.i_arg(graph, &required(swrl::ARGUMENT1)?, config)?,
            });
        }
        if typed(swrl::DATA_RANGE_ATOM) {
            return Ok(SwrlAtom::DataRange {
                range: self.data_range(graph, &required(swrl::DATA_RANGE)?, config)?,
                arg: self.d_arg(graph, &required(swrl::ARGUMENT1)?, config)?,
            });
        }
        if typed(swrl::INDIVIDUAL_PROPERTY_ATOM) {
            return Ok(SwrlAtom::ObjectProperty {
                property: self.object_property(graph, &required(swrl::PROPERTY_PREDICATE)?, config)?,
                first: self.i_arg(graph, &required(swrl::ARGUMENT1)?, config)?,
                second: self.i_arg(graph, &required(swrl::ARGUMENT2)?, config)?,
            });
        }
        if typed(swrl::DATAVALUED_PROPERTY_ATOM) {
            let property = required(swrl::PROPERTY_PREDICATE)?;
            let Term::Iri(iri) = &property else {
                return Err(mismatch(&property, Role::DataProperty));
            };
            if !can_as(graph, &property, Role::DataProperty, config) {
                return Err(mismatch(&property, Role::DataProperty));
            }
            return Ok(SwrlAtom::DataProperty {
                property: iri.clone(),
                first: self.i_arg(graph, &required(swrl::ARGUMENT1)?, config)?,
                second: self.d_arg(graph, &required(swrl::ARGUMENT2)?, config)?,
            });
        }
        if typed(swrl::SAME_INDIVIDUAL_ATOM) || typed(swrl::DIFFERENT_INDIVIDUALS_ATOM) {
            let first = self.i_arg(graph, &required(swrl::ARGUMENT1)?, config)?;
            let second = self.i_arg(graph, &required(swrl::ARGUMENT2)?, config)?;
            return Ok(if typed(swrl::SAME_INDIVIDUAL_ATOM) {
                SwrlAtom::SameIndividual(first, second)
            } else {
                SwrlAtom::DifferentIndividuals(first, second)
            });
        }
        if typed(swrl::BUILTIN_ATOM) {
            let builtin = match required(swrl::BUILTIN)? {
                Term::Iri(iri) => iri,
                other => return Err(mismatch(&other, Role::AnyIri)),
            };
            let args = match graph.object(node, swrl::ARGUMENTS) {
                Some(head) => read_list(graph, &head)?
                    .iter()
                    .map(|a| self.d_arg(graph, a, config))
                    .collect::<TranslateResult<_>>()?,
                None => Vec::new(),
            };
            return Ok(SwrlAtom::BuiltIn { builtin, args });
        }
        Err(unsupported(node, "SWRL atom of unknown type"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::list::write_list;
    use crate::model::EntityKind;
    use crate::vocab::{rdfs, xsd};

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    fn declare(g: &mut Graph, t: &Term, kind: EntityKind) {
        g.insert(t.clone(), rdf::TYPE, Term::iri(kind.type_iri()));
    }

    fn restriction(g: &mut Graph, property: &Term) -> Term {
        let r = g.fresh_blank();
        g.insert(r.clone(), rdf::TYPE, Term::iri(owl::RESTRICTION));
        g.insert(r.clone(), owl::ON_PROPERTY, property.clone());
        r
    }

    #[test]
    fn some_values_from_resolves() {
        let mut g = Graph::new();
        let p = ex("hasPart");
        let b = ex("Wheel");
        declare(&mut g, &p, EntityKind::ObjectProperty);
        declare(&mut g, &b, EntityKind::Class);
        let r = restriction(&mut g, &p);
        g.insert(r.clone(), owl::SOME_VALUES_FROM, b);

        let factory = GraphObjectFactory::new();
        let config = AxiomsConfig::default();
        let ce = factory.class_expression(&g, &r, &config).unwrap();
        assert_eq!(
            ce,
            ClassExpression::some(
                ObjectPropertyExpression::named("http://example.org/hasPart"),
                ClassExpression::class("http://example.org/Wheel"),
            )
        );
        assert_eq!(factory.cached(), 1);
    }

    #[test]
    fn cached_expressions_are_kept_apart_per_punning_mode() {
        let mut g = Graph::new();
        let p = ex("hasPart");
        let b = ex("Wheel");
        declare(&mut g, &p, EntityKind::ObjectProperty);
        declare(&mut g, &b, EntityKind::Class);
        declare(&mut g, &b, EntityKind::NamedIndividual);
        let r = restriction(&mut g, &p);
        g.insert(r.clone(), owl::SOME_VALUES_FROM, b);

        let factory = GraphObjectFactory::new();
        let lax = AxiomsConfig::default();
        let strict = AxiomsConfig::with_punning(PunningMode::Strict);
        assert!(factory.class_expression(&g, &r, &lax).is_ok());
        assert!(factory.class_expression(&g, &r, &strict).is_err());
        assert!(GraphObjectFactory::new().class_expression(&g, &r, &strict).is_err());
        assert!(factory.class_expression(&g, &r, &lax).is_ok());
    }

    #[test]
    fn data_restriction_is_chosen_by_property_role() {
        let mut g = Graph::new();
        let age = ex("age");
        declare(&mut g, &age, EntityKind::DataProperty);
        let r = restriction(&mut g, &age);
        g.insert(r.clone(), owl::SOME_VALUES_FROM, Term::iri(xsd::INTEGER));

        let ce = GraphObjectFactory::new()
            .class_expression(&g, &r, &AxiomsConfig::default())
            .unwrap();
        assert_eq!(
            ce,
            ClassExpression::DataSomeValuesFrom {
                property: Iri::new("http://example.org/age"),
                range: DataRange::datatype(xsd::INTEGER),
            }
        );
    }

    #[test]
    fn qualified_cardinality_reads_bound_and_filler() {
        let mut g = Graph::new();
        let p = ex("hasChild");
        let c = ex("Person");
        declare(&mut g, &p, EntityKind::ObjectProperty);
        declare(&mut g, &c, EntityKind::Class);
        let r = restriction(&mut g, &p);
        g.insert(r.clone(), owl::MIN_QUALIFIED_CARDINALITY, Literal::non_negative(2));
        g.insert(r.clone(), owl::ON_CLASS, c);

        let ce = GraphObjectFactory::new()
            .class_expression(&g, &r, &AxiomsConfig::default())
            .unwrap();
        assert!(matches!(
            ce,
            ClassExpression::ObjectCardinality {
                kind: Cardinality::Min,
                n: 2,
                filler: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn union_reads_list_members() {
        let mut g = Graph::new();
        let a = ex("A");
        let b = ex("B");
        declare(&mut g, &a, EntityKind::Class);
        declare(&mut g, &b, EntityKind::Class);
        let head = write_list(&mut g, vec![a, b]);
        let u = g.fresh_blank();
        g.insert(u.clone(), rdf::TYPE, Term::iri(owl::CLASS));
        g.insert(u.clone(), owl::UNION_OF, head);

        let ce = GraphObjectFactory::new()
            .class_expression(&g, &u, &AxiomsConfig::default())
            .unwrap();
        assert_eq!(
            ce,
            ClassExpression::or([
                ClassExpression::class("http://example.org/A"),
                ClassExpression::class("http://example.org/B"),
            ])
        );
    }

    #[test]
    fn undeclared_class_is_a_role_mismatch() {
        let g = Graph::new();
        let err = GraphObjectFactory::new()
            .class_expression(&g, &ex("Ghost"), &AxiomsConfig::default())
            .unwrap_err();
        assert!(matches!(err, TranslateError::RoleMismatch { .. }));
    }

    #[test]
    fn facets_are_unsupported() {
        let mut g = Graph::new();
        let dr = g.fresh_blank();
        g.insert(dr.clone(), rdf::TYPE, Term::iri(rdfs::DATATYPE));
        g.insert(dr.clone(), owl::ON_DATATYPE, Term::iri(xsd::INTEGER));
        let err = GraphObjectFactory::new()
            .data_range(&g, &dr, &AxiomsConfig::default())
            .unwrap_err();
        assert!(matches!(err, TranslateError::Unsupported { .. }));
    }

    #[test]
    fn self_referencing_complement_stops_at_depth_limit() {
        let mut g = Graph::new();
        let c = g.fresh_blank();
        g.insert(c.clone(), rdf::TYPE, Term::iri(owl::CLASS));
        g.insert(c.clone(), owl::COMPLEMENT_OF, c.clone());
        let err = GraphObjectFactory::new()
            .class_expression(&g, &c, &AxiomsConfig::default())
            .unwrap_err();
        assert!(matches!(err, TranslateError::Unsupported { .. }));
    }

    #[test]
    fn stale_cache_entries_are_recomputed() {
        let mut g = Graph::new();
        let p = ex("p");
        let a = ex("A");
        let b = ex("B");
        declare(&mut g, &p, EntityKind::ObjectProperty);
        declare(&mut g, &a, EntityKind::Class);
        declare(&mut g, &b, EntityKind::Class);
        let r = restriction(&mut g, &p);
        g.insert(r.clone(), owl::SOME_VALUES_FROM, a.clone());

        let factory = GraphObjectFactory::new();
        let config = AxiomsConfig::default();
        let first = factory.class_expression(&g, &r, &config).unwrap();

        g.remove(&crate::graph::Triple::new(r.clone(), owl::SOME_VALUES_FROM, a));
        g.insert(r.clone(), owl::SOME_VALUES_FROM, b);
        let second = factory.class_expression(&g, &r, &config).unwrap();
        assert_ne!(first, second);
    }
}
