//! Rendering model values as triples.
//!
//! Anonymous expressions always get fresh blank nodes. Named entities that
//! are not built-in vocabulary are declared as they are rendered, so every
//! written axiom can be read back without outside declarations.

use crate::graph::list::write_list;
use crate::graph::{Graph, Iri, Literal, Term};
use crate::model::{
    Cardinality, ClassExpression, DArg, DataRange, EntityKind, IArg, Individual,
    ObjectPropertyExpression, SubObject, SwrlAtom,
};
use crate::vocab::{builtins, owl, rdf, rdfs, swrl};

/// Declare `iri` as an entity of `kind` unless it is standard vocabulary.
pub(crate) fn declare(graph: &mut Graph, kind: EntityKind, iri: &Iri) {
    let b = builtins();
    if b.is_builtin(iri.as_str()) || b.is_reserved(iri.as_str()) {
        return;
    }
    graph.insert(Term::Iri(iri.clone()), rdf::TYPE, Term::iri(kind.type_iri()));
}

pub(crate) fn render_sub(graph: &mut Graph, sub: &SubObject) -> Term {
    match sub {
        SubObject::Entity(entity) => Term::Iri(entity.iri.clone()),
        SubObject::Class(ce) => render_class(graph, ce),
        SubObject::ObjectProperty(ope) => render_ope(graph, ope),
        SubObject::DataProperty(iri) => {
            declare(graph, EntityKind::DataProperty, iri);
            Term::Iri(iri.clone())
        }
        SubObject::AnnotationProperty(iri) => {
            declare(graph, EntityKind::AnnotationProperty, iri);
            Term::Iri(iri.clone())
        }
        SubObject::DataRange(range) => render_range(graph, range),
        SubObject::Individual(individual) => render_individual(graph, individual),
        SubObject::Literal(literal) => Term::Literal(literal.clone()),
        SubObject::AnnotationSubject(subject) => subject.to_term(),
        SubObject::AnnotationValue(value) => value.to_term(),
        SubObject::Iri(iri) => Term::Iri(iri.clone()),
        SubObject::Atoms(atoms) => {
            let nodes: Vec<Term> = atoms.iter().map(|a| render_atom(graph, a)).collect();
            write_list(graph, nodes)
        }
    }
}

pub(crate) fn render_class(graph: &mut Graph, ce: &ClassExpression) -> Term {
    match ce {
        ClassExpression::Class(iri) => {
            declare(graph, EntityKind::Class, iri);
            Term::Iri(iri.clone())
        }
        ClassExpression::IntersectionOf(members) => {
            let nodes: Vec<Term> = members.iter().map(|m| render_class(graph, m)).collect();
            class_node(graph, owl::INTERSECTION_OF, nodes)
        }
        ClassExpression::UnionOf(members) => {
            let nodes: Vec<Term> = members.iter().map(|m| render_class(graph, m)).collect();
            class_node(graph, owl::UNION_OF, nodes)
        }
        ClassExpression::OneOf(individuals) => {
            let nodes: Vec<Term> = individuals
                .iter()
                .map(|i| render_individual(graph, i))
                .collect();
            class_node(graph, owl::ONE_OF, nodes)
        }
        ClassExpression::ComplementOf(inner) => {
            let inner = render_class(graph, inner);
            let node = typed_node(graph, owl::CLASS);
            graph.insert(node.clone(), owl::COMPLEMENT_OF, inner);
            node
        }
        ClassExpression::SomeValuesFrom { property, filler } => {
            let filler = render_class(graph, filler);
            let node = restriction(graph, property);
            graph.insert(node.clone(), owl::SOME_VALUES_FROM, filler);
            node
        }
        ClassExpression::AllValuesFrom { property, filler } => {
            let filler = render_class(graph, filler);
            let node = restriction(graph, property);
            graph.insert(node.clone(), owl::ALL_VALUES_FROM, filler);
            node
        }
        ClassExpression::HasValue { property, value } => {
            let value = render_individual(graph, value);
            let node = restriction(graph, property);
            graph.insert(node.clone(), owl::HAS_VALUE, value);
            node
        }
        ClassExpression::HasSelf(property) => {
            let node = restriction(graph, property);
            graph.insert(node.clone(), owl::HAS_SELF, Literal::boolean(true));
            node
        }
        ClassExpression::ObjectCardinality {
            kind,
            n,
            property,
            filler,
        } => {
            let filler = filler.as_deref().map(|f| render_class(graph, f));
            let node = restriction(graph, property);
            graph.insert(
                node.clone(),
                cardinality_predicate(*kind, filler.is_some()),
                Literal::non_negative(*n),
            );
            if let Some(filler) = filler {
                graph.insert(node.clone(), owl::ON_CLASS, filler);
            }
            node
        }
        ClassExpression::DataSomeValuesFrom { property, range } => {
            let range = render_range(graph, range);
            let node = data_restriction(graph, property);
            graph.insert(node.clone(), owl::SOME_VALUES_FROM, range);
            node
        }
        ClassExpression::DataAllValuesFrom { property, range } => {
            let range = render_range(graph, range);
            let node = data_restriction(graph, property);
            graph.insert(node.clone(), owl::ALL_VALUES_FROM, range);
            node
        }
        ClassExpression::DataHasValue { property, value } => {
            let node = data_restriction(graph, property);
            graph.insert(node.clone(), owl::HAS_VALUE, value.clone());
            node
        }
        ClassExpression::DataCardinality {
            kind,
            n,
            property,
            range,
        } => {
            let range = range.as_ref().map(|r| render_range(graph, r));
            let node = data_restriction(graph, property);
            graph.insert(
                node.clone(),
                cardinality_predicate(*kind, range.is_some()),
                Literal::non_negative(*n),
            );
            if let Some(range) = range {
                graph.insert(node.clone(), owl::ON_DATA_RANGE, range);
            }
            node
        }
    }
}

pub(crate) fn render_range(graph: &mut Graph, range: &DataRange) -> Term {
    match range {
        DataRange::Datatype(iri) => {
            declare(graph, EntityKind::Datatype, iri);
            Term::Iri(iri.clone())
        }
        DataRange::OneOf(values) => {
            let values: Vec<Term> = values.iter().cloned().map(Term::Literal).collect();
            let list = write_list(graph, values);
            let node = typed_node(graph, rdfs::DATATYPE);
            graph.insert(node.clone(), owl::ONE_OF, list);
            node
        }
        DataRange::Complement(inner) => {
            let inner = render_range(graph, inner);
            let node = typed_node(graph, rdfs::DATATYPE);
            graph.insert(node.clone(), owl::DATATYPE_COMPLEMENT_OF, inner);
            node
        }
        DataRange::Intersection(ranges) | DataRange::Union(ranges) => {
            let predicate = if matches!(range, DataRange::Intersection(_)) {
                owl::INTERSECTION_OF
            } else {
                owl::UNION_OF
            };
            let nodes: Vec<Term> = ranges.iter().map(|r| render_range(graph, r)).collect();
            let list = write_list(graph, nodes);
            let node = typed_node(graph, rdfs::DATATYPE);
            graph.insert(node.clone(), predicate, list);
            node
        }
    }
}

pub(crate) fn render_ope(graph: &mut Graph, ope: &ObjectPropertyExpression) -> Term {
    declare(graph, EntityKind::ObjectProperty, ope.property());
    match ope {
        ObjectPropertyExpression::Named(iri) => Term::Iri(iri.clone()),
        ObjectPropertyExpression::Inverse(iri) => {
            let node = graph.fresh_blank();
            graph.insert(node.clone(), owl::INVERSE_OF, Term::Iri(iri.clone()));
            node
        }
    }
}

pub(crate) fn render_individual(graph: &mut Graph, individual: &Individual) -> Term {
    match individual {
        Individual::Named(iri) => {
            declare(graph, EntityKind::NamedIndividual, iri);
            Term::Iri(iri.clone())
        }
        Individual::Anonymous(id) => Term::Blank(id.clone()),
    }
}

pub(crate) fn render_atom(graph: &mut Graph, atom: &SwrlAtom) -> Term {
    let mut parts: Vec<(&str, Term)> = Vec::new();
    let atom_type = match atom {
        SwrlAtom::Class { class, arg } => {
            parts.push((swrl::CLASS_PREDICATE, render_class(graph, class)));
            parts.push((swrl::ARGUMENT1, render_i_arg(graph, arg)));
            swrl::CLASS_ATOM
        }
        SwrlAtom::DataRange { range, arg } => {
            parts.push((swrl::DATA_RANGE, render_range(graph, range)));
            parts.push((swrl::ARGUMENT1, render_d_arg(graph, arg)));
            swrl::DATA_RANGE_ATOM
        }
        SwrlAtom::ObjectProperty {
            property,
            first,
            second,
        } => {
            parts.push((swrl::PROPERTY_PREDICATE, render_ope(graph, property)));
            parts.push((swrl::ARGUMENT1, render_i_arg(graph, first)));
            parts.push((swrl::ARGUMENT2, render_i_arg(graph, second)));
            swrl::INDIVIDUAL_PROPERTY_ATOM
        }
        SwrlAtom::DataProperty {
            property,
            first,
            second,
        } => {
            declare(graph, EntityKind::DataProperty, property);
            parts.push((swrl::PROPERTY_PREDICATE, Term::Iri(property.clone())));
            parts.push((swrl::ARGUMENT1, render_i_arg(graph, first)));
            parts.push((swrl::ARGUMENT2, render_d_arg(graph, second)));
            swrl::DATAVALUED_PROPERTY_ATOM
        }
        SwrlAtom::SameIndividual(first, second) | SwrlAtom::DifferentIndividuals(first, second) => {
            parts.push((swrl::ARGUMENT1, render_i_arg(graph, first)));
            parts.push((swrl::ARGUMENT2, render_i_arg(graph, second)));
            if matches!(atom, SwrlAtom::SameIndividual(..)) {
                swrl::SAME_INDIVIDUAL_ATOM
            } else {
                swrl::DIFFERENT_INDIVIDUALS_ATOM
            }
        }
        SwrlAtom::BuiltIn { builtin, args } => {
            graph.insert(Term::Iri(builtin.clone()), rdf::TYPE, Term::iri(swrl::BUILTIN_CLASS));
            let args: Vec<Term> = args.iter().map(|a| render_d_arg(graph, a)).collect();
            parts.push((swrl::BUILTIN, Term::Iri(builtin.clone())));
            parts.push((swrl::ARGUMENTS, write_list(graph, args)));
            swrl::BUILTIN_ATOM
        }
    };

    let node = typed_node(graph, atom_type);
    for (predicate, object) in parts {
        graph.insert(node.clone(), predicate, object);
    }
    node
}

fn render_i_arg(graph: &mut Graph, arg: &IArg) -> Term {
    match arg {
        IArg::Variable(iri) => variable(graph, iri),
        IArg::Individual(individual) => render_individual(graph, individual),
    }
}

fn render_d_arg(graph: &mut Graph, arg: &DArg) -> Term {
    match arg {
        DArg::Variable(iri) => variable(graph, iri),
        DArg::Literal(literal) => Term::Literal(literal.clone()),
    }
}

fn variable(graph: &mut Graph, iri: &Iri) -> Term {
    let term = Term::Iri(iri.clone());
    graph.insert(term.clone(), rdf::TYPE, Term::iri(swrl::VARIABLE));
    term
}

fn typed_node(graph: &mut Graph, type_iri: &str) -> Term {
    let node = graph.fresh_blank();
    graph.insert(node.clone(), rdf::TYPE, Term::iri(type_iri));
    node
}

fn class_node(graph: &mut Graph, predicate: &str, members: Vec<Term>) -> Term {
    let list = write_list(graph, members);
    let node = typed_node(graph, owl::CLASS);
    graph.insert(node.clone(), predicate, list);
    node
}

fn restriction(graph: &mut Graph, property: &ObjectPropertyExpression) -> Term {
    let property = render_ope(graph, property);
    let node = typed_node(graph, owl::RESTRICTION);
    graph.insert(node.clone(), owl::ON_PROPERTY, property);
    node
}

fn data_restriction(graph: &mut Graph, property: &Iri) -> Term {
    declare(graph, EntityKind::DataProperty, property);
    let node = typed_node(graph, owl::RESTRICTION);
    graph.insert(node.clone(), owl::ON_PROPERTY, Term::Iri(property.clone()));
    node
}

fn cardinality_predicate(kind: Cardinality, qualified: bool) -> &'static str {
    match (kind, qualified) {
        (Cardinality::Min, false) => owl::MIN_CARDINALITY,
        (Cardinality::Max, false) => owl::MAX_CARDINALITY,
        (Cardinality::Exact, false) => owl::CARDINALITY,
        (Cardinality::Min, true) => owl::MIN_QUALIFIED_CARDINALITY,
        (Cardinality::Max, true) => owl::MAX_QUALIFIED_CARDINALITY,
        (Cardinality::Exact, true) => owl::QUALIFIED_CARDINALITY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AxiomsConfig;
    use crate::factory::{GraphObjectFactory, ObjectFactory};

    fn ex(s: &str) -> Iri {
        Iri::new(format!("http://example.org/{s}"))
    }

    fn read_class(g: &Graph, node: &Term) -> ClassExpression {
        GraphObjectFactory::new()
            .class_expression(g, node, &AxiomsConfig::default())
            .unwrap()
    }

    #[test]
    fn builtins_are_not_declared() {
        let mut g = Graph::new();
        declare(&mut g, EntityKind::Class, &Iri::new(owl::THING));
        declare(&mut g, EntityKind::Class, &Iri::new(owl::RESTRICTION));
        assert!(g.is_empty());
        declare(&mut g, EntityKind::Class, &ex("Dog"));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn restrictions_read_back() {
        let ce = ClassExpression::and([
            ClassExpression::class(ex("Car")),
            ClassExpression::some(
                ObjectPropertyExpression::inverse(ex("partOf")),
                ClassExpression::class(ex("Wheel")),
            ),
            ClassExpression::ObjectCardinality {
                kind: Cardinality::Min,
                n: 4,
                property: ObjectPropertyExpression::named(ex("hasWheel")),
                filler: Some(Box::new(ClassExpression::class(ex("Wheel")))),
            },
        ]);
        let mut g = Graph::new();
        let node = render_class(&mut g, &ce);
        assert!(node.is_blank());
        assert_eq!(read_class(&g, &node), ce);
    }

    #[test]
    fn data_restrictions_read_back() {
        let ce = ClassExpression::or([
            ClassExpression::DataSomeValuesFrom {
                property: ex("age"),
                range: DataRange::Complement(Box::new(DataRange::datatype(crate::vocab::xsd::STRING))),
            },
            ClassExpression::DataHasValue {
                property: ex("name"),
                value: Literal::string("Rex"),
            },
        ]);
        let mut g = Graph::new();
        let node = render_class(&mut g, &ce);
        assert_eq!(read_class(&g, &node), ce);
    }

    #[test]
    fn rendering_twice_allocates_twice() {
        let ce = ClassExpression::not(ClassExpression::class(ex("A")));
        let mut g = Graph::new();
        let first = render_class(&mut g, &ce);
        let second = render_class(&mut g, &ce);
        assert_ne!(first, second);
    }
}
