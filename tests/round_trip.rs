//! Round-trip tests across every supported axiom kind.
//!
//! Each axiom is written into an empty graph and read back through the
//! registry; the read value must equal the written one, annotations compared
//! as sets.

use std::collections::BTreeSet;
use std::sync::{Arc, RwLock};

use owl_axiom_graph::config::AxiomsConfig;
use owl_axiom_graph::factory::GraphObjectFactory;
use owl_axiom_graph::graph::{Graph, Literal, SharedGraph, Term};
use owl_axiom_graph::model::{
    Annotation, AnnotatedAxiom, AnnotationSubject, AnnotationValue, Axiom, AxiomKind,
    ClassExpression, DArg, DataRange, Entity, IArg, Individual, ObjectPropertyExpression,
    SwrlAtom,
};
use owl_axiom_graph::translate::TranslatorRegistry;
use owl_axiom_graph::vocab::{owl, rdfs, xsd};

fn iri(s: &str) -> String {
    format!("http://example.org/{s}")
}

fn class(s: &str) -> ClassExpression {
    ClassExpression::class(iri(s))
}

fn op(s: &str) -> ObjectPropertyExpression {
    ObjectPropertyExpression::named(iri(s))
}

fn ind(s: &str) -> Individual {
    Individual::named(iri(s))
}

fn set<T: Ord>(items: impl IntoIterator<Item = T>) -> BTreeSet<T> {
    items.into_iter().collect()
}

/// One representative axiom of every kind.
fn catalogue() -> Vec<Axiom> {
    vec![
        Axiom::Declaration(Entity::class(iri("Dog"))),
        Axiom::SubClassOf {
            sub: class("Dog"),
            sup: ClassExpression::some(op("hasParent"), class("Dog")),
        },
        Axiom::EquivalentClasses(set([
            class("Human"),
            class("Person"),
            ClassExpression::some(op("hasName"), class("Name")),
        ])),
        Axiom::DisjointClasses(set([class("Cat"), class("Dog"), class("Fish")])),
        Axiom::DisjointUnion {
            class: iri("Pet").into(),
            members: set([class("Cat"), class("Dog")]),
        },
        Axiom::SubObjectPropertyOf {
            sub: op("hasMother"),
            sup: op("hasParent"),
        },
        Axiom::SubDataPropertyOf {
            sub: iri("birthYear").into(),
            sup: iri("year").into(),
        },
        Axiom::SubAnnotationPropertyOf {
            sub: iri("nickname").into(),
            sup: rdfs::LABEL.into(),
        },
        Axiom::SubPropertyChainOf {
            chain: vec![op("hasParent"), op("hasBrother")],
            sup: op("hasUncle"),
        },
        Axiom::EquivalentObjectProperties(set([op("contains"), op("hasPart"), op("includes")])),
        Axiom::EquivalentDataProperties(set([iri("age").into(), iri("years").into()])),
        Axiom::DisjointObjectProperties(set([op("hasFather"), op("hasMother")])),
        Axiom::DisjointDataProperties(set([
            iri("height").into(),
            iri("weight").into(),
            iri("width").into(),
        ])),
        Axiom::InverseObjectProperties(iri("hasParent").into(), iri("hasChild").into()),
        Axiom::ObjectPropertyDomain {
            property: op("owns"),
            domain: class("Person"),
        },
        Axiom::ObjectPropertyRange {
            property: ObjectPropertyExpression::inverse(iri("owns")),
            range: class("Person"),
        },
        Axiom::DataPropertyDomain {
            property: iri("age").into(),
            domain: class("Person"),
        },
        Axiom::DataPropertyRange {
            property: iri("age").into(),
            range: DataRange::datatype(xsd::INTEGER),
        },
        Axiom::AnnotationPropertyDomain {
            property: iri("nickname").into(),
            domain: iri("Person").into(),
        },
        Axiom::AnnotationPropertyRange {
            property: iri("nickname").into(),
            range: xsd::STRING.into(),
        },
        Axiom::FunctionalObjectProperty(op("hasMother")),
        Axiom::InverseFunctionalObjectProperty(op("ssnOf")),
        Axiom::ReflexiveObjectProperty(op("knows")),
        Axiom::IrreflexiveObjectProperty(op("hasParent")),
        Axiom::SymmetricObjectProperty(op("marriedTo")),
        Axiom::AsymmetricObjectProperty(op("hasChild")),
        Axiom::TransitiveObjectProperty(op("ancestorOf")),
        Axiom::FunctionalDataProperty(iri("birthYear").into()),
        Axiom::ClassAssertion {
            class: ClassExpression::and([class("Dog"), class("Pet")]),
            individual: ind("rex"),
        },
        Axiom::ObjectPropertyAssertion {
            property: iri("owns").into(),
            subject: ind("alice"),
            object: ind("rex"),
        },
        Axiom::DataPropertyAssertion {
            property: iri("age").into(),
            subject: ind("rex"),
            value: Literal::integer(3),
        },
        Axiom::NegativeObjectPropertyAssertion {
            property: op("owns"),
            subject: ind("bob"),
            object: ind("rex"),
        },
        Axiom::NegativeDataPropertyAssertion {
            property: iri("age").into(),
            subject: ind("rex"),
            value: Literal::integer(30),
        },
        Axiom::SameIndividual(set([ind("rex"), ind("rexy"), ind("rexxy")])),
        Axiom::DifferentIndividuals(set([ind("alice"), ind("bob"), ind("rex")])),
        Axiom::AnnotationAssertion {
            subject: AnnotationSubject::Iri(iri("Dog").into()),
            property: rdfs::LABEL.into(),
            value: AnnotationValue::Literal(Literal::lang("chien", "fr")),
        },
        Axiom::HasKey {
            class: class("Person"),
            object_properties: set([op("bornIn")]),
            data_properties: set([iri("ssn").into()]),
        },
        Axiom::DatatypeDefinition {
            datatype: iri("Number").into(),
            range: DataRange::Union(set([
                DataRange::datatype(xsd::INTEGER),
                DataRange::datatype(xsd::DECIMAL),
            ])),
        },
        Axiom::Rule {
            body: vec![
                SwrlAtom::Class {
                    class: class("Dog"),
                    arg: IArg::Variable("urn:swrl#d".into()),
                },
                SwrlAtom::DataProperty {
                    property: iri("age").into(),
                    first: IArg::Variable("urn:swrl#d".into()),
                    second: DArg::Variable("urn:swrl#a".into()),
                },
            ],
            head: vec![SwrlAtom::Class {
                class: class("Pet"),
                arg: IArg::Variable("urn:swrl#d".into()),
            }],
        },
    ]
}

fn read_back(axiom: &AnnotatedAxiom) -> Vec<AnnotatedAxiom> {
    let registry = TranslatorRegistry::global();
    let mut g = Graph::new();
    registry.write(axiom, &mut g).unwrap();
    registry
        .read_kind(
            axiom.kind(),
            &g,
            &GraphObjectFactory::new(),
            &AxiomsConfig::default(),
        )
        .unwrap()
        .iter()
        .map(|o| o.axiom().unwrap())
        .collect()
}

#[test]
fn catalogue_covers_every_kind() {
    let kinds: BTreeSet<AxiomKind> = catalogue().iter().map(Axiom::kind).collect();
    assert_eq!(kinds.len(), AxiomKind::ALL.len());
}

#[test]
fn every_kind_round_trips() {
    for axiom in catalogue() {
        let axiom = AnnotatedAxiom::from(axiom);
        let read = read_back(&axiom);
        assert_eq!(read, vec![axiom.clone()], "{} did not round-trip", axiom.kind());
    }
}

#[test]
fn every_kind_round_trips_with_annotations() {
    for axiom in catalogue() {
        let axiom = AnnotatedAxiom::new(
            axiom,
            [
                Annotation::new(rdfs::COMMENT, Literal::string("reviewed")),
                Annotation::new(rdfs::SEE_ALSO, AnnotationValue::Iri(iri("doc").into()))
                    .annotated(Annotation::new(rdfs::LABEL, Literal::string("source"))),
            ],
        );
        let read = read_back(&axiom);
        assert_eq!(read, vec![axiom.clone()], "{} lost annotations", axiom.kind());
    }
}

#[test]
fn larger_equivalences_read_back_whole() {
    for axiom in catalogue() {
        if !matches!(
            axiom.kind(),
            AxiomKind::EquivalentClasses
                | AxiomKind::EquivalentObjectProperties
                | AxiomKind::SameIndividual
        ) {
            continue;
        }
        let axiom = AnnotatedAxiom::from(axiom);
        assert!(axiom.axiom.components().len() > 2);
        let read = read_back(&axiom);
        assert_eq!(read.len(), 1, "{} came back in pieces", axiom.kind());
        assert_eq!(read[0].axiom.components().len(), axiom.axiom.components().len());
    }
}

#[test]
fn reversed_inverse_properties_are_one_axiom() {
    let forward = AnnotatedAxiom::from(Axiom::InverseObjectProperties(
        iri("hasChild").into(),
        iri("hasParent").into(),
    ));
    let reversed = AnnotatedAxiom::from(Axiom::InverseObjectProperties(
        iri("hasParent").into(),
        iri("hasChild").into(),
    ));
    assert_eq!(forward, reversed);

    let mut g = Graph::new();
    g.insert(Term::iri(iri("hasParent")), owl::INVERSE_OF, Term::iri(iri("hasChild")));
    let registry = TranslatorRegistry::global();
    registry.write(&forward, &mut g).unwrap();
    let read = registry
        .read_kind(
            AxiomKind::InverseObjectProperties,
            &g,
            &GraphObjectFactory::new(),
            &AxiomsConfig::default(),
        )
        .unwrap();
    assert_eq!(read.len(), 1);
    assert_eq!(read[0].axiom().unwrap(), forward);
}

#[test]
fn scanned_statements_match_and_build() {
    let registry = TranslatorRegistry::global();
    let mut g = Graph::new();
    let axioms: Vec<AnnotatedAxiom> = catalogue().into_iter().map(AnnotatedAxiom::from).collect();
    registry.write_all(&axioms, &mut g).unwrap();

    let config = AxiomsConfig::default();
    let factory = GraphObjectFactory::new();
    for translator in registry.translators() {
        for statement in translator.scan(&g, &config) {
            assert!(
                translator.matches(&g, &statement, &config),
                "{} scanned {statement} but does not match it",
                translator.kind()
            );
            let object = translator.to_axiom(&g, &statement, &factory, &config).unwrap();
            assert_eq!(object.kind(), translator.kind());
        }
    }
}

#[test]
fn equal_objects_hash_equally() {
    let registry = TranslatorRegistry::global();
    let axiom = AnnotatedAxiom::new(
        Axiom::SubClassOf {
            sub: class("Dog"),
            sup: class("Animal"),
        },
        [
            Annotation::new(rdfs::COMMENT, Literal::string("b")),
            Annotation::new(rdfs::COMMENT, Literal::string("a")),
        ],
    );
    let mut first = Graph::new();
    let mut second = Graph::new();
    registry.write(&axiom, &mut first).unwrap();
    // Opposite annotation order in the second graph.
    let reordered = AnnotatedAxiom::new(
        axiom.axiom.clone(),
        axiom.annotations.iter().rev().cloned(),
    );
    registry.write(&reordered, &mut second).unwrap();

    let config = AxiomsConfig::default();
    let factory = GraphObjectFactory::new();
    let a = registry.read_kind(AxiomKind::SubClassOf, &first, &factory, &config).unwrap();
    let b = registry.read_kind(AxiomKind::SubClassOf, &second, &factory, &config).unwrap();
    assert_eq!(a, b);
    assert_eq!(a[0].hash_code(), b[0].hash_code());
    assert_ne!(a[0].graph(), b[0].graph());
}

#[test]
fn read_axioms_serialize_to_json() {
    let registry = TranslatorRegistry::global();
    let axiom = AnnotatedAxiom::new(
        Axiom::DisjointClasses(set([class("Cat"), class("Dog"), class("Fish")])),
        [Annotation::new(rdfs::COMMENT, Literal::string("pets"))],
    );
    let mut g = Graph::new();
    registry.write(&axiom, &mut g).unwrap();
    let read: Vec<AnnotatedAxiom> = registry
        .read_kind(
            AxiomKind::DisjointClasses,
            &g,
            &GraphObjectFactory::new(),
            &AxiomsConfig::default(),
        )
        .unwrap()
        .iter()
        .map(|o| o.axiom().unwrap())
        .collect();

    let json = serde_json::to_string_pretty(&read).unwrap();
    assert!(json.contains("DisjointClasses"));
    assert!(json.contains("http://example.org/Fish"));
    let back: Vec<AnnotatedAxiom> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, vec![axiom]);
}

#[test]
fn concurrent_readers_see_the_same_axioms() {
    let registry = TranslatorRegistry::global();
    let mut g = Graph::new();
    let axioms: Vec<AnnotatedAxiom> = catalogue().into_iter().map(AnnotatedAxiom::from).collect();
    registry.write_all(&axioms, &mut g).unwrap();
    let shared: SharedGraph = Arc::new(RwLock::new(g));
    let factory = Arc::new(GraphObjectFactory::new());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = Arc::clone(&shared);
            let factory = Arc::clone(&factory);
            std::thread::spawn(move || {
                let graph = shared.read().unwrap();
                TranslatorRegistry::global()
                    .read_all(&graph, factory.as_ref(), &AxiomsConfig::default())
                    .unwrap()
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(!results[0].is_empty());
    assert!(results.windows(2).all(|w| w[0] == w[1]));
}
