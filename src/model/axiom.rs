//! The [`Axiom`] enum, its kinds, and the component builder.

use std::collections::BTreeSet;
use std::iter::Peekable;

use serde::{Deserialize, Serialize};

use super::expr::at_least;
use super::{
    Annotation, AnnotationSubject, AnnotationValue, ClassExpression, DataRange, Entity,
    Individual, ObjectPropertyExpression, SubObject, SwrlAtom,
};
use crate::error::{ModelError, ModelResult};
use crate::graph::{Iri, Literal};

/// Structural shape shared by several axiom kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One component: declarations and property characteristics.
    Unary,
    /// Subject and object: subclass, sub-property, domain, range, ...
    Pair,
    /// Subject, property, object: property and annotation assertions.
    Assertion,
    /// An unordered member set of at least two.
    NAry,
    /// A head component followed by list members.
    Keyed,
    /// A SWRL rule: body atoms and head atoms.
    Rule,
}

/// Every supported axiom kind, in canonical order.
///
/// The declaration order is the primary key of the total ordering over axiom
/// objects and the source of each kind's hash seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubDataPropertyOf,
    SubAnnotationPropertyOf,
    SubPropertyChainOf,
    EquivalentObjectProperties,
    EquivalentDataProperties,
    DisjointObjectProperties,
    DisjointDataProperties,
    InverseObjectProperties,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    DataPropertyDomain,
    DataPropertyRange,
    AnnotationPropertyDomain,
    AnnotationPropertyRange,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    TransitiveObjectProperty,
    FunctionalDataProperty,
    ClassAssertion,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    NegativeObjectPropertyAssertion,
    NegativeDataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    AnnotationAssertion,
    HasKey,
    DatatypeDefinition,
    Rule,
}

impl AxiomKind {
    pub const ALL: [AxiomKind; 39] = [
        AxiomKind::Declaration,
        AxiomKind::SubClassOf,
        AxiomKind::EquivalentClasses,
        AxiomKind::DisjointClasses,
        AxiomKind::DisjointUnion,
        AxiomKind::SubObjectPropertyOf,
        AxiomKind::SubDataPropertyOf,
        AxiomKind::SubAnnotationPropertyOf,
        AxiomKind::SubPropertyChainOf,
        AxiomKind::EquivalentObjectProperties,
        AxiomKind::EquivalentDataProperties,
        AxiomKind::DisjointObjectProperties,
        AxiomKind::DisjointDataProperties,
        AxiomKind::InverseObjectProperties,
        AxiomKind::ObjectPropertyDomain,
        AxiomKind::ObjectPropertyRange,
        AxiomKind::DataPropertyDomain,
        AxiomKind::DataPropertyRange,
        AxiomKind::AnnotationPropertyDomain,
        AxiomKind::AnnotationPropertyRange,
        AxiomKind::FunctionalObjectProperty,
        AxiomKind::InverseFunctionalObjectProperty,
        AxiomKind::ReflexiveObjectProperty,
        AxiomKind::IrreflexiveObjectProperty,
        AxiomKind::SymmetricObjectProperty,
        AxiomKind::AsymmetricObjectProperty,
        AxiomKind::TransitiveObjectProperty,
        AxiomKind::FunctionalDataProperty,
        AxiomKind::ClassAssertion,
        AxiomKind::ObjectPropertyAssertion,
        AxiomKind::DataPropertyAssertion,
        AxiomKind::NegativeObjectPropertyAssertion,
        AxiomKind::NegativeDataPropertyAssertion,
        AxiomKind::SameIndividual,
        AxiomKind::DifferentIndividuals,
        AxiomKind::AnnotationAssertion,
        AxiomKind::HasKey,
        AxiomKind::DatatypeDefinition,
        AxiomKind::Rule,
    ];

    /// Per-kind hash seed. Stable across runs and distinct per kind.
    pub fn hash_index(self) -> u64 {
        // Spread the 1-based ordinal so neighbouring kinds start far apart.
        (self as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
    }

    pub fn name(self) -> &'static str {
        match self {
            AxiomKind::Declaration => "Declaration",
            AxiomKind::SubClassOf => "SubClassOf",
            AxiomKind::EquivalentClasses => "EquivalentClasses",
            AxiomKind::DisjointClasses => "DisjointClasses",
            AxiomKind::DisjointUnion => "DisjointUnion",
            AxiomKind::SubObjectPropertyOf => "SubObjectPropertyOf",
            AxiomKind::SubDataPropertyOf => "SubDataPropertyOf",
            AxiomKind::SubAnnotationPropertyOf => "SubAnnotationPropertyOf",
            AxiomKind::SubPropertyChainOf => "SubPropertyChainOf",
            AxiomKind::EquivalentObjectProperties => "EquivalentObjectProperties",
            AxiomKind::EquivalentDataProperties => "EquivalentDataProperties",
            AxiomKind::DisjointObjectProperties => "DisjointObjectProperties",
            AxiomKind::DisjointDataProperties => "DisjointDataProperties",
            AxiomKind::InverseObjectProperties => "InverseObjectProperties",
            AxiomKind::ObjectPropertyDomain => "ObjectPropertyDomain",
            AxiomKind::ObjectPropertyRange => "ObjectPropertyRange",
            AxiomKind::DataPropertyDomain => "DataPropertyDomain",
            AxiomKind::DataPropertyRange => "DataPropertyRange",
            AxiomKind::AnnotationPropertyDomain => "AnnotationPropertyDomain",
            AxiomKind::AnnotationPropertyRange => "AnnotationPropertyRange",
            AxiomKind::FunctionalObjectProperty => "FunctionalObjectProperty",
            AxiomKind::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            AxiomKind::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            AxiomKind::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            AxiomKind::SymmetricObjectProperty => "SymmetricObjectProperty",
            AxiomKind::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            AxiomKind::TransitiveObjectProperty => "TransitiveObjectProperty",
            AxiomKind::FunctionalDataProperty => "FunctionalDataProperty",
            AxiomKind::ClassAssertion => "ClassAssertion",
            AxiomKind::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            AxiomKind::DataPropertyAssertion => "DataPropertyAssertion",
            AxiomKind::NegativeObjectPropertyAssertion => "NegativeObjectPropertyAssertion",
            AxiomKind::NegativeDataPropertyAssertion => "NegativeDataPropertyAssertion",
            AxiomKind::SameIndividual => "SameIndividual",
            AxiomKind::DifferentIndividuals => "DifferentIndividuals",
            AxiomKind::AnnotationAssertion => "AnnotationAssertion",
            AxiomKind::HasKey => "HasKey",
            AxiomKind::DatatypeDefinition => "DatatypeDefinition",
            AxiomKind::Rule => "DLSafeRule",
        }
    }

    pub fn shape(self) -> Shape {
        use AxiomKind::*;
        match self {
            Declaration
            | FunctionalObjectProperty
            | InverseFunctionalObjectProperty
            | ReflexiveObjectProperty
            | IrreflexiveObjectProperty
            | SymmetricObjectProperty
            | AsymmetricObjectProperty
            | TransitiveObjectProperty
            | FunctionalDataProperty => Shape::Unary,
            SubClassOf
            | SubObjectPropertyOf
            | SubDataPropertyOf
            | SubAnnotationPropertyOf
            | InverseObjectProperties
            | ObjectPropertyDomain
            | ObjectPropertyRange
            | DataPropertyDomain
            | DataPropertyRange
            | AnnotationPropertyDomain
            | AnnotationPropertyRange
            | ClassAssertion
            | DatatypeDefinition => Shape::Pair,
            ObjectPropertyAssertion
            | DataPropertyAssertion
            | NegativeObjectPropertyAssertion
            | NegativeDataPropertyAssertion
            | AnnotationAssertion => Shape::Assertion,
            EquivalentClasses
            | DisjointClasses
            | EquivalentObjectProperties
            | EquivalentDataProperties
            | DisjointObjectProperties
            | DisjointDataProperties
            | SameIndividual
            | DifferentIndividuals => Shape::NAry,
            DisjointUnion | SubPropertyChainOf | HasKey => Shape::Keyed,
            Rule => Shape::Rule,
        }
    }

    /// Whether members are compared as a set rather than by triple position.
    pub fn is_symmetric(self) -> bool {
        self.shape() == Shape::NAry || self == AxiomKind::InverseObjectProperties
    }

    /// Axioms gated by `load_annotation_axioms`.
    pub fn is_annotation_axiom(self) -> bool {
        matches!(
            self,
            AxiomKind::AnnotationAssertion
                | AxiomKind::AnnotationPropertyDomain
                | AxiomKind::AnnotationPropertyRange
                | AxiomKind::SubAnnotationPropertyOf
        )
    }
}

impl std::fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One OWL2 logical statement, without annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axiom {
    Declaration(Entity),
    SubClassOf {
        sub: ClassExpression,
        sup: ClassExpression,
    },
    EquivalentClasses(BTreeSet<ClassExpression>),
    DisjointClasses(BTreeSet<ClassExpression>),
    DisjointUnion {
        class: Iri,
        members: BTreeSet<ClassExpression>,
    },
    SubObjectPropertyOf {
        sub: ObjectPropertyExpression,
        sup: ObjectPropertyExpression,
    },
    SubDataPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    SubAnnotationPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    SubPropertyChainOf {
        chain: Vec<ObjectPropertyExpression>,
        sup: ObjectPropertyExpression,
    },
    EquivalentObjectProperties(BTreeSet<ObjectPropertyExpression>),
    EquivalentDataProperties(BTreeSet<Iri>),
    DisjointObjectProperties(BTreeSet<ObjectPropertyExpression>),
    DisjointDataProperties(BTreeSet<Iri>),
    InverseObjectProperties(Iri, Iri),
    ObjectPropertyDomain {
        property: ObjectPropertyExpression,
        domain: ClassExpression,
    },
    ObjectPropertyRange {
        property: ObjectPropertyExpression,
        range: ClassExpression,
    },
    DataPropertyDomain {
        property: Iri,
        domain: ClassExpression,
    },
    DataPropertyRange {
        property: Iri,
        range: DataRange,
    },
    AnnotationPropertyDomain {
        property: Iri,
        domain: Iri,
    },
    AnnotationPropertyRange {
        property: Iri,
        range: Iri,
    },
    FunctionalObjectProperty(ObjectPropertyExpression),
    InverseFunctionalObjectProperty(ObjectPropertyExpression),
    ReflexiveObjectProperty(ObjectPropertyExpression),
    IrreflexiveObjectProperty(ObjectPropertyExpression),
    SymmetricObjectProperty(ObjectPropertyExpression),
    AsymmetricObjectProperty(ObjectPropertyExpression),
    TransitiveObjectProperty(ObjectPropertyExpression),
    FunctionalDataProperty(Iri),
    ClassAssertion {
        class: ClassExpression,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: Iri,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: Iri,
        subject: Individual,
        value: Literal,
    },
    NegativeObjectPropertyAssertion {
        property: ObjectPropertyExpression,
        subject: Individual,
        object: Individual,
    },
    NegativeDataPropertyAssertion {
        property: Iri,
        subject: Individual,
        value: Literal,
    },
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    AnnotationAssertion {
        subject: AnnotationSubject,
        property: Iri,
        value: AnnotationValue,
    },
    HasKey {
        class: ClassExpression,
        object_properties: BTreeSet<ObjectPropertyExpression>,
        data_properties: BTreeSet<Iri>,
    },
    DatatypeDefinition {
        datatype: Iri,
        range: DataRange,
    },
    Rule {
        body: Vec<SwrlAtom>,
        head: Vec<SwrlAtom>,
    },
}

impl Axiom {
    pub fn kind(&self) -> AxiomKind {
        match self {
            Axiom::Declaration(_) => AxiomKind::Declaration,
            Axiom::SubClassOf { .. } => AxiomKind::SubClassOf,
            Axiom::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Axiom::DisjointClasses(_) => AxiomKind::DisjointClasses,
            Axiom::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            Axiom::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Axiom::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Axiom::SubAnnotationPropertyOf { .. } => AxiomKind::SubAnnotationPropertyOf,
            Axiom::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            Axiom::EquivalentObjectProperties(_) => AxiomKind::EquivalentObjectProperties,
            Axiom::EquivalentDataProperties(_) => AxiomKind::EquivalentDataProperties,
            Axiom::DisjointObjectProperties(_) => AxiomKind::DisjointObjectProperties,
            Axiom::DisjointDataProperties(_) => AxiomKind::DisjointDataProperties,
            Axiom::InverseObjectProperties(..) => AxiomKind::InverseObjectProperties,
            Axiom::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Axiom::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            Axiom::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Axiom::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            Axiom::AnnotationPropertyDomain { .. } => AxiomKind::AnnotationPropertyDomain,
            Axiom::AnnotationPropertyRange { .. } => AxiomKind::AnnotationPropertyRange,
            Axiom::FunctionalObjectProperty(_) => AxiomKind::FunctionalObjectProperty,
            Axiom::InverseFunctionalObjectProperty(_) => AxiomKind::InverseFunctionalObjectProperty,
            Axiom::ReflexiveObjectProperty(_) => AxiomKind::ReflexiveObjectProperty,
            Axiom::IrreflexiveObjectProperty(_) => AxiomKind::IrreflexiveObjectProperty,
            Axiom::SymmetricObjectProperty(_) => AxiomKind::SymmetricObjectProperty,
            Axiom::AsymmetricObjectProperty(_) => AxiomKind::AsymmetricObjectProperty,
            Axiom::TransitiveObjectProperty(_) => AxiomKind::TransitiveObjectProperty,
            Axiom::FunctionalDataProperty(_) => AxiomKind::FunctionalDataProperty,
            Axiom::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Axiom::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Axiom::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Axiom::NegativeObjectPropertyAssertion { .. } => {
                AxiomKind::NegativeObjectPropertyAssertion
            }
            Axiom::NegativeDataPropertyAssertion { .. } => AxiomKind::NegativeDataPropertyAssertion,
            Axiom::SameIndividual(_) => AxiomKind::SameIndividual,
            Axiom::DifferentIndividuals(_) => AxiomKind::DifferentIndividuals,
            Axiom::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
            Axiom::HasKey { .. } => AxiomKind::HasKey,
            Axiom::DatatypeDefinition { .. } => AxiomKind::DatatypeDefinition,
            Axiom::Rule { .. } => AxiomKind::Rule,
        }
    }

    /// Structural components in canonical order.
    ///
    /// Ordered shapes list subject before object; set-valued parts come out
    /// sorted, so equal axioms always yield equal component sequences.
    pub fn components(&self) -> Vec<SubObject> {
        use SubObject as S;
        let ope = |p: &ObjectPropertyExpression| S::ObjectProperty(p.clone());
        let named_op = |p: &Iri| S::ObjectProperty(ObjectPropertyExpression::Named(p.clone()));
        let class = |c: &ClassExpression| S::Class(c.clone());
        match self {
            Axiom::Declaration(e) => vec![S::Entity(e.clone())],
            Axiom::SubClassOf { sub, sup } => vec![class(sub), class(sup)],
            Axiom::EquivalentClasses(members) | Axiom::DisjointClasses(members) => {
                members.iter().map(class).collect()
            }
            Axiom::DisjointUnion { class: head, members } => {
                std::iter::once(S::Class(ClassExpression::Class(head.clone())))
                    .chain(members.iter().map(class))
                    .collect()
            }
            Axiom::SubObjectPropertyOf { sub, sup } => vec![ope(sub), ope(sup)],
            Axiom::SubDataPropertyOf { sub, sup } => {
                vec![S::DataProperty(sub.clone()), S::DataProperty(sup.clone())]
            }
            Axiom::SubAnnotationPropertyOf { sub, sup } => vec![
                S::AnnotationProperty(sub.clone()),
                S::AnnotationProperty(sup.clone()),
            ],
            Axiom::SubPropertyChainOf { chain, sup } => {
                std::iter::once(ope(sup)).chain(chain.iter().map(ope)).collect()
            }
            Axiom::EquivalentObjectProperties(members)
            | Axiom::DisjointObjectProperties(members) => members.iter().map(ope).collect(),
            Axiom::EquivalentDataProperties(members) | Axiom::DisjointDataProperties(members) => {
                members.iter().cloned().map(S::DataProperty).collect()
            }
            Axiom::InverseObjectProperties(first, second) => {
                let mut pair = vec![named_op(first), named_op(second)];
                pair.sort();
                pair
            }
            Axiom::ObjectPropertyDomain { property, domain } => vec![ope(property), class(domain)],
            Axiom::ObjectPropertyRange { property, range } => vec![ope(property), class(range)],
            Axiom::DataPropertyDomain { property, domain } => {
                vec![S::DataProperty(property.clone()), class(domain)]
            }
            Axiom::DataPropertyRange { property, range } => {
                vec![S::DataProperty(property.clone()), S::DataRange(range.clone())]
            }
            Axiom::AnnotationPropertyDomain { property, domain } => vec![
                S::AnnotationProperty(property.clone()),
                S::Iri(domain.clone()),
            ],
            Axiom::AnnotationPropertyRange { property, range } => vec![
                S::AnnotationProperty(property.clone()),
                S::Iri(range.clone()),
            ],
            Axiom::FunctionalObjectProperty(p)
            | Axiom::InverseFunctionalObjectProperty(p)
            | Axiom::ReflexiveObjectProperty(p)
            | Axiom::IrreflexiveObjectProperty(p)
            | Axiom::SymmetricObjectProperty(p)
            | Axiom::AsymmetricObjectProperty(p)
            | Axiom::TransitiveObjectProperty(p) => vec![ope(p)],
            Axiom::FunctionalDataProperty(p) => vec![S::DataProperty(p.clone())],
            Axiom::ClassAssertion {
                class: ce,
                individual,
            } => vec![S::Individual(individual.clone()), class(ce)],
            Axiom::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => vec![
                S::Individual(subject.clone()),
                named_op(property),
                S::Individual(object.clone()),
            ],
            Axiom::DataPropertyAssertion {
                property,
                subject,
                value,
            }
            | Axiom::NegativeDataPropertyAssertion {
                property,
                subject,
                value,
            } => vec![
                S::Individual(subject.clone()),
                S::DataProperty(property.clone()),
                S::Literal(value.clone()),
            ],
            Axiom::NegativeObjectPropertyAssertion {
                property,
                subject,
                object,
            } => vec![
                S::Individual(subject.clone()),
                ope(property),
                S::Individual(object.clone()),
            ],
            Axiom::SameIndividual(members) | Axiom::DifferentIndividuals(members) => {
                members.iter().cloned().map(S::Individual).collect()
            }
            Axiom::AnnotationAssertion {
                subject,
                property,
                value,
            } => vec![
                S::AnnotationSubject(subject.clone()),
                S::AnnotationProperty(property.clone()),
                S::AnnotationValue(value.clone()),
            ],
            Axiom::HasKey {
                class: ce,
                object_properties,
                data_properties,
            } => std::iter::once(class(ce))
                .chain(object_properties.iter().map(ope))
                .chain(data_properties.iter().cloned().map(S::DataProperty))
                .collect(),
            Axiom::DatatypeDefinition { datatype, range } => vec![
                S::DataRange(DataRange::Datatype(datatype.clone())),
                S::DataRange(range.clone()),
            ],
            Axiom::Rule { body, head } => vec![S::Atoms(body.clone()), S::Atoms(head.clone())],
        }
    }

    /// The canonical spelling of this axiom.
    ///
    /// `InverseObjectProperties(p, q)` and `(q, p)` state the same thing; the
    /// canonical form lists the smaller IRI first.
    pub fn normalized(self) -> Axiom {
        match self {
            Axiom::InverseObjectProperties(first, second) if second < first => {
                Axiom::InverseObjectProperties(second, first)
            }
            other => other,
        }
    }

    /// Assemble an axiom of `kind` from components in canonical order.
    ///
    /// Inverse of [`Axiom::components`]. The result is validated, so a
    /// successful build is always writable.
    pub fn build(kind: AxiomKind, components: Vec<SubObject>) -> ModelResult<Axiom> {
        let mut c = Cursor::new(kind, components);
        let axiom = match kind {
            AxiomKind::Declaration => Axiom::Declaration(c.entity()?),
            AxiomKind::SubClassOf => Axiom::SubClassOf {
                sub: c.class()?,
                sup: c.class()?,
            },
            AxiomKind::EquivalentClasses => Axiom::EquivalentClasses(c.rest_classes()),
            AxiomKind::DisjointClasses => Axiom::DisjointClasses(c.rest_classes()),
            AxiomKind::DisjointUnion => Axiom::DisjointUnion {
                class: c.named_class()?,
                members: c.rest_classes(),
            },
            AxiomKind::SubObjectPropertyOf => Axiom::SubObjectPropertyOf {
                sub: c.object_property()?,
                sup: c.object_property()?,
            },
            AxiomKind::SubDataPropertyOf => Axiom::SubDataPropertyOf {
                sub: c.data_property()?,
                sup: c.data_property()?,
            },
            AxiomKind::SubAnnotationPropertyOf => Axiom::SubAnnotationPropertyOf {
                sub: c.annotation_property()?,
                sup: c.annotation_property()?,
            },
            AxiomKind::SubPropertyChainOf => {
                let sup = c.object_property()?;
                Axiom::SubPropertyChainOf {
                    chain: c.rest_object_properties(),
                    sup,
                }
            }
            AxiomKind::EquivalentObjectProperties => {
                Axiom::EquivalentObjectProperties(c.rest_object_properties().into_iter().collect())
            }
            AxiomKind::DisjointObjectProperties => {
                Axiom::DisjointObjectProperties(c.rest_object_properties().into_iter().collect())
            }
            AxiomKind::EquivalentDataProperties => {
                Axiom::EquivalentDataProperties(c.rest_data_properties())
            }
            AxiomKind::DisjointDataProperties => {
                Axiom::DisjointDataProperties(c.rest_data_properties())
            }
            AxiomKind::InverseObjectProperties => {
                Axiom::InverseObjectProperties(c.named_object_property()?, c.named_object_property()?)
                    .normalized()
            }
            AxiomKind::ObjectPropertyDomain => Axiom::ObjectPropertyDomain {
                property: c.object_property()?,
                domain: c.class()?,
            },
            AxiomKind::ObjectPropertyRange => Axiom::ObjectPropertyRange {
                property: c.object_property()?,
                range: c.class()?,
            },
            AxiomKind::DataPropertyDomain => Axiom::DataPropertyDomain {
                property: c.data_property()?,
                domain: c.class()?,
            },
            AxiomKind::DataPropertyRange => Axiom::DataPropertyRange {
                property: c.data_property()?,
                range: c.data_range()?,
            },
            AxiomKind::AnnotationPropertyDomain => Axiom::AnnotationPropertyDomain {
                property: c.annotation_property()?,
                domain: c.iri()?,
            },
            AxiomKind::AnnotationPropertyRange => Axiom::AnnotationPropertyRange {
                property: c.annotation_property()?,
                range: c.iri()?,
            },
            AxiomKind::FunctionalObjectProperty => {
                Axiom::FunctionalObjectProperty(c.object_property()?)
            }
            AxiomKind::InverseFunctionalObjectProperty => {
                Axiom::InverseFunctionalObjectProperty(c.object_property()?)
            }
            AxiomKind::ReflexiveObjectProperty => Axiom::ReflexiveObjectProperty(c.object_property()?),
            AxiomKind::IrreflexiveObjectProperty => {
                Axiom::IrreflexiveObjectProperty(c.object_property()?)
            }
            AxiomKind::SymmetricObjectProperty => Axiom::SymmetricObjectProperty(c.object_property()?),
            AxiomKind::AsymmetricObjectProperty => {
                Axiom::AsymmetricObjectProperty(c.object_property()?)
            }
            AxiomKind::TransitiveObjectProperty => {
                Axiom::TransitiveObjectProperty(c.object_property()?)
            }
            AxiomKind::FunctionalDataProperty => Axiom::FunctionalDataProperty(c.data_property()?),
            AxiomKind::ClassAssertion => {
                let individual = c.individual()?;
                Axiom::ClassAssertion {
                    class: c.class()?,
                    individual,
                }
            }
            AxiomKind::ObjectPropertyAssertion => {
                let subject = c.individual()?;
                Axiom::ObjectPropertyAssertion {
                    property: c.named_object_property()?,
                    subject,
                    object: c.individual()?,
                }
            }
            AxiomKind::DataPropertyAssertion => {
                let subject = c.individual()?;
                Axiom::DataPropertyAssertion {
                    property: c.data_property()?,
                    subject,
                    value: c.literal()?,
                }
            }
            AxiomKind::NegativeObjectPropertyAssertion => {
                let subject = c.individual()?;
                Axiom::NegativeObjectPropertyAssertion {
                    property: c.object_property()?,
                    subject,
                    object: c.individual()?,
                }
            }
            AxiomKind::NegativeDataPropertyAssertion => {
                let subject = c.individual()?;
                Axiom::NegativeDataPropertyAssertion {
                    property: c.data_property()?,
                    subject,
                    value: c.literal()?,
                }
            }
            AxiomKind::SameIndividual => Axiom::SameIndividual(c.rest_individuals()),
            AxiomKind::DifferentIndividuals => Axiom::DifferentIndividuals(c.rest_individuals()),
            AxiomKind::AnnotationAssertion => Axiom::AnnotationAssertion {
                subject: c.annotation_subject()?,
                property: c.annotation_property()?,
                value: c.annotation_value()?,
            },
            AxiomKind::HasKey => Axiom::HasKey {
                class: c.class()?,
                object_properties: c.rest_object_properties().into_iter().collect(),
                data_properties: c.rest_data_properties(),
            },
            AxiomKind::DatatypeDefinition => Axiom::DatatypeDefinition {
                datatype: c.datatype()?,
                range: c.data_range()?,
            },
            AxiomKind::Rule => Axiom::Rule {
                body: c.atoms()?,
                head: c.atoms()?,
            },
        };
        c.finish()?;
        axiom.validate()?;
        Ok(axiom)
    }

    /// Check the invariants every writable axiom must satisfy.
    pub fn validate(&self) -> ModelResult<()> {
        let name = self.kind().name();
        match self {
            Axiom::Declaration(_)
            | Axiom::SubDataPropertyOf { .. }
            | Axiom::SubAnnotationPropertyOf { .. }
            | Axiom::InverseObjectProperties(..)
            | Axiom::AnnotationPropertyDomain { .. }
            | Axiom::AnnotationPropertyRange { .. }
            | Axiom::FunctionalObjectProperty(_)
            | Axiom::InverseFunctionalObjectProperty(_)
            | Axiom::ReflexiveObjectProperty(_)
            | Axiom::IrreflexiveObjectProperty(_)
            | Axiom::SymmetricObjectProperty(_)
            | Axiom::AsymmetricObjectProperty(_)
            | Axiom::TransitiveObjectProperty(_)
            | Axiom::FunctionalDataProperty(_)
            | Axiom::ObjectPropertyAssertion { .. }
            | Axiom::DataPropertyAssertion { .. }
            | Axiom::NegativeObjectPropertyAssertion { .. }
            | Axiom::NegativeDataPropertyAssertion { .. }
            | Axiom::AnnotationAssertion { .. }
            | Axiom::SubObjectPropertyOf { .. } => Ok(()),
            Axiom::SubClassOf { sub, sup } => {
                sub.validate()?;
                sup.validate()
            }
            Axiom::EquivalentClasses(members) | Axiom::DisjointClasses(members) => {
                at_least(name, 2, members.len())?;
                members.iter().try_for_each(ClassExpression::validate)
            }
            Axiom::DisjointUnion { members, .. } => {
                at_least(name, 2, members.len())?;
                members.iter().try_for_each(ClassExpression::validate)
            }
            Axiom::SubPropertyChainOf { chain, .. } => at_least(name, 2, chain.len()),
            Axiom::EquivalentObjectProperties(members)
            | Axiom::DisjointObjectProperties(members) => at_least(name, 2, members.len()),
            Axiom::EquivalentDataProperties(members) | Axiom::DisjointDataProperties(members) => {
                at_least(name, 2, members.len())
            }
            Axiom::SameIndividual(members) | Axiom::DifferentIndividuals(members) => {
                at_least(name, 2, members.len())
            }
            Axiom::ObjectPropertyDomain { domain: ce, .. }
            | Axiom::ObjectPropertyRange { range: ce, .. }
            | Axiom::DataPropertyDomain { domain: ce, .. }
            | Axiom::ClassAssertion { class: ce, .. } => ce.validate(),
            Axiom::DataPropertyRange { range, .. } | Axiom::DatatypeDefinition { range, .. } => {
                range.validate()
            }
            Axiom::HasKey {
                class,
                object_properties,
                data_properties,
            } => {
                at_least(name, 1, object_properties.len() + data_properties.len())?;
                class.validate()
            }
            Axiom::Rule { body, head } => {
                at_least(name, 1, body.len() + head.len())?;
                body.iter().chain(head).try_for_each(SwrlAtom::validate)
            }
        }
    }
}

/// An axiom plus its annotations.
///
/// Annotations are a set: equality ignores the order they were attached in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotatedAxiom {
    pub axiom: Axiom,
    pub annotations: BTreeSet<Annotation>,
}

impl AnnotatedAxiom {
    /// The axiom is stored in its [normalized](Axiom::normalized) form.
    pub fn new(axiom: Axiom, annotations: impl IntoIterator<Item = Annotation>) -> Self {
        Self {
            axiom: axiom.normalized(),
            annotations: annotations.into_iter().collect(),
        }
    }

    pub fn kind(&self) -> AxiomKind {
        self.axiom.kind()
    }

    pub fn annotate(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }
}

impl From<Axiom> for AnnotatedAxiom {
    fn from(axiom: Axiom) -> Self {
        Self {
            axiom: axiom.normalized(),
            annotations: BTreeSet::new(),
        }
    }
}

/// Walks a component sequence for [`Axiom::build`].
struct Cursor {
    kind: AxiomKind,
    items: Peekable<std::vec::IntoIter<SubObject>>,
}

macro_rules! take {
    ($name:ident, $variant:ident, $ty:ty, $label:literal) => {
        fn $name(&mut self) -> ModelResult<$ty> {
            match self.items.next() {
                Some(SubObject::$variant(value)) => Ok(value),
                other => Err(self.mismatch($label, other)),
            }
        }
    };
}

impl Cursor {
    fn new(kind: AxiomKind, components: Vec<SubObject>) -> Self {
        Self {
            kind,
            items: components.into_iter().peekable(),
        }
    }

    fn mismatch(&self, expected: &'static str, found: Option<SubObject>) -> ModelError {
        ModelError::ComponentMismatch {
            kind: self.kind.name().to_string(),
            expected,
            found: found.map_or_else(|| "end of components".to_string(), |s| s.label().to_string()),
        }
    }

    take!(entity, Entity, Entity, "entity");
    take!(class, Class, ClassExpression, "class expression");
    take!(object_property, ObjectProperty, ObjectPropertyExpression, "object property expression");
    take!(data_property, DataProperty, Iri, "data property");
    take!(annotation_property, AnnotationProperty, Iri, "annotation property");
    take!(data_range, DataRange, DataRange, "data range");
    take!(individual, Individual, Individual, "individual");
    take!(literal, Literal, Literal, "literal");
    take!(annotation_subject, AnnotationSubject, AnnotationSubject, "annotation subject");
    take!(annotation_value, AnnotationValue, AnnotationValue, "annotation value");
    take!(iri, Iri, Iri, "IRI");
    take!(atoms, Atoms, Vec<SwrlAtom>, "atom list");

    fn named_class(&mut self) -> ModelResult<Iri> {
        match self.items.next() {
            Some(SubObject::Class(ClassExpression::Class(iri))) => Ok(iri),
            other => Err(self.mismatch("named class", other)),
        }
    }

    fn named_object_property(&mut self) -> ModelResult<Iri> {
        match self.items.next() {
            Some(SubObject::ObjectProperty(ObjectPropertyExpression::Named(iri))) => Ok(iri),
            other => Err(self.mismatch("named object property", other)),
        }
    }

    fn datatype(&mut self) -> ModelResult<Iri> {
        match self.items.next() {
            Some(SubObject::DataRange(DataRange::Datatype(iri))) => Ok(iri),
            other => Err(self.mismatch("datatype", other)),
        }
    }

    fn rest_classes(&mut self) -> BTreeSet<ClassExpression> {
        let mut out = BTreeSet::new();
        while let Some(SubObject::Class(_)) = self.items.peek() {
            if let Some(SubObject::Class(ce)) = self.items.next() {
                out.insert(ce);
            }
        }
        out
    }

    /// Remaining object property expressions, in sequence order.
    fn rest_object_properties(&mut self) -> Vec<ObjectPropertyExpression> {
        let mut out = Vec::new();
        while let Some(SubObject::ObjectProperty(_)) = self.items.peek() {
            if let Some(SubObject::ObjectProperty(p)) = self.items.next() {
                out.push(p);
            }
        }
        out
    }

    fn rest_data_properties(&mut self) -> BTreeSet<Iri> {
        let mut out = BTreeSet::new();
        while let Some(SubObject::DataProperty(_)) = self.items.peek() {
            if let Some(SubObject::DataProperty(p)) = self.items.next() {
                out.insert(p);
            }
        }
        out
    }

    fn rest_individuals(&mut self) -> BTreeSet<Individual> {
        let mut out = BTreeSet::new();
        while let Some(SubObject::Individual(_)) = self.items.peek() {
            if let Some(SubObject::Individual(i)) = self.items.next() {
                out.insert(i);
            }
        }
        out
    }

    fn finish(mut self) -> ModelResult<()> {
        match self.items.next() {
            None => Ok(()),
            extra => Err(self.mismatch("end of components", extra)),
        }
    }
}
