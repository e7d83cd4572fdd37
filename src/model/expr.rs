//! Class expressions, property expressions, data ranges and individuals.
//!
//! This is the supported subset of the OWL2 grammar. Boolean combinations,
//! enumerations, value restrictions and (qualified) cardinalities are covered
//! for both object and data properties; datatype restrictions with facets and
//! n-ary data restrictions are not.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::graph::{BlankId, Iri, Literal};

/// An object property or the inverse of one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectPropertyExpression {
    Named(Iri),
    Inverse(Iri),
}

impl ObjectPropertyExpression {
    pub fn named(iri: impl Into<Iri>) -> Self {
        Self::Named(iri.into())
    }

    pub fn inverse(iri: impl Into<Iri>) -> Self {
        Self::Inverse(iri.into())
    }

    /// The underlying property IRI.
    pub fn property(&self) -> &Iri {
        match self {
            Self::Named(iri) | Self::Inverse(iri) => iri,
        }
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// A named or anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Individual {
    Named(Iri),
    Anonymous(BlankId),
}

impl Individual {
    pub fn named(iri: impl Into<Iri>) -> Self {
        Self::Named(iri.into())
    }

    pub fn anonymous(label: impl AsRef<str>) -> Self {
        Self::Anonymous(BlankId::new(label))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }
}

/// A data range.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataRange {
    Datatype(Iri),
    OneOf(BTreeSet<Literal>),
    Complement(Box<DataRange>),
    Intersection(BTreeSet<DataRange>),
    Union(BTreeSet<DataRange>),
}

impl DataRange {
    pub fn datatype(iri: impl Into<Iri>) -> Self {
        Self::Datatype(iri.into())
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Datatype(_))
    }

    pub fn validate(&self) -> ModelResult<()> {
        match self {
            DataRange::Datatype(_) => Ok(()),
            DataRange::OneOf(values) => at_least("DataOneOf", 1, values.len()),
            DataRange::Complement(inner) => inner.validate(),
            DataRange::Intersection(ranges) => {
                at_least("DataIntersectionOf", 2, ranges.len())?;
                ranges.iter().try_for_each(DataRange::validate)
            }
            DataRange::Union(ranges) => {
                at_least("DataUnionOf", 2, ranges.len())?;
                ranges.iter().try_for_each(DataRange::validate)
            }
        }
    }
}

/// Which bound a cardinality restriction places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Cardinality {
    Min,
    Max,
    Exact,
}

/// A class expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ClassExpression {
    Class(Iri),
    IntersectionOf(BTreeSet<ClassExpression>),
    UnionOf(BTreeSet<ClassExpression>),
    ComplementOf(Box<ClassExpression>),
    OneOf(BTreeSet<Individual>),
    SomeValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    AllValuesFrom {
        property: ObjectPropertyExpression,
        filler: Box<ClassExpression>,
    },
    HasValue {
        property: ObjectPropertyExpression,
        value: Individual,
    },
    HasSelf(ObjectPropertyExpression),
    ObjectCardinality {
        kind: Cardinality,
        n: u32,
        property: ObjectPropertyExpression,
        filler: Option<Box<ClassExpression>>,
    },
    DataSomeValuesFrom {
        property: Iri,
        range: DataRange,
    },
    DataAllValuesFrom {
        property: Iri,
        range: DataRange,
    },
    DataHasValue {
        property: Iri,
        value: Literal,
    },
    DataCardinality {
        kind: Cardinality,
        n: u32,
        property: Iri,
        range: Option<DataRange>,
    },
}

impl ClassExpression {
    pub fn class(iri: impl Into<Iri>) -> Self {
        Self::Class(iri.into())
    }

    pub fn some(property: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        Self::SomeValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    pub fn all(property: ObjectPropertyExpression, filler: ClassExpression) -> Self {
        Self::AllValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    pub fn and(members: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::IntersectionOf(members.into_iter().collect())
    }

    pub fn or(members: impl IntoIterator<Item = ClassExpression>) -> Self {
        Self::UnionOf(members.into_iter().collect())
    }

    pub fn not(inner: ClassExpression) -> Self {
        Self::ComplementOf(Box::new(inner))
    }

    pub fn is_named(&self) -> bool {
        matches!(self, Self::Class(_))
    }

    pub fn as_class(&self) -> Option<&Iri> {
        match self {
            Self::Class(iri) => Some(iri),
            _ => None,
        }
    }

    /// Check minimum arities throughout the expression tree.
    pub fn validate(&self) -> ModelResult<()> {
        match self {
            ClassExpression::Class(_) | ClassExpression::HasSelf(_) => Ok(()),
            ClassExpression::IntersectionOf(members) => {
                at_least("ObjectIntersectionOf", 2, members.len())?;
                members.iter().try_for_each(ClassExpression::validate)
            }
            ClassExpression::UnionOf(members) => {
                at_least("ObjectUnionOf", 2, members.len())?;
                members.iter().try_for_each(ClassExpression::validate)
            }
            ClassExpression::ComplementOf(inner) => inner.validate(),
            ClassExpression::OneOf(individuals) => at_least("ObjectOneOf", 1, individuals.len()),
            ClassExpression::SomeValuesFrom { filler, .. }
            | ClassExpression::AllValuesFrom { filler, .. } => filler.validate(),
            ClassExpression::HasValue { .. } | ClassExpression::DataHasValue { .. } => Ok(()),
            ClassExpression::ObjectCardinality { filler, .. } => {
                filler.as_deref().map_or(Ok(()), ClassExpression::validate)
            }
            ClassExpression::DataSomeValuesFrom { range, .. }
            | ClassExpression::DataAllValuesFrom { range, .. } => range.validate(),
            ClassExpression::DataCardinality { range, .. } => {
                range.as_ref().map_or(Ok(()), DataRange::validate)
            }
        }
    }
}

pub(crate) fn at_least(kind: &str, min: usize, actual: usize) -> ModelResult<()> {
    if actual < min {
        return Err(ModelError::TooFewMembers {
            kind: kind.to_string(),
            min,
            actual,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(s: &str) -> Iri {
        Iri::new(format!("http://example.org/{s}"))
    }

    #[test]
    fn single_member_union_is_rejected() {
        let ce = ClassExpression::or([ClassExpression::Class(ex("A"))]);
        assert!(matches!(
            ce.validate(),
            Err(ModelError::TooFewMembers { min: 2, actual: 1, .. })
        ));
    }

    #[test]
    fn nested_validation_reaches_fillers() {
        let bad = ClassExpression::some(
            ObjectPropertyExpression::Named(ex("p")),
            ClassExpression::IntersectionOf(BTreeSet::new()),
        );
        assert!(bad.validate().is_err());

        let good = ClassExpression::some(
            ObjectPropertyExpression::Named(ex("p")),
            ClassExpression::and([ClassExpression::Class(ex("A")), ClassExpression::Class(ex("B"))]),
        );
        assert!(good.validate().is_ok());
    }

    #[test]
    fn set_members_are_order_insensitive() {
        let ab = ClassExpression::and([ClassExpression::Class(ex("A")), ClassExpression::Class(ex("B"))]);
        let ba = ClassExpression::and([ClassExpression::Class(ex("B")), ClassExpression::Class(ex("A"))]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn empty_data_one_of_is_rejected() {
        assert!(DataRange::OneOf(BTreeSet::new()).validate().is_err());
        let one = DataRange::OneOf([Literal::integer(1)].into_iter().collect());
        assert!(one.validate().is_ok());
    }
}
