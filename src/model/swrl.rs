//! SWRL rule atoms.

use serde::{Deserialize, Serialize};

use super::expr::{ClassExpression, DataRange, Individual, ObjectPropertyExpression};
use crate::error::ModelResult;
use crate::graph::{Iri, Literal};

/// An individual-valued atom argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IArg {
    Variable(Iri),
    Individual(Individual),
}

/// A data-valued atom argument.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DArg {
    Variable(Iri),
    Literal(Literal),
}

/// One atom of a rule body or head.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SwrlAtom {
    Class {
        class: ClassExpression,
        arg: IArg,
    },
    DataRange {
        range: DataRange,
        arg: DArg,
    },
    ObjectProperty {
        property: ObjectPropertyExpression,
        first: IArg,
        second: IArg,
    },
    DataProperty {
        property: Iri,
        first: IArg,
        second: DArg,
    },
    SameIndividual(IArg, IArg),
    DifferentIndividuals(IArg, IArg),
    BuiltIn {
        builtin: Iri,
        args: Vec<DArg>,
    },
}

impl SwrlAtom {
    pub fn validate(&self) -> ModelResult<()> {
        match self {
            SwrlAtom::Class { class, .. } => class.validate(),
            SwrlAtom::DataRange { range, .. } => range.validate(),
            _ => Ok(()),
        }
    }
}
