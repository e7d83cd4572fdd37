//! Translators between graph triples and axiom objects.
//!
//! Each supported [`AxiomKind`] has one translator implementing the
//! four-operation [`AxiomTranslator`] contract:
//!
//! - `scan`: lazily enumerate statements that represent an axiom of the kind
//! - `matches`: point test for a single statement, consistent with `scan`
//! - `to_axiom`: build the [`AxiomObject`] for a matching statement
//! - `write`: emit the triples for an axiom value, annotations included
//!
//! Translators are grouped into families by graph layout (type-tagged,
//! fixed-predicate pair, property assertion, n-ary, list-based, reified
//! negative assertion, SWRL rule). A family describes how to find, recognise,
//! decompose and emit its layout; the shared driver below turns that into the
//! public contract, so every kind validates, materializes, annotates and
//! deduplicates the same way.
//!
//! Translators are stateless and `Send + Sync`. They assume the caller holds a
//! read lock on the graph for any scan/match/build sequence and a write lock
//! around `write`.

pub mod annotations;
mod assertion;
mod family;
mod list_based;
mod nary;
mod negative;
mod pair;
mod registry;
mod render;
mod rule;
mod typed;

pub use registry::TranslatorRegistry;

use crate::config::AxiomsConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::factory::ObjectFactory;
use crate::graph::roles::{Role, can_as};
use crate::graph::{Graph, Statement, Term, Triple};
use crate::model::{AnnotatedAxiom, AxiomKind};
use crate::object::AxiomObject;

/// Per-kind recogniser, constructor and serializer.
pub trait AxiomTranslator: Send + Sync {
    fn kind(&self) -> AxiomKind;

    /// Statements in `graph` representing an axiom of this kind.
    ///
    /// Lazy and restartable; every yielded statement satisfies [`matches`].
    /// Yields nothing when the kind is disabled by `config`.
    ///
    /// [`matches`]: AxiomTranslator::matches
    fn scan<'a>(
        &'a self,
        graph: &'a Graph,
        config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Statement> + 'a>;

    /// Whether `statement` represents an axiom of this kind.
    fn matches(&self, graph: &Graph, statement: &Statement, config: &AxiomsConfig) -> bool;

    /// Build the axiom object for `statement`. Never mutates the graph.
    fn to_axiom(
        &self,
        graph: &Graph,
        statement: &Statement,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<AxiomObject>;

    /// Emit `axiom` into `graph` and return the statements now carrying it.
    ///
    /// Additive only. Core triples already present are reused rather than
    /// duplicated; annotations always get fresh reification structure.
    /// Nothing is written when validation fails.
    fn write(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Statement>>;
}

pub(crate) fn malformed(kind: AxiomKind, triple: &Triple, reason: impl Into<String>) -> TranslateError {
    TranslateError::Malformed {
        kind: kind.name().into(),
        statement: triple.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn write_invariant(kind: AxiomKind, reason: impl Into<String>) -> TranslateError {
    TranslateError::WriteInvariant {
        kind: kind.name().into(),
        reason: reason.into(),
    }
}

/// `Ok` when `term` can play `role`, otherwise a rejection reason.
pub(crate) fn expect_role(
    graph: &Graph,
    term: &Term,
    role: Role,
    config: &AxiomsConfig,
) -> Result<(), String> {
    if can_as(graph, term, role, config) {
        Ok(())
    } else {
        Err(format!("{term} cannot be read as {role:?}"))
    }
}

/// Lazily find triples with a fixed predicate and optional fixed object.
pub(crate) fn with_predicate<'a>(
    graph: &'a Graph,
    predicate: &str,
    object: Option<&str>,
) -> Box<dyn Iterator<Item = Triple> + 'a> {
    let predicate = crate::graph::Iri::new(predicate);
    let object = object.map(Term::iri);
    graph.find(None, Some(&predicate), object.as_ref())
}
