//! Graph substrate: RDF terms, triples and the in-memory triple graph.
//!
//! - **Terms** ([`Term`]): IRIs, blank nodes and literals, cheap to clone
//!   (every string is an `Arc<str>`)
//! - **Triples** ([`Triple`]): immutable, structurally compared facts
//! - **Statements** ([`Statement`]): a triple plus an optional annotation
//!   reification root
//! - **Graph** ([`Graph`]): petgraph-backed store with subject, object and
//!   predicate indexes and lazy pattern scans
//!
//! The graph is not internally synchronised. Readers share it immutably and
//! writers need `&mut Graph`; wrap it in [`SharedGraph`] to enforce the
//! single-writer/multi-reader discipline across threads.

pub mod index;
pub mod list;
pub mod roles;
pub mod sparql;

use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::vocab::{rdf, xsd};

pub use index::Graph;

/// A graph shared between readers and one writer.
pub type SharedGraph = Arc<RwLock<Graph>>;

/// An absolute IRI.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iri(Arc<str>);

impl Iri {
    pub fn new(iri: impl AsRef<str>) -> Self {
        Self(Arc::from(iri.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Iri {
    fn from(s: &str) -> Self {
        Iri::new(s)
    }
}

impl From<String> for Iri {
    fn from(s: String) -> Self {
        Iri(Arc::from(s))
    }
}

impl std::fmt::Display for Iri {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// Blank node identifier, stable within one graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlankId(Arc<str>);

impl BlankId {
    /// Create a blank node ID from a label (without the `_:` prefix).
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlankId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// An RDF literal: lexical form, explicit datatype and optional language tag.
///
/// Language-tagged literals always carry `rdf:langString` as datatype, so two
/// literals are equal exactly when all three parts are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Literal {
    lexical: Arc<str>,
    datatype: Iri,
    lang: Option<Arc<str>>,
}

impl Literal {
    /// A plain `xsd:string` literal.
    pub fn string(lexical: impl AsRef<str>) -> Self {
        Self::typed(lexical, Iri::new(xsd::STRING))
    }

    pub fn typed(lexical: impl AsRef<str>, datatype: Iri) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype,
            lang: None,
        }
    }

    /// A language-tagged string; the tag is normalised to lowercase.
    pub fn lang(lexical: impl AsRef<str>, tag: impl AsRef<str>) -> Self {
        Self {
            lexical: Arc::from(lexical.as_ref()),
            datatype: Iri::new(rdf::LANG_STRING),
            lang: Some(Arc::from(tag.as_ref().to_lowercase())),
        }
    }

    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), Iri::new(xsd::INTEGER))
    }

    pub fn non_negative(value: u32) -> Self {
        Self::typed(value.to_string(), Iri::new(xsd::NON_NEGATIVE_INTEGER))
    }

    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), Iri::new(xsd::BOOLEAN))
    }

    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    pub fn language(&self) -> Option<&str> {
        self.lang.as_deref()
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let escaped = self.lexical.replace('\\', "\\\\").replace('"', "\\\"");
        match &self.lang {
            Some(tag) => write!(f, "\"{escaped}\"@{tag}"),
            None => write!(f, "\"{escaped}\"^^{}", self.datatype),
        }
    }
}

/// An RDF term.
///
/// Ordering is IRIs first, then blank nodes, then literals.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Term {
    Iri(Iri),
    Blank(BlankId),
    Literal(Literal),
}

impl Term {
    pub fn iri(iri: impl AsRef<str>) -> Self {
        Term::Iri(Iri::new(iri))
    }

    pub fn blank(label: impl AsRef<str>) -> Self {
        Term::Blank(BlankId::new(label))
    }

    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    pub fn as_blank(&self) -> Option<&BlankId> {
        match self {
            Term::Blank(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(l) => Some(l),
            _ => None,
        }
    }

    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Term::Blank(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    /// Whether this term is the IRI `iri`.
    pub fn is(&self, iri: &str) -> bool {
        matches!(self, Term::Iri(i) if i.as_str() == iri)
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankId> for Term {
    fn from(b: BlankId) -> Self {
        Term::Blank(b)
    }
}

impl From<Literal> for Term {
    fn from(l: Literal) -> Self {
        Term::Literal(l)
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::Blank(b) => b.fmt(f),
            Term::Literal(l) => l.fmt(f),
        }
    }
}

/// A triple (subject, predicate, object).
///
/// Identity is structural: two triples are equal when their three terms are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<Term>, predicate: impl Into<Iri>, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

/// A triple as seen by a translator.
///
/// `root` pins the statement to one `owl:Axiom` reification node; `None` means
/// "all reifications of this triple" (or none exist).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Statement {
    pub triple: Triple,
    pub root: Option<Term>,
}

impl Statement {
    pub fn new(triple: Triple) -> Self {
        Self { triple, root: None }
    }

    pub fn with_root(triple: Triple, root: Term) -> Self {
        Self {
            triple,
            root: Some(root),
        }
    }

    pub fn subject(&self) -> &Term {
        &self.triple.subject
    }

    pub fn predicate(&self) -> &Iri {
        &self.triple.predicate
    }

    pub fn object(&self) -> &Term {
        &self.triple.object
    }
}

impl From<Triple> for Statement {
    fn from(triple: Triple) -> Self {
        Statement::new(triple)
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{} [{root}]", self.triple),
            None => self.triple.fmt(f),
        }
    }
}

/// Back-reference from axiom objects to the graph they were read from.
///
/// A plain handle, never an owning pointer: the graph outlives every axiom
/// object built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(transparent)]
pub struct GraphId(NonZeroU64);

static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(1);

impl GraphId {
    /// Allocate the next process-unique graph ID.
    pub(crate) fn next() -> Self {
        let raw = NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed);
        // Wrapping to zero would take 2^64 graphs; restart from one if it ever happens.
        GraphId(NonZeroU64::new(raw).unwrap_or(NonZeroU64::MIN))
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for GraphId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "graph:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_id_niche_optimization() {
        assert_eq!(
            std::mem::size_of::<Option<GraphId>>(),
            std::mem::size_of::<GraphId>()
        );
    }

    #[test]
    fn graph_ids_are_unique() {
        let a = GraphId::next();
        let b = GraphId::next();
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn language_tags_are_normalised() {
        assert_eq!(Literal::lang("chat", "FR"), Literal::lang("chat", "fr"));
        assert_eq!(Literal::lang("chat", "FR").language(), Some("fr"));
        assert_ne!(Literal::lang("chat", "fr"), Literal::string("chat"));
    }

    #[test]
    fn term_display_is_ntriples_like() {
        assert_eq!(Term::iri("http://x/a").to_string(), "<http://x/a>");
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
        assert_eq!(
            Term::from(Literal::string("a\"b")).to_string(),
            "\"a\\\"b\"^^<http://www.w3.org/2001/XMLSchema#string>"
        );
    }

    #[test]
    fn term_ordering_puts_iris_first() {
        let mut terms = vec![
            Term::from(Literal::string("z")),
            Term::blank("a"),
            Term::iri("http://x/b"),
        ];
        terms.sort();
        assert!(terms[0].is_iri());
        assert!(terms[1].is_blank());
        assert!(terms[2].is_literal());
    }
}
