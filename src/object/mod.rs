//! Axiom objects: graph-backed, two-tier materializations of axioms.
//!
//! - [`SimpleAxiom`]: the overwhelmingly common case, an unannotated axiom
//!   between named entities. Stores only its kind, graph handle and triple;
//!   components are re-derived from the triple when asked for.
//! - [`ComplexAxiom`]: anything with annotations or anonymous parts. Owns a
//!   compute-once content array (components followed by annotations) and the
//!   hash computed while that array was built.
//!
//! Both tiers hash, compare and order by logical content, so a Simple object
//! and a Complex object for the same axiom are equal and hash alike.

mod simple;

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::ModelResult;
use crate::graph::{GraphId, Statement, Triple};
use crate::model::{AnnotatedAxiom, Annotation, Axiom, AxiomKind, Shape, SubObject};

pub(crate) use simple::simple_axiom;

/// One slot of a Complex object's content array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Content {
    Object(SubObject),
    Annotation(Annotation),
}

/// Hash of a single value, stable for the lifetime of the process.
fn stable_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Fold one part into a running hash: `h * 31 + x`, wrapping.
pub fn mix(acc: u64, part: u64) -> u64 {
    acc.wrapping_mul(31).wrapping_add(part)
}

/// Combined hash of an axiom: kind seed, then components, then annotations.
pub fn combine<'a>(
    kind: AxiomKind,
    components: impl IntoIterator<Item = &'a SubObject>,
    annotations: impl IntoIterator<Item = &'a Annotation>,
) -> u64 {
    let seed = kind.hash_index();
    let acc = components
        .into_iter()
        .fold(seed, |acc, c| mix(acc, stable_hash(c)));
    annotations
        .into_iter()
        .fold(acc, |acc, a| mix(acc, stable_hash(a)))
}

/// An unannotated axiom between named nodes, held as its triple.
#[derive(Debug, Clone)]
pub struct SimpleAxiom {
    kind: AxiomKind,
    graph: GraphId,
    triple: Triple,
}

impl SimpleAxiom {
    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    fn components(&self) -> Vec<SubObject> {
        simple_axiom(self.kind, &self.triple)
            .map(|axiom| axiom.components())
            .unwrap_or_default()
    }
}

/// An annotated or partly anonymous axiom with a cached content array.
#[derive(Debug, Clone)]
pub struct ComplexAxiom {
    kind: AxiomKind,
    graph: GraphId,
    statement: Statement,
    hash: u64,
    content: OnceLock<Arc<[Content]>>,
}

impl ComplexAxiom {
    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    /// Drop the cached content; it is rebuilt by the next reload.
    pub(crate) fn invalidate(&mut self) {
        self.content = OnceLock::new();
    }

    /// Store freshly computed content if the cell is empty.
    pub(crate) fn fill(&self, content: Arc<[Content]>) {
        let _ = self.content.set(content);
    }

    /// Take over the content and hash of a fresh read of the same statement.
    pub(crate) fn reload_from(&mut self, fresh: ComplexAxiom) {
        self.invalidate();
        self.hash = fresh.hash;
        if let Some(content) = fresh.content.into_inner() {
            self.fill(content);
        }
    }

    fn slots(&self) -> &[Content] {
        self.content.get().map_or(&[], |c| &c[..])
    }
}

/// Memoized content access.
pub trait HasContentCache {
    /// The cached content array, if it has been computed.
    fn cached_content(&self) -> Option<&[Content]>;

    fn is_loaded(&self) -> bool {
        self.cached_content().is_some()
    }
}

impl HasContentCache for ComplexAxiom {
    fn cached_content(&self) -> Option<&[Content]> {
        self.content.get().map(|c| &c[..])
    }
}

/// Axioms with a distinguished subject and object (pairs and assertions).
pub trait HasTwoTerms {
    fn subject(&self) -> Option<SubObject>;
    fn object(&self) -> Option<SubObject>;
}

/// Axioms with a member collection (n-ary and list-based shapes).
pub trait HasManyTerms {
    fn members(&self) -> Vec<SubObject>;
}

/// A materialized axiom.
#[derive(Debug, Clone)]
pub enum AxiomObject {
    Simple(SimpleAxiom),
    Complex(ComplexAxiom),
}

/// Build an axiom object from its statement, components and annotations.
///
/// Components must be in canonical order (as produced by
/// [`Axiom::components`]). Content and hash are computed in a single pass; if
/// `simple_ok` holds and the pass finds no annotations and only named
/// components, the Simple tier is kept and the content dropped. Otherwise a
/// Complex object takes over the already computed hash.
pub fn materialize(
    kind: AxiomKind,
    graph: GraphId,
    statement: Statement,
    components: Vec<SubObject>,
    annotations: BTreeSet<Annotation>,
    simple_ok: bool,
) -> AxiomObject {
    let mut hash = kind.hash_index();
    let mut all_named = true;
    let mut content = Vec::with_capacity(components.len() + annotations.len());
    for component in components {
        hash = mix(hash, stable_hash(&component));
        all_named &= component.is_named();
        content.push(Content::Object(component));
    }
    let annotated = !annotations.is_empty();
    for annotation in annotations {
        hash = mix(hash, stable_hash(&annotation));
        content.push(Content::Annotation(annotation));
    }

    if simple_ok && all_named && !annotated && statement.root.is_none() {
        return AxiomObject::Simple(SimpleAxiom {
            kind,
            graph,
            triple: statement.triple,
        });
    }

    AxiomObject::Complex(ComplexAxiom {
        kind,
        graph,
        statement,
        hash,
        content: OnceLock::from(Arc::<[Content]>::from(content)),
    })
}

impl AxiomObject {
    pub fn kind(&self) -> AxiomKind {
        match self {
            AxiomObject::Simple(s) => s.kind,
            AxiomObject::Complex(c) => c.kind,
        }
    }

    /// Handle of the graph this object was read from or written to.
    pub fn graph(&self) -> GraphId {
        match self {
            AxiomObject::Simple(s) => s.graph,
            AxiomObject::Complex(c) => c.graph,
        }
    }

    pub fn triple(&self) -> &Triple {
        match self {
            AxiomObject::Simple(s) => &s.triple,
            AxiomObject::Complex(c) => &c.statement.triple,
        }
    }

    pub fn statement(&self) -> Statement {
        match self {
            AxiomObject::Simple(s) => Statement::new(s.triple.clone()),
            AxiomObject::Complex(c) => c.statement.clone(),
        }
    }

    pub fn is_simple(&self) -> bool {
        matches!(self, AxiomObject::Simple(_))
    }

    /// Structural components in canonical order.
    pub fn components(&self) -> Vec<SubObject> {
        match self {
            AxiomObject::Simple(s) => s.components(),
            AxiomObject::Complex(c) => c
                .slots()
                .iter()
                .filter_map(|slot| match slot {
                    Content::Object(o) => Some(o.clone()),
                    Content::Annotation(_) => None,
                })
                .collect(),
        }
    }

    pub fn annotations(&self) -> BTreeSet<Annotation> {
        match self {
            AxiomObject::Simple(_) => BTreeSet::new(),
            AxiomObject::Complex(c) => c
                .slots()
                .iter()
                .filter_map(|slot| match slot {
                    Content::Annotation(a) => Some(a.clone()),
                    Content::Object(_) => None,
                })
                .collect(),
        }
    }

    /// The content array; Simple objects compute it on the fly.
    pub fn content(&self) -> Vec<Content> {
        match self {
            AxiomObject::Simple(s) => s.components().into_iter().map(Content::Object).collect(),
            AxiomObject::Complex(c) => c.slots().to_vec(),
        }
    }

    /// Hash over kind, components and annotations.
    pub fn hash_code(&self) -> u64 {
        match self {
            AxiomObject::Simple(s) => combine(s.kind, &s.components(), &[]),
            AxiomObject::Complex(c) => c.hash,
        }
    }

    /// The property of an assertion-shaped axiom.
    pub fn property(&self) -> Option<SubObject> {
        match self.kind().shape() {
            Shape::Assertion => self.components().into_iter().nth(1),
            _ => None,
        }
    }

    /// Rebuild the axiom value with its annotations.
    pub fn axiom(&self) -> ModelResult<AnnotatedAxiom> {
        let axiom = Axiom::build(self.kind(), self.components())?;
        Ok(AnnotatedAxiom {
            axiom,
            annotations: self.annotations(),
        })
    }
}

impl HasTwoTerms for AxiomObject {
    fn subject(&self) -> Option<SubObject> {
        match self.kind().shape() {
            Shape::Unary | Shape::Pair | Shape::Assertion | Shape::Keyed => {
                self.components().into_iter().next()
            }
            Shape::NAry | Shape::Rule => None,
        }
    }

    fn object(&self) -> Option<SubObject> {
        match self.kind().shape() {
            Shape::Pair => self.components().into_iter().nth(1),
            Shape::Assertion => self.components().into_iter().nth(2),
            Shape::Unary | Shape::NAry | Shape::Keyed | Shape::Rule => None,
        }
    }
}

impl HasManyTerms for AxiomObject {
    fn members(&self) -> Vec<SubObject> {
        match self.kind().shape() {
            Shape::NAry => self.components(),
            Shape::Keyed => self.components().into_iter().skip(1).collect(),
            _ => Vec::new(),
        }
    }
}

impl PartialEq for AxiomObject {
    fn eq(&self, other: &Self) -> bool {
        if self.kind() != other.kind() {
            return false;
        }
        match (self, other) {
            (AxiomObject::Simple(a), AxiomObject::Simple(b)) => {
                a.triple == b.triple || (a.kind.is_symmetric() && a.components() == b.components())
            }
            (AxiomObject::Complex(a), AxiomObject::Complex(b)) => {
                a.hash == b.hash && a.slots() == b.slots()
            }
            _ => {
                self.hash_code() == other.hash_code()
                    && self.components() == other.components()
                    && self.annotations() == other.annotations()
            }
        }
    }
}

impl Eq for AxiomObject {}

impl Hash for AxiomObject {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl PartialOrd for AxiomObject {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AxiomObject {
    fn cmp(&self, other: &Self) -> Ordering {
        self.kind()
            .cmp(&other.kind())
            .then_with(|| self.components().cmp(&other.components()))
            .then_with(|| self.annotations().cmp(&other.annotations()))
    }
}

impl std::fmt::Display for AxiomObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tier = if self.is_simple() { "simple" } else { "complex" };
        write!(f, "{}[{tier}] {}", self.kind(), self.triple())
    }
}
