//! In-memory triple graph with subject, object and predicate indexes.
//!
//! Uses a `petgraph` stable graph for the structure (nodes are terms, edges
//! carry predicates) plus hash indexes for O(1) node, predicate and triple
//! lookups. Stable indices keep edge handles valid across removals.

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableDiGraph};
use petgraph::visit::EdgeRef;

use super::{BlankId, GraphId, Iri, Term, Triple};

/// In-memory RDF graph.
///
/// Triples are a set: adding a structurally identical triple twice is a no-op.
/// Scans are lazy and borrow the graph, so the graph cannot be mutated while a
/// scan is alive.
pub struct Graph {
    id: GraphId,
    /// The directed graph: nodes are terms, edges carry the predicate.
    graph: StableDiGraph<Term, Iri>,
    /// Term → NodeIndex mapping for O(1) node lookups.
    node_index: HashMap<Term, NodeIndex>,
    /// Predicate → edges carrying it.
    predicate_index: HashMap<Iri, Vec<EdgeIndex>>,
    /// Triple → edge, for set semantics and O(1) containment.
    edges: HashMap<Triple, EdgeIndex>,
    /// Counter for fresh blank node labels.
    next_blank: u64,
    /// Bumped on every successful mutation.
    revision: u64,
}

impl Graph {
    /// Create a new empty graph with a fresh [`GraphId`].
    pub fn new() -> Self {
        Self {
            id: GraphId::next(),
            graph: StableDiGraph::default(),
            node_index: HashMap::new(),
            predicate_index: HashMap::new(),
            edges: HashMap::new(),
            next_blank: 0,
            revision: 0,
        }
    }

    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Mutation counter, used by caches keyed on graph content.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn ensure_node(&mut self, term: &Term) -> NodeIndex {
        if let Some(idx) = self.node_index.get(term) {
            return *idx;
        }
        let idx = self.graph.add_node(term.clone());
        self.node_index.insert(term.clone(), idx);
        idx
    }

    /// Add a triple. Returns `false` if it was already present.
    pub fn add(&mut self, triple: Triple) -> bool {
        if self.edges.contains_key(&triple) {
            return false;
        }
        let subj_idx = self.ensure_node(&triple.subject);
        let obj_idx = self.ensure_node(&triple.object);
        let edge = self
            .graph
            .add_edge(subj_idx, obj_idx, triple.predicate.clone());
        self.predicate_index
            .entry(triple.predicate.clone())
            .or_default()
            .push(edge);
        self.edges.insert(triple, edge);
        self.revision += 1;
        true
    }

    /// Convenience wrapper around [`Graph::add`].
    pub fn insert(
        &mut self,
        subject: impl Into<Term>,
        predicate: impl Into<Iri>,
        object: impl Into<Term>,
    ) -> bool {
        self.add(Triple::new(subject, predicate, object))
    }

    /// Remove a triple. Returns `false` if it was absent.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        let Some(edge) = self.edges.remove(triple) else {
            return false;
        };
        let endpoints = self.graph.edge_endpoints(edge);
        self.graph.remove_edge(edge);
        if let Some((subject, object)) = endpoints {
            self.drop_if_isolated(subject);
            if object != subject {
                self.drop_if_isolated(object);
            }
        }
        if let Some(edges) = self.predicate_index.get_mut(&triple.predicate) {
            edges.retain(|e| *e != edge);
            if edges.is_empty() {
                self.predicate_index.remove(&triple.predicate);
            }
        }
        self.revision += 1;
        true
    }

    fn drop_if_isolated(&mut self, idx: NodeIndex) {
        if self.graph.neighbors_undirected(idx).next().is_some() {
            return;
        }
        if let Some(term) = self.graph.remove_node(idx) {
            self.node_index.remove(&term);
        }
    }

    /// Number of distinct terms in subject or object position.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.edges.contains_key(triple)
    }

    /// Check for a triple without building it first.
    pub fn has(&self, subject: &Term, predicate: &str, object: &Term) -> bool {
        self.find(Some(subject), Some(&Iri::new(predicate)), Some(object))
            .next()
            .is_some()
    }

    fn edge_triple(&self, edge: EdgeIndex) -> Option<Triple> {
        let (src, dst) = self.graph.edge_endpoints(edge)?;
        Some(Triple {
            subject: self.graph.node_weight(src)?.clone(),
            predicate: self.graph.edge_weight(edge)?.clone(),
            object: self.graph.node_weight(dst)?.clone(),
        })
    }

    /// Pattern-filtered scan; `None` positions are wildcards.
    ///
    /// The cheapest index is chosen from the bound positions: subject, then
    /// object, then predicate, then a full edge scan. The iterator is lazy and
    /// can be dropped at any point. Iteration order is unspecified.
    pub fn find<'a>(
        &'a self,
        subject: Option<&Term>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Box<dyn Iterator<Item = Triple> + 'a> {
        let predicate = predicate.cloned();
        let object = object.cloned();

        if let Some(subject) = subject {
            let Some(&idx) = self.node_index.get(subject) else {
                return Box::new(std::iter::empty());
            };
            return Box::new(
                self.graph
                    .edges_directed(idx, Direction::Outgoing)
                    .filter(move |e| predicate.as_ref().is_none_or(|p| e.weight() == p))
                    .filter_map(move |e| self.edge_triple(e.id()))
                    .filter(move |t| object.as_ref().is_none_or(|o| &t.object == o)),
            );
        }

        if let Some(object) = object {
            let Some(&idx) = self.node_index.get(&object) else {
                return Box::new(std::iter::empty());
            };
            return Box::new(
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .filter(move |e| predicate.as_ref().is_none_or(|p| e.weight() == p))
                    .filter_map(move |e| self.edge_triple(e.id())),
            );
        }

        if let Some(predicate) = predicate {
            let Some(edges) = self.predicate_index.get(&predicate) else {
                return Box::new(std::iter::empty());
            };
            return Box::new(edges.iter().filter_map(move |e| self.edge_triple(*e)));
        }

        Box::new(self.graph.edge_indices().filter_map(move |e| self.edge_triple(e)))
    }

    /// All objects for a subject and predicate.
    pub fn objects(&self, subject: &Term, predicate: &str) -> Vec<Term> {
        self.find(Some(subject), Some(&Iri::new(predicate)), None)
            .map(|t| t.object)
            .collect()
    }

    /// The single object for a subject and predicate, if exactly one exists.
    pub fn object(&self, subject: &Term, predicate: &str) -> Option<Term> {
        let mut objects = self.find(Some(subject), Some(&Iri::new(predicate)), None);
        let first = objects.next()?.object;
        match objects.next() {
            Some(_) => None,
            None => Some(first),
        }
    }

    /// All subjects for a predicate and object.
    pub fn subjects(&self, predicate: &str, object: &Term) -> Vec<Term> {
        self.find(None, Some(&Iri::new(predicate)), Some(object))
            .map(|t| t.subject)
            .collect()
    }

    /// All predicates currently in use.
    pub fn predicates(&self) -> Vec<Iri> {
        let mut predicates: Vec<Iri> = self.predicate_index.keys().cloned().collect();
        predicates.sort();
        predicates
    }

    /// Allocate a blank node label not yet used in this graph.
    pub fn fresh_blank(&mut self) -> Term {
        loop {
            self.next_blank += 1;
            let term = Term::Blank(BlankId::new(format!(
                "g{}b{}",
                self.id.get(),
                self.next_blank
            )));
            if !self.node_index.contains_key(&term) {
                return term;
            }
        }
    }

    /// Number of triples.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Lazily iterate every triple.
    pub fn iter(&self) -> impl Iterator<Item = Triple> + '_ {
        self.edges.keys().cloned()
    }

    /// All triples in SPO order.
    pub fn triples(&self) -> Vec<Triple> {
        let mut triples: Vec<Triple> = self.iter().collect();
        triples.sort();
        triples
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        for triple in iter {
            self.add(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        let mut graph = Graph::new();
        graph.extend(iter);
        graph
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("id", &self.id)
            .field("nodes", &self.node_index.len())
            .field("triples", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Literal;

    fn iri(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    fn p(s: &str) -> Iri {
        Iri::new(format!("http://example.org/{s}"))
    }

    #[test]
    fn insert_and_query() {
        let mut g = Graph::new();
        assert!(g.insert(iri("sun"), p("isA"), iri("star")));
        assert_eq!(g.len(), 1);
        assert_eq!(g.objects(&iri("sun"), "http://example.org/isA"), vec![iri("star")]);
        assert_eq!(g.subjects("http://example.org/isA", &iri("star")), vec![iri("sun")]);
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut g = Graph::new();
        assert!(g.insert(iri("a"), p("r"), iri("b")));
        assert!(!g.insert(iri("a"), p("r"), iri("b")));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn find_uses_every_position() {
        let mut g = Graph::new();
        g.insert(iri("a"), p("r"), iri("b"));
        g.insert(iri("a"), p("r"), iri("c"));
        g.insert(iri("a"), p("s"), iri("c"));
        g.insert(iri("d"), p("r"), Literal::string("x"));

        assert_eq!(g.find(Some(&iri("a")), None, None).count(), 3);
        assert_eq!(g.find(Some(&iri("a")), Some(&p("r")), None).count(), 2);
        assert_eq!(g.find(None, Some(&p("r")), Some(&iri("c"))).count(), 1);
        assert_eq!(g.find(None, Some(&p("r")), None).count(), 3);
        assert_eq!(g.find(None, None, Some(&iri("c"))).count(), 2);
        assert_eq!(g.find(None, None, None).count(), 4);
        assert_eq!(g.find(Some(&iri("zzz")), None, None).count(), 0);
    }

    #[test]
    fn remove_updates_indexes() {
        let mut g = Graph::new();
        let t = Triple::new(iri("a"), p("r"), iri("b"));
        g.add(t.clone());
        assert!(g.remove(&t));
        assert!(!g.remove(&t));
        assert!(g.is_empty());
        assert_eq!(g.find(None, Some(&p("r")), None).count(), 0);
        assert!(g.predicates().is_empty());
    }

    #[test]
    fn removing_the_last_edge_drops_the_node() {
        let mut g = Graph::new();
        let shared = Triple::new(iri("a"), p("r"), iri("b"));
        g.add(shared.clone());
        for _ in 0..100 {
            let blank = g.fresh_blank();
            let t = Triple::new(iri("a"), p("r"), blank);
            g.add(t.clone());
            g.remove(&t);
        }
        assert_eq!(g.node_count(), 2);

        g.remove(&shared);
        assert_eq!(g.node_count(), 0);
        g.add(shared.clone());
        assert!(g.contains(&shared));
        assert_eq!(g.find(Some(&iri("a")), None, None).count(), 1);
    }

    #[test]
    fn single_object_requires_uniqueness() {
        let mut g = Graph::new();
        g.insert(iri("a"), p("r"), iri("b"));
        assert_eq!(g.object(&iri("a"), "http://example.org/r"), Some(iri("b")));
        g.insert(iri("a"), p("r"), iri("c"));
        assert_eq!(g.object(&iri("a"), "http://example.org/r"), None);
    }

    #[test]
    fn fresh_blanks_never_collide() {
        let mut g = Graph::new();
        let a = g.fresh_blank();
        g.insert(a.clone(), p("r"), iri("x"));
        let b = g.fresh_blank();
        assert_ne!(a, b);
        assert!(a.is_blank() && b.is_blank());
    }

    #[test]
    fn revision_tracks_mutations() {
        let mut g = Graph::new();
        let r0 = g.revision();
        g.insert(iri("a"), p("r"), iri("b"));
        g.insert(iri("a"), p("r"), iri("b"));
        assert_eq!(g.revision(), r0 + 1);
    }
}
