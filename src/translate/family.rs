//! The family driver: one blanket [`AxiomTranslator`] impl for every layout.

use super::{AxiomTranslator, annotations, malformed, write_invariant};
use crate::config::AxiomsConfig;
use crate::error::{TranslateError, TranslateResult};
use crate::factory::{GraphObjectFactory, ObjectFactory};
use crate::graph::{Graph, Statement, Triple};
use crate::model::{AnnotatedAxiom, Axiom, AxiomKind, SubObject};
use crate::object::{AxiomObject, materialize, simple_axiom};

/// Graph layout of one axiom kind.
pub trait Family: Send + Sync {
    fn kind(&self) -> AxiomKind;

    /// Triples worth testing with [`Family::recognise`]; a cheap superset.
    fn candidates<'a>(
        &'a self,
        graph: &'a Graph,
        config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Triple> + 'a>;

    /// Cheap structural check. `Err` carries the reason for rejection.
    fn recognise(&self, graph: &Graph, triple: &Triple, config: &AxiomsConfig)
    -> Result<(), String>;

    /// Structural components in any order [`Axiom::build`] accepts.
    fn components(
        &self,
        graph: &Graph,
        triple: &Triple,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<SubObject>>;

    /// Write the core triples of an already validated axiom.
    ///
    /// Returns the triples annotations attach to. Implementations inspect the
    /// value fully before inserting anything.
    fn emit(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Triple>>;

    fn enabled(&self, config: &AxiomsConfig) -> bool {
        !self.kind().is_annotation_axiom() || config.load_annotation_axioms
    }

    /// Whether `matches` must go as far as building the axiom.
    ///
    /// Needed whenever the statement reaches anonymous structure that the
    /// cheap check does not cover.
    fn needs_deep_check(&self, triple: &Triple) -> bool {
        !triple.subject.is_iri() || triple.object.is_blank()
    }

    /// Whether emitting allocates fresh nodes, so an equal axiom already in
    /// the graph must be looked up instead of relying on triple identity.
    fn allocates(&self, axiom: &AnnotatedAxiom) -> bool {
        axiom.axiom.components().iter().any(|c| !c.is_named())
    }

    /// Whether `triple` has the layout `emit` would produce for `axiom`.
    fn written_form(&self, _axiom: &AnnotatedAxiom, _triple: &Triple) -> bool {
        true
    }
}

impl<F: Family> AxiomTranslator for F {
    fn kind(&self) -> AxiomKind {
        Family::kind(self)
    }

    fn scan<'a>(
        &'a self,
        graph: &'a Graph,
        config: &'a AxiomsConfig,
    ) -> Box<dyn Iterator<Item = Statement> + 'a> {
        if !self.enabled(config) {
            return Box::new(std::iter::empty());
        }
        Box::new(
            self.candidates(graph, config)
                .flat_map(move |triple| annotations::expand(graph, triple, config))
                .filter(move |statement| self.matches(graph, statement, config)),
        )
    }

    fn matches(&self, graph: &Graph, statement: &Statement, config: &AxiomsConfig) -> bool {
        if !self.enabled(config) || self.recognise(graph, &statement.triple, config).is_err() {
            return false;
        }
        if let Some(root) = &statement.root
            && !annotations::is_root_of(graph, root, &statement.triple)
        {
            return false;
        }
        if self.needs_deep_check(&statement.triple) {
            let factory = GraphObjectFactory::new();
            return self.to_axiom(graph, statement, &factory, config).is_ok();
        }
        true
    }

    fn to_axiom(
        &self,
        graph: &Graph,
        statement: &Statement,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<AxiomObject> {
        let kind = Family::kind(self);
        let triple = &statement.triple;
        if !self.enabled(config) {
            return Err(malformed(kind, triple, "kind is disabled by configuration"));
        }
        self.recognise(graph, triple, config)
            .map_err(|reason| malformed(kind, triple, reason))?;
        if let Some(root) = &statement.root
            && !annotations::is_root_of(graph, root, triple)
        {
            return Err(TranslateError::MissingStructure {
                kind: kind.name().into(),
                statement: statement.to_string(),
                what: format!("owl:Axiom reification {root}"),
            });
        }

        let candidate = simple_axiom(kind, triple);
        let axiom = Axiom::build(kind, self.components(graph, triple, factory, config)?)?;
        let annotations = factory.annotations_of(graph, statement, config)?;
        let simple_ok = candidate.is_some_and(|c| c == axiom);
        Ok(materialize(
            kind,
            graph.id(),
            statement.clone(),
            axiom.components(),
            annotations,
            simple_ok,
        ))
    }

    fn write(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Statement>> {
        let kind = Family::kind(self);
        if axiom.kind() != kind {
            return Err(write_invariant(
                kind,
                format!("translator cannot write a {} axiom", axiom.kind()),
            ));
        }
        axiom
            .axiom
            .validate()
            .map_err(|e| write_invariant(kind, e.to_string()))?;

        let reused = if self.allocates(axiom) && axiom.annotations.is_empty() {
            existing(self, graph, axiom)
        } else {
            None
        };
        let reuse = reused.is_some();
        let anchors = match reused {
            Some(anchors) => anchors,
            None => self.emit(axiom, graph)?,
        };
        let mut written = Vec::with_capacity(anchors.len());
        for anchor in anchors {
            annotations::write_annotations(graph, &anchor, &axiom.annotations);
            written.push(Statement::new(anchor));
        }
        tracing::trace!(kind = %kind, statements = written.len(), reuse, "wrote axiom");
        Ok(written)
    }
}

/// Core triples of an unannotated axiom equal to `axiom` already in `graph`.
///
/// Only structures laid out the way `emit` would write them and carrying no
/// annotations of their own qualify.
fn existing<F: Family>(family: &F, graph: &Graph, axiom: &AnnotatedAxiom) -> Option<Vec<Triple>> {
    let config = AxiomsConfig::default();
    let factory = GraphObjectFactory::new();
    family
        .candidates(graph, &config)
        .filter(|t| family.written_form(axiom, t))
        .filter(|t| family.recognise(graph, t, &config).is_ok())
        .filter(|t| {
            annotations::read_annotations(graph, &Statement::new(t.clone()), &config)
                .is_ok_and(|found| found.is_empty())
        })
        .find(|t| {
            family
                .components(graph, t, &factory, &config)
                .and_then(|c| Ok(Axiom::build(axiom.kind(), c)?))
                .is_ok_and(|found| found == axiom.axiom)
        })
        .map(|t| vec![t])
}
