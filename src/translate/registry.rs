//! Registry of one translator per axiom kind.

use std::sync::OnceLock;

use super::AxiomTranslator;
use super::assertion::Assertion;
use super::list_based::ListBased;
use super::nary::{Collection, Pairwise};
use super::negative::Negative;
use super::pair::Pair;
use super::rule::Rule;
use super::typed::{Characteristic, Declaration};
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::factory::ObjectFactory;
use crate::graph::{Graph, Statement};
use crate::model::{AnnotatedAxiom, AxiomKind};
use crate::object::AxiomObject;

/// All translators, ordered by [`AxiomKind`].
pub struct TranslatorRegistry {
    translators: Vec<Box<dyn AxiomTranslator>>,
}

fn boxed<T: AxiomTranslator + 'static>(
    translators: Vec<T>,
) -> impl Iterator<Item = Box<dyn AxiomTranslator>> {
    translators
        .into_iter()
        .map(|t| Box::new(t) as Box<dyn AxiomTranslator>)
}

impl TranslatorRegistry {
    pub fn new() -> Self {
        let mut translators: Vec<Box<dyn AxiomTranslator>> =
            vec![Box::new(Declaration), Box::new(Rule)];
        translators.extend(boxed(Characteristic::all()));
        translators.extend(boxed(Pair::all()));
        translators.extend(boxed(Assertion::all()));
        translators.extend(boxed(Collection::all()));
        translators.extend(boxed(Pairwise::all()));
        translators.extend(boxed(ListBased::all()));
        translators.extend(boxed(Negative::all()));
        translators.sort_by_key(|t| t.kind());
        Self { translators }
    }

    /// Process-wide registry. Translators are stateless, so one instance serves every graph.
    pub fn global() -> &'static TranslatorRegistry {
        static REGISTRY: OnceLock<TranslatorRegistry> = OnceLock::new();
        REGISTRY.get_or_init(TranslatorRegistry::new)
    }

    pub fn get(&self, kind: AxiomKind) -> Option<&dyn AxiomTranslator> {
        self.translators
            .binary_search_by_key(&kind, |t| t.kind())
            .ok()
            .map(|i| self.translators[i].as_ref())
    }

    pub fn translators(&self) -> impl Iterator<Item = &dyn AxiomTranslator> {
        self.translators.iter().map(|t| t.as_ref())
    }

    /// Statements representing axioms of `kind`.
    pub fn statements(&self, kind: AxiomKind, graph: &Graph, config: &AxiomsConfig) -> Vec<Statement> {
        self.get(kind)
            .map(|t| t.scan(graph, config).collect())
            .unwrap_or_default()
    }

    /// Every kind whose translator accepts `statement`.
    ///
    /// Usually one. `rdf:type` triples under lax punning can match several.
    pub fn kinds_matching(
        &self,
        graph: &Graph,
        statement: &Statement,
        config: &AxiomsConfig,
    ) -> Vec<AxiomKind> {
        self.translators()
            .filter(|t| t.matches(graph, statement, config))
            .map(|t| t.kind())
            .collect()
    }

    /// Axiom objects of one kind, sorted.
    ///
    /// A statement that fails to build aborts the read unless
    /// `config.ignore_read_errors` is set, in which case it is logged and skipped.
    pub fn read_kind(
        &self,
        kind: AxiomKind,
        graph: &Graph,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<AxiomObject>> {
        let Some(translator) = self.get(kind) else {
            return Ok(Vec::new());
        };
        let mut objects = Vec::new();
        for statement in translator.scan(graph, config) {
            match translator.to_axiom(graph, &statement, factory, config) {
                Ok(object) => objects.push(object),
                Err(e) if config.ignore_read_errors => {
                    tracing::warn!(kind = %kind, statement = %statement, error = %e, "skipping unreadable axiom");
                }
                Err(e) => return Err(e),
            }
        }
        objects.sort();
        tracing::trace!(kind = %kind, count = objects.len(), "read axioms");
        Ok(objects)
    }

    /// Axiom objects of every kind, sorted.
    pub fn read_all(
        &self,
        graph: &Graph,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<Vec<AxiomObject>> {
        let mut objects = Vec::new();
        for translator in self.translators() {
            objects.extend(self.read_kind(translator.kind(), graph, factory, config)?);
        }
        objects.sort();
        tracing::debug!(
            graph = %graph.id(),
            triples = graph.len(),
            axioms = objects.len(),
            "read graph"
        );
        Ok(objects)
    }

    /// Write `axiom` with the translator for its kind.
    pub fn write(&self, axiom: &AnnotatedAxiom, graph: &mut Graph) -> TranslateResult<Vec<Statement>> {
        match self.get(axiom.kind()) {
            Some(translator) => translator.write(axiom, graph),
            None => Err(super::write_invariant(axiom.kind(), "no translator registered")),
        }
    }

    pub fn write_all<'a>(
        &self,
        axioms: impl IntoIterator<Item = &'a AnnotatedAxiom>,
        graph: &mut Graph,
    ) -> TranslateResult<Vec<Statement>> {
        let mut written = Vec::new();
        for axiom in axioms {
            written.extend(self.write(axiom, graph)?);
        }
        Ok(written)
    }

    /// Re-read `object` from its statement after the graph changed.
    ///
    /// A complex object keeps its identity and drops its cached content in
    /// favour of the fresh read; a simple one is replaced.
    pub fn refresh(
        &self,
        object: &mut AxiomObject,
        graph: &Graph,
        factory: &dyn ObjectFactory,
        config: &AxiomsConfig,
    ) -> TranslateResult<()> {
        let kind = object.kind();
        let Some(translator) = self.get(kind) else {
            return Ok(());
        };
        let fresh = translator.to_axiom(graph, &object.statement(), factory, config)?;
        match (object, fresh) {
            (AxiomObject::Complex(current), AxiomObject::Complex(fresh)) => current.reload_from(fresh),
            (object, fresh) => *object = fresh,
        }
        Ok(())
    }
}

impl Default for TranslatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
