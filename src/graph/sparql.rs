//! SPARQL mirror of a [`Graph`] backed by oxigraph.
//!
//! The mirror is a read-only, in-memory snapshot: it copies every triple of a
//! graph into an oxigraph `Store` so emitted layouts (reified annotations,
//! lists, collection nodes) can be inspected with standard SPARQL.

use oxigraph::model::{BlankNode, GraphName, Literal as OxLiteral, NamedNode, Quad};
use oxigraph::sparql::{QueryResults, SparqlEvaluator};
use oxigraph::store::Store;

use crate::error::{GraphError, GraphResult};

use super::{Graph, Term, Triple};

/// A SPARQL-queryable snapshot of a graph.
pub struct SparqlMirror {
    store: Store,
}

impl SparqlMirror {
    /// Copy every triple of `graph` into a fresh in-memory store.
    pub fn from_graph(graph: &Graph) -> GraphResult<Self> {
        let store = Store::new().map_err(|e| GraphError::Sparql {
            message: format!("failed to create oxigraph store: {e}"),
        })?;
        let mirror = Self { store };
        for triple in graph.iter() {
            mirror.insert(&triple)?;
        }
        tracing::debug!(triples = graph.len(), graph = %graph.id(), "built SPARQL mirror");
        Ok(mirror)
    }

    fn named(iri: &str, position: &'static str) -> GraphResult<NamedNode> {
        NamedNode::new(iri).map_err(|_| GraphError::InvalidTerm {
            term: iri.to_string(),
            position,
        })
    }

    fn blank(label: &str, position: &'static str) -> GraphResult<BlankNode> {
        BlankNode::new(label).map_err(|_| GraphError::InvalidTerm {
            term: format!("_:{label}"),
            position,
        })
    }

    fn object(term: &Term) -> GraphResult<oxigraph::model::Term> {
        Ok(match term {
            Term::Iri(iri) => Self::named(iri.as_str(), "object")?.into(),
            Term::Blank(b) => Self::blank(b.as_str(), "object")?.into(),
            Term::Literal(lit) => match lit.language() {
                Some(tag) => OxLiteral::new_language_tagged_literal(lit.lexical(), tag)
                    .map_err(|_| GraphError::InvalidTerm {
                        term: lit.to_string(),
                        position: "object",
                    })?
                    .into(),
                None => OxLiteral::new_typed_literal(
                    lit.lexical(),
                    Self::named(lit.datatype().as_str(), "datatype")?,
                )
                .into(),
            },
        })
    }

    fn insert(&self, triple: &Triple) -> GraphResult<()> {
        let predicate = Self::named(triple.predicate.as_str(), "predicate")?;
        let object = Self::object(&triple.object)?;
        let quad = match &triple.subject {
            Term::Iri(iri) => Quad::new(
                Self::named(iri.as_str(), "subject")?,
                predicate,
                object,
                GraphName::DefaultGraph,
            ),
            Term::Blank(b) => Quad::new(
                Self::blank(b.as_str(), "subject")?,
                predicate,
                object,
                GraphName::DefaultGraph,
            ),
            Term::Literal(lit) => {
                return Err(GraphError::InvalidTerm {
                    term: lit.to_string(),
                    position: "subject",
                });
            }
        };
        self.store.insert(&quad).map_err(|e| GraphError::Sparql {
            message: format!("insert failed: {e}"),
        })?;
        Ok(())
    }

    /// Execute a SPARQL ASK query.
    pub fn ask(&self, sparql: &str) -> GraphResult<bool> {
        let results = SparqlEvaluator::new()
            .parse_query(sparql)
            .map_err(|e| syntax(sparql, e))?
            .on_store(&self.store)
            .execute()
            .map_err(|e| GraphError::Sparql {
                message: format!("SPARQL query failed: {e}"),
            })?;
        match results {
            QueryResults::Boolean(b) => Ok(b),
            _ => Err(GraphError::Sparql {
                message: "expected boolean result from ASK query".into(),
            }),
        }
    }

    /// Execute a SPARQL SELECT query; each row is a list of (variable, term) bindings.
    pub fn select(&self, sparql: &str) -> GraphResult<Vec<Vec<(String, String)>>> {
        let results = SparqlEvaluator::new()
            .parse_query(sparql)
            .map_err(|e| syntax(sparql, e))?
            .on_store(&self.store)
            .execute()
            .map_err(|e| GraphError::Sparql {
                message: format!("SPARQL query failed: {e}"),
            })?;

        match results {
            QueryResults::Solutions(solutions) => {
                let mut rows = Vec::new();
                for solution in solutions {
                    let solution = solution.map_err(|e| GraphError::Sparql {
                        message: format!("solution error: {e}"),
                    })?;
                    let row = solution
                        .iter()
                        .map(|(var, term)| (var.as_str().to_string(), term.to_string()))
                        .collect();
                    rows.push(row);
                }
                Ok(rows)
            }
            QueryResults::Boolean(_) | QueryResults::Graph(_) => Err(GraphError::Sparql {
                message: "only SELECT queries are supported via select".into(),
            }),
        }
    }

    /// Number of triples in the mirror.
    pub fn len(&self) -> GraphResult<usize> {
        self.store.len().map_err(|e| GraphError::Sparql {
            message: format!("count failed: {e}"),
        })
    }

    pub fn is_empty(&self) -> GraphResult<bool> {
        self.len().map(|n| n == 0)
    }
}

fn syntax(sparql: &str, err: impl std::fmt::Display) -> GraphError {
    GraphError::Sparql {
        message: format!("invalid SPARQL {sparql:?}: {err}"),
    }
}
