// thiserror's #[error("...{field}...")] format strings reference struct fields,
// but the compiler doesn't see through the derive macro and reports false positives.
#![allow(unused_assignments)]

//! # owl-axiom-graph
//!
//! Bidirectional mapping between an RDF triple graph and typed OWL2 axioms.
//!
//! ## Architecture
//!
//! - **Graph** (`graph`): Indexed triple store (petgraph) with RDF list and
//!   role helpers, plus an optional oxigraph mirror for SPARQL checks
//! - **Model** (`model`): Axiom, class expression, data range, SWRL values
//! - **Factory** (`factory`): Resolves graph nodes into model values, cached in `dashmap`
//! - **Objects** (`object`): Simple and complex axiom objects bound to their statement
//! - **Translators** (`translate`): One scan/match/build/write translator per axiom kind
//!
//! ## Library usage
//!
//! ```
//! use owl_axiom_graph::config::AxiomsConfig;
//! use owl_axiom_graph::factory::GraphObjectFactory;
//! use owl_axiom_graph::graph::Graph;
//! use owl_axiom_graph::model::{AnnotatedAxiom, Axiom, ClassExpression};
//! use owl_axiom_graph::translate::TranslatorRegistry;
//!
//! let mut graph = Graph::new();
//! let axiom = AnnotatedAxiom::from(Axiom::SubClassOf {
//!     sub: ClassExpression::class("http://example.org/Dog"),
//!     sup: ClassExpression::class("http://example.org/Animal"),
//! });
//! let registry = TranslatorRegistry::global();
//! registry.write(&axiom, &mut graph).unwrap();
//!
//! let read = registry
//!     .read_all(&graph, &GraphObjectFactory::new(), &AxiomsConfig::default())
//!     .unwrap();
//! assert!(read.iter().any(|o| o.axiom().unwrap() == axiom));
//! ```

pub mod config;
pub mod error;
pub mod factory;
pub mod graph;
pub mod model;
pub mod object;
pub mod translate;
pub mod vocab;
