//! Rich diagnostic error types for the axiom graph engine.
//!
//! Each subsystem defines its own error type with miette `#[diagnostic]` derives,
//! providing error codes, help text, and source chains so callers know exactly
//! which statement broke the recognition or construction contract.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for the engine.
///
/// Each variant wraps a subsystem-specific error, preserving the full diagnostic
/// chain (error codes, help text) through to the caller.
#[derive(Debug, Error, Diagnostic)]
pub enum OwlError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Translate(#[from] TranslateError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// Graph errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum GraphError {
    #[error("term {term} cannot be used as {position}")]
    #[diagnostic(
        code(owl::graph::invalid_term),
        help(
            "Subjects must be IRIs or blank nodes and predicates must be IRIs. \
             Literals are only allowed in the object position."
        )
    )]
    InvalidTerm { term: String, position: &'static str },

    #[error("SPARQL mirror error: {message}")]
    #[diagnostic(
        code(owl::graph::sparql),
        help(
            "The oxigraph mirror rejected a term or query. Check that every IRI \
             is absolute and that the SPARQL query parses."
        )
    )]
    Sparql { message: String },
}

/// Result type for graph operations.
pub type GraphResult<T> = std::result::Result<T, GraphError>;

// ---------------------------------------------------------------------------
// List errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ListError {
    #[error("node {node} is not an RDF list")]
    #[diagnostic(
        code(owl::list::not_a_list),
        help("An RDF list is either rdf:nil or a blank node carrying rdf:first and rdf:rest.")
    )]
    NotAList { node: String },

    #[error("malformed RDF list at {node}: {reason}")]
    #[diagnostic(
        code(owl::list::malformed),
        help(
            "Every list cell needs exactly one rdf:first and exactly one rdf:rest, \
             and the chain must end in rdf:nil."
        )
    )]
    Malformed { node: String, reason: String },

    #[error("RDF list starting at {head} loops back to {node}")]
    #[diagnostic(
        code(owl::list::cycle),
        help("The rdf:rest chain revisits a cell. Lists must be finite and acyclic.")
    )]
    Cycle { head: String, node: String },
}

/// Result type for list operations.
pub type ListResult<T> = std::result::Result<T, ListError>;

// ---------------------------------------------------------------------------
// Model errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ModelError {
    #[error("{kind}: expected {expected}, found {found}")]
    #[diagnostic(
        code(owl::model::component_mismatch),
        help(
            "The component sequence does not fit the axiom shape. Components must \
             be listed in the order produced by `Axiom::components()`."
        )
    )]
    ComponentMismatch {
        kind: String,
        expected: &'static str,
        found: String,
    },

    #[error("{kind} needs at least {min} members, got {actual}")]
    #[diagnostic(
        code(owl::model::too_few_members),
        help("N-ary axioms, chains and boolean class expressions have a minimum arity.")
    )]
    TooFewMembers {
        kind: String,
        min: usize,
        actual: usize,
    },
}

/// Result type for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

// ---------------------------------------------------------------------------
// Translation errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum TranslateError {
    #[error("statement {statement} is not a well-formed {kind}: {reason}")]
    #[diagnostic(
        code(owl::translate::malformed),
        help(
            "The translator was asked to build an axiom from a statement it does not \
             recognise. Call `matches()` first, or check the statement's shape."
        )
    )]
    Malformed {
        kind: String,
        statement: String,
        reason: String,
    },

    #[error("{kind} at {statement} is missing {what}")]
    #[diagnostic(
        code(owl::translate::missing_structure),
        help(
            "A required part of the axiom's graph layout could not be located. \
             The graph was probably edited after the axiom was written."
        )
    )]
    MissingStructure {
        kind: String,
        statement: String,
        what: String,
    },

    #[error("cannot write {kind}: {reason}")]
    #[diagnostic(
        code(owl::translate::write_invariant),
        help("The axiom value cannot be represented as triples. Nothing was written.")
    )]
    WriteInvariant { kind: String, reason: String },

    #[error("unsupported construct at {node}: {construct}")]
    #[diagnostic(
        code(owl::translate::unsupported),
        help(
            "Only a subset of the OWL2 class expression and data range grammar is \
             supported. Datatype restrictions with facets are not."
        )
    )]
    Unsupported { node: String, construct: String },

    #[error("node {node} cannot be read as {role}")]
    #[diagnostic(
        code(owl::translate::role_mismatch),
        help(
            "Named nodes need an rdf:type declaration (or must be built-in vocabulary) \
             and their declared kinds must be allowed by the configured punning mode."
        )
    )]
    RoleMismatch { node: String, role: String },

    #[error(transparent)]
    #[diagnostic(transparent)]
    List(#[from] ListError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Model(#[from] ModelError),
}

/// Result type for translator operations.
pub type TranslateResult<T> = std::result::Result<T, TranslateError>;

// ---------------------------------------------------------------------------
// Config errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("failed to read axioms config: {path}")]
    #[diagnostic(
        code(owl::config::read),
        help("Ensure the config file exists and is readable.")
    )]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse axioms config: {path}")]
    #[diagnostic(
        code(owl::config::parse),
        help("Check the TOML syntax. Unknown punning modes are rejected; use strict, dl2 or lax.")
    )]
    Parse { path: String, message: String },

    #[error("failed to write axioms config: {path}")]
    #[diagnostic(
        code(owl::config::write),
        help("Ensure you have write permissions to the target directory.")
    )]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for config operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Convenience alias for functions returning engine results.
pub type OwlResult<T> = std::result::Result<T, OwlError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_error_converts_to_translate_error() {
        let err = ListError::NotAList { node: "_:b0".into() };
        let translate: TranslateError = err.into();
        assert!(matches!(translate, TranslateError::List(ListError::NotAList { .. })));
    }

    #[test]
    fn translate_error_converts_to_owl_error() {
        let err = TranslateError::WriteInvariant {
            kind: "DisjointClasses".into(),
            reason: "needs two members".into(),
        };
        let owl: OwlError = err.into();
        assert!(matches!(
            owl,
            OwlError::Translate(TranslateError::WriteInvariant { .. })
        ));
    }

    #[test]
    fn error_display_messages_are_descriptive() {
        let err = ModelError::TooFewMembers {
            kind: "DisjointClasses".into(),
            min: 2,
            actual: 1,
        };
        let msg = format!("{err}");
        assert!(msg.contains("DisjointClasses"));
        assert!(msg.contains('2'));
        assert!(msg.contains('1'));
    }
}
