//! Axiom annotations: `owl:Axiom` reification and node-rooted annotation.
//!
//! An axiom carried by a single triple `s p o` is annotated through a blank
//! root typed `owl:Axiom` with `owl:annotatedSource s`, `owl:annotatedProperty
//! p` and `owl:annotatedTarget o`. Axioms that already live on their own node
//! (`owl:AllDisjointClasses`, `owl:NegativePropertyAssertion`, `swrl:Imp`, ...)
//! carry their annotations directly on that node. Annotations on annotations
//! use the same pattern with `owl:Annotation` roots.

use std::collections::{BTreeSet, HashSet};

use super::render;
use crate::config::AxiomsConfig;
use crate::error::TranslateResult;
use crate::graph::{Graph, Iri, Statement, Term, Triple};
use crate::model::{Annotation, AnnotationValue, EntityKind};
use crate::vocab::{builtins, owl, rdf, swrl};

/// Node types whose instances are axioms in their own right.
const NODE_ROOT_TYPES: [&str; 5] = [
    owl::ALL_DISJOINT_CLASSES,
    owl::ALL_DIFFERENT,
    owl::ALL_DISJOINT_PROPERTIES,
    owl::NEGATIVE_PROPERTY_ASSERTION,
    swrl::IMP,
];

/// Whether `triple` is the typing triple of a node-rooted axiom.
pub fn is_node_rooted(triple: &Triple) -> bool {
    triple.predicate.as_str() == rdf::TYPE
        && triple
            .object
            .as_iri()
            .is_some_and(|t| NODE_ROOT_TYPES.contains(&t.as_str()))
}

/// Whether a predicate found on an annotation root denotes an annotation.
///
/// Built-in annotation properties do; so does any IRI outside the reserved
/// namespaces. Structural vocabulary (`rdf:type`, `owl:annotatedSource`,
/// `owl:members`, ...) never does.
pub fn is_annotation_predicate(iri: &Iri) -> bool {
    let b = builtins();
    let iri = iri.as_str();
    b.is_annotation_property(iri) || !(b.is_builtin(iri) || b.is_reserved(iri))
}

/// `owl:Axiom` roots reifying `triple`, in term order.
pub fn reification_roots(graph: &Graph, triple: &Triple) -> Vec<Term> {
    let mut roots: Vec<Term> = graph
        .subjects(owl::ANNOTATED_SOURCE, &triple.subject)
        .into_iter()
        .filter(|root| is_root_of(graph, root, triple))
        .collect();
    roots.sort();
    roots.dedup();
    roots
}

/// Whether `root` is an `owl:Axiom` reification of `triple`.
pub(crate) fn is_root_of(graph: &Graph, root: &Term, triple: &Triple) -> bool {
    reifies(graph, root, owl::AXIOM, &triple.subject, &triple.predicate, &triple.object)
}

fn reifies(
    graph: &Graph,
    node: &Term,
    type_iri: &str,
    source: &Term,
    property: &Iri,
    target: &Term,
) -> bool {
    graph.has(node, rdf::TYPE, &Term::iri(type_iri))
        && graph.has(node, owl::ANNOTATED_SOURCE, source)
        && graph.has(node, owl::ANNOTATED_PROPERTY, &Term::Iri(property.clone()))
        && graph.has(node, owl::ANNOTATED_TARGET, target)
}

/// Statements a candidate triple stands for.
///
/// With `split_axiom_annotations` every reification root gives its own
/// statement; otherwise the bare triple represents all of them at once.
pub(crate) fn expand(graph: &Graph, triple: Triple, config: &AxiomsConfig) -> Vec<Statement> {
    if config.split_axiom_annotations && !is_node_rooted(&triple) {
        let roots = reification_roots(graph, &triple);
        if !roots.is_empty() {
            return roots
                .into_iter()
                .map(|root| Statement::with_root(triple.clone(), root))
                .collect();
        }
    }
    vec![Statement::new(triple)]
}

/// Annotations attached to `statement`, nested annotations included.
///
/// A statement pinned to one reification root reads only that root; an
/// unpinned statement merges every root of its triple.
pub fn read_annotations(
    graph: &Graph,
    statement: &Statement,
    _config: &AxiomsConfig,
) -> TranslateResult<BTreeSet<Annotation>> {
    let triple = &statement.triple;
    let sources = if is_node_rooted(triple) {
        vec![triple.subject.clone()]
    } else if let Some(root) = &statement.root {
        vec![root.clone()]
    } else {
        reification_roots(graph, triple)
    };

    let mut visited = HashSet::new();
    let mut out = BTreeSet::new();
    for source in &sources {
        out.extend(annotations_on(graph, source, &mut visited));
    }
    if sources.len() > 1 {
        tracing::trace!(statement = %statement, roots = sources.len(), annotations = out.len(), "merged reifications");
    }
    Ok(out)
}

fn annotations_on(graph: &Graph, source: &Term, visited: &mut HashSet<Term>) -> BTreeSet<Annotation> {
    if !visited.insert(source.clone()) {
        return BTreeSet::new();
    }
    let triples: Vec<Triple> = graph
        .find(Some(source), None, None)
        .filter(|t| is_annotation_predicate(&t.predicate))
        .collect();

    triples
        .into_iter()
        .map(|t| {
            let mut annotation = Annotation::new(t.predicate.clone(), AnnotationValue::from_term(&t.object));
            for nested_root in graph.subjects(owl::ANNOTATED_SOURCE, source) {
                if reifies(graph, &nested_root, owl::ANNOTATION, source, &t.predicate, &t.object) {
                    annotation
                        .annotations
                        .extend(annotations_on(graph, &nested_root, visited));
                }
            }
            annotation
        })
        .collect()
}

/// Attach `annotations` to the axiom carried by `triple`.
///
/// Every call creates fresh reification structure; existing roots are never
/// reused.
pub(crate) fn write_annotations(graph: &mut Graph, triple: &Triple, annotations: &BTreeSet<Annotation>) {
    if annotations.is_empty() {
        return;
    }
    let root = if is_node_rooted(triple) {
        triple.subject.clone()
    } else {
        let root = graph.fresh_blank();
        graph.insert(root.clone(), rdf::TYPE, Term::iri(owl::AXIOM));
        graph.insert(root.clone(), owl::ANNOTATED_SOURCE, triple.subject.clone());
        graph.insert(
            root.clone(),
            owl::ANNOTATED_PROPERTY,
            Term::Iri(triple.predicate.clone()),
        );
        graph.insert(root.clone(), owl::ANNOTATED_TARGET, triple.object.clone());
        root
    };
    for annotation in annotations {
        write_annotation(graph, &root, annotation);
    }
}

fn write_annotation(graph: &mut Graph, source: &Term, annotation: &Annotation) {
    render::declare(graph, EntityKind::AnnotationProperty, &annotation.property);
    let value = annotation.value.to_term();
    graph.insert(source.clone(), annotation.property.clone(), value.clone());
    if annotation.annotations.is_empty() {
        return;
    }
    let nested = graph.fresh_blank();
    graph.insert(nested.clone(), rdf::TYPE, Term::iri(owl::ANNOTATION));
    graph.insert(nested.clone(), owl::ANNOTATED_SOURCE, source.clone());
    graph.insert(
        nested.clone(),
        owl::ANNOTATED_PROPERTY,
        Term::Iri(annotation.property.clone()),
    );
    graph.insert(nested.clone(), owl::ANNOTATED_TARGET, value);
    for inner in &annotation.annotations {
        write_annotation(graph, &nested, inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Literal;
    use crate::vocab::rdfs;

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    fn subclass() -> Triple {
        Triple::new(ex("Dog"), rdfs::SUB_CLASS_OF, ex("Mammal"))
    }

    fn comment(text: &str) -> Annotation {
        Annotation::new(rdfs::COMMENT, Literal::string(text))
    }

    #[test]
    fn structural_predicates_are_not_annotations() {
        assert!(is_annotation_predicate(&Iri::new(rdfs::LABEL)));
        assert!(is_annotation_predicate(&Iri::new("http://example.org/note")));
        assert!(!is_annotation_predicate(&Iri::new(rdf::TYPE)));
        assert!(!is_annotation_predicate(&Iri::new(owl::ANNOTATED_SOURCE)));
        assert!(!is_annotation_predicate(&Iri::new(owl::MEMBERS)));
    }

    #[test]
    fn written_annotations_read_back() {
        let mut g = Graph::new();
        let t = subclass();
        g.add(t.clone());
        let anns: BTreeSet<_> = [comment("a"), comment("b")].into_iter().collect();
        write_annotations(&mut g, &t, &anns);

        assert_eq!(reification_roots(&g, &t).len(), 1);
        let read = read_annotations(&g, &Statement::new(t), &AxiomsConfig::default()).unwrap();
        assert_eq!(read, anns);
    }

    #[test]
    fn nested_annotations_survive() {
        let mut g = Graph::new();
        let t = subclass();
        g.add(t.clone());
        let nested = comment("outer").annotated(Annotation::new(rdfs::LABEL, Literal::string("inner")));
        let anns: BTreeSet<_> = [nested].into_iter().collect();
        write_annotations(&mut g, &t, &anns);

        let read = read_annotations(&g, &Statement::new(t), &AxiomsConfig::default()).unwrap();
        assert_eq!(read, anns);
    }

    #[test]
    fn split_mode_expands_per_root() {
        let mut g = Graph::new();
        let t = subclass();
        g.add(t.clone());
        write_annotations(&mut g, &t, &[comment("a")].into_iter().collect());
        write_annotations(&mut g, &t, &[comment("b")].into_iter().collect());

        let merged = expand(&g, t.clone(), &AxiomsConfig::default());
        assert_eq!(merged.len(), 1);
        let read = read_annotations(&g, &merged[0], &AxiomsConfig::default()).unwrap();
        assert_eq!(read.len(), 2);

        let config = AxiomsConfig {
            split_axiom_annotations: true,
            ..AxiomsConfig::default()
        };
        let split = expand(&g, t, &config);
        assert_eq!(split.len(), 2);
        for statement in &split {
            assert_eq!(read_annotations(&g, statement, &config).unwrap().len(), 1);
        }
    }

    #[test]
    fn node_rooted_axioms_annotate_their_node() {
        let mut g = Graph::new();
        let node = Term::blank("all");
        let t = Triple::new(node.clone(), rdf::TYPE, Term::iri(owl::ALL_DISJOINT_CLASSES));
        g.add(t.clone());
        write_annotations(&mut g, &t, &[comment("c")].into_iter().collect());

        assert!(g.has(&node, rdfs::COMMENT, &Term::Literal(Literal::string("c"))));
        assert!(reification_roots(&g, &t).is_empty());
        let read = read_annotations(&g, &Statement::new(t), &AxiomsConfig::default()).unwrap();
        assert_eq!(read.len(), 1);
    }

    #[test]
    fn custom_annotation_properties_are_declared() {
        let mut g = Graph::new();
        let t = subclass();
        g.add(t.clone());
        let note = Annotation::new("http://example.org/note", Literal::string("n"));
        write_annotations(&mut g, &t, &[note].into_iter().collect());
        assert!(g.has(
            &ex("note"),
            rdf::TYPE,
            &Term::iri(owl::ANNOTATION_PROPERTY)
        ));
    }
}
