//! RDF list and reified collection helpers.
//!
//! Lists are written as fresh blank-node chains and never shared between
//! axioms. Reading checks every cell for exactly one `rdf:first` and one
//! `rdf:rest` and refuses cyclic chains.

use std::collections::HashSet;

use super::{Graph, Term};
use crate::error::{ListError, ListResult};
use crate::vocab::rdf;

/// Write `members` as a new RDF list and return its head.
///
/// The empty list is `rdf:nil`.
pub fn write_list(graph: &mut Graph, members: impl IntoIterator<Item = Term>) -> Term {
    let members: Vec<Term> = members.into_iter().collect();
    let mut head = Term::iri(rdf::NIL);
    for member in members.into_iter().rev() {
        let cell = graph.fresh_blank();
        graph.insert(cell.clone(), rdf::FIRST, member);
        graph.insert(cell.clone(), rdf::REST, head);
        head = cell;
    }
    head
}

/// Read the list starting at `head`, in order.
pub fn read_list(graph: &Graph, head: &Term) -> ListResult<Vec<Term>> {
    let mut members = Vec::new();
    let mut seen = HashSet::new();
    let mut node = head.clone();
    loop {
        if node.is(rdf::NIL) {
            return Ok(members);
        }
        if !node.is_blank() {
            return Err(if &node == head {
                ListError::NotAList {
                    node: node.to_string(),
                }
            } else {
                ListError::Malformed {
                    node: node.to_string(),
                    reason: "rdf:rest points at a node that is neither a list cell nor rdf:nil"
                        .into(),
                }
            });
        }
        if !seen.insert(node.clone()) {
            return Err(ListError::Cycle {
                head: head.to_string(),
                node: node.to_string(),
            });
        }
        let first = single(graph, &node, rdf::FIRST, "rdf:first")?;
        let rest = single(graph, &node, rdf::REST, "rdf:rest")?;
        members.push(first);
        node = rest;
    }
}

fn single(graph: &Graph, node: &Term, predicate: &str, name: &str) -> ListResult<Term> {
    let objects = graph.objects(node, predicate);
    match objects.as_slice() {
        [one] => Ok(one.clone()),
        [] => Err(ListError::Malformed {
            node: node.to_string(),
            reason: format!("missing {name}"),
        }),
        _ => Err(ListError::Malformed {
            node: node.to_string(),
            reason: format!("{} values for {name}", objects.len()),
        }),
    }
}

/// Whether `head` is a well-formed list.
pub fn is_list(graph: &Graph, head: &Term) -> bool {
    read_list(graph, head).is_ok()
}

/// Write a reified collection node: `_:x rdf:type T ; P (m1 .. mn)`.
pub fn write_collection(
    graph: &mut Graph,
    type_iri: &str,
    members_predicate: &str,
    members: impl IntoIterator<Item = Term>,
) -> Term {
    let list = write_list(graph, members);
    let node = graph.fresh_blank();
    graph.insert(node.clone(), rdf::TYPE, Term::iri(type_iri));
    graph.insert(node.clone(), members_predicate, list);
    node
}

/// Members of a collection node, from the first of `predicates` it carries.
///
/// `owl:AllDifferent` accepts both `owl:members` and the legacy
/// `owl:distinctMembers`; the other collection types only `owl:members`.
pub fn collection_members(graph: &Graph, node: &Term, predicates: &[&str]) -> ListResult<Vec<Term>> {
    for predicate in predicates {
        let heads = graph.objects(node, predicate);
        match heads.as_slice() {
            [] => continue,
            [head] => return read_list(graph, head),
            _ => {
                return Err(ListError::Malformed {
                    node: node.to_string(),
                    reason: format!("{} member lists", heads.len()),
                });
            }
        }
    }
    Err(ListError::Malformed {
        node: node.to_string(),
        reason: "no member list".into(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::owl;

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    #[test]
    fn list_round_trip_keeps_order() {
        let mut g = Graph::new();
        let members = vec![ex("c"), ex("a"), ex("b")];
        let head = write_list(&mut g, members.clone());
        assert_eq!(read_list(&g, &head).unwrap(), members);
        assert_eq!(g.len(), 6);
    }

    #[test]
    fn empty_list_is_nil() {
        let mut g = Graph::new();
        let head = write_list(&mut g, Vec::new());
        assert!(head.is(rdf::NIL));
        assert!(g.is_empty());
        assert!(read_list(&g, &head).unwrap().is_empty());
    }

    #[test]
    fn lists_are_never_shared() {
        let mut g = Graph::new();
        let a = write_list(&mut g, vec![ex("x")]);
        let b = write_list(&mut g, vec![ex("x")]);
        assert_ne!(a, b);
    }

    #[test]
    fn duplicate_first_is_malformed() {
        let mut g = Graph::new();
        let head = write_list(&mut g, vec![ex("x")]);
        g.insert(head.clone(), rdf::FIRST, ex("y"));
        assert!(matches!(read_list(&g, &head), Err(ListError::Malformed { .. })));
    }

    #[test]
    fn cycle_is_detected() {
        let mut g = Graph::new();
        let a = g.fresh_blank();
        let b = g.fresh_blank();
        g.insert(a.clone(), rdf::FIRST, ex("x"));
        g.insert(a.clone(), rdf::REST, b.clone());
        g.insert(b.clone(), rdf::FIRST, ex("y"));
        g.insert(b, rdf::REST, a.clone());
        assert!(matches!(read_list(&g, &a), Err(ListError::Cycle { .. })));
        assert!(!is_list(&g, &a));
    }

    #[test]
    fn iri_is_not_a_list() {
        let g = Graph::new();
        assert!(matches!(read_list(&g, &ex("x")), Err(ListError::NotAList { .. })));
    }

    #[test]
    fn collection_accepts_legacy_members() {
        let mut g = Graph::new();
        let node = write_collection(
            &mut g,
            owl::ALL_DIFFERENT,
            owl::DISTINCT_MEMBERS,
            vec![ex("a"), ex("b")],
        );
        let members =
            collection_members(&g, &node, &[owl::MEMBERS, owl::DISTINCT_MEMBERS]).unwrap();
        assert_eq!(members, vec![ex("a"), ex("b")]);
        assert!(collection_members(&g, &node, &[owl::MEMBERS]).is_err());
    }
}
