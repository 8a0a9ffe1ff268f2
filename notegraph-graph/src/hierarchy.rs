//! Class-hierarchy queries over `rdfs:subClassOf`
//!
//! Entities close to a generic root class (or declared as classes
//! themselves) have very high inbound fan-in; the pipeline uses these
//! queries to decide whether inverse edges should be suppressed for a
//! given start entity.

use crate::{Term, TripleStore};
use notegraph_vocab::{owl, rdf, rdfs, schema};
use std::collections::{BTreeSet, VecDeque};

/// The generic root classes a vault's ontology typically hangs from
pub fn generic_root_classes() -> BTreeSet<Term> {
    [schema::THING, owl::THING, rdfs::RESOURCE]
        .into_iter()
        .map(Term::iri)
        .collect()
}

/// Shortest `rdfs:subClassOf` path length from `entity` to any root class
///
/// Returns `None` when no root is reachable.
pub fn subclass_depth(
    store: &TripleStore,
    entity: &Term,
    roots: &BTreeSet<Term>,
) -> Option<usize> {
    let sub_class_of = Term::iri(rdfs::SUB_CLASS_OF);
    let mut queue: VecDeque<(Term, usize)> = VecDeque::new();
    let mut visited: BTreeSet<Term> = BTreeSet::new();
    queue.push_back((entity.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if roots.contains(&current) {
            return Some(depth);
        }
        if !visited.insert(current.clone()) {
            continue;
        }
        for t in store.matches(Some(&current), Some(&sub_class_of), None) {
            queue.push_back((t.o.clone(), depth + 1));
        }
    }
    None
}

/// Check whether the entity is explicitly declared as an `rdfs:Class`
pub fn is_declared_class(store: &TripleStore, entity: &Term) -> bool {
    store.contains(entity, &Term::iri(rdf::TYPE), &Term::iri(rdfs::CLASS))
}

/// Decide whether inverse-edge exploration should be suppressed for `entity`
///
/// True when the entity sits at hierarchy depth <= 1 below a generic root,
/// or is itself a declared class. Both cases mark high inbound fan-in
/// entities whose inverse edges would explode the diagram.
pub fn suppress_inverse_for(store: &TripleStore, entity: &Term) -> bool {
    let roots = generic_root_classes();
    let depth = subclass_depth(store, entity, &roots);
    matches!(depth, Some(d) if d <= 1) || is_declared_class(store, entity)
}
