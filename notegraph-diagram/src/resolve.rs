//! Entity resolution: note name -> graph node
//!
//! Maps a note's filename/title to the canonical graph node whose IRI's
//! last segment normalizes to the same key. When no node matches, a
//! deterministic IRI is synthesized under the base namespace, so every
//! note has a stable identity even absent prior graph data.

use notegraph_graph::{
    iri::{local_name, normalize_key},
    Term, TripleStore,
};

/// Resolve a note name to a graph node IRI
///
/// Scans subjects and IRI objects in sorted store order and returns the
/// first whose normalized local name matches. Falls back to
/// `base_iri + normalized_name` without inserting anything into the store.
/// Total: never fails.
pub fn resolve_entity(name: &str, store: &TripleStore, base_iri: &str) -> Term {
    let key = normalize_key(name);

    for t in store.iter() {
        if let Some(iri) = t.s.as_iri() {
            if normalize_key(local_name(iri)) == key {
                return t.s.clone();
            }
        }
        if let Some(iri) = t.o.as_iri() {
            if normalize_key(local_name(iri)) == key {
                return t.o.clone();
            }
        }
    }

    Term::iri(format!("{base_iri}{key}"))
}
