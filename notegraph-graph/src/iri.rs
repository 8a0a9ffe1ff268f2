//! IRI helpers: local names, display labels, key normalization
//!
//! Display labels are derived on demand, never stored: an explicit
//! `rdfs:label` wins, otherwise the IRI's last fragment/path segment.

use crate::{Term, TripleStore};
use notegraph_vocab::rdfs;

/// Extract the last meaningful part of an IRI
///
/// - A prefixed form (`ex:hasField`, no http scheme) yields the part after
///   the first `:`.
/// - An IRI with a fragment (`...#hasField`) yields the fragment.
/// - Otherwise, the last non-empty path segment.
/// - Falls back to the whole string when nothing else applies.
pub fn local_name(iri: &str) -> &str {
    if let Some((scheme, rest)) = iri.split_once(':') {
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return rest;
        }
    }

    if let Some((_, fragment)) = iri.rsplit_once('#') {
        if !fragment.is_empty() {
            return fragment;
        }
    }

    // Strip any query string before looking at path segments
    let path = iri.split_once('?').map_or(iri, |(p, _)| p);
    if let Some(segment) = path.rsplit('/').find(|part| !part.is_empty()) {
        // Skip the bare scheme segment of IRIs with no path ("http:")
        if !segment.contains(':') {
            return segment;
        }
    }

    iri
}

/// Find a human-readable label for a term
///
/// Returns the first `rdfs:label` literal in store order, else the IRI's
/// local name, else the term's lexical form (blank nodes, literals).
pub fn label_for(store: &TripleStore, term: &Term) -> String {
    let label_pred = Term::iri(rdfs::LABEL);
    for t in store.matches(Some(term), Some(&label_pred), None) {
        if let Some((value, _, _)) = t.o.as_literal() {
            return value.lexical();
        }
    }
    match term {
        Term::Iri(iri) => local_name(iri).to_string(),
        other => other.lexical(),
    }
}

/// Normalize a note name or IRI segment for identity comparison
///
/// Lowercases and maps both spaces and hyphens to underscores, so that
/// "My Note", "my-note", and `.../my_note` all normalize identically.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_fragment() {
        assert_eq!(
            local_name("http://www.w3.org/2000/01/rdf-schema#label"),
            "label"
        );
    }

    #[test]
    fn test_local_name_path() {
        assert_eq!(local_name("https://schema.org/Person"), "Person");
        assert_eq!(local_name("https://example.org/kb/my_note/"), "my_note");
    }

    #[test]
    fn test_local_name_prefixed() {
        assert_eq!(local_name("ex:hasField"), "hasField");
        assert_eq!(local_name("mailto:someone@example.org"), "someone@example.org");
    }

    #[test]
    fn test_local_name_opaque() {
        assert_eq!(local_name("no-separators-here"), "no-separators-here");
    }

    #[test]
    fn test_label_for_prefers_rdfs_label() {
        let mut store = TripleStore::new();
        let node = Term::iri("https://example.org/kb/ada_lovelace");
        store.add(
            node.clone(),
            Term::iri(rdfs::LABEL),
            Term::string("Ada Lovelace"),
        );
        assert_eq!(label_for(&store, &node), "Ada Lovelace");

        let unlabeled = Term::iri("https://example.org/kb/charles_babbage");
        assert_eq!(label_for(&store, &unlabeled), "charles_babbage");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("My Note"), "my_note");
        assert_eq!(normalize_key("my-note"), "my_note");
        assert_eq!(normalize_key("MY_NOTE"), "my_note");
    }
}
