//! Triple store with wildcard pattern queries
//!
//! The store is a `BTreeSet<Triple>`: set semantics (no duplicate triples)
//! and SPO-sorted iteration. The graph is rebuilt from files on every run
//! and treated as read-only once traversal begins.

use crate::{Term, Triple};
use std::collections::BTreeSet;

/// An in-memory set of RDF triples supporting pattern-matched queries
///
/// Any position of a `matches` query may be wildcarded with `None`. Results
/// always come back in SPO-sorted order regardless of insertion order.
#[derive(Clone, Debug, Default)]
pub struct TripleStore {
    triples: BTreeSet<Triple>,
}

impl TripleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a triple (duplicates collapse)
    pub fn insert(&mut self, triple: Triple) {
        self.triples.insert(triple);
    }

    /// Insert a triple by components
    pub fn add(&mut self, s: Term, p: Term, o: Term) {
        self.insert(Triple::new(s, p, o));
    }

    /// Merge another store's triples into this one
    pub fn extend_from(&mut self, other: TripleStore) {
        self.triples.extend(other.triples);
    }

    /// Number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over all triples in SPO order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Check if an exact triple is present
    pub fn contains(&self, s: &Term, p: &Term, o: &Term) -> bool {
        // Avoids cloning into a probe Triple for the common exact lookup
        self.matches(Some(s), Some(p), Some(o)).next().is_some()
    }

    /// Pattern-matched query with any position wildcarded
    ///
    /// `None` in a position matches every term. This is the entire query
    /// surface the classifier and traversal engine rely on.
    pub fn matches<'a>(
        &'a self,
        s: Option<&'a Term>,
        p: Option<&'a Term>,
        o: Option<&'a Term>,
    ) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| {
            s.is_none_or(|s| &t.s == s)
                && p.is_none_or(|p| &t.p == p)
                && o.is_none_or(|o| &t.o == o)
        })
    }

    /// All triples with the given subject
    pub fn outgoing<'a>(&'a self, subject: &'a Term) -> impl Iterator<Item = &'a Triple> {
        self.matches(Some(subject), None, None)
    }

    /// All triples with the given object
    pub fn incoming<'a>(&'a self, object: &'a Term) -> impl Iterator<Item = &'a Triple> {
        self.matches(None, None, Some(object))
    }

    /// All unique predicates used anywhere in the store, sorted
    pub fn predicates(&self) -> Vec<&Term> {
        let mut preds: Vec<&Term> = self.triples.iter().map(|t| &t.p).collect();
        preds.sort();
        preds.dedup();
        preds
    }

    /// All unique subjects in the store, sorted
    pub fn subjects(&self) -> Vec<&Term> {
        let mut subjects: Vec<&Term> = self.triples.iter().map(|t| &t.s).collect();
        subjects.sort();
        subjects.dedup();
        subjects
    }
}

impl IntoIterator for TripleStore {
    type Item = Triple;
    type IntoIter = std::collections::btree_set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl FromIterator<Triple> for TripleStore {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        TripleStore {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for TripleStore {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_store() -> TripleStore {
        let mut store = TripleStore::new();
        store.add(
            Term::iri("http://example.org/bob"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Bob"),
        );
        store.add(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/name"),
            Term::string("Alice"),
        );
        store.add(
            Term::iri("http://example.org/alice"),
            Term::iri("http://xmlns.com/foaf/0.1/knows"),
            Term::iri("http://example.org/bob"),
        );
        store
    }

    #[test]
    fn test_set_semantics() {
        let mut store = TripleStore::new();
        let t = Triple::new(
            Term::iri("http://example.org/s"),
            Term::iri("http://example.org/p"),
            Term::string("o"),
        );
        store.insert(t.clone());
        store.insert(t);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_sorted_iteration() {
        let store = make_test_store();
        let first = store.iter().next().unwrap();
        assert_eq!(first.s.as_iri(), Some("http://example.org/alice"));
    }

    #[test]
    fn test_wildcard_matches() {
        let store = make_test_store();
        let alice = Term::iri("http://example.org/alice");
        let name = Term::iri("http://xmlns.com/foaf/0.1/name");

        assert_eq!(store.matches(Some(&alice), None, None).count(), 2);
        assert_eq!(store.matches(None, Some(&name), None).count(), 2);
        assert_eq!(store.matches(None, None, None).count(), 3);
        assert_eq!(store.matches(Some(&alice), Some(&name), None).count(), 1);
    }

    #[test]
    fn test_incoming() {
        let store = make_test_store();
        let bob = Term::iri("http://example.org/bob");
        let incoming: Vec<_> = store.incoming(&bob).collect();
        assert_eq!(incoming.len(), 1);
        assert_eq!(incoming[0].s.as_iri(), Some("http://example.org/alice"));
    }

    #[test]
    fn test_contains() {
        let store = make_test_store();
        assert!(store.contains(
            &Term::iri("http://example.org/alice"),
            &Term::iri("http://xmlns.com/foaf/0.1/name"),
            &Term::string("Alice"),
        ));
        assert!(!store.contains(
            &Term::iri("http://example.org/alice"),
            &Term::iri("http://xmlns.com/foaf/0.1/name"),
            &Term::string("Carol"),
        ));
    }

    #[test]
    fn test_unique_predicates() {
        let store = make_test_store();
        let preds = store.predicates();
        assert_eq!(preds.len(), 2);
    }
}
