//! Predicate classification
//!
//! Partitions the predicate vocabulary of a loaded graph into three sets:
//! *metadata* (schema/structural, excluded from diagrams), *literal-display*
//! (shown inline in a node), and *relationship* (rendered as edges).
//! Relationships are discovered, not hand-enumerated: every predicate not
//! claimed by the other two sets lands there.
//!
//! The baselines and allow-lists live in [`ClassifierTables`] as data, so
//! deployments with different vocabularies adjust tables, not logic.

use notegraph_graph::{iri::local_name, Term, TripleStore};
use notegraph_vocab::{owl, rdf, rdfs};
use std::collections::BTreeSet;

/// The seed and override tables driving classification
///
/// Entries are predicate *local names* (the last IRI segment), compared
/// case-sensitively; the computed sets also carry lowercased mirrors.
#[derive(Clone, Debug)]
pub struct ClassifierTables {
    /// Schema-vocabulary predicates seeded into `metadata`
    pub metadata_baseline: Vec<String>,
    /// Commonly inlined attributes seeded into `literal_display`
    pub literal_display_baseline: Vec<String>,
    /// Domain relationship names force-included into `relationship`,
    /// guarding against vocabulary drift
    pub relationship_allow: Vec<String>,
    /// Names force-included into `metadata` after discovery
    pub metadata_allow: Vec<String>,
}

impl Default for ClassifierTables {
    fn default() -> Self {
        let meta = |iri: &str| local_name(iri).to_string();
        Self {
            metadata_baseline: vec![
                meta(rdf::TYPE),
                meta(rdfs::SUB_CLASS_OF),
                meta(rdfs::DOMAIN),
                meta(rdfs::RANGE),
                meta(owl::INVERSE_OF),
                meta(owl::ONTOLOGY),
                meta(owl::OBJECT_PROPERTY),
                meta(owl::DATATYPE_PROPERTY),
                meta(rdfs::LABEL),
                meta(rdfs::COMMENT),
                meta(owl::VERSION_INFO),
                meta(rdfs::IS_DEFINED_BY),
            ],
            literal_display_baseline: [
                "birthDate",
                "nationality",
                "type",
                "field",
                "description",
                "comment",
                "versionInfo",
                "label",
                "name",
            ]
            .map(String::from)
            .to_vec(),
            relationship_allow: [
                "subClassOf",
                rdfs::SUB_CLASS_OF,
                "creator",
                "subject",
                "seeAlso",
                "hasTopic",
                "title",
                "influencedBy",
                "hasField",
                "defines",
                "drives",
                "interactsWith",
                "delivers",
                "hasPart",
                "partOf",
            ]
            .map(String::from)
            .to_vec(),
            metadata_allow: ["comment", "versionInfo", "label"].map(String::from).to_vec(),
        }
    }
}

/// The six classification sets computed once per graph load
///
/// A predicate name may legitimately sit in both `relationship` and
/// `metadata` after the allow-lists are applied; callers must check
/// metadata first (see [`PredicateSets::is_edge`]).
#[derive(Clone, Debug, Default)]
pub struct PredicateSets {
    pub relationship: BTreeSet<String>,
    pub metadata: BTreeSet<String>,
    pub literal_display: BTreeSet<String>,
    pub relationship_lower: BTreeSet<String>,
    pub metadata_lower: BTreeSet<String>,
    pub literal_display_lower: BTreeSet<String>,
}

impl PredicateSets {
    /// Classify the predicate vocabulary of `store` with the default tables
    pub fn classify(store: &TripleStore) -> Self {
        Self::classify_with(store, &ClassifierTables::default())
    }

    /// Classify with caller-supplied tables
    pub fn classify_with(store: &TripleStore, tables: &ClassifierTables) -> Self {
        let mut metadata: BTreeSet<String> =
            tables.metadata_baseline.iter().cloned().collect();
        let mut literal_display: BTreeSet<String> =
            tables.literal_display_baseline.iter().cloned().collect();
        let mut relationship: BTreeSet<String> = BTreeSet::new();

        // Every declared datatype property displays inline, under its
        // rdfs:label when one exists, else its IRI local name.
        let rdf_type = Term::iri(rdf::TYPE);
        let datatype_property = Term::iri(owl::DATATYPE_PROPERTY);
        for t in store.matches(None, Some(&rdf_type), Some(&datatype_property)) {
            literal_display.insert(declared_label(store, &t.s));
        }

        // Discovery default: any predicate not already claimed is a
        // relationship.
        for p in store.predicates() {
            if let Some(iri) = p.as_iri() {
                let name = local_name(iri);
                if !metadata.contains(name) && !literal_display.contains(name) {
                    relationship.insert(name.to_string());
                }
            }
        }

        // Declared inverse pairs are navigable from both sides.
        let inverse_of = Term::iri(owl::INVERSE_OF);
        for t in store.matches(None, Some(&inverse_of), None) {
            relationship.insert(declared_label(store, &t.s));
            relationship.insert(declared_label(store, &t.o));
        }

        // Allow-lists applied last; they may place a name in both sets.
        relationship.extend(tables.relationship_allow.iter().cloned());
        metadata.extend(tables.metadata_allow.iter().cloned());

        let lower = |set: &BTreeSet<String>| set.iter().map(|s| s.to_lowercase()).collect();
        let relationship_lower = lower(&relationship);
        let metadata_lower = lower(&metadata);
        let literal_display_lower = lower(&literal_display);

        Self {
            relationship,
            metadata,
            literal_display,
            relationship_lower,
            metadata_lower,
            literal_display_lower,
        }
    }

    /// Should a predicate with this local name be drawn as an edge?
    ///
    /// Metadata membership suppresses relationship treatment even when the
    /// name sits in both sets. This asymmetric tie-break is deliberate and
    /// every edge decision must go through it.
    pub fn is_edge(&self, name: &str) -> bool {
        self.relationship.contains(name) && !self.metadata.contains(name)
    }

    /// Case-insensitive check against both predicate vocabularies
    ///
    /// Used during traversal to reject target nodes whose own label is a
    /// predicate name (artifacts of reified vocabulary terms).
    pub fn is_predicate_name_lower(&self, lower: &str) -> bool {
        self.metadata_lower.contains(lower) || self.relationship_lower.contains(lower)
    }

    /// Should a predicate with this local name display inline?
    pub fn is_literal_display(&self, name: &str) -> bool {
        self.literal_display.contains(name)
    }
}

/// A node's declared label: first `rdfs:label` literal, else IRI local name
fn declared_label(store: &TripleStore, term: &Term) -> String {
    let label_pred = Term::iri(rdfs::LABEL);
    for t in store.matches(Some(term), Some(&label_pred), None) {
        if let Some((value, _, _)) = t.o.as_literal() {
            return local_name(&value.lexical()).to_string();
        }
    }
    match term {
        Term::Iri(iri) => local_name(iri).to_string(),
        other => other.lexical(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ex(s: &str) -> Term {
        Term::iri(format!("http://example.org/{s}"))
    }

    #[test]
    fn test_discovery_default_is_relationship() {
        let mut store = TripleStore::new();
        store.add(ex("a"), ex("collaboratesWith"), ex("b"));
        let sets = PredicateSets::classify(&store);
        assert!(sets.relationship.contains("collaboratesWith"));
        assert!(sets.is_edge("collaboratesWith"));
    }

    #[test]
    fn test_metadata_baseline_not_discovered_as_relationship() {
        let mut store = TripleStore::new();
        store.add(ex("a"), Term::iri(rdf::TYPE), ex("Person"));
        store.add(ex("a"), Term::iri(rdfs::COMMENT), Term::string("c"));
        let sets = PredicateSets::classify(&store);
        assert!(!sets.relationship.contains("type"));
        assert!(!sets.is_edge("type"));
        assert!(!sets.is_edge("comment"));
    }

    #[test]
    fn test_literal_display_baseline_not_relationship() {
        let mut store = TripleStore::new();
        store.add(ex("a"), ex("description"), Term::string("text"));
        let sets = PredicateSets::classify(&store);
        assert!(!sets.relationship.contains("description"));
        assert!(sets.is_literal_display("description"));
    }

    #[test]
    fn test_datatype_property_label_displays_inline() {
        let mut store = TripleStore::new();
        store.add(
            ex("established"),
            Term::iri(rdf::TYPE),
            Term::iri(owl::DATATYPE_PROPERTY),
        );
        store.add(
            ex("headcount"),
            Term::iri(rdf::TYPE),
            Term::iri(owl::DATATYPE_PROPERTY),
        );
        store.add(
            ex("headcount"),
            Term::iri(rdfs::LABEL),
            Term::string("staffCount"),
        );
        let sets = PredicateSets::classify(&store);
        // no label: IRI local name; labeled: the label
        assert!(sets.is_literal_display("established"));
        assert!(sets.is_literal_display("staffCount"));
        assert!(!sets.is_literal_display("headcount"));
    }

    #[test]
    fn test_inverse_pairs_are_relationships() {
        let mut store = TripleStore::new();
        store.add(ex("supervises"), Term::iri(owl::INVERSE_OF), ex("reportsTo"));
        let sets = PredicateSets::classify(&store);
        assert!(sets.is_edge("supervises"));
        assert!(sets.is_edge("reportsTo"));
    }

    #[test]
    fn test_allow_lists_create_both_sets_membership() {
        let store = TripleStore::new();
        let sets = PredicateSets::classify(&store);
        // label sits in metadata (baseline + allow) and literal_display
        assert!(sets.metadata.contains("label"));
        assert!(sets.literal_display.contains("label"));
        assert!(!sets.is_edge("label"));
        // subClassOf is force-added to relationship but seeded metadata:
        // metadata precedence means it never draws an edge
        assert!(sets.relationship.contains("subClassOf"));
        assert!(sets.metadata.contains("subClassOf"));
        assert!(!sets.is_edge("subClassOf"));
        // plain allow-list names with no metadata claim do draw edges
        assert!(sets.is_edge("hasField"));
        assert!(sets.is_edge("influencedBy"));
    }

    #[test]
    fn test_lowercase_mirrors() {
        let mut store = TripleStore::new();
        store.add(ex("a"), ex("interactsWith"), ex("b"));
        let sets = PredicateSets::classify(&store);
        assert!(sets.relationship_lower.contains("interactswith"));
        assert!(sets.metadata_lower.contains("versioninfo"));
        assert!(sets.is_predicate_name_lower("interactswith"));
        assert!(sets.is_predicate_name_lower("type"));
        assert!(!sets.is_predicate_name_lower("ada_lovelace"));
    }

    #[test]
    fn test_empty_graph_still_has_baselines() {
        let sets = PredicateSets::classify(&TripleStore::new());
        assert!(sets.metadata.contains("type"));
        assert!(sets.literal_display.contains("name"));
        assert!(sets.relationship.contains("hasPart"));
    }
}
