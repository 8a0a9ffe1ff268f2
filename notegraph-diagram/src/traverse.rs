//! Bounded breadth-first traversal over relationship predicates
//!
//! Starting from a resolved entity, explores the surrounding neighborhood
//! layer by layer, admitting nodes reached through relationship predicates
//! and collecting deduplicated edges. All state lives in a
//! [`TraversalSession`] scoped to one traversal; nothing is shared across
//! notes or runs.
//!
//! Output is a pure function of (store contents, start node, classification
//! sets, flags): node tables and edge sets are ordered containers fed by
//! the store's sorted iteration, so identical inputs yield byte-identical
//! diagrams.

use std::collections::{BTreeMap, BTreeSet};

use notegraph_graph::{
    iri::{label_for, local_name},
    Term, TripleStore,
};
use tracing::debug;

use crate::classify::PredicateSets;
use crate::sanitize::mermaid_safe_label;

/// A node admitted into the diagram
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedNode {
    /// Diagram-safe identifier token, unique within the diagram
    pub id: String,
    /// Sanitized display label
    pub label: String,
    /// Inline property block (`<br>+ name: value...`), possibly empty
    pub props: String,
}

/// Edge tuple: (source node id, predicate label, target node id)
pub type RenderedEdge = (String, String, String);

/// The node table and edge set produced by one traversal
#[derive(Clone, Debug, Default)]
pub struct TraversalOutcome {
    /// Admitted nodes keyed by graph identifier (IRI or blank node id)
    pub nodes: BTreeMap<String, RenderedNode>,
    /// Deduplicated edges
    pub edges: BTreeSet<RenderedEdge>,
    /// Graph identifier of the start node
    pub start_key: String,
}

impl TraversalOutcome {
    /// IRI local names of every admitted node
    ///
    /// Feeds the wikilink list and the front-matter `entities` field.
    pub fn node_local_names(&self) -> BTreeSet<String> {
        self.nodes
            .keys()
            .map(|key| local_name(key).to_string())
            .collect()
    }
}

/// Per-traversal state: node-id assignment, admitted nodes, edges
///
/// One session per start entity per run; never reused.
pub struct TraversalSession<'a> {
    store: &'a TripleStore,
    sets: &'a PredicateSets,
    /// graph identifier -> assigned diagram id
    assigned: BTreeMap<String, String>,
    /// diagram ids already taken (collision detection)
    taken: BTreeSet<String>,
    nodes: BTreeMap<String, RenderedNode>,
    edges: BTreeSet<RenderedEdge>,
}

impl<'a> TraversalSession<'a> {
    pub fn new(store: &'a TripleStore, sets: &'a PredicateSets) -> Self {
        Self {
            store,
            sets,
            assigned: BTreeMap::new(),
            taken: BTreeSet::new(),
            nodes: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Run the bounded expansion and consume the session
    ///
    /// `max_layers` bounds the worst case to O(layers x out-degree^layers);
    /// depth is config-bounded rather than unbounded reachability for
    /// exactly that reason. `suppress_inverse` skips incoming-edge
    /// exploration for high fan-in start entities.
    pub fn traverse(
        mut self,
        start: &Term,
        start_title: &str,
        suppress_inverse: bool,
        max_layers: usize,
    ) -> TraversalOutcome {
        let start_key = term_key(start).unwrap_or_else(|| start.lexical());
        let start_id = self.assign_node_id(&start_key, start_title);
        self.nodes.insert(
            start_key.clone(),
            RenderedNode {
                id: start_id,
                label: mermaid_safe_label(start_title),
                props: self.inline_properties(start),
            },
        );

        let mut frontier: Vec<Term> = vec![start.clone()];

        for layer in 1..=max_layers {
            let mut next_frontier: Vec<Term> = Vec::new();

            for node in &frontier {
                let node_key = match term_key(node) {
                    Some(key) => key,
                    None => continue,
                };
                let node_id = self.nodes[&node_key].id.clone();

                // Forward edges: node as subject
                let outgoing: Vec<_> = self.store.outgoing(node).cloned().collect();
                for t in outgoing {
                    let predicate_label = predicate_name(&t.p);
                    if !self.sets.is_edge(&predicate_label) {
                        continue;
                    }
                    if let Some(target_key) = term_key(&t.o) {
                        if self.try_admit(&t.o, &target_key, &start_key) {
                            next_frontier.push(t.o.clone());
                        }
                        if let Some(target) = self.nodes.get(&target_key) {
                            self.edges.insert((
                                node_id.clone(),
                                predicate_label.clone(),
                                target.id.clone(),
                            ));
                        }
                    }
                }

                // Inverse edges: node as object, subject/object swapped
                if !suppress_inverse {
                    let incoming: Vec<_> = self.store.incoming(node).cloned().collect();
                    for t in incoming {
                        let predicate_label = predicate_name(&t.p);
                        if !self.sets.is_edge(&predicate_label) {
                            continue;
                        }
                        if let Some(subject_key) = term_key(&t.s) {
                            if self.try_admit(&t.s, &subject_key, &start_key) {
                                next_frontier.push(t.s.clone());
                            }
                            if let Some(subject) = self.nodes.get(&subject_key) {
                                self.edges.insert((
                                    subject.id.clone(),
                                    predicate_label.clone(),
                                    node_id.clone(),
                                ));
                            }
                        }
                    }
                }
            }

            debug!(
                layer,
                admitted = next_frontier.len(),
                nodes = self.nodes.len(),
                edges = self.edges.len(),
                "traversal layer complete"
            );

            if next_frontier.is_empty() {
                break;
            }
            frontier = next_frontier;
        }

        TraversalOutcome {
            nodes: self.nodes,
            edges: self.edges,
            start_key,
        }
    }

    /// Admit a candidate node if it passes validity; true when newly added
    ///
    /// A candidate is rejected when it is the start node, already admitted,
    /// or its own label is a predicate name (reified vocabulary terms must
    /// not appear as entities).
    fn try_admit(&mut self, term: &Term, key: &str, start_key: &str) -> bool {
        if key == start_key || self.nodes.contains_key(key) {
            return false;
        }
        let name_lower = local_name(key).to_lowercase();
        if self.sets.is_predicate_name_lower(&name_lower) {
            return false;
        }

        let label = label_for(self.store, term);
        let id = self.assign_node_id(key, &label);
        self.nodes.insert(
            key.to_string(),
            RenderedNode {
                id,
                label: mermaid_safe_label(&label),
                props: self.inline_properties(term),
            },
        );
        true
    }

    /// Assign a collision-free diagram id for a graph identifier
    ///
    /// Slugifies the label into `[A-Za-z0-9_]`; when the slug is already
    /// taken by a different identifier, appends `_1`, `_2`, ... until free.
    /// Assignment order follows the store's sorted iteration, so ids are
    /// stable across runs.
    fn assign_node_id(&mut self, key: &str, label: &str) -> String {
        if let Some(id) = self.assigned.get(key) {
            return id.clone();
        }
        let mut slug: String = label
            .replace([' ', '-'], "_")
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
            .collect();
        if slug.is_empty() {
            slug = "node".to_string();
        }
        let mut id = slug.clone();
        let mut counter = 1;
        while self.taken.contains(&id) {
            id = format!("{slug}_{counter}");
            counter += 1;
        }
        self.taken.insert(id.clone());
        self.assigned.insert(key.to_string(), id.clone());
        id
    }

    /// Inline property block for a node
    ///
    /// Collects `+ name: value` lines from outgoing triples whose predicate
    /// is literal-display: literal values always qualify; IRI values only
    /// when the predicate is not also classified relationship or metadata.
    fn inline_properties(&self, entity: &Term) -> String {
        let mut lines: Vec<String> = Vec::new();
        for t in self.store.outgoing(entity) {
            let name = predicate_name(&t.p);
            if !self.sets.is_literal_display(&name) {
                continue;
            }
            let qualifies = match &t.o {
                Term::Literal { .. } => true,
                Term::Iri(_) => {
                    !self.sets.relationship.contains(&name) && !self.sets.metadata.contains(&name)
                }
                Term::BlankNode(_) => false,
            };
            if qualifies {
                let value = local_name(&t.o.lexical()).to_string();
                lines.push(format!("+ {name}: {value}"));
            }
        }
        if lines.is_empty() {
            return String::new();
        }
        lines.sort();
        format!("<br>{}", lines.join("<br>"))
    }
}

/// Run one traversal with a fresh session
pub fn traverse(
    store: &TripleStore,
    sets: &PredicateSets,
    start: &Term,
    start_title: &str,
    suppress_inverse: bool,
    max_layers: usize,
) -> TraversalOutcome {
    TraversalSession::new(store, sets).traverse(start, start_title, suppress_inverse, max_layers)
}

/// Graph identifier for a term admissible as a diagram node
///
/// IRIs and blank nodes qualify; literals never become nodes.
fn term_key(term: &Term) -> Option<String> {
    match term {
        Term::Iri(iri) => Some(iri.to_string()),
        Term::BlankNode(id) => Some(id.to_string()),
        Term::Literal { .. } => None,
    }
}

/// Local name of a predicate term
fn predicate_name(p: &Term) -> String {
    match p.as_iri() {
        Some(iri) => local_name(iri).to_string(),
        None => p.lexical(),
    }
}
