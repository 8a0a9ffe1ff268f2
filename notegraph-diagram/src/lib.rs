//! Graph-to-diagram engine for the notegraph pipeline
//!
//! Given a loaded triple store and a starting entity, this crate classifies
//! the predicate vocabulary, resolves note names to graph nodes, explores
//! the bounded semantic neighborhood, and renders the result as Mermaid
//! `graph TD` syntax.
//!
//! # Pipeline
//!
//! 1. [`PredicateSets::classify`] - partition predicates once per graph load
//! 2. [`resolve_entity`] - note name to canonical (or synthesized) node
//! 3. [`traverse`] - bounded BFS over relationship predicates
//! 4. [`render_mermaid`] - deterministic diagram text
//!
//! # Example
//!
//! ```
//! use notegraph_diagram::{resolve_entity, render_mermaid, traverse, PredicateSets};
//! use notegraph_turtle::parse_str;
//!
//! let store = parse_str(r#"
//!     @prefix ex: <https://example.org/kb/> .
//!     ex:ada ex:influencedBy ex:babbage .
//! "#).unwrap();
//!
//! let sets = PredicateSets::classify(&store);
//! let start = resolve_entity("Ada", &store, "https://example.org/kb/");
//! let outcome = traverse(&store, &sets, &start, "Ada", true, 1);
//! let diagram = render_mermaid(&outcome);
//! assert!(diagram.starts_with("graph TD"));
//! ```

mod classify;
mod mermaid;
mod resolve;
mod sanitize;
mod traverse;

pub use classify::{ClassifierTables, PredicateSets};
pub use mermaid::render_mermaid;
pub use resolve::resolve_entity;
pub use sanitize::mermaid_safe_label;
pub use traverse::{traverse, RenderedEdge, RenderedNode, TraversalOutcome, TraversalSession};
