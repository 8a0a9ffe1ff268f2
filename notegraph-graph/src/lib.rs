//! In-memory RDF graph for the notegraph pipeline
//!
//! This crate provides the canonical triple representation shared by the
//! Turtle loader, the predicate classifier, and the traversal engine.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!    Prefix compaction is a parser concern, never a storage concern.
//!
//! 2. **Tagged terms** - A term is an IRI, a blank node, or a literal, and
//!    every consumer pattern-matches on the variant. There is no runtime
//!    type sniffing.
//!
//! 3. **Set semantics** - [`TripleStore`] is a `BTreeSet<Triple>`: duplicate
//!    triples collapse on insert, and iteration is always SPO-sorted, which
//!    makes every downstream output deterministic by construction.
//!
//! # Example
//!
//! ```
//! use notegraph_graph::{Term, TripleStore};
//!
//! let mut store = TripleStore::new();
//! store.add(
//!     Term::iri("http://example.org/alice"),
//!     Term::iri("http://example.org/knows"),
//!     Term::iri("http://example.org/bob"),
//! );
//!
//! assert_eq!(store.outgoing(&Term::iri("http://example.org/alice")).count(), 1);
//! ```

pub mod hierarchy;
pub mod iri;
mod store;
mod term;
mod triple;

pub use store::TripleStore;
pub use term::{BlankId, Datatype, LiteralValue, Term};
pub use triple::Triple;
