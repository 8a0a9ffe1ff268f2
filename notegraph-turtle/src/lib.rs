//! Turtle (TTL) loading for the notegraph pipeline.
//!
//! This crate provides a Turtle-subset parser that emits into a
//! [`notegraph_graph::TripleStore`], plus a directory loader that merges a
//! tree of `.ttl` files into one store, skipping malformed files.
//!
//! # Example
//!
//! ```
//! use notegraph_turtle::parse_str;
//!
//! let turtle = r#"
//!     @prefix ex: <http://example.org/> .
//!     ex:alice ex:name "Alice" ;
//!              ex:age 30 .
//! "#;
//!
//! let store = parse_str(turtle).unwrap();
//! assert_eq!(store.len(), 2);
//! ```

pub mod error;
pub mod lex;
mod loader;
mod parser;

pub use error::{Result, TurtleError};
pub use lex::{tokenize, Token, TokenKind};
pub use loader::load_dir;
pub use parser::{parse, parse_str};
