//! Library surface of the `notegraph` binary, exposed for integration
//! tests.

pub mod cli;
pub mod config;
pub mod error;
pub mod pipeline;
