//! SPARQL module
//!
//! Request types for the two VIVO endpoints, plus the demo templates used by
//! the test operations.

pub mod demo;
pub mod query;

pub use query::{QueryRequest, SparqlEndpoint, SparqlQuery};
