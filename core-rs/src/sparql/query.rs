/**
 * query.rs
 * SPARQL request types and the two VIVO API endpoints
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two VIVO SPARQL endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SparqlEndpoint {
    /// Read-only queries (SELECT, ASK, CONSTRUCT, DESCRIBE)
    Query,
    /// Writes (INSERT, DELETE, ...)
    Update,
}

impl SparqlEndpoint {
    pub fn path(self) -> &'static str {
        match self {
            SparqlEndpoint::Query => "/api/sparqlQuery",
            SparqlEndpoint::Update => "/api/sparqlUpdate",
        }
    }

    /// Form field carrying the SPARQL text
    pub fn field_name(self) -> &'static str {
        match self {
            SparqlEndpoint::Query => "query",
            SparqlEndpoint::Update => "update",
        }
    }

    pub fn for_read_only(read_only: bool) -> Self {
        if read_only {
            SparqlEndpoint::Query
        } else {
            SparqlEndpoint::Update
        }
    }
}

impl fmt::Display for SparqlEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// SPARQL text, as it will be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparqlQuery {
    query: String,
}

impl SparqlQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.query
    }

    pub fn into_string(self) -> String {
        self.query
    }
}

impl fmt::Display for SparqlQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// One dispatch: the text plus the read-only flag choosing the endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub text: String,
    pub read_only: bool,
}

impl QueryRequest {
    pub fn new(text: impl Into<String>, read_only: bool) -> Self {
        Self {
            text: text.into(),
            read_only,
        }
    }

    pub fn endpoint(&self) -> SparqlEndpoint {
        SparqlEndpoint::for_read_only(self.read_only)
    }
}
