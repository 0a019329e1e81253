//! # VIVO Client
//!
//! Forwards SPARQL `query` and `update` requests to a VIVO server's REST API
//! (`/api/sparqlQuery`, `/api/sparqlUpdate`) and hands back the remote answer
//! as a uniform JSON envelope.
//!
//! ## Core Principle
//!
//! **Pass-through, flattened**: the remote status and reason phrase travel
//! inside the envelope (`code`, `message`), the wrapping response is always
//! 200. Transport failures are the only errors, reported as `{"error": ...}`
//! with status 500.
//!
//! ## Architecture
//!
//! ```text
//! caller ──► VivoClient::dispatch ──► SparqlTransport ──► VIVO /api/...
//!   ▲              │ (read_only → query,                      │
//!   │              │  else update)                            │
//!   └── Outcome ◄──┴──── ResponseEnvelope::normalize ◄────────┘
//! ```
//!
//! The `server` module exposes the same facade over HTTP under `/lvc`,
//! together with test-only routes guarded by `debug && test_mode`.

pub mod client;
pub mod drivers;
pub mod envelope;
pub mod errors;
pub mod server;
pub mod settings;
pub mod sparql;

pub use client::{TestGate, TestOperation, TestRunner, VivoClient};
pub use drivers::{FormRequest, RawResponse, ReqwestTransport, SparqlTransport};
pub use envelope::{ErrorEnvelope, Outcome, ResponseEnvelope};
pub use errors::{Result, VivoError};
pub use server::{create_router, serve, AppState, ServerConfig};
pub use settings::{ConnectionSettings, SettingsSource, VivoConfig};
pub use sparql::{QueryRequest, SparqlEndpoint, SparqlQuery};

/// Version of the client
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
