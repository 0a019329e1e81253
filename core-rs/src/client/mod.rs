//! VivoClient - dispatch facade over the VIVO SPARQL API
//!
//! Picks the endpoint from the read-only flag and the connection settings
//! from the caller or the configuration, sends one request through the
//! transport and normalizes what comes back.

pub mod test_ops;

use crate::drivers::{FormRequest, ReqwestTransport, SparqlTransport};
use crate::envelope::{Outcome, ResponseEnvelope};
use crate::settings::{ConnectionSettings, SettingsSource, VivoConfig};
use crate::sparql::{QueryRequest, SparqlEndpoint};
use std::sync::Arc;

pub use test_ops::{TestGate, TestOperation, TestRunner};

/// Stateless client for one VIVO server configuration
#[derive(Clone)]
pub struct VivoClient {
    transport: Arc<dyn SparqlTransport>,
    defaults: ConnectionSettings,
}

impl VivoClient {
    /// Client over real HTTP using the configured connection settings
    ///
    /// # Example
    ///
    /// ```
    /// use vivo_client::{VivoClient, VivoConfig};
    ///
    /// let client = VivoClient::new(&VivoConfig::default());
    /// assert!(client.defaults().base_url.is_empty());
    /// ```
    pub fn new(config: &VivoConfig) -> Self {
        Self::with_transport(config.connection(), Arc::new(ReqwestTransport::new()))
    }

    pub fn with_transport(defaults: ConnectionSettings, transport: Arc<dyn SparqlTransport>) -> Self {
        Self { transport, defaults }
    }

    /// Settings used whenever a caller does not bring its own
    pub fn defaults(&self) -> &ConnectionSettings {
        &self.defaults
    }

    /// Read data through `/api/sparqlQuery`
    pub async fn sparql_query(&self, settings: &ConnectionSettings, query: &str) -> Outcome {
        self.send(settings, SparqlEndpoint::Query, query).await
    }

    /// Create, update or delete data through `/api/sparqlUpdate`
    pub async fn sparql_update(&self, settings: &ConnectionSettings, update: &str) -> Outcome {
        self.send(settings, SparqlEndpoint::Update, update).await
    }

    /// Send a prepared request with settings from `source`
    pub async fn execute(&self, request: &QueryRequest, source: &SettingsSource) -> Outcome {
        let settings = source.resolve(&self.defaults);
        match request.endpoint() {
            SparqlEndpoint::Query => self.sparql_query(&settings, &request.text).await,
            SparqlEndpoint::Update => self.sparql_update(&settings, &request.text).await,
        }
    }

    /// `read_only` picks the query endpoint, otherwise the update endpoint.
    ///
    /// No validation or size limit is applied to `query`.
    pub async fn dispatch(&self, query: &str, read_only: bool, source: SettingsSource) -> Outcome {
        self.execute(&QueryRequest::new(query, read_only), &source).await
    }

    async fn send(&self, settings: &ConnectionSettings, endpoint: SparqlEndpoint, text: &str) -> Outcome {
        let request = FormRequest::for_endpoint(settings, endpoint, text);
        tracing::debug!(%endpoint, url = %request.url, email = %settings.email, "dispatching SPARQL request");

        match self.transport.post_form(request).await {
            Ok(raw) => {
                tracing::debug!(%endpoint, status = raw.status, "VIVO responded");
                ResponseEnvelope::normalize(raw).into()
            }
            Err(err) => {
                tracing::warn!(%endpoint, error = %err, "VIVO request failed");
                err.into()
            }
        }
    }
}
