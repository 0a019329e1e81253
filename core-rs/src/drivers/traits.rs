//! Transport trait for the VIVO SPARQL API
//!
//! Defines the single operation every transport has to offer: one
//! form-encoded POST, answered by one raw response.
//! Implementations include:
//! - ReqwestTransport (real HTTP)
//! - test doubles that record outbound requests

use crate::errors::Result;
use crate::settings::ConnectionSettings;
use crate::sparql::SparqlEndpoint;
use async_trait::async_trait;

/// Content type of every outbound request
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A form-encoded POST about to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRequest {
    /// Absolute target URL
    pub url: String,

    /// Form fields in send order
    pub fields: Vec<(String, String)>,
}

impl FormRequest {
    /// Build the request for one SPARQL endpoint.
    ///
    /// The URL is `base_url` followed by the endpoint path, without any
    /// slash normalization.
    ///
    /// # Example
    ///
    /// ```
    /// use vivo_client::drivers::FormRequest;
    /// use vivo_client::sparql::SparqlEndpoint;
    /// use vivo_client::ConnectionSettings;
    ///
    /// let settings = ConnectionSettings::new("http://v", "e", "p");
    /// let request = FormRequest::for_endpoint(&settings, SparqlEndpoint::Query, "ASK {}");
    /// assert_eq!(request.url, "http://v/api/sparqlQuery");
    /// assert_eq!(request.field("query"), Some("ASK {}"));
    /// ```
    pub fn for_endpoint(settings: &ConnectionSettings, endpoint: SparqlEndpoint, text: &str) -> Self {
        Self {
            url: format!("{}{}", settings.base_url, endpoint.path()),
            fields: vec![
                ("email".to_string(), settings.email.clone()),
                ("password".to_string(), settings.password.clone()),
                (endpoint.field_name().to_string(), text.to_string()),
            ],
        }
    }

    /// Value of a form field, if present
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// What came back from the remote server, before normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

/// One form POST in, one raw response out.
///
/// Transport-level failures (connection, DNS, timeouts, non-2xx statuses)
/// are reported as `VivoError::Transport`.
#[async_trait]
pub trait SparqlTransport: Send + Sync {
    async fn post_form(&self, request: FormRequest) -> Result<RawResponse>;
}
