//! ReqwestTransport: sends VIVO API requests over real HTTP
//!
//! A new `reqwest::Client` is built for every call, so nothing is pooled or
//! shared between requests. Timeouts are whatever reqwest defaults to.

use crate::drivers::traits::{FormRequest, RawResponse, SparqlTransport, FORM_CONTENT_TYPE};
use crate::errors::Result;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::header::CONTENT_TYPE;

/// HTTP transport backed by reqwest
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

impl ReqwestTransport {
    /// Create new ReqwestTransport
    ///
    /// # Example
    ///
    /// ```
    /// use vivo_client::drivers::ReqwestTransport;
    ///
    /// let transport = ReqwestTransport::new();
    /// ```
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SparqlTransport for ReqwestTransport {
    async fn post_form(&self, request: FormRequest) -> Result<RawResponse> {
        let client = reqwest::Client::builder().build()?;

        tracing::debug!(url = %request.url, "sending form POST to VIVO");

        // Non-2xx statuses become transport errors.
        let response = client
            .post(&request.url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .form(&request.fields)
            .send()
            .await?
            .error_for_status()?;

        let status = response.status();
        let reason = reason_phrase(&response);
        let body = response.text().await?;

        Ok(RawResponse {
            status: status.as_u16(),
            reason,
            body,
        })
    }
}

/// Reason phrase as sent by the server.
///
/// hyper only records the phrase when it differs from the canonical one for
/// the status, so a missing extension means the canonical phrase was sent.
fn reason_phrase(response: &reqwest::Response) -> String {
    match response.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => response
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}
