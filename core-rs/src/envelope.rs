//! Response envelopes returned for every call
//!
//! A successful round trip becomes a [`ResponseEnvelope`] carrying the remote
//! status and reason phrase; the wrapping HTTP response is always 200, so the
//! remote outcome has to be read from `code`. Failures become an
//! [`ErrorEnvelope`] with their own HTTP status.

use crate::drivers::RawResponse;
use crate::errors::VivoError;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// `{"code", "message", "body"}` as produced for a remote response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "code")]
    pub status_code: u16,
    #[serde(rename = "message")]
    pub reason_phrase: String,
    pub body: JsonValue,
}

impl ResponseEnvelope {
    /// Normalize a raw response: JSON bodies are decoded, anything else is
    /// kept as the raw text.
    ///
    /// # Example
    ///
    /// ```
    /// use vivo_client::drivers::RawResponse;
    /// use vivo_client::ResponseEnvelope;
    /// use serde_json::json;
    ///
    /// let envelope = ResponseEnvelope::normalize(RawResponse {
    ///     status: 200,
    ///     reason: "OK".to_string(),
    ///     body: r#"{"head":{"vars":["s"]}}"#.to_string(),
    /// });
    /// assert_eq!(envelope.body, json!({"head": {"vars": ["s"]}}));
    /// ```
    pub fn normalize(raw: RawResponse) -> Self {
        let body = match serde_json::from_str::<JsonValue>(&raw.body) {
            Ok(decoded) => decoded,
            Err(_) => JsonValue::String(raw.body),
        };

        Self {
            status_code: raw.status,
            reason_phrase: raw.reason,
            body,
        }
    }
}

/// `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

/// Result of one call, ready to be rendered as JSON
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success(ResponseEnvelope),
    Failure { status: u16, envelope: ErrorEnvelope },
}

impl Outcome {
    /// Status of the wrapping HTTP response (not the remote one)
    pub fn http_status(&self) -> u16 {
        match self {
            Outcome::Success(_) => 200,
            Outcome::Failure { status, .. } => *status,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn to_json(&self) -> JsonValue {
        let value = match self {
            Outcome::Success(envelope) => serde_json::to_value(envelope),
            Outcome::Failure { envelope, .. } => serde_json::to_value(envelope),
        };
        // Both envelopes are plain structs of strings, numbers and JSON values.
        value.unwrap_or(JsonValue::Null)
    }
}

impl From<ResponseEnvelope> for Outcome {
    fn from(envelope: ResponseEnvelope) -> Self {
        Outcome::Success(envelope)
    }
}

impl From<VivoError> for Outcome {
    fn from(err: VivoError) -> Self {
        Outcome::Failure {
            status: err.status_code(),
            envelope: ErrorEnvelope {
                error: err.to_string(),
            },
        }
    }
}
