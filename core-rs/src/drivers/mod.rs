//! Drivers module for talking to a VIVO server
//!
//! Provides the abstract transport interface (SparqlTransport trait) and its
//! HTTP implementation:
//! - ReqwestTransport: form-encoded POSTs over reqwest

mod http;
mod traits;

pub use http::ReqwestTransport;
pub use traits::{FormRequest, RawResponse, SparqlTransport, FORM_CONTENT_TYPE};
