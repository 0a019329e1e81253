//! Integration tests for the dispatch facade
//!
//! Tests VivoClient and TestRunner against a recording transport:
//! - Endpoint selection from the read-only flag
//! - Caller-supplied vs configured connection settings
//! - Body normalization (JSON vs raw text)
//! - Transport failures surfacing as 500 error envelopes
//! - Test gate and test operation dispatch

use async_trait::async_trait;
use serde_json::json;
use std::sync::{Arc, Mutex};
use vivo_client::drivers::{FormRequest, RawResponse, SparqlTransport};
use vivo_client::{
    ConnectionSettings, Outcome, SettingsSource, TestGate, TestRunner, VivoClient, VivoError,
};

// ==================== Test Helper Functions ====================

enum Reply {
    Respond(RawResponse),
    Fail(String),
}

/// Transport double that records every request and answers with a canned reply
struct RecordingTransport {
    requests: Mutex<Vec<FormRequest>>,
    reply: Reply,
}

impl RecordingTransport {
    fn responding(status: u16, reason: &str, body: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Respond(RawResponse {
                status,
                reason: reason.to_string(),
                body: body.to_string(),
            }),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            reply: Reply::Fail(message.to_string()),
        })
    }

    fn requests(&self) -> Vec<FormRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn count_to(&self, path: &str) -> usize {
        self.requests().iter().filter(|r| r.url.ends_with(path)).count()
    }
}

#[async_trait]
impl SparqlTransport for RecordingTransport {
    async fn post_form(&self, request: FormRequest) -> vivo_client::Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        match &self.reply {
            Reply::Respond(raw) => Ok(raw.clone()),
            Reply::Fail(message) => Err(VivoError::Transport(message.clone())),
        }
    }
}

fn configured() -> ConnectionSettings {
    ConnectionSettings::new("http://configured", "config@example.org", "config-pass")
        .with_graph("http://configured/graph")
}

fn client_with(transport: &Arc<RecordingTransport>) -> VivoClient {
    VivoClient::with_transport(configured(), transport.clone())
}

// ==================== Endpoint Selection ====================

#[tokio::test]
async fn test_read_only_hits_query_endpoint_once() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let client = client_with(&transport);

    client.dispatch("SELECT * WHERE {?s ?p ?o}", true, SettingsSource::UseDefault).await;

    assert_eq!(transport.count_to("/api/sparqlQuery"), 1);
    assert_eq!(transport.count_to("/api/sparqlUpdate"), 0);
}

#[tokio::test]
async fn test_write_hits_update_endpoint_once() {
    let transport = RecordingTransport::responding(200, "OK", "");
    let client = client_with(&transport);

    client.dispatch("CLEAR GRAPH <g>", false, SettingsSource::UseDefault).await;

    assert_eq!(transport.count_to("/api/sparqlUpdate"), 1);
    assert_eq!(transport.count_to("/api/sparqlQuery"), 0);
    assert_eq!(transport.requests()[0].field("update"), Some("CLEAR GRAPH <g>"));
    assert_eq!(transport.requests()[0].field("query"), None);
}

#[tokio::test]
async fn test_concrete_query_scenario() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let client = client_with(&transport);

    let source: SettingsSource = ConnectionSettings::new("http://v", "e", "p").into();
    client.dispatch("SELECT * WHERE {?s ?p ?o}", true, source).await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://v/api/sparqlQuery");
    assert_eq!(
        requests[0].fields,
        vec![
            ("email".to_string(), "e".to_string()),
            ("password".to_string(), "p".to_string()),
            ("query".to_string(), "SELECT * WHERE {?s ?p ?o}".to_string()),
        ]
    );
}

// ==================== Settings Precedence ====================

#[tokio::test]
async fn test_caller_settings_override_configuration() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let client = client_with(&transport);

    let source: SettingsSource = ConnectionSettings::new("http://caller", "caller@example.org", "caller-pass").into();
    client.dispatch("ASK {}", true, source).await;

    let request = &transport.requests()[0];
    assert!(request.url.starts_with("http://caller/"));
    assert_eq!(request.field("email"), Some("caller@example.org"));
    assert_eq!(request.field("password"), Some("caller-pass"));
}

#[tokio::test]
async fn test_empty_settings_use_configuration() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let client = client_with(&transport);

    let source = SettingsSource::from_optional(Some(ConnectionSettings::default()));
    client.dispatch("ASK {}", true, source).await;

    let request = &transport.requests()[0];
    assert_eq!(request.url, "http://configured/api/sparqlQuery");
    assert_eq!(request.field("email"), Some("config@example.org"));
    assert_eq!(request.field("password"), Some("config-pass"));
}

#[tokio::test]
async fn test_primitive_operations_use_given_settings() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let client = client_with(&transport);
    let settings = ConnectionSettings::new("http://direct", "d", "x");

    client.sparql_update(&settings, "INSERT DATA {}").await;
    client.sparql_query(&settings, "ASK {}").await;

    let requests = transport.requests();
    assert_eq!(requests[0].url, "http://direct/api/sparqlUpdate");
    assert_eq!(requests[1].url, "http://direct/api/sparqlQuery");
}

// ==================== Normalization ====================

#[tokio::test]
async fn test_json_body_is_decoded_into_envelope() {
    let body = json!({"head": {"vars": ["s"]}, "results": {"bindings": [{"s": {"type": "uri", "value": "http://x"}}]}});
    let transport = RecordingTransport::responding(200, "OK", &body.to_string());
    let client = client_with(&transport);

    let outcome = client.dispatch("SELECT ?s WHERE {?s ?p ?o}", true, SettingsSource::UseDefault).await;

    match outcome {
        Outcome::Success(envelope) => {
            assert_eq!(envelope.status_code, 200);
            assert_eq!(envelope.reason_phrase, "OK");
            assert_eq!(envelope.body, body);
        }
        other => panic!("Expected success, got {:?}", other),
    }
}

#[tokio::test]
async fn test_text_body_is_kept_verbatim() {
    let text = "<http://x> <http://y> \"z\" .\n";
    let transport = RecordingTransport::responding(200, "OK", text);
    let client = client_with(&transport);

    let outcome = client.dispatch("CONSTRUCT WHERE {?s ?p ?o}", true, SettingsSource::UseDefault).await;

    assert_eq!(outcome.to_json(), json!({"code": 200, "message": "OK", "body": text}));
}

#[tokio::test]
async fn test_update_text_body_is_kept_verbatim() {
    let transport = RecordingTransport::responding(200, "OK", "Update executed");
    let client = client_with(&transport);

    let outcome = client.dispatch("INSERT DATA {}", false, SettingsSource::UseDefault).await;

    assert_eq!(outcome.to_json()["body"], json!("Update executed"));
}

#[tokio::test]
async fn test_remote_status_is_carried_not_reflected() {
    let transport = RecordingTransport::responding(204, "No Content", "");
    let client = client_with(&transport);

    let outcome = client.dispatch("INSERT DATA {}", false, SettingsSource::UseDefault).await;

    assert_eq!(outcome.http_status(), 200);
    assert_eq!(outcome.to_json()["code"], json!(204));
    assert_eq!(outcome.to_json()["message"], json!("No Content"));
}

// ==================== Transport Failures ====================

#[tokio::test]
async fn test_transport_failure_is_500_error_envelope() {
    let transport = RecordingTransport::failing("error sending request for url (http://configured/api/sparqlQuery)");
    let client = client_with(&transport);

    let outcome = client.dispatch("ASK {}", true, SettingsSource::UseDefault).await;

    assert_eq!(outcome.http_status(), 500);
    assert_eq!(
        outcome.to_json(),
        json!({"error": "error sending request for url (http://configured/api/sparqlQuery)"})
    );
    // No retry
    assert_eq!(transport.requests().len(), 1);
}

// ==================== Test Operations ====================

#[tokio::test]
async fn test_closed_gate_never_reaches_transport() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let gates = [
        TestGate { debug: false, test_mode: false },
        TestGate { debug: true, test_mode: false },
        TestGate { debug: false, test_mode: true },
    ];

    for gate in gates {
        let runner = TestRunner::new(client_with(&transport), gate);
        for kind in ["create", "read", "update", "delete", "bogus"] {
            let outcome = runner.run(kind).await;
            assert_eq!(outcome.http_status(), 403);
            assert_eq!(outcome.to_json(), json!({"error": "The application is not in test mode."}));
        }
    }

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_bogus_operation_is_400() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let runner = TestRunner::new(client_with(&transport), TestGate { debug: true, test_mode: true });

    let outcome = runner.run("bogus").await;

    assert_eq!(outcome.http_status(), 400);
    assert_eq!(outcome.to_json(), json!({"error": "Invalid type operation: bogus"}));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_create_operation_sends_demo_insert() {
    let transport = RecordingTransport::responding(200, "OK", "");
    let defaults = configured().with_graph("g1");
    let client = VivoClient::with_transport(defaults, transport.clone());
    let runner = TestRunner::new(client, TestGate { debug: true, test_mode: true });

    let outcome = runner.run("create").await;
    assert!(outcome.is_success());

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://configured/api/sparqlUpdate");
    assert!(requests[0].field("update").unwrap().contains(
        "INSERT DATA { GRAPH <g1> { <http://example.org/individual/n123> vivo:label 'New person' . } }"
    ));
}

#[tokio::test]
async fn test_read_operation_uses_query_endpoint() {
    let transport = RecordingTransport::responding(200, "OK", "{}");
    let runner = TestRunner::new(client_with(&transport), TestGate { debug: true, test_mode: true });

    runner.run("read").await;

    let requests = transport.requests();
    assert_eq!(requests[0].url, "http://configured/api/sparqlQuery");
    assert_eq!(
        requests[0].field("query"),
        Some("PREFIX vivo: <http://vivoweb.org/ontology/core#> SELECT ?s ?p ?o WHERE { GRAPH <http://configured/graph> { ?s ?p ?o } }")
    );
}

#[tokio::test]
async fn test_update_and_delete_operations_use_update_endpoint() {
    let transport = RecordingTransport::responding(200, "OK", "");
    let runner = TestRunner::new(client_with(&transport), TestGate { debug: true, test_mode: true });

    runner.run("update").await;
    runner.run("delete").await;

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests.iter().all(|r| r.url == "http://configured/api/sparqlUpdate"));
    assert!(requests[0].field("update").unwrap().contains("'Modified person'"));
    assert!(!requests[1].field("update").unwrap().contains("INSERT"));
}
