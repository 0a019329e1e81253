use crate::envelope::Outcome;
use crate::server::AppState;
use crate::settings::{ConnectionSettings, SettingsSource};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::extract::{Path, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

/// JSON body of `POST /lvc/sparql`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SparqlDispatchBody {
    pub query_vivo: String,
    #[serde(default)]
    pub read_only_vivo: bool,
    #[serde(default)]
    pub url_vivo: Option<String>,
    #[serde(default)]
    pub email_user_vivo: Option<String>,
    #[serde(default)]
    pub password_user_vivo: Option<String>,
    #[serde(default)]
    pub graph_vivo: Option<String>,
}

/// Form body of `POST /lvc/query`, as sent by the test page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query_vivo: String,
    /// Checkbox value; absent when unchecked
    pub read_only_vivo: Option<String>,
    pub url_vivo: Option<String>,
    pub email_user_vivo: Option<String>,
    pub password_user_vivo: Option<String>,
    pub graph_vivo: Option<String>,
}

/// Rejects every test route with 403 while the test gate is closed.
/// Runs before the handler's extractors, so nothing is parsed or sent.
pub async fn require_test_mode(State(state): State<AppState>, request: Request, next: Next) -> Response {
    match state.gate.check() {
        Ok(()) => next.run(request).await,
        Err(err) => Outcome::from(err).into_response(),
    }
}

pub async fn handle_sparql(
    State(state): State<AppState>,
    body: Result<Json<SparqlDispatchBody>, JsonRejection>,
) -> Outcome {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => return rejection.into(),
    };
    let source = settings_source(
        body.url_vivo,
        body.email_user_vivo,
        body.password_user_vivo,
        body.graph_vivo,
    );
    state
        .client
        .dispatch(&body.query_vivo, body.read_only_vivo, source)
        .await
}

pub async fn handle_query_form(
    State(state): State<AppState>,
    form: Result<Form<QueryForm>, FormRejection>,
) -> Outcome {
    let Form(form) = match form {
        Ok(form) => form,
        Err(rejection) => return rejection.into(),
    };
    let read_only = is_truthy(form.read_only_vivo.as_deref());
    let source = settings_source(
        form.url_vivo,
        form.email_user_vivo,
        form.password_user_vivo,
        form.graph_vivo,
    );
    state.client.dispatch(&form.query_vivo, read_only, source).await
}

pub async fn handle_test(State(state): State<AppState>, Path(kind): Path<String>) -> Outcome {
    state.runner.run(&kind).await
}

fn settings_source(
    url: Option<String>,
    email: Option<String>,
    password: Option<String>,
    graph: Option<String>,
) -> SettingsSource {
    let settings = ConnectionSettings {
        base_url: url.unwrap_or_default(),
        email: email.unwrap_or_default(),
        password: password.unwrap_or_default(),
        graph: graph.filter(|g| !g.is_empty()),
    };
    SettingsSource::from_optional(Some(settings))
}

/// Form truthiness: missing, empty and `"0"` are false, anything else is true
fn is_truthy(value: Option<&str>) -> bool {
    matches!(value, Some(v) if !v.is_empty() && v != "0")
}
