use crate::envelope::{ErrorEnvelope, Outcome};
use axum::extract::rejection::{FormRejection, JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

impl IntoResponse for Outcome {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

/// Body rejections keep axum's status but use the `{"error"}` envelope
fn rejected(status: StatusCode, message: String) -> Outcome {
    tracing::debug!(status = status.as_u16(), error = %message, "request body rejected");
    Outcome::Failure {
        status: status.as_u16(),
        envelope: ErrorEnvelope { error: message },
    }
}

impl From<JsonRejection> for Outcome {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<FormRejection> for Outcome {
    fn from(rejection: FormRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}
