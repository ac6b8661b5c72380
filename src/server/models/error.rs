use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// The only JSON shape this service constructs itself. Everything else on the
/// wire is backend-defined and relayed without interpretation.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub ok: bool,
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
            },
        }
    }

    pub fn into_response(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_stable_shape() {
        let envelope = ErrorEnvelope::new("INVALID_KEY", "Missing capability key");
        assert_eq!(
            serde_json::to_string(&envelope).unwrap(),
            r#"{"ok":false,"error":{"code":"INVALID_KEY","message":"Missing capability key"}}"#
        );
    }
}
