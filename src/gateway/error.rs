use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Request-level failures. All of them are parameter-validation errors
/// surfaced as `422 Unprocessable Entity`.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("missing required query parameter 'query'")]
    MissingQuery,

    #[error("invalid top_n '{value}': not an integer")]
    InvalidTopN { value: String },

    #[error("malformed query string: {0}")]
    MalformedQuery(String),
}

/// Validation error body: `{"detail": [{"type", "loc", "msg", "input"}]}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: Vec<ErrorDetail>,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Location of the offending value, e.g. `["query", "top_n"]`.
    pub loc: Vec<&'static str>,
    pub msg: String,
    pub input: Option<String>,
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::MissingQuery
            | GatewayError::InvalidTopN { .. }
            | GatewayError::MalformedQuery(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> ErrorDetail {
        match self {
            GatewayError::MissingQuery => ErrorDetail {
                kind: "missing",
                loc: vec!["query", "query"],
                msg: "Field required".to_string(),
                input: None,
            },
            GatewayError::InvalidTopN { value, .. } => ErrorDetail {
                kind: "int_parsing",
                loc: vec!["query", "top_n"],
                msg: "Input should be a valid integer, unable to parse string as an integer"
                    .to_string(),
                input: Some(value.clone()),
            },
            GatewayError::MalformedQuery(reason) => ErrorDetail {
                kind: "query_parsing",
                loc: vec!["query"],
                msg: reason.clone(),
                input: None,
            },
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(error = %self, status = status.as_u16(), "Rejecting request");

        let body = Json(ErrorResponse {
            detail: vec![self.detail()],
        });

        (status, body).into_response()
    }
}
