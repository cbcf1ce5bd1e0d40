use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::llm::CompletionError;
use crate::sqlgen::validator::ValidationError;

/// Everything a request handler can fail with. Every variant is rendered as
/// a `{"error": message}` payload at the request boundary; nothing retries.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to connect to the {0} database. Check backend logs for connection details.")]
    StoreUnavailable(&'static str),

    #[error("Database error: {0}")]
    QueryFailure(#[source] sqlx::Error),

    #[error("Failed to generate SQL query for employee {employee_id}: {source}")]
    DraftRejected {
        employee_id: String,
        source: ValidationError,
    },

    #[error("Failed to generate SQL query for employee {employee_id}: {source}")]
    DraftServiceError {
        employee_id: String,
        source: CompletionError,
    },

    #[error("Error executing queries: statement {index} failed validation: {source}. Please check the generated SQL syntax and data.")]
    ExecutionRejected {
        index: usize,
        source: ValidationError,
    },

    #[error("Error executing queries: statement {index} failed: {source}. Please check the generated SQL syntax and data.")]
    ExecutionFailure {
        index: usize,
        source: sqlx::Error,
    },

    #[error("{0}")]
    BadRequest(String),
}

impl AppError {
    /// Maps a data-access error, keeping connection problems distinct from
    /// query problems. `db` names the store for the client-facing message.
    pub fn from_query(db: &'static str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => AppError::StoreUnavailable(db),
            other => AppError::QueryFailure(other),
        }
    }
}

/// Body-deserialization failures go through the same `{"error": message}`
/// shape as every other boundary error.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
