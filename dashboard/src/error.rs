//! Dashboard-specific error types
//!
//! Handlers return `DashboardResult`; the error renders itself as a JSON body
//! with the matching HTTP status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

use shared::{Component, SharedError, component_error};
use waitlist::WaitlistError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid request format: {details}")]
    InvalidRequest { details: String },

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("{0}")]
    Waitlist(#[from] WaitlistError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl DashboardError {
    pub fn invalid_request(details: impl ToString) -> Self {
        DashboardError::InvalidRequest {
            details: details.to_string(),
        }
    }

    /// HTTP status reported to the client
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::NotFound { .. } | DashboardError::Waitlist(WaitlistError::RecordNotFound { .. }) => {
                StatusCode::NOT_FOUND
            }
            DashboardError::Waitlist(WaitlistError::NotLoaded { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            DashboardError::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() && status != StatusCode::SERVICE_UNAVAILABLE {
            component_error!(Component::Api, error = %self, "Request failed");
        }

        let body = json!({
            "status": "error",
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
