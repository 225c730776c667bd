use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::answers::{Facet, UnknownFacetValue};

/// Application-level errors
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    /// A facet value that is neither whitelisted nor, for color, a valid
    /// free-form token. Always user-correctable; the message names the
    /// offending facet.
    #[error("Invalid {facet}")]
    Validation { facet: Facet },

    #[error("{0} required")]
    MissingParameter(&'static str),

    #[error("{0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<UnknownFacetValue> for AppError {
    fn from(err: UnknownFacetValue) -> Self {
        AppError::Validation { facet: err.facet }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation { .. } | AppError::MissingParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Io(_) | AppError::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Client-visible conditions are not system faults; only log the rest.
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_names_the_facet() {
        let err = AppError::Validation {
            facet: Facet::Budget,
        };
        assert_eq!(err.to_string(), "Invalid budget");
    }

    #[test]
    fn test_missing_parameter_message() {
        assert_eq!(
            AppError::MissingParameter("token").to_string(),
            "token required"
        );
    }
}
