//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use quill_mailer::MailError;
use quill_notion::NotionError;
use serde_json::json;

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// No published page's slug matches the requested slug.
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// The upstream store could not be queried.
    #[error("Upstream error: {0}")]
    Upstream(#[from] NotionError),

    /// The request payload failed validation.
    #[error("Invalid request: {0}")]
    Validation(String),

    /// Contact relay requested but no mailer is configured.
    #[error("Mail delivery is not configured")]
    MailNotConfigured,

    /// Contact relay failed.
    #[error("Mail error: {0}")]
    Mail(#[from] MailError),

    /// Blocking task panicked or was cancelled.
    #[error("Task error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    /// Response serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::PostNotFound(slug) => (
                StatusCode::NOT_FOUND,
                json!({"error": "Post not found", "slug": slug}),
            ),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                json!({"error": message}),
            ),
            Self::MailNotConfigured => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({"error": self.to_string()}),
            ),
            Self::Upstream(_) | Self::Mail(_) | Self::TaskJoin(_) | Self::Json(_) => {
                tracing::error!(error = %self, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": self.to_string()}),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ServerError::PostNotFound("missing".to_owned()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_upstream_maps_to_500() {
        let err = ServerError::Upstream(NotionError::HttpResponse {
            status: 401,
            body: "unauthorized".to_owned(),
        });
        assert_eq!(
            err.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        let err = ServerError::Validation("name cannot be empty".to_owned());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_unconfigured_mail_maps_to_503() {
        assert_eq!(
            ServerError::MailNotConfigured.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
