//! Handler error type and its HTTP mapping.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::stations::DirectoryError;

use super::dto::ErrorResponse;

/// Methods accepted by every resource.
const ALLOWED_METHODS: &str = "GET, HEAD";

/// Application error type.
///
/// Each variant maps to one status code. `Internal` keeps its cause for
/// the log only; callers see a generic message.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { path: String },
    MethodNotAllowed { method: String, path: String },
    Internal { cause: String },
}

impl AppError {
    /// Status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short machine-readable kind for the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::BadRequest { .. } => "bad_request",
            AppError::NotFound { .. } => "not_found",
            AppError::MethodNotAllowed { .. } => "method_not_allowed",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Message safe to show the caller.
    pub fn public_message(&self) -> String {
        match self {
            AppError::BadRequest { message } => message.clone(),
            AppError::NotFound { path } => format!("no resource at {path}"),
            AppError::MethodNotAllowed { method, path } => {
                format!("method {method} is not allowed on {path}")
            }
            AppError::Internal { .. } => "an unexpected error occurred".to_string(),
        }
    }
}

impl From<DirectoryError> for AppError {
    fn from(e: DirectoryError) -> Self {
        AppError::Internal {
            cause: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.public_message();

        match &self {
            AppError::Internal { cause } => tracing::error!(%status, cause, "request failed"),
            _ => tracing::debug!(%status, detail = %message, "request rejected"),
        }

        let body = Json(ErrorResponse {
            error: self.kind().to_string(),
            message,
        });
        let mut response = (status, body).into_response();

        if matches!(self, AppError::MethodNotAllowed { .. }) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static(ALLOWED_METHODS));
        }

        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stations::DatasetError;
    use crate::web::routes::INVALID_QUERY_MESSAGE;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn status_and_kind() {
        let cases = [
            (
                AppError::BadRequest {
                    message: "bad".into(),
                },
                StatusCode::BAD_REQUEST,
                "bad_request",
            ),
            (
                AppError::NotFound {
                    path: "/nowhere".into(),
                },
                StatusCode::NOT_FOUND,
                "not_found",
            ),
            (
                AppError::MethodNotAllowed {
                    method: "POST".into(),
                    path: "/stations".into(),
                },
                StatusCode::METHOD_NOT_ALLOWED,
                "method_not_allowed",
            ),
            (
                AppError::Internal {
                    cause: "boom".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
            ),
        ];

        for (err, status, kind) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn internal_message_hides_cause() {
        let err = AppError::from(DirectoryError::Source(DatasetError::Unavailable {
            message: "secret detail".into(),
        }));
        assert!(matches!(err, AppError::Internal { .. }));
        assert!(!err.public_message().contains("secret detail"));
    }

    #[tokio::test]
    async fn bad_request_body_is_generic() {
        let response = AppError::BadRequest {
            message: INVALID_QUERY_MESSAGE.to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(
            body,
            serde_json::json!({"error": "bad_request", "message": "query string could not be decoded"})
        );
    }

    #[test]
    fn method_not_allowed_sets_allow_header() {
        let response = AppError::MethodNotAllowed {
            method: "DELETE".into(),
            path: "/stations".into(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(response.headers()[header::ALLOW], "GET, HEAD");
    }
}
