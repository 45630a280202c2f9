use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

use crate::{domain::search::SearchError, repositories::RepositoryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    EmptyQuery,
    InvalidCategory,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<ErrorCode>,
}

/// Error returned by every handler. Server-side failures are logged here and
/// reach the client only as a generic message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    code: Option<ErrorCode>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.message,
            code: self.code,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DatabaseError(ref e) => {
                tracing::error!("Database error: {:?}", e);
                Self::internal("An unexpected error occurred")
            }
            RepositoryError::NotFound { .. } => Self::not_found(err.to_string()),
        }
    }
}

impl From<SearchError> for ApiError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::EmptyQuery => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::EmptyQuery)
            }
            SearchError::InvalidCategory(_) => {
                Self::bad_request(err.to_string()).with_code(ErrorCode::InvalidCategory)
            }
            SearchError::Repository(e) => {
                tracing::error!("Search failed: {:?}", e);
                Self::internal("An error occurred while searching")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_entity_message() {
        let err = ApiError::from(RepositoryError::not_found("Product", 42));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "404 Not Found: Product with id 42 not found");
    }

    #[test]
    fn database_errors_do_not_leak_details() {
        let err = ApiError::from(RepositoryError::DatabaseError(sqlx::Error::Protocol(
            "password authentication failed for user admin".to_string(),
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("password"));
    }

    #[test]
    fn search_failures_map_to_generic_500() {
        let err = ApiError::from(SearchError::Repository(RepositoryError::DatabaseError(
            sqlx::Error::PoolTimedOut,
        )));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "500 Internal Server Error: An error occurred while searching"
        );
    }

    #[test]
    fn validation_errors_are_bad_requests_with_codes() {
        let err = ApiError::from(SearchError::EmptyQuery);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.code, Some(ErrorCode::EmptyQuery));

        let err = ApiError::from(SearchError::InvalidCategory("x".to_string()));
        assert_eq!(err.code, Some(ErrorCode::InvalidCategory));
    }
}
