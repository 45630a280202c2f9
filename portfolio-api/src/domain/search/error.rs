use thiserror::Error;

use crate::repositories::RepositoryError;

/// Error type for search operations.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search query cannot be empty")]
    EmptyQuery,

    #[error("Invalid category type: {0}")]
    InvalidCategory(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
