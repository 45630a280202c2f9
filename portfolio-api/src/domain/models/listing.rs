use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// A source code repository offered for sale.
///
/// Stored in the `repositories` table; named `RepositoryListing` so it does not
/// collide with the persistence repositories in [`crate::repositories`].
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryListing {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub technical_stack: String,
    pub category: String,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
