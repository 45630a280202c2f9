use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// A paper or article. Drafts (`is_published == false`) stay hidden.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub id: i32,
    pub title: String,
    #[serde(rename = "abstract")]
    #[sqlx(rename = "abstract")]
    pub abstract_text: String,
    pub authors: String,
    pub keywords: String,
    pub domain: String,
    pub thumbnail_url: Option<String>,
    pub is_published: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
