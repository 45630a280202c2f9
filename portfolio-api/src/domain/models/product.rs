use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// A product shown on the Products page. Products carry no visibility flag.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub short_description: String,
    pub long_description: String,
    pub domain: String,
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
