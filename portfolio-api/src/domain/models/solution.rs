use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// A solution offering. Only active solutions are listed or searchable.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub problem_area: String,
    pub demo_image_url: Option<String>,
    pub is_active: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
