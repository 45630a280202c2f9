//! Core types for global search.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::models::{Product, Publication, RepositoryListing, Solution};

use super::error::SearchError;

/// The catalog kinds global search fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchKind {
    Product,
    Solution,
    Publication,
    Repository,
}

impl SearchKind {
    pub const ALL: [SearchKind; 4] = [
        SearchKind::Product,
        SearchKind::Solution,
        SearchKind::Publication,
        SearchKind::Repository,
    ];

    /// Name used by the `category` query parameter and the `resultsByType` keys.
    pub fn category(self) -> &'static str {
        match self {
            SearchKind::Product => "products",
            SearchKind::Solution => "solutions",
            SearchKind::Publication => "publications",
            SearchKind::Repository => "repositories",
        }
    }

    pub fn from_category(category: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.category().eq_ignore_ascii_case(category))
    }

    /// Kinds to search for an optional `category` parameter. Absent or blank means all.
    pub fn selected(category: Option<&str>) -> Result<Vec<Self>, SearchError> {
        match category.map(str::trim).filter(|c| !c.is_empty()) {
            None => Ok(Self::ALL.to_vec()),
            Some(c) => Self::from_category(c)
                .map(|kind| vec![kind])
                .ok_or_else(|| SearchError::InvalidCategory(c.to_string())),
        }
    }

    /// Frontend page that shows a single item of this kind.
    pub fn detail_url(self, id: i32) -> String {
        let page = match self {
            SearchKind::Product => "Products.html",
            SearchKind::Solution => "solutions.html",
            SearchKind::Publication => "Publications.html",
            SearchKind::Repository => "Repository.html",
        };
        format!("{page}?id={id}")
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchKind::Product => write!(f, "product"),
            SearchKind::Solution => write!(f, "solution"),
            SearchKind::Publication => write!(f, "publication"),
            SearchKind::Repository => write!(f, "repository"),
        }
    }
}

/// Query parameters of `GET /api/GlobalSearch`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,
    pub category: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// A single hit, unified across catalog kinds. Lives for one request only.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub id: i32,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub domain: Option<String>,
    pub category: String,
    /// Heuristic score including random jitter (higher is better)
    pub relevance: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<Product> for SearchResult {
    fn from(product: Product) -> Self {
        Self {
            kind: SearchKind::Product,
            id: product.id,
            url: SearchKind::Product.detail_url(product.id),
            title: product.title,
            description: product.short_description,
            image_url: product.image_url,
            domain: Some(product.domain),
            category: "Product".to_string(),
            relevance: 0.0,
            created_at: product.created_at,
        }
    }
}

impl From<Solution> for SearchResult {
    fn from(solution: Solution) -> Self {
        Self {
            kind: SearchKind::Solution,
            id: solution.id,
            url: SearchKind::Solution.detail_url(solution.id),
            title: solution.title,
            description: solution.summary,
            image_url: solution.demo_image_url,
            domain: None,
            category: solution.problem_area,
            relevance: 0.0,
            created_at: solution.created_at,
        }
    }
}

impl From<Publication> for SearchResult {
    fn from(publication: Publication) -> Self {
        Self {
            kind: SearchKind::Publication,
            id: publication.id,
            url: SearchKind::Publication.detail_url(publication.id),
            title: publication.title,
            description: publication.abstract_text,
            image_url: publication.thumbnail_url,
            domain: Some(publication.domain),
            category: "Publication".to_string(),
            relevance: 0.0,
            created_at: publication.created_at,
        }
    }
}

impl From<RepositoryListing> for SearchResult {
    fn from(repository: RepositoryListing) -> Self {
        Self {
            kind: SearchKind::Repository,
            id: repository.id,
            url: SearchKind::Repository.detail_url(repository.id),
            title: repository.title,
            description: repository.description,
            image_url: None,
            domain: None,
            category: repository.category,
            relevance: 0.0,
            created_at: repository.created_at,
        }
    }
}

/// One page of ranked results plus pre-pagination counts.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResult>,
    pub results_by_type: BTreeMap<String, usize>,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}
