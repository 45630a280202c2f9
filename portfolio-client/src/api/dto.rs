use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Parameters for `GET /api/GlobalSearch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalSearchQuery {
    pub query: String,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl GlobalSearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        if let Some(category) = &self.category {
            pairs.push(("category", category.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(page_size) = self.page_size {
            pairs.push(("pageSize", page_size.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub total_results: usize,
    pub results: Vec<SearchResultDto>,
    pub results_by_type: HashMap<String, usize>,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub image_url: Option<String>,
    pub domain: Option<String>,
    pub category: String,
    pub relevance: f64,
    pub created_at: String,
}
