//! Global search across every catalog kind.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use crate::repositories::CatalogRepository;

use super::error::{Result, SearchError};
use super::scoring::{relevance, Jitter, ThreadRngJitter};
use super::types::{SearchKind, SearchPage, SearchRequest, SearchResult};

/// Upper bound on the page size. `SearchConfig::max_page_size` can only lower it.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Configuration for the search service.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Raw matches fetched per kind before scoring
    pub per_kind_limit: u32,
    /// Page size when the caller does not ask for one
    pub default_page_size: i64,
    /// Cap on the page size, whatever the caller asks for. Never above [`MAX_PAGE_SIZE`].
    pub max_page_size: i64,
    /// Shorter suggestion queries return nothing
    pub min_suggestion_length: usize,
    pub suggestions_per_kind: i64,
    pub suggested_domains: i64,
    pub max_suggestions: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            per_kind_limit: 50,
            default_page_size: 10,
            max_page_size: MAX_PAGE_SIZE,
            min_suggestion_length: 2,
            suggestions_per_kind: 5,
            suggested_domains: 3,
            max_suggestions: 10,
        }
    }
}

/// Fans a query out to products, solutions, publications and repositories,
/// scores every hit and returns one ranked, paginated list.
pub struct SearchService {
    repository: Arc<dyn CatalogRepository>,
    jitter: Arc<dyn Jitter>,
    config: SearchConfig,
}

impl SearchService {
    pub fn new(repository: Arc<dyn CatalogRepository>, config: SearchConfig) -> Self {
        Self::with_jitter(repository, Arc::new(ThreadRngJitter), config)
    }

    pub fn with_jitter(
        repository: Arc<dyn CatalogRepository>,
        jitter: Arc<dyn Jitter>,
        config: SearchConfig,
    ) -> Self {
        Self {
            repository,
            jitter,
            config,
        }
    }

    /// Execute a global search.
    ///
    /// Kinds are queried one after another. Each kind is truncated to
    /// `per_kind_limit` raw matches *before* scoring, so with more matches than
    /// that the best hits of a kind are not guaranteed to be included.
    /// `total_results` and `results_by_type` count the truncated lists before
    /// pagination.
    pub async fn search(&self, request: SearchRequest) -> Result<SearchPage> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let kinds = SearchKind::selected(request.category.as_deref())?;
        let page = request.page.unwrap_or(1).max(1);
        let page_size = request
            .page_size
            .unwrap_or(self.config.default_page_size)
            .clamp(1, self.config.max_page_size.clamp(1, MAX_PAGE_SIZE));

        let mut results = Vec::new();
        let mut results_by_type = BTreeMap::new();
        for kind in kinds {
            let hits = self.search_kind(kind, query).await?;
            results_by_type.insert(kind.category().to_string(), hits.len());
            results.extend(hits);
        }

        rank(&mut results);

        let total_results = results.len();
        let total_pages = (total_results as i64 + page_size - 1) / page_size;
        let skip = usize::try_from((page - 1).saturating_mul(page_size)).unwrap_or(usize::MAX);
        let results = results
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .collect();

        tracing::debug!(query, total_results, page, page_size, "global search");

        Ok(SearchPage {
            query: query.to_string(),
            total_results,
            results,
            results_by_type,
            page,
            page_size,
            total_pages,
        })
    }

    async fn search_kind(&self, kind: SearchKind, query: &str) -> Result<Vec<SearchResult>> {
        let limit = i64::from(self.config.per_kind_limit);
        let repo = &self.repository;

        let mut hits: Vec<SearchResult> = match kind {
            SearchKind::Product => into_results(repo.search_products(query, limit).await?),
            SearchKind::Solution => into_results(repo.search_solutions(query, limit).await?),
            SearchKind::Publication => {
                into_results(repo.search_publications(query, limit).await?)
            }
            SearchKind::Repository => {
                into_results(repo.search_repositories(query, limit).await?)
            }
        };

        for hit in &mut hits {
            hit.relevance = relevance(query, &hit.title, &hit.description, self.jitter.as_ref());
        }

        Ok(hits)
    }

    /// Autocomplete suggestions for `query`.
    ///
    /// Queries shorter than `min_suggestion_length` return nothing without
    /// touching the store. Otherwise titles of every kind and product domains
    /// are looked up concurrently and merged into a de-duplicated set, so the
    /// order of the returned strings is unspecified.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>> {
        let query = query.trim();
        if query.chars().count() < self.config.min_suggestion_length {
            return Ok(vec![]);
        }

        let repo = &self.repository;
        let per_kind = self.config.suggestions_per_kind;

        let (products, solutions, publications, repositories, domains) = futures::try_join!(
            repo.matching_titles(SearchKind::Product, query, per_kind),
            repo.matching_titles(SearchKind::Solution, query, per_kind),
            repo.matching_titles(SearchKind::Publication, query, per_kind),
            repo.matching_titles(SearchKind::Repository, query, per_kind),
            repo.matching_product_domains(query, self.config.suggested_domains),
        )?;

        let unique: HashSet<String> = products
            .into_iter()
            .chain(solutions)
            .chain(publications)
            .chain(repositories)
            .chain(domains)
            .collect();

        Ok(unique
            .into_iter()
            .take(self.config.max_suggestions)
            .collect())
    }
}

fn into_results<T: Into<SearchResult>>(items: Vec<T>) -> Vec<SearchResult> {
    items.into_iter().map(Into::into).collect()
}

/// Sort by relevance descending, newest first among equal scores.
pub(crate) fn rank(results: &mut [SearchResult]) {
    results.sort_by(|a, b| {
        b.relevance
            .total_cmp(&a.relevance)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}
