//! In-memory catalog used by tests.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::domain::{
    models::{Product, Publication, RepositoryListing, Solution},
    search::SearchKind,
};

use super::{CatalogRepository, RepositoryError};

#[derive(Default)]
struct Catalog {
    products: Vec<Product>,
    solutions: Vec<Solution>,
    publications: Vec<Publication>,
    repositories: Vec<RepositoryListing>,
}

/// Mock catalog backed by plain vectors.
///
/// Matching uses `str::contains`, which is case-sensitive like the Postgres
/// `strpos` queries. Every trait call bumps a counter so tests can assert that
/// no lookup happened.
#[derive(Clone, Default)]
pub struct MockCatalogRepository {
    catalog: Arc<RwLock<Catalog>>,
    calls: Arc<AtomicUsize>,
    fail: Arc<RwLock<Option<String>>>,
}

#[allow(dead_code)]
impl MockCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(self, products: Vec<Product>) -> Self {
        self.catalog.write().unwrap().products.extend(products);
        self
    }

    pub fn with_solutions(self, solutions: Vec<Solution>) -> Self {
        self.catalog.write().unwrap().solutions.extend(solutions);
        self
    }

    pub fn with_publications(self, publications: Vec<Publication>) -> Self {
        self.catalog.write().unwrap().publications.extend(publications);
        self
    }

    pub fn with_repositories(self, repositories: Vec<RepositoryListing>) -> Self {
        self.catalog.write().unwrap().repositories.extend(repositories);
        self
    }

    /// Make every subsequent call fail with a database error carrying `message`.
    pub fn failing(self, message: &str) -> Self {
        *self.fail.write().unwrap() = Some(message.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn enter(&self) -> Result<(), RepositoryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.fail.read().unwrap().as_ref() {
            Some(message) => Err(RepositoryError::DatabaseError(sqlx::Error::Protocol(
                message.clone(),
            ))),
            None => Ok(()),
        }
    }
}

fn any_contains<S: AsRef<str>>(fields: &[S], query: &str) -> bool {
    fields.iter().any(|field| field.as_ref().contains(query))
}

/// Matches sorted by id and cut to `limit`, mirroring `ORDER BY id LIMIT $2`.
fn lowest_ids<'a, T: Clone + 'a>(
    matches: impl Iterator<Item = &'a T>,
    id: impl Fn(&T) -> i32,
    limit: i64,
) -> Vec<T> {
    let mut items: Vec<T> = matches.cloned().collect();
    items.sort_by_key(|item| id(item));
    items.truncate(usize::try_from(limit).unwrap_or(0));
    items
}

fn newest_first<T>(mut items: Vec<T>, created_at: impl Fn(&T) -> time::OffsetDateTime) -> Vec<T> {
    items.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    items
}

#[async_trait]
impl CatalogRepository for MockCatalogRepository {
    async fn list_products(&self, domain: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let items: Vec<Product> = catalog
            .products
            .iter()
            .filter(|p| domain.map_or(true, |d| p.domain == d))
            .cloned()
            .collect();
        Ok(newest_first(items, |p| p.created_at))
    }

    async fn get_product(&self, id: i32) -> Result<Product, RepositoryError> {
        self.enter()?;
        self.catalog
            .read()
            .unwrap()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Product", id))
    }

    async fn list_solutions(
        &self,
        problem_area: Option<&str>,
    ) -> Result<Vec<Solution>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let items: Vec<Solution> = catalog
            .solutions
            .iter()
            .filter(|s| s.is_active && problem_area.map_or(true, |a| s.problem_area == a))
            .cloned()
            .collect();
        Ok(newest_first(items, |s| s.created_at))
    }

    async fn get_solution(&self, id: i32) -> Result<Solution, RepositoryError> {
        self.enter()?;
        self.catalog
            .read()
            .unwrap()
            .solutions
            .iter()
            .find(|s| s.id == id && s.is_active)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Solution", id))
    }

    async fn list_publications(
        &self,
        domain: Option<&str>,
    ) -> Result<Vec<Publication>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let items: Vec<Publication> = catalog
            .publications
            .iter()
            .filter(|p| p.is_published && domain.map_or(true, |d| p.domain == d))
            .cloned()
            .collect();
        Ok(newest_first(items, |p| p.created_at))
    }

    async fn get_publication(&self, id: i32) -> Result<Publication, RepositoryError> {
        self.enter()?;
        self.catalog
            .read()
            .unwrap()
            .publications
            .iter()
            .find(|p| p.id == id && p.is_published)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Publication", id))
    }

    async fn list_repositories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<RepositoryListing>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let items: Vec<RepositoryListing> = catalog
            .repositories
            .iter()
            .filter(|r| r.is_active && category.map_or(true, |c| r.category == c))
            .cloned()
            .collect();
        Ok(newest_first(items, |r| r.created_at))
    }

    async fn get_repository(&self, id: i32) -> Result<RepositoryListing, RepositoryError> {
        self.enter()?;
        self.catalog
            .read()
            .unwrap()
            .repositories
            .iter()
            .find(|r| r.id == id && r.is_active)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("Repository", id))
    }

    async fn search_products(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        Ok(lowest_ids(
            catalog
                .products
                .iter()
                .filter(|p| {
                    any_contains(
                        &[&p.title, &p.short_description, &p.long_description, &p.domain],
                        query,
                    )
                }),
            |p: &Product| p.id,
            limit,
        ))
    }

    async fn search_solutions(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Solution>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        Ok(lowest_ids(
            catalog
                .solutions
                .iter()
                .filter(|s| {
                    s.is_active && any_contains(&[&s.title, &s.summary, &s.problem_area], query)
                }),
            |s: &Solution| s.id,
            limit,
        ))
    }

    async fn search_publications(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Publication>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        Ok(lowest_ids(
            catalog
                .publications
                .iter()
                .filter(|p| {
                    p.is_published
                        && any_contains(
                            &[&p.title, &p.authors, &p.abstract_text, &p.keywords, &p.domain],
                            query,
                        )
                }),
            |p: &Publication| p.id,
            limit,
        ))
    }

    async fn search_repositories(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<RepositoryListing>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        Ok(lowest_ids(
            catalog
                .repositories
                .iter()
                .filter(|r| {
                    r.is_active
                        && any_contains(
                            &[&r.title, &r.description, &r.technical_stack, &r.category],
                            query,
                        )
                }),
            |r: &RepositoryListing| r.id,
            limit,
        ))
    }

    async fn matching_titles(
        &self,
        kind: SearchKind,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let titles: Vec<&String> = match kind {
            SearchKind::Product => catalog.products.iter().map(|p| &p.title).collect(),
            SearchKind::Solution => catalog
                .solutions
                .iter()
                .filter(|s| s.is_active)
                .map(|s| &s.title)
                .collect(),
            SearchKind::Publication => catalog
                .publications
                .iter()
                .filter(|p| p.is_published)
                .map(|p| &p.title)
                .collect(),
            SearchKind::Repository => catalog
                .repositories
                .iter()
                .filter(|r| r.is_active)
                .map(|r| &r.title)
                .collect(),
        };

        Ok(titles
            .into_iter()
            .filter(|title| title.contains(query))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn matching_product_domains(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError> {
        self.enter()?;
        let catalog = self.catalog.read().unwrap();
        let distinct: BTreeSet<&String> = catalog
            .products
            .iter()
            .map(|p| &p.domain)
            .filter(|domain| domain.contains(query))
            .collect();
        Ok(distinct.into_iter().take(limit as usize).cloned().collect())
    }
}
