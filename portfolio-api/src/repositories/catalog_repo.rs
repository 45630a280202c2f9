use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::{
    models::{Product, Publication, RepositoryListing, Solution},
    search::SearchKind,
};

use super::repo_error::RepositoryError;

/// Read access to the four catalog tables.
///
/// Text matching in the `search_*`, `matching_*` methods is a case-sensitive
/// substring test. Visibility flags (`is_active`, `is_published`) are applied
/// by every method except the product ones, which have no flag.
#[async_trait]
pub trait CatalogRepository: Send + Sync + 'static {
    async fn list_products(&self, domain: Option<&str>) -> Result<Vec<Product>, RepositoryError>;
    async fn get_product(&self, id: i32) -> Result<Product, RepositoryError>;

    async fn list_solutions(
        &self,
        problem_area: Option<&str>,
    ) -> Result<Vec<Solution>, RepositoryError>;
    async fn get_solution(&self, id: i32) -> Result<Solution, RepositoryError>;

    async fn list_publications(
        &self,
        domain: Option<&str>,
    ) -> Result<Vec<Publication>, RepositoryError>;
    async fn get_publication(&self, id: i32) -> Result<Publication, RepositoryError>;

    async fn list_repositories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<RepositoryListing>, RepositoryError>;
    async fn get_repository(&self, id: i32) -> Result<RepositoryListing, RepositoryError>;

    /// Products whose title, descriptions or domain contain `query`. At most `limit` rows.
    async fn search_products(&self, query: &str, limit: i64)
        -> Result<Vec<Product>, RepositoryError>;

    /// Active solutions whose title, summary or problem area contain `query`.
    async fn search_solutions(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Solution>, RepositoryError>;

    /// Published publications whose title, authors, abstract, keywords or domain contain `query`.
    async fn search_publications(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Publication>, RepositoryError>;

    /// Active repositories whose title, description, stack or category contain `query`.
    async fn search_repositories(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<RepositoryListing>, RepositoryError>;

    /// Titles of visible items of `kind` whose title contains `query`.
    async fn matching_titles(
        &self,
        kind: SearchKind,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError>;

    /// Distinct product domains containing `query`.
    async fn matching_product_domains(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError>;
}

pub struct PgCatalogRepository {
    pool: PgPool,
}

impl PgCatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const PRODUCT_COLUMNS: &str =
    "id, title, short_description, long_description, domain, image_url, created_at";
const SOLUTION_COLUMNS: &str =
    "id, title, summary, problem_area, demo_image_url, is_active, created_at";
const PUBLICATION_COLUMNS: &str = r#"id, title, "abstract", authors, keywords, domain, thumbnail_url, is_published, created_at"#;
const REPOSITORY_COLUMNS: &str =
    "id, title, description, technical_stack, category, is_active, created_at";

#[async_trait]
impl CatalogRepository for PgCatalogRepository {
    async fn list_products(&self, domain: Option<&str>) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE ($1::text IS NULL OR domain = $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(domain)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn get_product(&self, id: i32) -> Result<Product, RepositoryError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Product", id))
    }

    async fn list_solutions(
        &self,
        problem_area: Option<&str>,
    ) -> Result<Vec<Solution>, RepositoryError> {
        let solutions = sqlx::query_as::<_, Solution>(&format!(
            r#"
            SELECT {SOLUTION_COLUMNS}
            FROM solutions
            WHERE is_active AND ($1::text IS NULL OR problem_area = $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(problem_area)
        .fetch_all(&self.pool)
        .await?;

        Ok(solutions)
    }

    async fn get_solution(&self, id: i32) -> Result<Solution, RepositoryError> {
        sqlx::query_as::<_, Solution>(&format!(
            "SELECT {SOLUTION_COLUMNS} FROM solutions WHERE id = $1 AND is_active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Solution", id))
    }

    async fn list_publications(
        &self,
        domain: Option<&str>,
    ) -> Result<Vec<Publication>, RepositoryError> {
        let publications = sqlx::query_as::<_, Publication>(&format!(
            r#"
            SELECT {PUBLICATION_COLUMNS}
            FROM publications
            WHERE is_published AND ($1::text IS NULL OR domain = $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(domain)
        .fetch_all(&self.pool)
        .await?;

        Ok(publications)
    }

    async fn get_publication(&self, id: i32) -> Result<Publication, RepositoryError> {
        sqlx::query_as::<_, Publication>(&format!(
            "SELECT {PUBLICATION_COLUMNS} FROM publications WHERE id = $1 AND is_published"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Publication", id))
    }

    async fn list_repositories(
        &self,
        category: Option<&str>,
    ) -> Result<Vec<RepositoryListing>, RepositoryError> {
        let repositories = sqlx::query_as::<_, RepositoryListing>(&format!(
            r#"
            SELECT {REPOSITORY_COLUMNS}
            FROM repositories
            WHERE is_active AND ($1::text IS NULL OR category = $1)
            ORDER BY created_at DESC
            "#
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(repositories)
    }

    async fn get_repository(&self, id: i32) -> Result<RepositoryListing, RepositoryError> {
        sqlx::query_as::<_, RepositoryListing>(&format!(
            "SELECT {REPOSITORY_COLUMNS} FROM repositories WHERE id = $1 AND is_active"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found("Repository", id))
    }

    // strpos() keeps the match case-sensitive and avoids escaping LIKE wildcards.
    // The row cap is applied before any relevance ranking happens.

    async fn search_products(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Product>, RepositoryError> {
        let products = sqlx::query_as::<_, Product>(&format!(
            r#"
            SELECT {PRODUCT_COLUMNS}
            FROM products
            WHERE strpos(title, $1) > 0
               OR strpos(short_description, $1) > 0
               OR strpos(long_description, $1) > 0
               OR strpos(domain, $1) > 0
            ORDER BY id
            LIMIT $2
            "#
        ))
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn search_solutions(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Solution>, RepositoryError> {
        let solutions = sqlx::query_as::<_, Solution>(&format!(
            r#"
            SELECT {SOLUTION_COLUMNS}
            FROM solutions
            WHERE is_active
              AND (strpos(title, $1) > 0
                OR strpos(summary, $1) > 0
                OR strpos(problem_area, $1) > 0)
            ORDER BY id
            LIMIT $2
            "#
        ))
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(solutions)
    }

    async fn search_publications(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<Publication>, RepositoryError> {
        let publications = sqlx::query_as::<_, Publication>(&format!(
            r#"
            SELECT {PUBLICATION_COLUMNS}
            FROM publications
            WHERE is_published
              AND (strpos(title, $1) > 0
                OR strpos(authors, $1) > 0
                OR strpos("abstract", $1) > 0
                OR strpos(keywords, $1) > 0
                OR strpos(domain, $1) > 0)
            ORDER BY id
            LIMIT $2
            "#
        ))
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(publications)
    }

    async fn search_repositories(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<RepositoryListing>, RepositoryError> {
        let repositories = sqlx::query_as::<_, RepositoryListing>(&format!(
            r#"
            SELECT {REPOSITORY_COLUMNS}
            FROM repositories
            WHERE is_active
              AND (strpos(title, $1) > 0
                OR strpos(description, $1) > 0
                OR strpos(technical_stack, $1) > 0
                OR strpos(category, $1) > 0)
            ORDER BY id
            LIMIT $2
            "#
        ))
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(repositories)
    }

    async fn matching_titles(
        &self,
        kind: SearchKind,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError> {
        let sql = match kind {
            SearchKind::Product => {
                "SELECT title FROM products WHERE strpos(title, $1) > 0 LIMIT $2"
            }
            SearchKind::Solution => {
                "SELECT title FROM solutions WHERE is_active AND strpos(title, $1) > 0 LIMIT $2"
            }
            SearchKind::Publication => {
                "SELECT title FROM publications WHERE is_published AND strpos(title, $1) > 0 LIMIT $2"
            }
            SearchKind::Repository => {
                "SELECT title FROM repositories WHERE is_active AND strpos(title, $1) > 0 LIMIT $2"
            }
        };

        let titles = sqlx::query_scalar::<_, String>(sql)
            .bind(query)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;

        Ok(titles)
    }

    async fn matching_product_domains(
        &self,
        query: &str,
        limit: i64,
    ) -> Result<Vec<String>, RepositoryError> {
        let domains = sqlx::query_scalar::<_, String>(
            r#"
            SELECT DISTINCT domain
            FROM products
            WHERE strpos(domain, $1) > 0
            LIMIT $2
            "#,
        )
        .bind(query)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(domains)
    }
}
