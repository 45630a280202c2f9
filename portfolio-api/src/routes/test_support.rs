//! Helpers for exercising the router in tests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use serde_json::Value;
use time::{macros::datetime, Duration, OffsetDateTime};
use tower::ServiceExt;

use crate::{
    app_state::AppState,
    config::SearchSettings,
    domain::models::{Product, Publication, RepositoryListing, Solution},
    repositories::MockCatalogRepository,
    router,
};

const EPOCH: OffsetDateTime = datetime!(2024-01-01 0:00 UTC);

pub fn app(repo: MockCatalogRepository) -> Router {
    let state = AppState::new(Arc::new(repo), &SearchSettings::default());
    router::create(state, "http://localhost:5173")
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub async fn get(app: Router, uri: &str) -> TestResponse {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));

    TestResponse {
        status,
        headers,
        body,
    }
}

pub fn product(id: i32, title: &str, domain: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        short_description: format!("{title} in short"),
        long_description: String::new(),
        domain: domain.to_string(),
        image_url: Some(format!("/images/products/{id}.png")),
        created_at: EPOCH + Duration::days(id as i64),
    }
}

pub fn solution(id: i32, title: &str, problem_area: &str, is_active: bool) -> Solution {
    Solution {
        id,
        title: title.to_string(),
        summary: String::new(),
        problem_area: problem_area.to_string(),
        demo_image_url: None,
        is_active,
        created_at: EPOCH + Duration::days(id as i64),
    }
}

pub fn publication(id: i32, title: &str, domain: &str, is_published: bool) -> Publication {
    Publication {
        id,
        title: title.to_string(),
        abstract_text: String::new(),
        authors: "J. Doe".to_string(),
        keywords: String::new(),
        domain: domain.to_string(),
        thumbnail_url: None,
        is_published,
        created_at: EPOCH + Duration::days(id as i64),
    }
}

pub fn listing(id: i32, title: &str, category: &str, is_active: bool) -> RepositoryListing {
    RepositoryListing {
        id,
        title: title.to_string(),
        description: String::new(),
        technical_stack: "Rust".to_string(),
        category: category.to_string(),
        is_active,
        created_at: EPOCH + Duration::days(id as i64),
    }
}
