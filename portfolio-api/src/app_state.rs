use std::sync::Arc;

use crate::{
    config::SearchSettings,
    domain::search::SearchService,
    repositories::CatalogRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogRepository>,
    pub search_service: Arc<SearchService>,
    /// `max-age` sent with global search responses
    pub search_cache_max_age: u32,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogRepository>, search: &SearchSettings) -> Self {
        let search_service = SearchService::new(catalog.clone(), search.to_search_config());

        Self {
            catalog,
            search_service: Arc::new(search_service),
            search_cache_max_age: search.cache_max_age_secs,
        }
    }
}
