mod client;
mod dto;

pub use client::ApiClient;
pub use dto::{GlobalSearchQuery, SearchResponse, SearchResultDto};
