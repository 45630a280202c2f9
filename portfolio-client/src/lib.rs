//! Client side of the portfolio site.
//!
//! - [`api`] talks to the portfolio API over HTTP.
//! - [`listing`] holds a fully fetched catalog list in memory, filters and
//!   paginates it locally and resolves deep links like `Products.html?id=42`.
//! - [`search_box`] debounces search-as-you-type and drops stale responses.

pub mod api;
pub mod listing;
pub mod search_box;

pub use api::{ApiClient, GlobalSearchQuery, SearchResponse, SearchResultDto};
pub use listing::{DeepLink, DeepLinkOutcome, DetailOpener, ListPage, ListView, SortOrder};
pub use search_box::{Debouncer, LatestOnly, SearchBox, SuggestionSource};
