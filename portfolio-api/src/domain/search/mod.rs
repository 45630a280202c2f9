//! Global search over the portfolio catalog.
//!
//! A query fans out to products, solutions, publications and repositories.
//! Every hit is scored with a small heuristic (see [`scoring`]) plus random
//! jitter, merged into one list, sorted and paginated.
//!
//! ```ignore
//! let service = SearchService::new(catalog, SearchConfig::default());
//! let page = service.search(SearchRequest { query: "vision".into(), ..Default::default() }).await?;
//! ```

mod error;
pub mod scoring;
mod service;
mod types;

pub use error::SearchError;
pub use service::{SearchConfig, SearchService};
pub use types::{SearchKind, SearchPage, SearchRequest, SearchResult};
