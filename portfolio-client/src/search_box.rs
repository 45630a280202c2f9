use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};
use std::time::Duration;

use async_trait::async_trait;

use crate::api::ApiClient;

pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Shown in place of suggestions when the API can't be reached.
pub const FALLBACK_SUGGESTION: &str = "Search temporarily unavailable";

const MIN_QUERY_LENGTH: usize = 2;

#[async_trait]
pub trait SuggestionSource: Send + Sync {
    async fn suggestions(&self, query: &str) -> anyhow::Result<Vec<String>>;
}

#[async_trait]
impl SuggestionSource for ApiClient {
    async fn suggestions(&self, query: &str) -> anyhow::Result<Vec<String>> {
        ApiClient::suggestions(self, query).await
    }
}

/// Hands out increasing tickets. Only the most recent ticket is current.
#[derive(Debug, Clone, Default)]
pub struct LatestOnly {
    latest: Arc<AtomicU64>,
}

impl LatestOnly {
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    calls: LatestOnly,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: LatestOnly::default(),
        }
    }

    /// Waits out the delay. Returns `false` when another call started in
    /// the meantime.
    pub async fn settle(&self) -> bool {
        let ticket = self.calls.issue();
        tokio::time::sleep(self.delay).await;
        self.calls.is_latest(ticket)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(SEARCH_DEBOUNCE)
    }
}

/// Search-as-you-type over a [`SuggestionSource`].
pub struct SearchBox<S> {
    source: S,
    debouncer: Debouncer,
    requests: LatestOnly,
}

impl<S: SuggestionSource> SearchBox<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            debouncer: Debouncer::default(),
            requests: LatestOnly::default(),
        }
    }

    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debouncer = Debouncer::new(delay);
        self
    }

    /// Called on every keystroke. Returns `None` when the input was
    /// superseded, either while debouncing or while the request was in
    /// flight, so the caller keeps what it is already showing.
    pub async fn on_input(&self, input: &str) -> Option<Vec<String>> {
        if !self.debouncer.settle().await {
            return None;
        }

        // Every settled input supersedes requests still in flight, even one
        // that never reaches the source.
        let ticket = self.requests.issue();

        let query = input.trim();
        if query.chars().count() < MIN_QUERY_LENGTH {
            return Some(Vec::new());
        }

        let result = self.source.suggestions(query).await;

        if !self.requests.is_latest(ticket) {
            tracing::debug!(query, "Dropping stale suggestions");
            return None;
        }

        match result {
            Ok(suggestions) => Some(suggestions),
            Err(e) => {
                tracing::warn!("Failed to fetch suggestions: {:?}", e);
                Some(vec![FALLBACK_SUGGESTION.to_string()])
            }
        }
    }
}
