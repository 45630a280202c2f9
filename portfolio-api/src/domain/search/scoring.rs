//! Heuristic relevance scoring for global search hits.

use rand::Rng;

/// Upper bound (exclusive) of the random jitter added to every score.
pub const MAX_JITTER: f64 = 5.0;

const EXACT_TITLE: f64 = 100.0;
const TITLE_CONTAINS: f64 = 50.0;
const TITLE_PREFIX: f64 = 30.0;
const DESCRIPTION_CONTAINS: f64 = 20.0;
const SHORT_TITLE: f64 = 10.0;
const SHORT_TITLE_CHARS: usize = 50;

/// Deterministic part of the relevance score. All comparisons are lowercased.
///
/// An exact title match scores 100, otherwise a title substring scores 50.
/// A title prefix adds 30 on top of either, a description substring adds 20
/// and titles shorter than 50 characters get 10 more.
pub fn base_score(query: &str, title: &str, description: &str) -> f64 {
    let query = query.to_lowercase();
    let lowered_title = title.to_lowercase();

    let mut score = 0.0;

    if lowered_title == query {
        score += EXACT_TITLE;
    } else if lowered_title.contains(&query) {
        score += TITLE_CONTAINS;
    }

    if lowered_title.starts_with(&query) {
        score += TITLE_PREFIX;
    }

    if description.to_lowercase().contains(&query) {
        score += DESCRIPTION_CONTAINS;
    }

    if title.chars().count() < SHORT_TITLE_CHARS {
        score += SHORT_TITLE;
    }

    score
}

/// Source of the random tie-breaking component of a score.
pub trait Jitter: Send + Sync {
    /// A value in `[0, MAX_JITTER)`.
    fn sample(&self) -> f64;
}

/// Draws from the calling thread's generator, so concurrent requests never share state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl Jitter for ThreadRngJitter {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..MAX_JITTER)
    }
}

/// Full relevance: base score plus a fresh jitter sample.
pub fn relevance(query: &str, title: &str, description: &str, jitter: &dyn Jitter) -> f64 {
    base_score(query, title, description) + jitter.sample()
}
