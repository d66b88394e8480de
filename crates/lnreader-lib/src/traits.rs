use anyhow::Result;
use async_trait::async_trait;

use crate::models::NovelSummary;

/// A ranking site able to list its top novels and search them.
///
/// Errors are shown to the user as-is, so their `Display` should be a readable message.
#[async_trait]
pub trait Scraper: Send + Sync {
    /// `limit` is the offset into the ranking, growing by one page per call.
    async fn scrape_top_novels(&self, limit: u32) -> Result<Vec<NovelSummary>>;

    async fn scrape_search_results(&self, query: &str) -> Result<Vec<NovelSummary>>;
}
