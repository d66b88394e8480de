use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::ChapterSummary;

/// An entry of a ranking or search listing
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelSummary {
    pub name: String,
    pub cover_url: String,
    pub detail_url: String,
}

impl NovelSummary {
    pub fn new(
        name: impl Into<String>,
        cover_url: impl Into<String>,
        detail_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cover_url: cover_url.into(),
            detail_url: detail_url.into(),
        }
    }

    /// Summaries are identified by their detail page.
    pub fn key(&self) -> &str {
        &self.detail_url
    }
}

/// A type represent novel details, normalized across source
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NovelDetail {
    pub source_id: i64,
    pub source_name: String,
    pub novel_url: String,
    pub source_url: String,
    pub name: String,
    pub cover: Option<String>,
    pub summary: Option<String>,
    pub author: Option<String>,
    pub artist: Option<String>,
    pub status: Option<String>,
    pub genres: BTreeSet<String>,
    pub followed: bool,
    pub chapters: Vec<ChapterSummary>,
}
