use lnreader_lib::models::{Chapter, ChapterSummary, NovelDetail, SourceInfo};
use serde_json::Value;

use crate::{
    error::Error,
    schema::{novel_from_value, parse_response},
};

pub const DEFAULT_API_URL: &str = "https://lnreader-extensions.vercel.app";

const USER_AGENT: &str = concat!("LNReader/", env!("CARGO_PKG_VERSION"));

/// One-shot client for the extensions API. No retry, timeout or cache is applied.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        let client = reqwest::ClientBuilder::new()
            .user_agent(USER_AGENT)
            .gzip(true)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn sources_url(&self) -> String {
        format!("{}/api/", self.base_url)
    }

    fn novel_url(&self, source_id: i64, novel_url: &str) -> String {
        format!("{}/api/{source_id}/novel/{novel_url}", self.base_url)
    }

    fn chapter_url(&self, source_id: i64, novel_url: &str, chapter_url: &str) -> String {
        format!(
            "{}/api/{source_id}/novel/{novel_url}{chapter_url}",
            self.base_url
        )
    }

    async fn get(&self, url: &str) -> Result<Value, Error> {
        debug!("GET {url}");

        let res = self.client.get(url).send().await?;
        let status = res.status().as_u16();
        let body = res.text().await?;

        debug!("GET {url} => {status}, {} bytes", body.len());

        parse_response(url, status, &body)
    }

    pub async fn fetch_sources(&self) -> Result<Vec<SourceInfo>, Error> {
        let value = self.get(&self.sources_url()).await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn fetch_novel(&self, source_id: i64, novel_url: &str) -> Result<NovelDetail, Error> {
        let value = self.get(&self.novel_url(source_id, novel_url)).await?;
        novel_from_value(value)
    }

    pub async fn fetch_chapter(
        &self,
        source_id: i64,
        novel_url: &str,
        chapter_url: &str,
    ) -> Result<Chapter, Error> {
        let value = self
            .get(&self.chapter_url(source_id, novel_url, chapter_url))
            .await?;
        Ok(Chapter(value))
    }

    /// There is no chapter-only endpoint, the whole novel is fetched again.
    pub async fn fetch_chapters(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<Vec<ChapterSummary>, Error> {
        let novel = self.fetch_novel(source_id, novel_url).await?;
        Ok(novel.chapters)
    }
}
