use async_trait::async_trait;
use lnreader_lib::models::{Chapter, ChapterSummary, NovelDetail, SourceInfo};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceRepositoryError {
    #[error("request return error: {0}")]
    RequestError(#[from] lnreader_lib::error::Error),
    #[error("source {0} not found")]
    NotFound(i64),
}

#[async_trait]
pub trait SourceRepository {
    async fn available_sources(&self) -> Result<Vec<SourceInfo>, SourceRepositoryError>;

    async fn get_novel(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<NovelDetail, SourceRepositoryError>;

    async fn get_chapter(
        &self,
        source_id: i64,
        novel_url: &str,
        chapter_url: &str,
    ) -> Result<Chapter, SourceRepositoryError>;

    async fn get_chapters(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<Vec<ChapterSummary>, SourceRepositoryError>;
}
