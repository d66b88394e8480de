use lnreader_lib::models::{Chapter, ChapterSummary, NovelDetail, SourceInfo};
use thiserror::Error;

use crate::domain::repositories::source::{SourceRepository, SourceRepositoryError};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source return error: {0}")]
    RepositoryError(#[from] SourceRepositoryError),
}

#[derive(Clone)]
pub struct SourceService<R>
where
    R: SourceRepository,
{
    repo: R,
}

impl<R> SourceService<R>
where
    R: SourceRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn get_available_sources(&self) -> Result<Vec<SourceInfo>, SourceError> {
        let mut sources = self.repo.available_sources().await?;

        sources.sort_by(|a, b| a.id.cmp(&b.id));

        Ok(sources)
    }

    pub async fn get_source_by_id(&self, id: i64) -> Result<SourceInfo, SourceError> {
        let source = self
            .repo
            .available_sources()
            .await?
            .into_iter()
            .find(|source| source.id == id)
            .ok_or(SourceRepositoryError::NotFound(id))?;

        Ok(source)
    }

    pub async fn get_novel(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<NovelDetail, SourceError> {
        let novel = self.repo.get_novel(source_id, novel_url).await?;
        debug!(
            "novel {} from source {source_id}: {} chapters",
            novel.name,
            novel.chapters.len()
        );

        Ok(novel)
    }

    pub async fn get_chapter(
        &self,
        source_id: i64,
        novel_url: &str,
        chapter_url: &str,
    ) -> Result<Chapter, SourceError> {
        let chapter = self
            .repo
            .get_chapter(source_id, novel_url, chapter_url)
            .await?;

        Ok(chapter)
    }

    pub async fn get_chapters(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<Vec<ChapterSummary>, SourceError> {
        let chapters = self.repo.get_chapters(source_id, novel_url).await?;

        Ok(chapters)
    }
}
