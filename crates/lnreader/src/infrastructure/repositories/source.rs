use async_trait::async_trait;
use lnreader_client::ApiClient;
use lnreader_lib::{
    error::Error,
    models::{Chapter, ChapterSummary, NovelDetail, SourceInfo},
};

use crate::domain::repositories::source::{SourceRepository, SourceRepositoryError};

#[derive(Clone)]
pub struct SourceRepositoryImpl {
    client: ApiClient,
}

impl SourceRepositoryImpl {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceRepository for SourceRepositoryImpl {
    async fn available_sources(&self) -> Result<Vec<SourceInfo>, SourceRepositoryError> {
        Ok(self.client.fetch_sources().await.map_err(Error::from)?)
    }

    async fn get_novel(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<NovelDetail, SourceRepositoryError> {
        Ok(self
            .client
            .fetch_novel(source_id, novel_url)
            .await
            .map_err(Error::from)?)
    }

    async fn get_chapter(
        &self,
        source_id: i64,
        novel_url: &str,
        chapter_url: &str,
    ) -> Result<Chapter, SourceRepositoryError> {
        Ok(self
            .client
            .fetch_chapter(source_id, novel_url, chapter_url)
            .await
            .map_err(Error::from)?)
    }

    async fn get_chapters(
        &self,
        source_id: i64,
        novel_url: &str,
    ) -> Result<Vec<ChapterSummary>, SourceRepositoryError> {
        Ok(self
            .client
            .fetch_chapters(source_id, novel_url)
            .await
            .map_err(Error::from)?)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_api_is_network_error() {
        let repo = SourceRepositoryImpl::new(ApiClient::new("http://127.0.0.1:9").unwrap());

        let res = repo.get_novel(1, "novel/a/").await;

        assert!(matches!(
            res,
            Err(SourceRepositoryError::RequestError(Error::Network(_)))
        ));
    }
}
