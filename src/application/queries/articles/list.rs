use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

/// Every saved article, in store order. There is no filtering or paging.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListArticlesQuery;

impl ArticleQueryService {
    pub async fn list_articles(&self, _query: ListArticlesQuery) -> ApplicationResult<Vec<ArticleDto>> {
        let records = self.store.find_all().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
