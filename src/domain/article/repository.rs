use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Document store for articles.
///
/// Implementations assign a fresh unique id and the creation timestamp on
/// `save`, and return articles from `find_all` in a stable order.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn save(&self, article: NewArticle) -> DomainResult<Article>;
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_all(&self) -> DomainResult<Vec<Article>>;
}
