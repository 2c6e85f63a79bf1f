use crate::application::ports::time::Clock;
use crate::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local article store. Articles are kept in insertion order.
pub struct InMemoryArticleRepository {
    articles: RwLock<Vec<Article>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryArticleRepository {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            articles: RwLock::new(Vec::new()),
            clock,
        }
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn save(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            title,
            content,
        } = article;

        let mut articles = self.articles.write().await;
        let mut id = ArticleId::generate();
        while articles.iter().any(|existing| existing.id == id) {
            id = ArticleId::generate();
        }

        let saved = Article {
            id,
            author,
            title,
            content,
            created_at: self.clock.now(),
        };
        articles.push(saved.clone());
        Ok(saved)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().await;
        Ok(articles.iter().find(|article| article.id == id).cloned())
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.read().await.clone())
    }
}
