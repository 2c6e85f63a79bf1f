// tests/support/mocks.rs
use async_trait::async_trait;
use blog_core::domain::article::{Article, ArticleId, ArticleRepository, NewArticle};
use blog_core::domain::errors::{DomainError, DomainResult};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Store whose every operation fails, counting how often it was reached.
#[derive(Default)]
pub struct FailingArticleStore {
    calls: AtomicUsize,
}

impl FailingArticleStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn fail<T>(&self) -> DomainResult<T> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Persistence("connection refused".into()))
    }
}

#[async_trait]
impl ArticleRepository for FailingArticleStore {
    async fn save(&self, _article: NewArticle) -> DomainResult<Article> {
        self.fail()
    }

    async fn find_by_id(&self, _id: ArticleId) -> DomainResult<Option<Article>> {
        self.fail()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        self.fail()
    }
}
