// src/domain/article/entity.rs
use crate::domain::article::repository::ArticleRepository;
use crate::domain::article::validation::validate_article_fields;
use crate::domain::article::value_objects::{
    ArticleAuthor, ArticleContent, ArticleId, ArticleTitle,
};
use crate::domain::errors::DomainResult;
use chrono::{DateTime, Utc};

/// A persisted article. Only the store hands these out.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub created_at: DateTime<Utc>,
}

/// An article that passed validation but has not been saved yet.
#[derive(Debug, Clone)]
pub struct NewArticle {
    pub author: ArticleAuthor,
    pub title: ArticleTitle,
    pub content: ArticleContent,
}

impl NewArticle {
    /// `None` stands for a field that was missing or `null` in the request.
    pub fn new(
        author: Option<String>,
        title: Option<String>,
        content: Option<String>,
    ) -> DomainResult<Self> {
        Ok(validate_article_fields(author, title, content)?)
    }

    /// Persist through `store`, which assigns the id and creation timestamp.
    pub async fn save(self, store: &dyn ArticleRepository) -> DomainResult<Article> {
        store.save(self).await
    }
}
