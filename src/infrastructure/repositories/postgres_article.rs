// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::application::ports::time::Clock;
use crate::domain::article::{
    Article, ArticleAuthor, ArticleContent, ArticleId, ArticleRepository, ArticleTitle,
    NewArticle, ValidationErrors,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
    clock: Arc<dyn Clock>,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    author: String,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let mut errors = ValidationErrors::default();
        let author = errors.check("author", ArticleAuthor::new(row.author));
        let title = errors.check("title", ArticleTitle::new(row.title));
        let content = errors.check("content", ArticleContent::new(row.content));

        match (author, title, content) {
            (Some(author), Some(title), Some(content)) => Ok(Article {
                id: ArticleId::from(row.id),
                author,
                title,
                content,
                created_at: row.created_at,
            }),
            _ => Err(DomainError::Persistence(format!(
                "stored article {} is invalid: {errors}",
                row.id
            ))),
        }
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn save(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            author,
            title,
            content,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (id, author, title, content, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id, author, title, content, created_at",
        )
        .bind(ArticleId::generate().as_uuid())
        .bind(author.as_str())
        .bind(title.as_str())
        .bind(content.as_str())
        .bind(self.clock.now())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content, created_at FROM articles WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn find_all(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(
            "SELECT id, author, title, content, created_at FROM articles ORDER BY seq",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
