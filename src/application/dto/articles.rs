use crate::domain::article::Article;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire shape of an article: exactly `id`, `author`, `title` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
#[schema(as = Article)]
pub struct ArticleDto {
    pub id: Uuid,
    #[schema(example = "john@doe.com")]
    pub author: String,
    #[schema(example = "New Article")]
    pub title: String,
    #[schema(example = "Some extra awesome content")]
    pub content: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            author: article.author.into_inner(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
        }
    }
}
