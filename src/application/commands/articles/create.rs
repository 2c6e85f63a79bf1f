// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::NewArticle,
};

/// Raw field values for a new article. `None` means the field was missing or `null`.
#[derive(Debug, Clone, Default)]
pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    author: Option<String>,
    title: Option<String>,
    content: Option<String>,
}

impl CreateArticleCommandBuilder {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> CreateArticleCommand {
        CreateArticleCommand {
            author: self.author,
            title: self.title,
            content: self.content,
        }
    }
}

impl ArticleCommandService {
    /// Validate the fields and persist the article. Nothing reaches the store
    /// when validation fails.
    pub async fn create_article(&self, command: CreateArticleCommand) -> ApplicationResult<ArticleDto> {
        let article = NewArticle::new(command.author, command.title, command.content)
            .map_err(ApplicationError::from)
            .inspect_err(|err| tracing::debug!(error = %err, "rejected article"))?;

        let created = article.save(self.store.as_ref()).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
