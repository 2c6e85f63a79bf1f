// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::CreateArticleCommand,
    dto::ArticleDto,
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::ToSchema;

/// Body of `POST /articles`. Missing and `null` fields are both reported as required.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    #[schema(example = "john@doe.com")]
    pub author: Option<String>,
    #[schema(example = "New Article")]
    pub title: Option<String>,
    #[schema(example = "Some extra awesome content")]
    pub content: Option<String>,
}

impl From<CreateArticleRequest> for CreateArticleCommand {
    fn from(request: CreateArticleRequest) -> Self {
        Self {
            author: request.author,
            title: request.title,
            content: request.content,
        }
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "All stored articles.", body = [ArticleDto]),
        (status = 500, description = "Store failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = String, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 400, description = "The id could not be decoded.", body = ErrorResponse),
        (status = 404, description = "No article has this id.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<String>, PathRejection>,
) -> HttpResult<Json<ArticleDto>> {
    let Path(id) = id.map_err(HttpError::from_path_rejection)?;

    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleDto),
        (status = 400, description = "Invalid or missing fields.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let Json(payload) = payload.map_err(HttpError::from_json_rejection)?;

    let article = state
        .services
        .article_commands
        .create_article(payload.into())
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(article)))
}
