// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, UpdateArticleCommand},
    dto::{AffectedDto, ArticleIdDto, BriefArticleDto, FullArticleDto, Page},
    queries::articles::{GetArticleByIdQuery, ListArticlesQuery},
};
use crate::domain::article::SearchField;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ArticlePageResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{
        Path, Query,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Field to search; ignored unless `keyword` is also given.
    #[serde(rename = "type")]
    #[param(inline)]
    pub field: Option<SearchField>,
    /// Case-insensitive substring to look for.
    pub keyword: Option<String>,
    /// 1-based page number (default 1).
    pub page: Option<u32>,
    /// Page size (default 5).
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub writer: String,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct DeleteArticleRequest {
    pub password: String,
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleIdDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ArticleIdDto>)> {
    let Json(payload) = payload?;
    let command = CreateArticleCommand {
        title: payload.title,
        content: payload.content,
        writer: payload.writer,
        password: payload.password,
    };

    let created = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles, newest first, with the page's item count.", body = ArticlePageResponse),
        (status = 400, description = "Malformed query.", body = ErrorResponse),
        (status = 404, description = "The page is empty.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    params: Result<Query<ArticleListParams>, QueryRejection>,
) -> HttpResult<Json<Page<BriefArticleDto>>> {
    let Query(params) = params?;
    let query = ListArticlesQuery {
        field: params.field,
        keyword: params.keyword,
        page: params.page,
        limit: params.limit,
    };

    state
        .services
        .article_queries
        .list_articles(query)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article, without its password.", body = FullArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
) -> HttpResult<Json<FullArticleDto>> {
    let Path(id) = id?;
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = UpdateArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = AffectedDto),
        (status = 400, description = "Invalid input.", body = ErrorResponse),
        (status = 401, description = "Wrong password.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> HttpResult<Json<AffectedDto>> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let command = UpdateArticleCommand {
        id,
        password: payload.password,
        title: payload.title,
        content: payload.content,
    };

    state
        .services
        .article_commands
        .update_article(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = DeleteArticleRequest,
    responses(
        (status = 200, description = "Article and its replies removed.", body = AffectedDto),
        (status = 401, description = "Wrong password.", body = ErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<DeleteArticleRequest>, JsonRejection>,
) -> HttpResult<Json<AffectedDto>> {
    let Path(id) = id?;
    let Json(payload) = payload?;

    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id,
            password: payload.password,
        })
        .await
        .into_http()
        .map(Json)
}
