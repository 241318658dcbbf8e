// src/presentation/http/controllers/replies.rs
use crate::application::{
    commands::replies::CreateReplyCommand,
    dto::{Page, ReplyDto, ReplyIdDto},
    queries::replies::ListRepliesQuery,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::ReplyPageResponse;
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
pub struct ReplyListParams {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateReplyRequest {
    /// Defaults to an empty string.
    pub content: Option<String>,
    /// Root reply to answer. Must belong to the same article and must not
    /// itself be an answer.
    pub reply_ref: Option<i64>,
}

#[utoipa::path(
    post,
    path = "/articles/{article_id}/replies",
    params(("article_id" = i64, Path, description = "Article id")),
    request_body = CreateReplyRequest,
    responses(
        (status = 201, description = "Reply created.", body = ReplyIdDto),
        (status = 400, description = "Missing article, bad parent or invalid input.", body = ErrorResponse),
        (status = 500, description = "Storage failure.", body = ErrorResponse)
    ),
    tag = "Replies"
)]
pub async fn create_reply(
    Extension(state): Extension<HttpState>,
    article_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<CreateReplyRequest>, JsonRejection>,
) -> HttpResult<(StatusCode, Json<ReplyIdDto>)> {
    let Path(article_id) = article_id?;
    let Json(payload) = payload?;
    let command = CreateReplyCommand {
        article_id,
        content: payload.content,
        reply_ref: payload.reply_ref,
    };

    let created = state
        .services
        .reply_commands
        .create_reply(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    get,
    path = "/articles/{article_id}/replies",
    params(("article_id" = i64, Path, description = "Article id"), ReplyListParams),
    responses(
        (status = 200, description = "One page of replies, newest first, with the page's item count.", body = ReplyPageResponse),
        (status = 404, description = "The page is empty.", body = ErrorResponse)
    ),
    tag = "Replies"
)]
pub async fn list_replies(
    Extension(state): Extension<HttpState>,
    article_id: Result<Path<i64>, PathRejection>,
    params: Result<Query<ReplyListParams>, QueryRejection>,
) -> HttpResult<Json<Page<ReplyDto>>> {
    let Path(article_id) = article_id?;
    let Query(params) = params?;

    state
        .services
        .reply_queries
        .list_replies(ListRepliesQuery {
            article_id,
            page: params.page,
            limit: params.limit,
        })
        .await
        .into_http()
        .map(Json)
}
