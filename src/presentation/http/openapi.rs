// src/presentation/http/openapi.rs
use crate::application::dto::{BriefArticleDto, ReplyDto};
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// `[items, count]`, where `count` is the number of items on the page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticlePageResponse(pub Vec<BriefArticleDto>, pub usize);

/// `[items, count]`, where `count` is the number of items on the page.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReplyPageResponse(pub Vec<ReplyDto>, pub usize);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::replies::create_reply,
        crate::presentation::http::controllers::replies::list_replies,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticlePageResponse,
            ReplyPageResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::UpdateArticleRequest,
            crate::presentation::http::controllers::articles::DeleteArticleRequest,
            crate::presentation::http::controllers::replies::CreateReplyRequest,
            crate::application::dto::FullArticleDto,
            crate::application::dto::BriefArticleDto,
            crate::application::dto::ArticleIdDto,
            crate::application::dto::AffectedDto,
            crate::application::dto::ReplyDto,
            crate::application::dto::ReplyIdDto,
            crate::domain::article::SearchField
        )
    ),
    tags(
        (name = "Articles", description = "Password-protected articles"),
        (name = "Replies", description = "Threaded replies to an article"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Board API",
        description = "Anonymous bulletin board backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

/// Writes the pretty-printed document to `OPENAPI_SNAPSHOT_PATH` and returns
/// the path written.
pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string());
    write_openapi_to(Path::new(&output_path))?;
    Ok(output_path)
}

pub fn write_openapi_to(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
