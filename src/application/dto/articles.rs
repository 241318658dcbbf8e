use crate::domain::article::{Article, ArticleId, ArticleSummary};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Single-article view. The password hash travels with the DTO inside the
/// service but is never serialized.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FullArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub writer: String,
    #[serde(skip)]
    pub password: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for FullArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            content: article.content.into_inner(),
            writer: article.writer.into_inner(),
            password: article.password_hash.as_str().to_owned(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Listing view: identity, title, writer and timestamps only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BriefArticleDto {
    pub id: i64,
    pub title: String,
    pub writer: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ArticleSummary> for BriefArticleDto {
    fn from(summary: ArticleSummary) -> Self {
        Self {
            id: summary.id.into(),
            title: summary.title.into_inner(),
            writer: summary.writer.into_inner(),
            created_at: summary.created_at,
            updated_at: summary.updated_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleIdDto {
    pub id: i64,
}

impl From<ArticleId> for ArticleIdDto {
    fn from(id: ArticleId) -> Self {
        Self { id: id.into() }
    }
}

/// Number of rows touched by an update or delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AffectedDto {
    pub affected: u64,
}
