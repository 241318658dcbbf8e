// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleTitle, PasswordHash, WriterName,
};
use chrono::{DateTime, Duration, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub writer: WriterName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Timestamp to record for the next modification. Always later than the
    /// current `updated_at`, even when the clock has not advanced.
    pub fn next_updated_at(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        }
    }
}

/// Listing projection of an article: no content, no password.
#[derive(Debug, Clone)]
pub struct ArticleSummary {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub writer: WriterName,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleSummary {
    fn from(article: Article) -> Self {
        Self {
            id: article.id,
            title: article.title,
            writer: article.writer,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub content: ArticleContent,
    pub writer: WriterName,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub content: Option<ArticleContent>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn is_touch_only(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
