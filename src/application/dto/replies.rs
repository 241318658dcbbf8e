use crate::domain::reply::Reply;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReplyDto {
    pub id: i64,
    pub article_id: i64,
    pub reply_ref: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reply> for ReplyDto {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id.into(),
            article_id: reply.article_id.into(),
            reply_ref: reply.reply_ref.map(Into::into),
            content: reply.content.into_inner(),
            created_at: reply.created_at,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReplyIdDto {
    pub id: i64,
    pub article_id: i64,
}
