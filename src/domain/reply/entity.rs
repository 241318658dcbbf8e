// src/domain/reply/entity.rs
use crate::domain::article::ArticleId;
use crate::domain::reply::value_objects::{ReplyContent, ReplyId};
use chrono::{DateTime, Utc};

/// Position of a reply within its thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadRole {
    Root,
    Child { parent: ReplyId },
}

#[derive(Debug, Clone)]
pub struct Reply {
    pub id: ReplyId,
    pub article_id: ArticleId,
    pub reply_ref: Option<ReplyId>,
    pub content: ReplyContent,
    pub created_at: DateTime<Utc>,
}

impl Reply {
    pub fn role(&self) -> ThreadRole {
        match self.reply_ref {
            None => ThreadRole::Root,
            Some(parent) => ThreadRole::Child { parent },
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewReply {
    pub article_id: ArticleId,
    pub reply_ref: Option<ReplyId>,
    pub content: ReplyContent,
    pub created_at: DateTime<Utc>,
}
