use super::error::{map_sqlx, to_sql_int};
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use crate::domain::reply::{NewReply, Reply, ReplyContent, ReplyId, ReplyRepository};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

const REPLY_COLUMNS: &str = "id, article_id, reply_ref, content, created_at";

#[derive(Clone)]
pub struct SqliteReplyRepository {
    pool: SqlitePool,
}

impl SqliteReplyRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ReplyRow {
    id: i64,
    article_id: i64,
    reply_ref: Option<i64>,
    content: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<ReplyRow> for Reply {
    type Error = DomainError;

    fn try_from(row: ReplyRow) -> Result<Self, Self::Error> {
        Ok(Reply {
            id: ReplyId::new(row.id)?,
            article_id: ArticleId::new(row.article_id)?,
            reply_ref: row.reply_ref.map(ReplyId::new).transpose()?,
            content: ReplyContent::new(row.content)?,
            created_at: row.created_at,
        })
    }
}

#[async_trait]
impl ReplyRepository for SqliteReplyRepository {
    async fn insert(&self, reply: NewReply) -> DomainResult<Option<Reply>> {
        let sql = format!(
            "INSERT INTO replies (article_id, reply_ref, content, created_at) VALUES (?, ?, ?, ?) RETURNING {REPLY_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ReplyRow>(&sql)
            .bind(i64::from(reply.article_id))
            .bind(reply.reply_ref.map(i64::from))
            .bind(reply.content.as_str())
            .bind(reply.created_at)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Reply::try_from).transpose()
    }

    async fn find_by_id(&self, id: ReplyId) -> DomainResult<Option<Reply>> {
        let sql = format!("SELECT {REPLY_COLUMNS} FROM replies WHERE id = ?");
        let row = sqlx::query_as::<_, ReplyRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Reply::try_from).transpose()
    }

    async fn list_page(
        &self,
        article_id: ArticleId,
        page: PageRequest,
    ) -> DomainResult<Vec<Reply>> {
        let sql = format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE article_id = ? ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?"
        );
        let rows = sqlx::query_as::<_, ReplyRow>(&sql)
            .bind(i64::from(article_id))
            .bind(i64::from(page.limit()))
            .bind(to_sql_int(page.offset()))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Reply::try_from).collect()
    }
}
