use super::error::map_sqlx;
use crate::domain::errors::DomainResult;
use crate::domain::keyword::{Keyword, KeywordId, KeywordRepository};
use async_trait::async_trait;
use sqlx::{FromRow, SqlitePool};

#[derive(Clone)]
pub struct SqliteKeywordRepository {
    pool: SqlitePool,
}

impl SqliteKeywordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct KeywordRow {
    id: i64,
    writer: String,
    content: String,
}

impl From<KeywordRow> for Keyword {
    fn from(row: KeywordRow) -> Self {
        Keyword {
            id: KeywordId(row.id),
            writer: row.writer,
            content: row.content,
        }
    }
}

#[async_trait]
impl KeywordRepository for SqliteKeywordRepository {
    async fn find_contained_in(&self, text: &str) -> DomainResult<Vec<Keyword>> {
        // instr is a case-sensitive substring test
        let rows = sqlx::query_as::<_, KeywordRow>(
            "SELECT id, writer, content FROM keywords WHERE instr(?, content) > 0 ORDER BY id",
        )
        .bind(text)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Keyword::from).collect())
    }
}
