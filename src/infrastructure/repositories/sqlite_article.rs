use super::error::{like_pattern, map_sqlx, to_sql_int};
use crate::domain::article::{
    Article, ArticleContent, ArticleCriteria, ArticleFilter, ArticleId, ArticleReadRepository,
    ArticleSummary, ArticleTitle, ArticleUpdate, ArticleWriteRepository, NewArticle,
    PasswordHash, WriterName, fold_case,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};

const ARTICLE_COLUMNS: &str = "id, title, content, writer, password, created_at, updated_at";
const SUMMARY_COLUMNS: &str = "id, title, writer, created_at, updated_at";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: SqlitePool,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: SqlitePool,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    writer: String,
    password: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            content: ArticleContent::new(row.content),
            writer: WriterName::new(row.writer)?,
            password_hash: PasswordHash::new(row.password)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct SummaryRow {
    id: i64,
    title: String,
    writer: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<SummaryRow> for ArticleSummary {
    type Error = DomainError;

    fn try_from(row: SummaryRow) -> Result<Self, Self::Error> {
        Ok(ArticleSummary {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            writer: WriterName::new(row.writer)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            content,
            writer,
            password_hash,
            created_at,
            updated_at,
        } = article;

        let sql = format!(
            "INSERT INTO articles (title, content, writer, title_folded, writer_folded, password, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {ARTICLE_COLUMNS}"
        );
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(title.as_str())
            .bind(content.as_str())
            .bind(writer.as_str())
            .bind(fold_case(title.as_str()))
            .bind(fold_case(writer.as_str()))
            .bind(password_hash.as_str())
            .bind(created_at)
            .bind(updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64> {
        let ArticleUpdate {
            id,
            title,
            content,
            updated_at,
        } = update;

        let result = sqlx::query(
            "UPDATE articles SET title = COALESCE(?, title), title_folded = COALESCE(?, title_folded), content = COALESCE(?, content), updated_at = ? WHERE id = ?",
        )
        .bind(title.as_ref().map(ArticleTitle::as_str))
        .bind(title.as_ref().map(|t| fold_case(t.as_str())))
        .bind(content.as_ref().map(ArticleContent::as_str))
        .bind(updated_at)
        .bind(i64::from(id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<u64> {
        let result = sqlx::query("DELETE FROM articles WHERE id = ?")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}

impl SqliteArticleReadRepository {
    fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &ArticleFilter) {
        // Both sides are folded in Rust, so LIKE's ASCII-only case
        // folding never comes into play. Column names come from a closed enum.
        builder.push(" WHERE ");
        builder.push(filter.field().folded_column());
        builder.push(" LIKE ");
        builder.push_bind(like_pattern(filter.folded_keyword()));
        builder.push(" ESCAPE '\\'");
    }
}

#[async_trait]
impl ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let sql = format!("SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = ?");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_page(
        &self,
        filter: Option<&ArticleFilter>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {SUMMARY_COLUMNS} FROM articles"));
        if let Some(filter) = filter {
            Self::push_filter(&mut builder, filter);
        }
        builder.push(" ORDER BY created_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit()));
        builder.push(" OFFSET ");
        builder.push_bind(to_sql_int(page.offset()));

        let rows = builder
            .build_query_as::<SummaryRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(ArticleSummary::try_from).collect()
    }

    async fn count(&self, criteria: &ArticleCriteria) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> = QueryBuilder::new("SELECT COUNT(1) FROM articles");
        match criteria {
            ArticleCriteria::All => {}
            ArticleCriteria::Id(id) => {
                builder.push(" WHERE id = ");
                builder.push_bind(i64::from(*id));
            }
            ArticleCriteria::Matching(filter) => Self::push_filter(&mut builder, filter),
        }

        let total: i64 = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
