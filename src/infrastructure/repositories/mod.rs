// src/infrastructure/repositories/mod.rs
mod error;
mod sqlite_article;
mod sqlite_keyword;
mod sqlite_reply;

pub use error::map_sqlx;
pub use sqlite_article::{SqliteArticleReadRepository, SqliteArticleWriteRepository};
pub use sqlite_keyword::SqliteKeywordRepository;
pub use sqlite_reply::SqliteReplyRepository;
