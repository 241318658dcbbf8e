// src/application/lookup.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::article::ArticleId;

/// Ids that cannot exist are reported the same way as ids that do not exist.
pub(crate) fn article_id(raw: i64) -> ApplicationResult<ArticleId> {
    ArticleId::new(raw).map_err(|_| ApplicationError::not_found(format!("article {raw} not found")))
}
