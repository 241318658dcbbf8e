use super::ArticleQueryService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{ArticleCriteria, ArticleId},
};

impl ArticleQueryService {
    /// Raw number of matching rows. Never fails for zero matches.
    pub async fn count_articles(&self, criteria: &ArticleCriteria) -> ApplicationResult<u64> {
        Ok(self.read_repo.count(criteria).await?)
    }

    pub async fn article_exists(&self, id: ArticleId) -> ApplicationResult<bool> {
        Ok(self.count_articles(&ArticleCriteria::Id(id)).await? == 1)
    }
}
