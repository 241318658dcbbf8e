use crate::domain::article::entity::{Article, ArticleSummary, ArticleUpdate, NewArticle};
use crate::domain::article::search::{ArticleCriteria, ArticleFilter};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Returns the number of rows changed.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<u64>;
    /// Returns the number of rows removed.
    async fn delete(&self, id: ArticleId) -> DomainResult<u64>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    /// Newest first (`created_at` DESC, then id DESC).
    async fn list_page(
        &self,
        filter: Option<&ArticleFilter>,
        page: PageRequest,
    ) -> DomainResult<Vec<ArticleSummary>>;
    async fn count(&self, criteria: &ArticleCriteria) -> DomainResult<u64>;
}
