use crate::domain::errors::DomainResult;
use crate::domain::keyword::entity::Keyword;
use async_trait::async_trait;

#[async_trait]
pub trait KeywordRepository: Send + Sync {
    /// Keywords whose content occurs in `text`, each returned once.
    async fn find_contained_in(&self, text: &str) -> DomainResult<Vec<Keyword>>;
}
