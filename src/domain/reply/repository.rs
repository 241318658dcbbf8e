use crate::domain::article::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::pagination::PageRequest;
use crate::domain::reply::entity::{NewReply, Reply};
use crate::domain::reply::value_objects::ReplyId;
use async_trait::async_trait;

#[async_trait]
pub trait ReplyRepository: Send + Sync {
    /// `None` when the store accepted the write but returned no row.
    async fn insert(&self, reply: NewReply) -> DomainResult<Option<Reply>>;
    async fn find_by_id(&self, id: ReplyId) -> DomainResult<Option<Reply>>;
    /// Replies of one article, newest first.
    async fn list_page(&self, article_id: ArticleId, page: PageRequest)
    -> DomainResult<Vec<Reply>>;
}
