use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reply::entity::{Reply, ThreadRole};

/// A reply may only answer a root reply of the same article, which keeps
/// threads one level deep.
pub struct CanReplyToSpec<'a> {
    parent: &'a Reply,
    article_id: ArticleId,
}

impl<'a> CanReplyToSpec<'a> {
    pub fn new(parent: &'a Reply, article_id: ArticleId) -> Self {
        Self { parent, article_id }
    }

    pub fn check(&self) -> DomainResult<()> {
        if let ThreadRole::Child { .. } = self.parent.role() {
            return Err(DomainError::Validation(format!(
                "reply {} is already a nested reply",
                self.parent.id
            )));
        }

        if self.parent.article_id != self.article_id {
            return Err(DomainError::Validation(format!(
                "reply {} belongs to another article",
                self.parent.id
            )));
        }

        Ok(())
    }
}
