// tests/support/mocks/repos.rs
use async_trait::async_trait;
use board_core::domain::article::ArticleId;
use board_core::domain::errors::{DomainError, DomainResult};
use board_core::domain::keyword::{Keyword, KeywordRepository};
use board_core::domain::pagination::PageRequest;
use board_core::domain::reply::{NewReply, Reply, ReplyId, ReplyRepository};

/// キーワード検索が常に失敗するリポジトリ
#[derive(Debug, Default)]
pub struct FailingKeywordRepo;

#[async_trait]
impl KeywordRepository for FailingKeywordRepo {
    async fn find_contained_in(&self, _text: &str) -> DomainResult<Vec<Keyword>> {
        Err(DomainError::Persistence("keyword table unavailable".into()))
    }
}

/// 書き込みは受け付けるが行を返さないリポジトリ
#[derive(Debug, Default)]
pub struct NoRowReplyRepo;

#[async_trait]
impl ReplyRepository for NoRowReplyRepo {
    async fn insert(&self, _reply: NewReply) -> DomainResult<Option<Reply>> {
        Ok(None)
    }

    async fn find_by_id(&self, _id: ReplyId) -> DomainResult<Option<Reply>> {
        Ok(None)
    }

    async fn list_page(
        &self,
        _article_id: ArticleId,
        _page: PageRequest,
    ) -> DomainResult<Vec<Reply>> {
        Ok(Vec::new())
    }
}
