use super::ReplyQueryService;
use crate::{
    application::{
        dto::{Page, ReplyDto},
        error::ApplicationResult,
        lookup,
    },
    domain::pagination::PageRequest,
};

pub struct ListRepliesQuery {
    pub article_id: i64,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ReplyQueryService {
    pub async fn list_replies(&self, query: ListRepliesQuery) -> ApplicationResult<Page<ReplyDto>> {
        let article_id = lookup::article_id(query.article_id)?;
        let page = PageRequest::new(query.page, query.limit);

        let replies = self.reply_repo.list_page(article_id, page).await?;
        Page::non_empty(replies.into_iter().map(Into::into).collect(), "replies")
    }
}
