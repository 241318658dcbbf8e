// src/application/commands/replies/service.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::ClockPort, queries::articles::ArticleQueryService, services::KeywordNotifier,
    },
    domain::reply::ReplyRepository,
};

pub struct ReplyCommandService {
    pub(super) reply_repo: Arc<dyn ReplyRepository>,
    pub(super) article_queries: Arc<ArticleQueryService>,
    pub(super) notifier: Arc<KeywordNotifier>,
    pub(super) clock: Arc<ClockPort>,
}

impl ReplyCommandService {
    pub fn new(
        reply_repo: Arc<dyn ReplyRepository>,
        article_queries: Arc<ArticleQueryService>,
        notifier: Arc<KeywordNotifier>,
        clock: Arc<ClockPort>,
    ) -> Self {
        Self {
            reply_repo,
            article_queries,
            notifier,
            clock,
        }
    }
}
