// src/application/services/mod.rs
mod notifier;

use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, replies::ReplyCommandService},
        ports::{ClockPort, NotificationPublisherPort, PasswordHasherPort},
        queries::{articles::ArticleQueryService, replies::ReplyQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        keyword::KeywordRepository,
        reply::ReplyRepository,
    },
};

pub use notifier::KeywordNotifier;

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub reply_commands: Arc<ReplyCommandService>,
    pub reply_queries: Arc<ReplyQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        reply_repo: Arc<dyn ReplyRepository>,
        keyword_repo: Arc<dyn KeywordRepository>,
        password_hasher: Arc<PasswordHasherPort>,
        publisher: Arc<NotificationPublisherPort>,
        clock: Arc<ClockPort>,
    ) -> Self {
        let notifier = Arc::new(KeywordNotifier::new(keyword_repo, publisher));

        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));

        let article_commands = Arc::new(ArticleCommandService::new(
            article_write_repo,
            article_read_repo,
            password_hasher,
            Arc::clone(&notifier),
            Arc::clone(&clock),
        ));

        let reply_commands = Arc::new(ReplyCommandService::new(
            Arc::clone(&reply_repo),
            Arc::clone(&article_queries),
            notifier,
            clock,
        ));

        let reply_queries = Arc::new(ReplyQueryService::new(reply_repo));

        Self {
            article_commands,
            article_queries,
            reply_commands,
            reply_queries,
        }
    }
}
