// src/application/commands/replies/create.rs
use super::ReplyCommandService;
use crate::{
    application::{
        dto::ReplyIdDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleId,
        reply::{CanReplyToSpec, NewReply, ReplyContent, ReplyId},
    },
};

pub struct CreateReplyCommand {
    pub article_id: i64,
    pub content: Option<String>,
    pub reply_ref: Option<i64>,
}

impl ReplyCommandService {
    pub async fn create_reply(&self, command: CreateReplyCommand) -> ApplicationResult<ReplyIdDto> {
        let content = ReplyContent::new(command.content.unwrap_or_default())?;
        let article_id = self.ensure_article_exists(command.article_id).await?;

        let reply_ref = match command.reply_ref {
            Some(raw) => Some(self.ensure_parent_accepts_reply(raw, article_id).await?),
            None => None,
        };

        // The checks above and this insert are separate round trips. Foreign
        // keys reject the insert if the article or parent vanished meanwhile.
        let created = self
            .reply_repo
            .insert(NewReply {
                article_id,
                reply_ref,
                content,
                created_at: self.clock.now(),
            })
            .await?
            .ok_or_else(|| ApplicationError::internal("reply insert returned no row"))?;

        tracing::info!(
            reply_id = %created.id,
            article_id = %created.article_id,
            nested = created.reply_ref.is_some(),
            "reply created"
        );

        self.notifier.notify(created.content.as_str()).await;

        Ok(ReplyIdDto {
            id: created.id.into(),
            article_id: created.article_id.into(),
        })
    }

    async fn ensure_article_exists(&self, raw: i64) -> ApplicationResult<ArticleId> {
        let missing = || ApplicationError::invalid_request(format!("article {raw} does not exist"));

        let article_id = ArticleId::new(raw).map_err(|_| missing())?;
        if !self.article_queries.article_exists(article_id).await? {
            return Err(missing());
        }
        Ok(article_id)
    }

    async fn ensure_parent_accepts_reply(
        &self,
        raw: i64,
        article_id: ArticleId,
    ) -> ApplicationResult<ReplyId> {
        let missing = || ApplicationError::invalid_request(format!("reply {raw} does not exist"));

        let parent_id = ReplyId::new(raw).map_err(|_| missing())?;
        let parent = self
            .reply_repo
            .find_by_id(parent_id)
            .await?
            .ok_or_else(missing)?;

        CanReplyToSpec::new(&parent, article_id)
            .check()
            .map_err(|err| ApplicationError::invalid_request(err.to_string()))?;

        Ok(parent_id)
    }
}
