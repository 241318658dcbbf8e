// src/application/commands/articles/create.rs
use super::{ArticleCommandService, password::validate_password};
use crate::{
    application::{dto::ArticleIdDto, error::ApplicationResult},
    domain::article::{ArticleContent, ArticleTitle, NewArticle, PasswordHash, WriterName},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub writer: String,
    pub password: String,
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleIdDto> {
        let title = ArticleTitle::new(command.title)?;
        let writer = WriterName::new(command.writer)?;
        let content = ArticleContent::new(command.content);
        validate_password(&command.password)?;

        let password_hash = PasswordHash::new(self.password_hasher.hash(&command.password).await?)?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            writer,
            password_hash,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, "article created");

        self.notifier.notify(created.content.as_str()).await;
        Ok(created.id.into())
    }
}
