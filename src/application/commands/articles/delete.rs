// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::application::{dto::AffectedDto, error::ApplicationResult, lookup};

pub struct DeleteArticleCommand {
    pub id: i64,
    pub password: String,
}

impl ArticleCommandService {
    pub async fn delete_article(
        &self,
        command: DeleteArticleCommand,
    ) -> ApplicationResult<AffectedDto> {
        let id = lookup::article_id(command.id)?;
        self.load_authorized(id, &command.password).await?;

        let affected = self.write_repo.delete(id).await?;
        tracing::info!(article_id = %id, affected, "article deleted");
        Ok(AffectedDto { affected })
    }
}
