use super::ArticleCommandService;
use crate::{
    application::{dto::AffectedDto, error::ApplicationResult, lookup},
    domain::article::{ArticleContent, ArticleTitle, ArticleUpdate},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub password: String,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<AffectedDto> {
        let id = lookup::article_id(command.id)?;
        let article = self.load_authorized(id, &command.password).await?;

        let title = command.title.map(ArticleTitle::new).transpose()?;
        let content = command.content.map(ArticleContent::new);

        let mut update = ArticleUpdate::new(id, article.next_updated_at(self.clock.now()));
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }

        if update.is_touch_only() {
            tracing::debug!(article_id = %id, "update without field changes; refreshing timestamp");
        }

        let affected = self.write_repo.update(update).await?;
        tracing::info!(article_id = %id, affected, "article updated");
        Ok(AffectedDto { affected })
    }
}
