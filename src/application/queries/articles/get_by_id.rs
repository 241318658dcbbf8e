use super::ArticleQueryService;
use crate::application::{
    dto::FullArticleDto,
    error::{ApplicationError, ApplicationResult},
    lookup,
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<FullArticleDto> {
        let id = lookup::article_id(query.id)?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("article {id} not found")))?;
        Ok(article.into())
    }
}
