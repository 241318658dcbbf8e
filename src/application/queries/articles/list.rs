use super::ArticleQueryService;
use crate::{
    application::{
        dto::{BriefArticleDto, Page},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleFilter, SearchField},
        pagination::PageRequest,
    },
};

#[derive(Debug, Default)]
pub struct ListArticlesQuery {
    pub field: Option<SearchField>,
    pub keyword: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<BriefArticleDto>> {
        let filter = ArticleFilter::build(query.field, query.keyword.as_deref());
        let page = PageRequest::new(query.page, query.limit);

        let records = self.read_repo.list_page(filter.as_ref(), page).await?;
        tracing::debug!(
            page = page.page(),
            limit = page.limit(),
            filtered = filter.is_some(),
            returned = records.len(),
            "listed articles"
        );

        Page::non_empty(records.into_iter().map(Into::into).collect(), "articles")
    }
}
