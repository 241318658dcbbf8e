// src/domain/article/search.rs
use crate::domain::article::ArticleId;
use serde::Deserialize;
use utoipa::ToSchema;

/// Case folding applied to searchable text and to search keywords alike.
/// Full Unicode lowercasing, so "Ärger" and "äRGER" fold to the same text.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Article columns that can be searched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    Title,
    Writer,
}

impl SearchField {
    /// Stored column holding the case-folded form of the field.
    pub fn folded_column(&self) -> &'static str {
        match self {
            SearchField::Title => "title_folded",
            SearchField::Writer => "writer_folded",
        }
    }
}

/// Case-insensitive substring match over a single article field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleFilter {
    field: SearchField,
    folded_keyword: String,
}

impl ArticleFilter {
    /// Returns `None` when either half is missing or the keyword is empty,
    /// which means "list everything".
    pub fn build(field: Option<SearchField>, keyword: Option<&str>) -> Option<Self> {
        let field = field?;
        let keyword = keyword.filter(|k| !k.is_empty())?;
        Some(Self {
            field,
            folded_keyword: fold_case(keyword),
        })
    }

    pub fn field(&self) -> SearchField {
        self.field
    }

    /// The keyword after [`fold_case`].
    pub fn folded_keyword(&self) -> &str {
        &self.folded_keyword
    }
}

/// Selection used by `count`.
#[derive(Debug, Clone)]
pub enum ArticleCriteria {
    All,
    Id(ArticleId),
    Matching(ArticleFilter),
}

impl From<Option<ArticleFilter>> for ArticleCriteria {
    fn from(filter: Option<ArticleFilter>) -> Self {
        filter.map_or(ArticleCriteria::All, ArticleCriteria::Matching)
    }
}
