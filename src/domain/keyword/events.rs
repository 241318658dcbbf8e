use crate::domain::keyword::entity::{Keyword, KeywordId};

/// Raised once per keyword whose content appears in newly written text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatched {
    pub keyword_id: KeywordId,
    pub writer: String,
    pub content: String,
}

impl From<Keyword> for KeywordMatched {
    fn from(keyword: Keyword) -> Self {
        Self {
            keyword_id: keyword.id,
            writer: keyword.writer,
            content: keyword.content,
        }
    }
}
