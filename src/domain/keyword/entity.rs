// src/domain/keyword/entity.rs

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeywordId(pub i64);

impl From<KeywordId> for i64 {
    fn from(value: KeywordId) -> Self {
        value.0
    }
}

/// A registered watch pattern. `content` is matched literally and
/// case-sensitively against new article and reply text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub id: KeywordId,
    pub writer: String,
    pub content: String,
}
