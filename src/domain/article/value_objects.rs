use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_TITLE_CHARS: usize = 255;
const MAX_WRITER_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArticleId(pub i64);

impl ArticleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation(
                "article id must be positive".into(),
            ))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        if value.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::Validation(format!(
                "title cannot exceed {MAX_TITLE_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Article body text. Empty content is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriterName(String);

impl WriterName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("writer cannot be empty".into()));
        }
        if value.chars().count() > MAX_WRITER_CHARS {
            return Err(DomainError::Validation(format!(
                "writer cannot exceed {MAX_WRITER_CHARS} characters"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WriterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hashed article password in PHC string form. Never leaves the service.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation(
                "password hash cannot be empty".into(),
            ));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(**redacted**)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_id_rejects_non_positive() {
        assert!(ArticleId::new(0).is_err());
        assert!(ArticleId::new(-3).is_err());
        assert_eq!(i64::from(ArticleId::new(7).unwrap()), 7);
    }

    #[test]
    fn title_rejects_blank_and_oversized() {
        assert!(ArticleTitle::new("   ").is_err());
        assert!(ArticleTitle::new("a".repeat(256)).is_err());
        assert_eq!(ArticleTitle::new("hello").unwrap().as_str(), "hello");
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let korean = "가".repeat(255);
        assert!(ArticleTitle::new(korean).is_ok());
    }

    #[test]
    fn writer_rejects_blank() {
        assert!(WriterName::new("").is_err());
        assert_eq!(WriterName::new("tester").unwrap().to_string(), "tester");
    }

    #[test]
    fn content_may_be_empty() {
        assert_eq!(ArticleContent::new("").as_str(), "");
    }

    #[test]
    fn password_hash_debug_is_redacted() {
        let hash = PasswordHash::new("$argon2id$secret").unwrap();
        assert!(!format!("{hash:?}").contains("secret"));
    }
}
