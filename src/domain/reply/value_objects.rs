use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const MAX_CONTENT_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReplyId(pub i64);

impl ReplyId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("reply id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ReplyId> for i64 {
    fn from(value: ReplyId) -> Self {
        value.0
    }
}

impl fmt::Display for ReplyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplyContent(String);

impl ReplyContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.chars().count() > MAX_CONTENT_CHARS {
            return Err(DomainError::Validation(format!(
                "reply content cannot exceed {MAX_CONTENT_CHARS} characters"
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
