use crate::application::error::{ApplicationError, ApplicationResult};
use serde::{Serialize, Serializer};

/// One page of results together with its item count.
///
/// Serialized as a two-element JSON array `[items, count]`. `count` is the
/// number of items on this page, not the number of matching rows overall.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> Page<T> {
    /// An empty page is reported as not found rather than as an empty list.
    pub fn non_empty(items: Vec<T>, what: &str) -> ApplicationResult<Self> {
        if items.is_empty() {
            return Err(ApplicationError::not_found(format!("no {what} on this page")));
        }
        let count = items.len();
        Ok(Self { items, count })
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (&self.items, self.count).serialize(serializer)
    }
}
