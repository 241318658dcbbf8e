// src/domain/pagination.rs

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 5;

/// A 1-indexed page window. Missing or zero values fall back to the defaults,
/// so `page` and `limit` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.filter(|p| *p > 0).unwrap_or(DEFAULT_PAGE),
            limit: limit.filter(|l| *l > 0).unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unspecified() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.page(), 1);
        assert_eq!(page.limit(), 5);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn zero_is_treated_as_unspecified() {
        let page = PageRequest::new(Some(0), Some(0));
        assert_eq!(page, PageRequest::default());
    }

    #[test]
    fn offset_skips_previous_pages() {
        assert_eq!(PageRequest::new(Some(2), Some(5)).offset(), 5);
        assert_eq!(PageRequest::new(Some(4), Some(3)).offset(), 9);
    }

    #[test]
    fn offset_does_not_overflow_for_large_pages() {
        let page = PageRequest::new(Some(u32::MAX), Some(u32::MAX));
        assert_eq!(
            page.offset(),
            u64::from(u32::MAX - 1) * u64::from(u32::MAX)
        );
    }
}
