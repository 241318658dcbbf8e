pub mod articles;
pub mod pagination;
pub mod replies;

pub use articles::{AffectedDto, ArticleIdDto, BriefArticleDto, FullArticleDto};
pub use pagination::Page;
pub use replies::{ReplyDto, ReplyIdDto};
