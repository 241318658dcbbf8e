pub mod entity;
pub mod repository;
pub mod search;
pub mod value_objects;

pub use entity::{Article, ArticleSummary, ArticleUpdate, NewArticle};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use search::{ArticleCriteria, ArticleFilter, SearchField, fold_case};
pub use value_objects::{ArticleContent, ArticleId, ArticleTitle, PasswordHash, WriterName};
