pub mod entity;
pub mod events;
pub mod repository;

pub use entity::{Keyword, KeywordId};
pub use events::KeywordMatched;
pub use repository::KeywordRepository;
