pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewReply, Reply, ThreadRole};
pub use repository::ReplyRepository;
pub use specifications::CanReplyToSpec;
pub use value_objects::{ReplyContent, ReplyId};
