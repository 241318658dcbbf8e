mod list;
mod service;

pub use list::ListRepliesQuery;
pub use service::ReplyQueryService;
