// src/application/commands/replies/mod.rs
mod create;
mod service;

pub use create::CreateReplyCommand;
pub use service::ReplyCommandService;
