pub mod articles;
pub mod replies;
