// src/domain/mod.rs
pub mod article;
pub mod errors;
pub mod keyword;
pub mod pagination;
pub mod reply;
