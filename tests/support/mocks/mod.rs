// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notification;
pub mod repos;
pub mod security;
pub mod time;

// 時刻関連
pub use time::{SteppingClock, fixed_now};

// セキュリティ関連
pub use security::DummyPasswordHasher;

// 通知関連
pub use notification::{CapturingPublisher, FailingPublisher};

// リポジトリ関連
pub use repos::{FailingKeywordRepo, NoRowReplyRepo};
