// src/application/ports/notification.rs
use crate::application::ApplicationResult;
use crate::domain::keyword::KeywordMatched;
use async_trait::async_trait;

#[async_trait]
pub trait NotificationPublisher: Send + Sync {
    async fn publish(&self, event: KeywordMatched) -> ApplicationResult<()>;
}
