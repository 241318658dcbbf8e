use crate::application::{ApplicationResult, ports::notification::NotificationPublisher};
use crate::domain::keyword::KeywordMatched;
use async_trait::async_trait;

/// Delivers keyword notifications as log events.
#[derive(Default, Clone)]
pub struct TracingNotificationPublisher;

#[async_trait]
impl NotificationPublisher for TracingNotificationPublisher {
    async fn publish(&self, event: KeywordMatched) -> ApplicationResult<()> {
        tracing::info!(
            keyword_id = i64::from(event.keyword_id),
            writer = %event.writer,
            keyword = %event.content,
            "notification published for {}:{}:{}",
            i64::from(event.keyword_id),
            event.writer,
            event.content
        );
        Ok(())
    }
}
