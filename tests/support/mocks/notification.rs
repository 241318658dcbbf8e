// tests/support/mocks/notification.rs
use async_trait::async_trait;
use board_core::application::{
    ApplicationResult, error::ApplicationError, ports::notification::NotificationPublisher,
};
use board_core::domain::keyword::KeywordMatched;
use std::sync::Mutex;

/// 発行された通知を記録するパブリッシャー
#[derive(Debug, Default)]
pub struct CapturingPublisher {
    events: Mutex<Vec<KeywordMatched>>,
}

impl CapturingPublisher {
    pub fn events(&self) -> Vec<KeywordMatched> {
        self.events.lock().expect("publisher mutex poisoned").clone()
    }

    pub fn writers(&self) -> Vec<String> {
        self.events().into_iter().map(|e| e.writer).collect()
    }
}

#[async_trait]
impl NotificationPublisher for CapturingPublisher {
    async fn publish(&self, event: KeywordMatched) -> ApplicationResult<()> {
        self.events
            .lock()
            .expect("publisher mutex poisoned")
            .push(event);
        Ok(())
    }
}

/// 常に失敗するパブリッシャー
#[derive(Debug, Default)]
pub struct FailingPublisher;

#[async_trait]
impl NotificationPublisher for FailingPublisher {
    async fn publish(&self, _event: KeywordMatched) -> ApplicationResult<()> {
        Err(ApplicationError::internal("publisher offline"))
    }
}
