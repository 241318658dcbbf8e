// src/application/services/notifier.rs
use std::sync::Arc;

use crate::{
    application::ports::NotificationPublisherPort,
    domain::keyword::{KeywordMatched, KeywordRepository},
};

/// Publishes one notification per keyword found in newly written text.
///
/// Best effort: lookup and publish failures are logged and dropped so they
/// never undo the write that triggered them.
pub struct KeywordNotifier {
    keyword_repo: Arc<dyn KeywordRepository>,
    publisher: Arc<NotificationPublisherPort>,
}

impl KeywordNotifier {
    pub fn new(
        keyword_repo: Arc<dyn KeywordRepository>,
        publisher: Arc<NotificationPublisherPort>,
    ) -> Self {
        Self {
            keyword_repo,
            publisher,
        }
    }

    pub async fn notify(&self, text: &str) {
        let matched = match self.keyword_repo.find_contained_in(text).await {
            Ok(matched) => matched,
            Err(err) => {
                tracing::warn!(error = %err, "keyword lookup failed, skipping notifications");
                return;
            }
        };

        for keyword in matched {
            let keyword_id = i64::from(keyword.id);
            if let Err(err) = self.publisher.publish(KeywordMatched::from(keyword)).await {
                tracing::warn!(keyword_id, error = %err, "failed to publish keyword notification");
            }
        }
    }
}
