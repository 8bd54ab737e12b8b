use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::Instrument;
use uuid::Uuid;
use vocabot_core::{Destination, VocabularyEntry, format_entry};
use vocabot_telegram::{ChatTransport, ParseMode};

/// Outcome of one delivery run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeliveryReport {
    pub sent: usize,
    pub pinned: usize,
    pub failed: usize,
}

/// Sends batches of entries, one destination at a time.
///
/// Each entry is sent, pinned silently, and followed by a pause after both
/// calls. Runs for the same destination are serialized so their messages
/// never interleave; runs for different destinations proceed in parallel.
pub struct DeliveryQueue {
    transport: Arc<dyn ChatTransport>,
    delay: Duration,
    locks: Mutex<HashMap<Destination, Arc<Mutex<()>>>>,
}

impl DeliveryQueue {
    pub fn new(transport: Arc<dyn ChatTransport>, delay: Duration) -> Self {
        Self {
            transport,
            delay,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Deliver `entries` in order. A failed entry is logged and skipped.
    pub async fn deliver<'a, I>(&self, destination: Destination, entries: I) -> DeliveryReport
    where
        I: IntoIterator<Item = &'a VocabularyEntry>,
    {
        let span = tracing::info_span!(
            "delivery",
            run_id = %Uuid::new_v4(),
            chat_id = destination.chat_id,
            thread_id = ?destination.thread_id,
        );

        async move {
            let lock = self.lock_for(destination).await;
            let report = {
                let _guard = lock.lock().await;
                self.run(destination, entries).await
            };
            drop(lock);
            self.release(destination).await;

            tracing::info!(
                sent = report.sent,
                pinned = report.pinned,
                failed = report.failed,
                "Delivery finished"
            );
            report
        }
        .instrument(span)
        .await
    }

    async fn run<'a, I>(&self, destination: Destination, entries: I) -> DeliveryReport
    where
        I: IntoIterator<Item = &'a VocabularyEntry>,
    {
        let mut report = DeliveryReport::default();

        for (i, entry) in entries.into_iter().enumerate() {
            let index = i + 1;
            let text = format_entry(entry, index);

            let message = match self
                .transport
                .send_message(destination, &text, Some(ParseMode::MarkdownV2))
                .await
            {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!(index, error = %e, "Failed to send message");
                    report.failed += 1;
                    continue;
                }
            };
            report.sent += 1;

            tokio::time::sleep(self.delay).await;

            match self
                .transport
                .pin_message(destination.chat_id, message.message_id, true)
                .await
            {
                Ok(()) => report.pinned += 1,
                Err(e) => {
                    tracing::warn!(index, message_id = message.message_id, error = %e, "Failed to pin message");
                }
            }

            tokio::time::sleep(self.delay).await;
        }

        report
    }

    async fn lock_for(&self, destination: Destination) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.entry(destination).or_default().clone()
    }

    /// Forget the lock once nobody else holds or waits on it
    async fn release(&self, destination: Destination) {
        let mut locks = self.locks.lock().await;
        if let Some(lock) = locks.get(&destination)
            && Arc::strong_count(lock) == 1
        {
            locks.remove(&destination);
        }
    }

    #[cfg(test)]
    pub(crate) async fn tracked_destinations(&self) -> usize {
        self.locks.lock().await.len()
    }
}
