use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use vocabot_telegram::Update;

use crate::events::handle_update;
use crate::state::AppContext;

/// Centralized channel management
pub struct ChannelSet {
    pub updates: (AsyncSender<Update>, AsyncReceiver<Update>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            updates: kanal::bounded_async(128),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    ctx: Arc<AppContext>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(ctx: Arc<AppContext>) -> Self {
        Self {
            channels: ChannelSet::new(),
            ctx,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Update poller
        tasks.spawn(poll_updates(
            self.ctx.clone(),
            self.channels.updates.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Dispatcher
        tasks.spawn(dispatch_updates(
            self.ctx.clone(),
            self.channels.updates.1.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}

/// Long-poll getUpdates and forward every update to the dispatcher
pub async fn poll_updates(
    ctx: Arc<AppContext>,
    update_tx: AsyncSender<Update>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let timeout = ctx.config.telegram.poll_timeout_seconds;
    let retry = ctx.config.telegram.poll_retry();
    let mut offset: Option<i64> = None;

    tracing::info!("[POLLER] Starting long polling");
    'poll: loop {
        let result = tokio::select! {
            _ = cancel.cancelled() => break,
            result = ctx.transport.get_updates(offset, timeout) => result,
        };

        match result {
            Ok(updates) => {
                for update in updates {
                    offset = Some(update.update_id + 1);
                    tokio::select! {
                        _ = cancel.cancelled() => break 'poll,
                        sent = update_tx.send(update) => sent?,
                    }
                }
            }
            Err(e) => {
                tracing::error!("[POLLER] getUpdates failed: {e}");
                wait_or_cancel(retry, &cancel).await;
            }
        }
    }

    tracing::info!("[POLLER] Stopping");
    Ok(())
}

async fn wait_or_cancel(duration: Duration, cancel: &CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        _ = tokio::time::sleep(duration) => {}
    }
}

/// Handle each update on its own task so long deliveries don't block others
pub async fn dispatch_updates(
    ctx: Arc<AppContext>,
    update_rx: AsyncReceiver<Update>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut handlers = JoinSet::new();

    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            update = update_rx.recv() => {
                let update = update?;
                let update_id = update.update_id;
                let ctx = ctx.clone();
                handlers.spawn(async move {
                    if let Err(e) = handle_update(ctx, update).await {
                        tracing::error!(update_id, "Handler failed: {e:#}");
                    }
                });
            }
            Some(result) = handlers.join_next(), if !handlers.is_empty() => {
                if let Err(e) = result {
                    tracing::error!("Handler task panicked: {e}");
                }
            }
        }
    }

    tracing::info!("[DISPATCHER] Stopping, aborting {} handler(s)", handlers.len());
    handlers.shutdown().await;
    Ok(())
}
