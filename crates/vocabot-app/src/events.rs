use std::sync::Arc;

use anyhow::Context;
use vocabot_core::Destination;
use vocabot_telegram::Update;

use crate::commands::{self, Command, Incoming};
use crate::state::AppContext;

pub mod help;
pub mod page;
pub mod random_batch;
pub mod search;

use help::handle_help;
use page::handle_page;
use random_batch::handle_random_batch;
use search::handle_search;

pub const DATA_NOT_LOADED: &str = "❌ Vocab data not loaded.";

/// Route one update to its handler
pub async fn handle_update(ctx: Arc<AppContext>, update: Update) -> anyhow::Result<()> {
    let Some(message) = update.message else {
        return Ok(());
    };
    let Some(text) = message.text.as_deref() else {
        return Ok(());
    };

    let destination = Destination::new(message.chat.id, message.message_thread_id);

    match commands::parse(text, &ctx.bot_username) {
        Incoming::Command(Command::Start) => {
            tracing::info!(chat_id = destination.chat_id, "/start");
            handle_random_batch(&ctx, destination).await
        }
        Incoming::Command(Command::Search(query)) => {
            tracing::info!(chat_id = destination.chat_id, %query, "/search");
            handle_search(&ctx, destination, &query).await
        }
        Incoming::Command(Command::Page(arg)) => {
            tracing::info!(chat_id = destination.chat_id, arg = ?arg, "/page");
            handle_page(&ctx, destination, arg.as_deref()).await
        }
        Incoming::Ignored => Ok(()),
        Incoming::Text => handle_help(&ctx, destination, message.chat.kind, text).await,
    }
}

/// Send a plain-text notice to the destination
pub async fn reply(ctx: &AppContext, destination: Destination, text: &str) -> anyhow::Result<()> {
    ctx.transport
        .send_message(destination, text, None)
        .await
        .with_context(|| format!("Failed to send notice to chat {}", destination.chat_id))?;
    Ok(())
}
