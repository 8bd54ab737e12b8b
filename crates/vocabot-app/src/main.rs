use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use vocabot_config::{Config, LogFormat};
use vocabot_telegram::{ChatTransport, TelegramClient};

pub mod commands;
pub mod controller;
pub mod delivery;
pub mod events;
pub mod logging;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::AppContext;

/// Relay vocabulary entries into Telegram chats
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Vocabulary file, overrides VOCAB_PATH
    #[arg(long)]
    vocab: Option<PathBuf>,
    /// Emit JSON log lines
    #[arg(long)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    let mut config = Config::new();
    if let Some(path) = args.vocab {
        config.vocab_path = path;
    }
    if args.log_json {
        config.log_format = LogFormat::Json;
    }

    logging::init_tracing(config.log_format);

    if config.telegram.token.is_empty() {
        anyhow::bail!("TELEGRAM_BOT_TOKEN is not set");
    }

    let transport: Arc<dyn ChatTransport> = Arc::new(TelegramClient::new(
        config.telegram.api_url.clone(),
        config.telegram.token.clone(),
    ));
    let ctx = Arc::new(AppContext::initialize(config, transport).await?);
    tracing::info!("Bot running with {} vocabulary entries", ctx.vocab.len());

    let controller = AppController::new(ctx);
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::warn!("background task exited"),
                Ok(Err(e)) => tracing::error!("background task failed: {e:#}"),
                Err(e) => tracing::error!("background task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("task exited with error during shutdown: {e:#}");
        }
    }

    Ok(())
}
