use std::sync::Arc;

use anyhow::Context;
use vocabot_config::Config;
use vocabot_core::VocabStore;
use vocabot_telegram::ChatTransport;

use crate::delivery::DeliveryQueue;

/// Everything a handler needs, built once at startup
pub struct AppContext {
    pub config: Config,
    pub vocab: VocabStore,
    /// Lowercased, without the leading '@'
    pub bot_username: String,
    pub transport: Arc<dyn ChatTransport>,
    pub delivery: DeliveryQueue,
}

impl AppContext {
    pub fn new(
        mut config: Config,
        vocab: VocabStore,
        bot_username: &str,
        transport: Arc<dyn ChatTransport>,
    ) -> Self {
        config.delivery.clamp_sizes();
        let delivery = DeliveryQueue::new(transport.clone(), config.delivery.delay());

        Self {
            config,
            vocab,
            bot_username: bot_username.trim_start_matches('@').to_lowercase(),
            transport,
            delivery,
        }
    }

    /// Resolve the bot identity and load the vocabulary file
    pub async fn initialize(config: Config, transport: Arc<dyn ChatTransport>) -> anyhow::Result<Self> {
        let me = transport
            .get_me()
            .await
            .context("Failed to fetch bot identity")?;
        let username = me
            .username
            .context("Bot account has no username")?;
        tracing::info!("Bot username set to @{}", username.to_lowercase());

        let vocab = VocabStore::load_or_empty(&config.vocab_path);

        Ok(Self::new(config, vocab, &username, transport))
    }
}
