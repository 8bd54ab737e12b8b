use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::env_or;

fn default_delay_ms() -> u64 {
    1500
}

fn default_batch_size() -> usize {
    20
}

fn default_search_limit() -> usize {
    3
}

fn default_page_size() -> usize {
    20
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Pause after each send and after each pin
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    /// Entries picked by /start
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Search matches actually delivered
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            batch_size: default_batch_size(),
            search_limit: default_search_limit(),
            page_size: default_page_size(),
        }
    }
}

impl DeliveryConfig {
    pub fn new() -> Self {
        Self {
            delay_ms: env_or("DELIVERY_DELAY_MS", default_delay_ms()),
            batch_size: env_or("RANDOM_BATCH_SIZE", default_batch_size()),
            search_limit: env_or("SEARCH_LIMIT", default_search_limit()),
            page_size: env_or("PAGE_SIZE", default_page_size()),
        }
    }

    /// Raise zero sizes to 1, whichever source the values came from
    pub fn clamp_sizes(&mut self) {
        for (name, value) in [
            ("batch_size", &mut self.batch_size),
            ("search_limit", &mut self.search_limit),
            ("page_size", &mut self.page_size),
        ] {
            if *value == 0 {
                tracing::warn!("delivery.{name} is 0, using 1");
                *value = 1;
            }
        }
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
