/*
[INPUT]:  Validated configuration and a raw URL
[OUTPUT]: Click total for vk.cc links, or a fresh short link for anything else
[POS]:    Core logic - classify, then count clicks or shorten
[UPDATE]: When classification rules or the dispatch flow change
*/

use std::fmt;
use std::path::Path;
use tracing::{debug, info};
use vk_linker_adapter::{Credentials, VkClient};

use crate::config::LinkerConfig;
use crate::error::{LinkerError, Result};
use crate::link::{normalize_url, short_link_key};

/// Result of processing one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Input was a live short link; total views across all days
    Clicks(u64),
    /// Input was shortened to this URL
    Shortened(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Clicks(total) => write!(f, "Clicks: {}", total),
            Outcome::Shortened(url) => write!(f, "Short link: {}", url),
        }
    }
}

/// Decides between counting clicks and shortening, then does it
#[derive(Debug)]
pub struct LinkProcessor {
    client: VkClient,
    short_domain: String,
}

impl LinkProcessor {
    pub fn new(config: &LinkerConfig) -> Result<Self> {
        let mut client =
            VkClient::with_config_and_base_url(config.client_config(), &config.api_base_url)?;
        client.set_credentials(Credentials::new(config.api_token.clone()));

        Ok(Self {
            client,
            short_domain: config.short_domain.clone(),
        })
    }

    /// Whether `url` is an existing short link
    ///
    /// URLs off the short domain, or without a key segment, are rejected
    /// without touching the network.
    pub async fn classify(&self, url: &str) -> Result<bool> {
        let Some(key) = short_link_key(url, &self.short_domain) else {
            debug!(url, "not a short link candidate");
            return Ok(false);
        };

        let valid = self.client.check_link_key(&key).await?;
        debug!(url, key = %key, valid, "short link candidate checked");
        Ok(valid)
    }

    /// Sum of daily views for a short link
    pub async fn count_clicks(&self, url: &str) -> Result<u64> {
        let key =
            short_link_key(url, &self.short_domain).ok_or_else(|| LinkerError::NotShortLink {
                url: url.to_string(),
                domain: self.short_domain.clone(),
            })?;

        let stats = self.client.get_link_stats(&key).await?;
        for day in &stats.stats {
            debug!(date = ?day.date(), views = day.views, "daily views");
        }
        Ok(stats.total_views())
    }

    /// Create a short link, defaulting to https when the URL has no scheme
    pub async fn shorten(&self, url: &str) -> Result<String> {
        let normalized = normalize_url(url);
        let link = self.client.get_short_link(&normalized).await?;
        Ok(link.short_url)
    }

    /// Classify `url`, then take exactly one of the two result paths
    pub async fn process(&self, url: &str) -> Result<Outcome> {
        let url = url.trim();

        if self.classify(url).await? {
            info!(url, "counting clicks");
            let total = self.count_clicks(url).await?;
            Ok(Outcome::Clicks(total))
        } else {
            info!(url, "shortening");
            let short_url = self.shorten(url).await?;
            Ok(Outcome::Shortened(short_url))
        }
    }
}

/// Load configuration from the file and process environment, then handle one URL
pub async fn run(url: &str, config_path: Option<&Path>) -> Result<Outcome> {
    let config = LinkerConfig::load(config_path)?;
    process_with(url, &config).await
}

/// Build a processor from `config` and handle one URL
pub async fn process_with(url: &str, config: &LinkerConfig) -> Result<Outcome> {
    debug!(?config, "configuration loaded");
    let processor = LinkProcessor::new(config)?;
    processor.process(url).await
}
