/*
[INPUT]:  Short-link keys and raw URLs
[OUTPUT]: Link validity, per-day link stats, freshly created short links
[POS]:    HTTP layer - vk.cc link endpoints (require access token)
[UPDATE]: When adding new link endpoints or changing response format
*/

use crate::http::{Result, VkClient};
use crate::types::{ApiEnvelope, LinkCheck, LinkStats, ShortLink};
use tracing::{debug, warn};

const LINK_STATS_METHOD: &str = "utils.getLinkStats";
const SHORT_LINK_METHOD: &str = "utils.getShortLink";

impl VkClient {
    /// Check whether a key belongs to an existing short link
    ///
    /// GET /method/utils.getLinkStats?key={key}
    ///
    /// Only the presence of an `error` key is inspected.
    pub async fn check_link_key(&self, key: &str) -> Result<bool> {
        let timeout = self.config().validation_timeout;
        debug!(method = LINK_STATS_METHOD, key, ?timeout, "validating link key");

        let builder = self
            .method_request(LINK_STATS_METHOD)?
            .query(&[("key", key)]);
        let check: LinkCheck = self.send_json(builder, timeout).await?;

        if let Some(error) = check.error() {
            debug!(%error, "key rejected by stats endpoint");
        }
        Ok(!check.has_error())
    }

    /// Get per-day view stats for a short link
    ///
    /// GET /method/utils.getLinkStats?key={key}
    pub async fn get_link_stats(&self, key: &str) -> Result<LinkStats> {
        let timeout = self.config().timeout;
        debug!(method = LINK_STATS_METHOD, key, ?timeout, "fetching link stats");

        let builder = self
            .method_request(LINK_STATS_METHOD)?
            .query(&[("key", key)]);
        let envelope: ApiEnvelope<LinkStats> = self.send_json(builder, timeout).await?;

        envelope.into_response("response.stats").inspect_err(|err| {
            warn!(error = %err, "link stats unavailable");
        })
    }

    /// Create a short link for a URL
    ///
    /// GET /method/utils.getShortLink?url={url}
    pub async fn get_short_link(&self, url: &str) -> Result<ShortLink> {
        let timeout = self.config().timeout;
        debug!(method = SHORT_LINK_METHOD, url, ?timeout, "creating short link");

        let builder = self
            .method_request(SHORT_LINK_METHOD)?
            .query(&[("url", url)]);
        let envelope: ApiEnvelope<ShortLink> = self.send_json(builder, timeout).await?;

        envelope.into_response("response.short_url").inspect_err(|err| {
            warn!(error = %err, "short link not created");
        })
    }
}
