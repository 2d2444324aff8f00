use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

use crate::config::settings::ScraperSettings;
use crate::rate_limiter::RateLimiter;

/// HTTP client with built-in request pacing.
///
/// One instance per run, shared by every worker so the configured delay
/// paces all traffic to the host; the network layer owns timeout policy,
/// the extractor never sees it.
pub struct RateLimitedClient {
    client: Client,
    rate_limiter: RateLimiter,
}

impl RateLimitedClient {
    pub fn from_settings(settings: &ScraperSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            rate_limiter: RateLimiter::new(settings.rate_limit_ms),
        })
    }

    /// Fetch a page body, failing on non-success status
    pub async fn get_text(&mut self, url: &str) -> Result<String> {
        self.rate_limiter.throttle().await;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} for {}", response.status(), url);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from: {}", url))
    }

    /// Fetch a binary body, failing on non-success status
    pub async fn get_bytes(&mut self, url: &str) -> Result<Vec<u8>> {
        self.rate_limiter.throttle().await;

        let response = self
            .client
            .get(url)
            .header("Accept", "image/avif,image/webp,image/png,image/*,*/*;q=0.8")
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP error {} for {}", response.status(), url);
        }

        let bytes = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read body from: {}", url))?;
        Ok(bytes.to_vec())
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
