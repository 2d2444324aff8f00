use anyhow::Result;
use log::info;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::settings::ScraperSettings;
use crate::extract::PageText;
use crate::http::RateLimitedClient;

/// One fetched statistics page: the raw markup (kept for debug dumps) and
/// its flattened text form handed to the extractor.
pub struct FetchedPage {
    pub html: String,
    pub text: PageText,
}

/// Fetches statistic category pages from the stats section.
///
/// The client is shared across all category workers; the lock is held only
/// for the duration of one request, so the rate limiter inside it paces the
/// whole run. This is the whole input boundary: everything past here works
/// on page text and never performs network I/O.
pub struct StatsPageFetcher {
    client: Arc<Mutex<RateLimitedClient>>,
    base_url: &'static str,
}

impl StatsPageFetcher {
    pub fn new(client: Arc<Mutex<RateLimitedClient>>, settings: &ScraperSettings) -> Self {
        Self {
            client,
            base_url: settings.stats_base_url,
        }
    }

    pub async fn fetch(&self, slug: &str) -> Result<FetchedPage> {
        let url = self.build_url(slug);
        info!("Fetching {} from {}", slug, url);

        let html = self.client.lock().await.get_text(&url).await?;
        let text = PageText::from_html(&html);
        Ok(FetchedPage { html, text })
    }

    fn build_url(&self, slug: &str) -> String {
        format!("{}/{}/", self.base_url, slug)
    }
}
