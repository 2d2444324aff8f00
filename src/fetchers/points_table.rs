use anyhow::Result;
use log::{info, warn};
use scraper::{Html, Selector};

use crate::config::settings::ScraperSettings;
use crate::http::RateLimitedClient;

/// Header row plus data rows of the league standings table
#[derive(Debug, Clone)]
pub struct PointsTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl PointsTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Selector-based scraper for the official points table page.
///
/// Unlike the stats leaderboards this page keeps a stable table structure,
/// so cell extraction works directly off the markup tree. An empty table is
/// a normal pre-season state, reported as `None` rather than an error.
pub struct PointsTableFetcher {
    client: RateLimitedClient,
    url: &'static str,
}

impl PointsTableFetcher {
    pub fn from_settings(settings: &ScraperSettings) -> Result<Self> {
        Ok(Self {
            client: RateLimitedClient::from_settings(settings)?,
            url: settings.points_table_url,
        })
    }

    pub async fn fetch(&mut self) -> Result<Option<PointsTable>> {
        info!("Fetching points table from {}", self.url);
        let html = self.client.get_text(self.url).await?;
        Ok(Self::parse_table(&html))
    }

    fn parse_table(html: &str) -> Option<PointsTable> {
        let document = Html::parse_document(html);
        let table_selector = Selector::parse("table.ih-td-tab").unwrap();

        let Some(table) = document.select(&table_selector).next() else {
            warn!("Points table not found on the page");
            return None;
        };

        let headers = Self::extract_headers(&table)?;
        let rows = Self::extract_rows(&table, headers.len());

        if rows.is_empty() {
            info!("No data rows found - season might not have started yet");
            return None;
        }

        Some(PointsTable { headers, rows })
    }

    fn extract_headers(table: &scraper::ElementRef) -> Option<Vec<String>> {
        let thead_row = Selector::parse("thead tr").unwrap();
        let any_row = Selector::parse("tr").unwrap();
        let cell = Selector::parse("th, td").unwrap();

        let header_row = table
            .select(&thead_row)
            .next()
            .or_else(|| table.select(&any_row).next())?;

        let headers: Vec<String> = header_row
            .select(&cell)
            .map(|c| c.text().collect::<String>().trim().to_string())
            .collect();

        (!headers.is_empty()).then_some(headers)
    }

    fn extract_rows(table: &scraper::ElementRef, width: usize) -> Vec<Vec<String>> {
        let body_row = Selector::parse("tbody tr").unwrap();
        let cell = Selector::parse("td").unwrap();

        table
            .select(&body_row)
            .filter_map(|row| {
                let cols: Vec<String> = row
                    .select(&cell)
                    .map(|c| c.text().collect::<String>().trim().to_string())
                    .collect();
                // Short rows are separators or ads, not standings
                (cols.len() >= width).then(|| cols[..width].to_vec())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><body>
        <table class="ih-td-tab">
          <thead><tr><th>Pos</th><th>Team</th><th>Pld</th><th>Pts</th></tr></thead>
          <tbody>
            <tr><td>1</td><td>Example Team</td><td>10</td><td>16</td></tr>
            <tr><td>2</td><td>Other Side</td><td>10</td><td>14</td></tr>
            <tr><td>ad</td></tr>
          </tbody>
        </table>
        </body></html>
    "#;

    #[test]
    fn parses_headers_and_full_rows_only() {
        let table = PointsTableFetcher::parse_table(SAMPLE).unwrap();
        assert_eq!(table.headers, vec!["Pos", "Team", "Pld", "Pts"]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0], vec!["1", "Example Team", "10", "16"]);
    }

    #[test]
    fn missing_table_is_soft() {
        assert!(PointsTableFetcher::parse_table("<html><body></body></html>").is_none());
    }

    #[test]
    fn empty_body_is_preseason_not_error() {
        let html = r#"<table class="ih-td-tab">
            <thead><tr><th>Pos</th><th>Team</th></tr></thead><tbody></tbody>
        </table>"#;
        assert!(PointsTableFetcher::parse_table(html).is_none());
    }
}
