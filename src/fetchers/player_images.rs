use anyhow::Result;
use log::info;
use scraper::{Html, Selector};
use serde::Serialize;

use crate::config::settings::ScraperSettings;
use crate::http::RateLimitedClient;

/// One player card scraped off a franchise page
#[derive(Debug, Clone, Serialize)]
pub struct PlayerCard {
    pub name: String,
    pub role: String,
    pub image_id: String,
    pub image_url: String,
}

impl PlayerCard {
    /// Filesystem-safe image file name: sanitized name plus role and image id
    /// for uniqueness, extension taken from the source URL
    pub fn file_name(&self) -> String {
        let mut stem = sanitize(&self.name);
        if !self.role.is_empty() {
            stem = format!("{}_{}", stem, sanitize(&self.role));
        }
        if !self.image_id.is_empty() {
            stem = format!("{}_{}", stem, self.image_id);
        }
        format!("{}{}", stem, extension_for(&self.image_url))
    }
}

fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

fn extension_for(url: &str) -> &'static str {
    let lower = url.to_lowercase();
    if lower.contains(".avif") {
        ".avif"
    } else if lower.contains(".webp") {
        ".webp"
    } else if lower.contains(".png") {
        ".png"
    } else {
        ".jpg"
    }
}

fn image_id_from(url: &str) -> String {
    url.rsplit('/')
        .next()
        .and_then(|file| file.split('.').next())
        .unwrap_or_default()
        .to_string()
}

/// One fetched franchise page: the raw markup (kept for debug dumps) and the
/// player cards found on it
pub struct TeamRoster {
    pub html: String,
    pub cards: Vec<PlayerCard>,
}

/// Fetches franchise pages and the player headshots they link to.
///
/// Cards carry lazily-loaded images, so the URL lives in `data-src` rather
/// than `src`. A page with no recognizable cards yields an empty roster, not
/// an error; the markup drifts season to season.
pub struct PlayerImagesFetcher {
    client: RateLimitedClient,
    base_url: &'static str,
}

impl PlayerImagesFetcher {
    pub fn from_settings(settings: &ScraperSettings) -> Result<Self> {
        Ok(Self {
            client: RateLimitedClient::from_settings(settings)?,
            base_url: settings.teams_base_url,
        })
    }

    pub async fn fetch_team(&mut self, slug: &str) -> Result<TeamRoster> {
        let url = format!("{}/{}", self.base_url, slug);
        info!("Fetching {} roster from {}", slug, url);

        let html = self.client.get_text(&url).await?;
        let cards = Self::extract_cards(&html);
        Ok(TeamRoster { html, cards })
    }

    pub async fn download(&mut self, card: &PlayerCard) -> Result<Vec<u8>> {
        self.client.get_bytes(&card.image_url).await
    }

    fn extract_cards(html: &str) -> Vec<PlayerCard> {
        let document = Html::parse_document(html);
        let card_sel = Selector::parse(".ih-pcard1").unwrap();
        let link_sel = Selector::parse("a").unwrap();
        let name_sel = Selector::parse(".ih-p-cont-in h3").unwrap();
        let role_sel = Selector::parse(".d-block.w-100.text-center").unwrap();
        let img_sel = Selector::parse("img.lazyload[data-src]").unwrap();

        document
            .select(&card_sel)
            .filter_map(|card| {
                let link = card.select(&link_sel).next()?;
                let name = link
                    .attr("data-player_name")
                    .map(str::to_string)
                    .filter(|n| !n.trim().is_empty())
                    .or_else(|| {
                        card.select(&name_sel)
                            .next()
                            .map(|e| e.text().collect::<String>().trim().to_string())
                    })?;
                let role = card
                    .select(&role_sel)
                    .next()
                    .map(|e| e.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();
                let image_url = card.select(&img_sel).next()?.attr("data-src")?.to_string();
                let image_id = image_id_from(&image_url);

                Some(PlayerCard {
                    name,
                    role,
                    image_id,
                    image_url,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><body>
        <div class="ih-pcard1">
          <a href="/teams/example/players/jane-doe-102" data-player_name="Jane Doe">
            <img class="lazyload" data-src="https://img.example.com/headshots/102.png" />
            <div class="ih-p-cont-in"><h3>Jane Doe</h3></div>
            <span class="d-block w-100 text-center">Batter</span>
          </a>
        </div>
        <div class="ih-pcard1">
          <a href="/teams/example/players/amy-poe-57">
            <img class="lazyload" data-src="https://img.example.com/headshots/57.avif" />
            <div class="ih-p-cont-in"><h3>Amy Poe</h3></div>
          </a>
        </div>
        <div class="ih-pcard1">
          <a href="/teams/example/players/no-photo-9" data-player_name="No Photo">
            <div class="ih-p-cont-in"><h3>No Photo</h3></div>
          </a>
        </div>
        </body></html>
    "#;

    #[test]
    fn extracts_cards_with_attribute_or_heading_names() {
        let cards = PlayerImagesFetcher::extract_cards(SAMPLE);
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].name, "Jane Doe");
        assert_eq!(cards[0].role, "Batter");
        assert_eq!(cards[0].image_id, "102");
        assert_eq!(cards[0].image_url, "https://img.example.com/headshots/102.png");

        // Name falls back to the heading when the attribute is absent
        assert_eq!(cards[1].name, "Amy Poe");
        assert_eq!(cards[1].role, "");
        assert_eq!(cards[1].image_id, "57");
    }

    #[test]
    fn card_without_an_image_is_skipped() {
        let cards = PlayerImagesFetcher::extract_cards(SAMPLE);
        assert!(cards.iter().all(|c| c.name != "No Photo"));
    }

    #[test]
    fn no_cards_is_an_empty_roster_not_an_error() {
        assert!(PlayerImagesFetcher::extract_cards("<html><body></body></html>").is_empty());
    }

    #[test]
    fn file_name_combines_name_role_and_id() {
        let card = PlayerCard {
            name: "Jane Doe".to_string(),
            role: "Wicket-Keeper Batter".to_string(),
            image_id: "102".to_string(),
            image_url: "https://img.example.com/headshots/102.png".to_string(),
        };
        assert_eq!(card.file_name(), "Jane_Doe_Wicket-Keeper_Batter_102.png");
    }

    #[test]
    fn unknown_extension_defaults_to_jpg() {
        let card = PlayerCard {
            name: "Amy Poe".to_string(),
            role: String::new(),
            image_id: String::new(),
            image_url: "https://img.example.com/headshots/57".to_string(),
        };
        assert_eq!(card.file_name(), "Amy_Poe.jpg");
    }
}
