//! YGOPRODeck card database client
//!
//! Card search by rarity and race or name fragment, and the set list used to
//! recognize set codes.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;
use log::{debug, info, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rate_limit::RateLimiter;
use crate::sets::KnownSets;

const YGOPRODECK_API_URL: &str = "https://db.ygoprodeck.com/api/v7";

/// YGOPRODeck asks clients to stay under 20 requests per second
const MAX_CALLS: usize = 20;
const PERIOD: Duration = Duration::from_secs(1);

/// Card as returned by `cardinfo.php`
#[derive(Debug, Clone, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(default)]
    pub race: String,
    /// Cards never printed in a TCG set have no `card_sets`
    #[serde(default)]
    pub card_sets: Vec<CardSetEntry>,
}

impl CardRecord {
    pub fn is_monster(&self) -> bool {
        self.card_type.contains("Monster")
    }
}

/// One printing of a card
#[derive(Debug, Clone, Deserialize)]
pub struct CardSetEntry {
    /// Print code, e.g. `LOB-EN001`
    pub set_code: String,
    pub set_rarity: String,
    #[serde(default)]
    pub set_rarity_code: String,
}

#[derive(Debug, Deserialize)]
struct CardInfoResponse {
    data: Vec<CardRecord>,
}

#[derive(Debug, Deserialize)]
struct SetRecord {
    set_code: String,
    #[serde(default)]
    tcg_date: Option<String>,
}

/// Second filter of a card search
#[derive(Debug, Clone, Copy)]
pub enum SubjectQuery<'a> {
    Race(&'a str),
    /// Name substring (`fname`)
    Name(&'a str),
}

/// Rate-limited YGOPRODeck client
pub struct YgoProDeckClient {
    client: Client,
    pub(crate) base_url: String,
    limiter: RateLimiter,
}

impl Default for YgoProDeckClient {
    fn default() -> Self {
        Self::new()
    }
}

impl YgoProDeckClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: YGOPRODECK_API_URL.to_string(),
            limiter: RateLimiter::new(MAX_CALLS, PERIOD),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Newest-first search for cards printed at `rarity`.
    ///
    /// The API answers 400 when nothing matches; that is an empty result.
    pub async fn search_cards(&self, rarity: &str, query: SubjectQuery<'_>) -> Result<Vec<CardRecord>> {
        let filter = match query {
            SubjectQuery::Race(race) => ("race", race),
            SubjectQuery::Name(fragment) => ("fname", fragment),
        };
        let params = [("sort", "new"), ("rarity", rarity), filter];

        self.limiter.acquire().await;
        let url = format!("{}/cardinfo.php", self.base_url);
        info!("YGO DB request: {} {}={}", rarity, filter.0, filter.1);

        let response = self.client.get(&url).query(&params).send().await?;

        match response.status() {
            status if status.is_success() => {
                let body: CardInfoResponse = response.json().await?;
                debug!("YGO DB returned {} cards", body.data.len());
                Ok(body.data)
            }
            StatusCode::BAD_REQUEST => {
                warn!("YGO DB found no cards for {} {}={}", rarity, filter.0, filter.1);
                Ok(Vec::new())
            }
            status => Err(Error::HttpStatus {
                status,
                request: format!("/cardinfo.php?rarity={}&{}={}", rarity, filter.0, filter.1),
            }),
        }
    }

    /// Every set with a TCG release date.
    pub async fn list_known_sets(&self) -> Result<KnownSets> {
        self.limiter.acquire().await;
        let url = format!("{}/cardsets.php", self.base_url);
        info!("YGO DB request: card sets");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                status: response.status(),
                request: "/cardsets.php".to_string(),
            });
        }

        let records: Vec<SetRecord> = response.json().await?;
        let sets: KnownSets = records
            .into_iter()
            .filter_map(|record| {
                let date = record.tcg_date?;
                match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
                    Ok(released) => Some((record.set_code, released)),
                    Err(e) => {
                        warn!("Ignoring set {} with invalid date '{}': {}", record.set_code, date, e);
                        None
                    }
                }
            })
            .collect();

        info!("Loaded {} known sets", sets.len());
        Ok(sets)
    }
}

/// Read a saved `cardinfo.php` response from disk
pub fn load_card_dump(path: &Path) -> Result<Vec<CardRecord>> {
    let content = std::fs::read_to_string(path)?;
    let body: CardInfoResponse = serde_json::from_str(&content)?;
    Ok(body.data)
}

/// Distinct `(rarity, rarity code)` pairs in order of first appearance
pub fn distinct_rarities(records: &[CardRecord]) -> Vec<(String, String)> {
    let mut seen = Vec::new();
    for printing in records.iter().flat_map(|r| r.card_sets.iter()) {
        let pair = (printing.set_rarity.clone(), printing.set_rarity_code.clone());
        if !seen.contains(&pair) {
            seen.push(pair);
        }
    }
    seen
}

#[cfg(test)]
#[path = "ygoprodeck_tests.rs"]
mod tests;
