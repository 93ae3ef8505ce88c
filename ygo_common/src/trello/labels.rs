//! Label colour -> board label id cache.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::colour::LabelColour;
use crate::error::Result;

use super::{TrelloClient, TrelloLabel};

/// Persistent map from palette colour to the board's label id
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabelCache {
    labels: BTreeMap<LabelColour, String>,
}

impl LabelCache {
    /// Default cache file: `<cache dir>/ygo_trello/labels.json`
    pub fn default_path() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("ygo_trello")
            .join("labels.json")
    }

    /// Load the cache, or start empty if the file is missing or unreadable
    pub fn load(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str::<Self>(&content) {
                    Ok(cache) => {
                        info!("Loaded label cache with {} entries", cache.len());
                        return cache;
                    }
                    Err(e) => warn!("Failed to parse label cache, starting fresh: {e}"),
                },
                Err(e) => warn!("Failed to read label cache, starting fresh: {e}"),
            }
        }
        info!("Starting with empty label cache");
        Self::default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        debug!("Saved label cache with {} entries to {}", self.len(), path.display());
        Ok(())
    }

    /// Build from board labels; the first label per colour wins
    pub fn from_labels(labels: &[TrelloLabel]) -> Self {
        let mut cache = Self::default();
        for label in labels {
            match label.color.as_deref().and_then(LabelColour::parse) {
                Some(colour) => {
                    cache.labels.entry(colour).or_insert_with(|| label.id.clone());
                }
                None => debug!("Ignoring label {} without a palette colour", label.id),
            }
        }
        cache
    }

    pub fn get(&self, colour: LabelColour) -> Option<&str> {
        self.labels.get(&colour).map(String::as_str)
    }

    pub fn insert(&mut self, colour: LabelColour, label_id: impl Into<String>) {
        self.labels.insert(colour, label_id.into());
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl TrelloClient {
    /// All labels defined on a board.
    pub async fn fetch_board_labels(&self, board_id: &str) -> Result<Vec<TrelloLabel>> {
        info!("Fetching labels for board with id: {board_id}");
        let labels = self
            .send(Method::GET, &format!("/boards/{board_id}/labels"), &[])
            .await?
            .json()
            .await?;
        Ok(labels)
    }

    /// Re-resolve the label ids of a board and save them to `path`.
    pub async fn refresh_label_cache(&self, board_id: &str, path: &Path) -> Result<LabelCache> {
        let labels = self.fetch_board_labels(board_id).await?;
        let cache = LabelCache::from_labels(&labels);
        info!("Resolved {} label colours on board {}", cache.len(), board_id);
        cache.save(path)?;
        Ok(cache)
    }
}
