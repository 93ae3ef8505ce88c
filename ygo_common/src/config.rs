//! Command-line configuration shared by both tools

use std::path::PathBuf;

use clap::Args;
use log::info;

use crate::error::Result;
use crate::trello::{LabelCache, TrelloClient};

fn default_labels_cache() -> String {
    LabelCache::default_path().to_string_lossy().to_string()
}

/// Trello credentials, target board and label cache
#[derive(Args, Debug, Clone)]
pub struct TrelloArgs {
    /// Trello API key
    #[arg(long, env = "TRELLO_KEY", hide_env_values = true)]
    pub trello_key: String,

    /// Trello API token
    #[arg(long, env = "TRELLO_TOKEN", hide_env_values = true)]
    pub trello_token: String,

    /// Name of the tracking board
    #[arg(long, default_value = "Yugioh")]
    pub board: String,

    /// Path to the label colour cache file
    #[arg(long, default_value_t = default_labels_cache())]
    pub labels_cache: String,

    /// Fetch the board's label ids and rewrite the cache before running
    #[arg(long, default_value_t = false)]
    pub refresh_labels: bool,

    /// Compute and log the cards without changing the board
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl TrelloArgs {
    pub fn client(&self) -> TrelloClient {
        TrelloClient::new(self.trello_key.clone(), self.trello_token.clone())
    }

    pub fn labels_cache_path(&self) -> PathBuf {
        PathBuf::from(&self.labels_cache)
    }

    /// Load the label cache, refreshing it from the board when asked to or
    /// when it is empty but labels are about to be set.
    pub async fn resolve_labels(
        &self,
        client: &TrelloClient,
        board_id: &str,
        labels_needed: bool,
    ) -> Result<LabelCache> {
        let path = self.labels_cache_path();
        let cache = LabelCache::load(&path);

        if self.refresh_labels || (labels_needed && cache.is_empty()) {
            info!("Refreshing label cache at {}", path.display());
            return client.refresh_label_cache(board_id, &path).await;
        }
        Ok(cache)
    }
}
