//! Replaces the contents of the collection list with the imported cards.

use std::collections::HashMap;

use log::{error, info};
use ygo_common::{LabelCache, Result, TrelloClient};

/// Where the collection lives on the board
#[derive(Debug, Clone)]
pub struct SyncTarget<'a> {
    pub board: &'a str,
    pub list: &'a str,
}

/// Archive the target list and recreate it from `cards`, in order.
///
/// A missing board or list stops before anything is changed. A failed archive
/// is logged and the cards are still added. Returns the number of cards
/// created.
pub async fn sync_collection(
    client: &TrelloClient,
    target: &SyncTarget<'_>,
    cards: &[String],
) -> Result<usize> {
    let board_id = client.find_board_by_name(target.board).await?;
    let list_id = client.find_list_by_name(&board_id, target.list).await?;

    if let Err(e) = client.archive_all_cards_in_list(&list_id).await {
        error!("FAILED archiving cards in list {}: {}", target.list, e);
    }

    let created = client
        .publish_cards(&list_id, cards, &HashMap::new(), &LabelCache::default())
        .await?;
    info!("Synced {} cards to list {}", created, target.list);
    Ok(created)
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
