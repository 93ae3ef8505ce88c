//! One scouting run against the board: read the lists, reconcile the
//! discovered printings and rewrite the wants list.

use chrono::NaiveDate;
use log::{error, info};
use ygo_common::{
    Candidate, CandidateBatch, Holdings, KnownSets, LabelCache, ListingSet, RarityVocabulary,
    ReconcilePolicy, Reconciler, Result, TrelloClient,
};

use crate::last_run::within_window;

/// Names of the board and the lists a run works with
#[derive(Debug, Clone)]
pub struct ScoutLists<'a> {
    pub board: &'a str,
    pub wants: &'a str,
    pub current: &'a str,
    pub exclusions: &'a str,
}

/// Everything read from the board before reconciling
#[derive(Debug, Clone)]
pub struct BoardState {
    pub board_id: String,
    pub wants_list_id: String,
    pub owned: Holdings,
    pub exclusions: ListingSet,
    pub proposed: ListingSet,
}

impl BoardState {
    /// Resolve the board and lists and read their cards. Any missing board or
    /// list stops the run.
    pub async fn load(
        client: &TrelloClient,
        lists: &ScoutLists<'_>,
        vocabulary: &RarityVocabulary,
    ) -> Result<Self> {
        let board_id = client.find_board_by_name(lists.board).await?;
        let wants_list_id = client.find_list_by_name(&board_id, lists.wants).await?;
        let current_list_id = client.find_list_by_name(&board_id, lists.current).await?;
        let exclusions_list_id = client.find_list_by_name(&board_id, lists.exclusions).await?;

        let exclusions = ListingSet::from_listings(client.list_cards_in_list(&exclusions_list_id).await?);
        let proposed = ListingSet::from_listings(client.list_cards_in_list(&wants_list_id).await?);
        let owned = Holdings::from_listings(
            client.list_cards_in_list(&current_list_id).await?,
            vocabulary,
        );

        info!(
            "Board state: {} owned, {} excluded, {} previously proposed",
            owned.len(),
            exclusions.len(),
            proposed.len()
        );
        Ok(Self {
            board_id,
            wants_list_id,
            owned,
            exclusions,
            proposed,
        })
    }
}

/// Reconcile the discovered candidates against the board, keeping only sets
/// released since `since` when a window is given.
pub fn plan_wants(
    state: &BoardState,
    candidates: Vec<Candidate>,
    vocabulary: &RarityVocabulary,
    known_sets: &KnownSets,
    policy: ReconcilePolicy,
    since: Option<NaiveDate>,
) -> Result<CandidateBatch> {
    let candidates = match since {
        Some(date) => within_window(candidates, known_sets, date),
        None => candidates,
    };

    let reconciler = Reconciler::new(vocabulary, known_sets, policy)?;
    let batch = reconciler.reconcile(&state.owned, &state.exclusions, &state.proposed, candidates);

    info!(
        "Proposing {} wants ({} upgrades)",
        batch.len(),
        batch.upgrade_count()
    );
    Ok(batch)
}

/// Write the batch to the wants list in priority order.
///
/// The list is archived first unless `append` is set. A failed archive is
/// logged and the cards are still added.
pub async fn publish_wants(
    client: &TrelloClient,
    state: &BoardState,
    batch: &CandidateBatch,
    labels: &LabelCache,
    append: bool,
) -> Result<usize> {
    if !append {
        if let Err(e) = client.archive_all_cards_in_list(&state.wants_list_id).await {
            error!("FAILED archiving previous wants: {e}");
        }
    }

    client
        .publish_cards(
            &state.wants_list_id,
            &batch.prioritized(),
            &batch.colours(),
            labels,
        )
        .await
}

#[cfg(test)]
#[path = "scout_tests.rs"]
mod tests;
