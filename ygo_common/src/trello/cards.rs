//! Card reading, archiving, creation and labeling.

use std::collections::HashMap;

use log::{debug, error, info};
use reqwest::Method;

use crate::colour::LabelColour;
use crate::error::Result;

use super::{LabelCache, TrelloCard, TrelloClient};

impl TrelloClient {
    /// Names of all open cards in a list.
    pub async fn list_cards_in_list(&self, list_id: &str) -> Result<Vec<String>> {
        info!("Getting cards from list with id: {list_id}");
        let cards: Vec<TrelloCard> = self
            .send(Method::GET, &format!("/lists/{list_id}/cards"), &[])
            .await?
            .json()
            .await?;

        debug!("List {} holds {} cards", list_id, cards.len());
        Ok(cards.into_iter().map(|c| c.name).collect())
    }

    /// Archives every card in a list.
    pub async fn archive_all_cards_in_list(&self, list_id: &str) -> Result<()> {
        info!("Archiving cards from list with id: {list_id}");
        self.send(
            Method::POST,
            &format!("/lists/{list_id}/archiveAllCards"),
            &[],
        )
        .await?;
        info!("Archived cards in list {list_id}");
        Ok(())
    }

    /// Creates a card and returns its id.
    pub async fn create_card(&self, list_id: &str, name: &str) -> Result<String> {
        let card: TrelloCard = self
            .send(Method::POST, "/cards", &[("idList", list_id), ("name", name)])
            .await?
            .json()
            .await?;
        Ok(card.id)
    }

    /// Attaches a label to a card.
    pub async fn set_card_label(&self, card_id: &str, label_id: &str) -> Result<()> {
        self.send(
            Method::POST,
            &format!("/cards/{card_id}/idLabels"),
            &[("value", label_id)],
        )
        .await?;
        Ok(())
    }

    /// Creates one card per name, in order, colouring those listed in `colours`.
    ///
    /// A failed creation stops the batch and is returned. Missing label ids
    /// and labeling failures are logged and the card is left uncoloured.
    /// Returns the number of cards created.
    pub async fn publish_cards(
        &self,
        list_id: &str,
        cards: &[String],
        colours: &HashMap<String, LabelColour>,
        labels: &LabelCache,
    ) -> Result<usize> {
        let total = cards.len();
        info!("Adding {total} new cards to list with id: {list_id}");

        for (idx, card) in cards.iter().enumerate() {
            let card_id = match self.create_card(list_id, card).await {
                Ok(id) => id,
                Err(e) => {
                    error!("FAILED adding card with name: {card} because: {e}");
                    return Err(e);
                }
            };
            info!("Adding card: {} ({}/{})", card, idx + 1, total);

            let Some(colour) = colours.get(card) else {
                continue;
            };
            match labels.get(*colour) {
                Some(label_id) => match self.set_card_label(&card_id, label_id).await {
                    Ok(()) => info!("Setting colour: {card} ({colour})"),
                    Err(e) => error!("FAILED adding label colour {colour} to card {card_id}: {e}"),
                },
                None => error!("FAILED adding label colour to card {card_id}: no '{colour}' label on the board"),
            }
        }

        info!("Finished adding {total} new cards");
        Ok(total)
    }
}
