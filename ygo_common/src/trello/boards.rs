//! Board and list lookup by name.

use log::{error, info};
use reqwest::Method;

use crate::error::{Error, Result};

use super::{TrelloBoard, TrelloClient, TrelloList};

impl TrelloClient {
    /// Finds the id of the member's board with the given name.
    pub async fn find_board_by_name(&self, name: &str) -> Result<String> {
        info!("Finding board id with name: {name}");
        let boards: Vec<TrelloBoard> = self
            .send(Method::GET, "/members/me/boards", &[])
            .await?
            .json()
            .await?;

        match boards.into_iter().find(|b| b.name == name) {
            Some(board) => {
                info!("Found board with id: {}", board.id);
                Ok(board.id)
            }
            None => {
                error!("FAILED finding board: {name}");
                Err(Error::not_found("board", name))
            }
        }
    }

    /// Finds the id of the list with the given name on a board.
    pub async fn find_list_by_name(&self, board_id: &str, name: &str) -> Result<String> {
        info!("Finding list id with name: {name}");
        let lists: Vec<TrelloList> = self
            .send(Method::GET, &format!("/boards/{board_id}/lists"), &[])
            .await?
            .json()
            .await?;

        match lists.into_iter().find(|l| l.name == name) {
            Some(list) => {
                info!("Found list with id: {}", list.id);
                Ok(list.id)
            }
            None => {
                error!("FAILED finding list: {name}");
                Err(Error::not_found("list", name))
            }
        }
    }
}
