//! Shared types for the Yu-Gi-Oh! collection tracker
//!
//! Card identity and rarity ranking, the reconciliation engine that turns
//! discovered printings into wants, and the Trello and YGOPRODeck clients
//! used by `collection_import` and `release_scout`.

pub mod card;
pub mod colour;
pub mod config;
pub mod error;
pub mod rarity;
pub mod rate_limit;
pub mod reconcile;
pub mod sets;
pub mod trello;
pub mod ygoprodeck;

pub use card::CardIdentifier;
pub use colour::LabelColour;
pub use config::TrelloArgs;
pub use error::{Error, Result};
pub use rarity::RarityVocabulary;
pub use rate_limit::RateLimiter;
pub use reconcile::{
    Candidate, CandidateBatch, Holdings, ListingSet, ReconcilePolicy, Reconciler, SubjectMatch,
    WantEntry,
};
pub use sets::KnownSets;
pub use trello::{LabelCache, TrelloClient};
pub use ygoprodeck::{CardRecord, SubjectQuery, YgoProDeckClient};
