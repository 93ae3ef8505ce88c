//! Release Scout
//!
//! Searches the card database for high-rarity printings of the collector's
//! subject, reconciles them with the collection and the exclusions, and
//! proposes the result on the board's wants list.

pub mod audit;
pub mod discovery;
pub mod last_run;
pub mod scout;

pub use audit::{audit_rarities, RarityAudit};
pub use discovery::{discover, SubjectFilter, QUERY_TIERS};
pub use last_run::{read_marker, write_marker};
pub use scout::{plan_wants, publish_wants, BoardState, ScoutLists};
