//! Discovery passes against the card database.
//!
//! For every query tier, cards are searched once by race and once by name
//! fragment. Each matching printing at exactly that tier becomes a candidate.

use log::{debug, info};
use ygo_common::card::set_prefix;
use ygo_common::{
    Candidate, CardIdentifier, CardRecord, RarityVocabulary, Result, SubjectMatch, SubjectQuery,
    YgoProDeckClient,
};

/// Rarities worth scouting for
pub const QUERY_TIERS: &[&str] = &[
    "Ultra Rare",
    "Ultra Parallel Rare",
    "Gold Rare",
    "Secret Rare",
    "Extra Secret Rare",
    "Gold Secret Rare",
    "Prismatic Secret Rare",
    "Platinum Secret Rare",
    "Ultimate Rare",
    "Premium Gold Rare",
    "Collector's Rare",
    "Ghost/Gold Rare",
    "Quarter Century Secret Rare",
    "Starlight Rare",
    "Ghost Rare",
    "10000 Secret Rare",
];

/// Query tiers in rank order, most common first
pub fn query_tiers(vocabulary: &RarityVocabulary) -> Vec<&'static str> {
    vocabulary.ascending(QUERY_TIERS)
}

/// The collector's subject: monsters of one race, or named after it
#[derive(Debug, Clone)]
pub struct SubjectFilter {
    pub race: String,
    pub name_fragment: String,
}

impl SubjectFilter {
    pub fn new(race: impl Into<String>, name_fragment: impl Into<String>) -> Self {
        Self {
            race: race.into(),
            name_fragment: name_fragment.into(),
        }
    }

    /// How the record matches, if at all. Non-monsters never match.
    pub fn matches(&self, record: &CardRecord) -> Option<SubjectMatch> {
        if !record.is_monster() {
            return None;
        }
        if record.race == self.race {
            return Some(SubjectMatch::Race);
        }
        let fragment_word = format!("{} ", self.name_fragment);
        if record.name.ends_with(&self.name_fragment) || record.name.contains(&fragment_word) {
            return Some(SubjectMatch::NameOnly);
        }
        None
    }
}

/// Candidates for every printing of a matching record at exactly `rarity`
pub fn candidates_from(
    records: &[CardRecord],
    rarity: &str,
    filter: &SubjectFilter,
) -> Vec<Candidate> {
    let mut candidates = Vec::new();
    for record in records {
        let Some(subject) = filter.matches(record) else {
            continue;
        };
        for printing in record.card_sets.iter().filter(|p| p.set_rarity == rarity) {
            let card = CardIdentifier::new(
                record.name.clone(),
                set_prefix(&printing.set_code),
                rarity,
            );
            candidates.push(Candidate::new(card, subject));
        }
    }
    candidates
}

/// Run both searches for every tier and collect the candidates in tier order
pub async fn discover(
    client: &YgoProDeckClient,
    vocabulary: &RarityVocabulary,
    filter: &SubjectFilter,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for rarity in query_tiers(vocabulary) {
        let mut records = client
            .search_cards(rarity, SubjectQuery::Race(&filter.race))
            .await?;
        records.extend(
            client
                .search_cards(rarity, SubjectQuery::Name(&filter.name_fragment))
                .await?,
        );

        let found = candidates_from(&records, rarity, filter);
        debug!("{} candidates at {}", found.len(), rarity);
        candidates.extend(found);
    }

    info!("Discovered {} candidate printings", candidates.len());
    Ok(candidates)
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
