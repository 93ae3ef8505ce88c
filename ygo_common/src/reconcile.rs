//! Reconciliation of discovered printings against the collection
//!
//! Given the owned listings, the exclusion list, the previously proposed
//! wants and the printings discovered by a scouting pass, decide for every
//! base name whether a discovered printing is skipped, proposed as a new want
//! or proposed as a rarity upgrade of an owned card, and which label colour it
//! carries.
//!
//! Per base name the decision does not depend on discovery order: surviving
//! candidates are ranked by rarity (highest first, ties broken by listing) and
//! the first one that passes the owned-upgrade check is kept.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, error};

use crate::card::{base_name, CardIdentifier};
use crate::colour::LabelColour;
use crate::error::Result;
use crate::rarity::RarityVocabulary;
use crate::sets::KnownSets;

/// How a discovered card matched the collector's subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SubjectMatch {
    /// The card's race is the target race
    Race,
    /// Only the name matched the target fragment; needs manual review
    NameOnly,
}

/// One discovered printing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub card: CardIdentifier,
    pub subject: SubjectMatch,
}

impl Candidate {
    pub fn new(card: CardIdentifier, subject: SubjectMatch) -> Self {
        Self { card, subject }
    }
}

/// The collector's current holdings.
///
/// Tracks every owned listing for exact-duplicate checks, plus the best owned
/// listing per base name for upgrade comparisons. The best listing is the
/// highest-ranked one; a listing that cannot be ranked takes precedence so it
/// keeps blocking upgrades. Ties go to the smaller listing.
#[derive(Debug, Clone, Default)]
pub struct Holdings {
    listings: HashSet<String>,
    by_name: HashMap<String, String>,
}

/// Comparison key of an owned listing; `None` (unrankable) sorts highest
fn owned_rank(vocabulary: &RarityVocabulary, listing: &str) -> Option<usize> {
    CardIdentifier::parse(listing)
        .ok()
        .and_then(|card| vocabulary.rank(&card.rarity).ok())
}

fn outranks(vocabulary: &RarityVocabulary, listing: &str, tracked: &str) -> bool {
    match (owned_rank(vocabulary, listing), owned_rank(vocabulary, tracked)) {
        (None, Some(_)) => true,
        (Some(_), None) => false,
        (a, b) if a == b => listing < tracked,
        (a, b) => a > b,
    }
}

impl Holdings {
    pub fn from_listings<I, S>(listings: I, vocabulary: &RarityVocabulary) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut holdings = Self::default();
        for listing in listings {
            let listing = listing.into();
            let name = base_name(&listing).to_string();
            match holdings.by_name.get_mut(&name) {
                Some(tracked) => {
                    if outranks(vocabulary, &listing, tracked) {
                        *tracked = listing.clone();
                    }
                }
                None => {
                    holdings.by_name.insert(name, listing.clone());
                }
            }
            holdings.listings.insert(listing);
        }
        holdings
    }

    pub fn contains_listing(&self, listing: &str) -> bool {
        self.listings.contains(listing)
    }

    /// The owned listing tracked for a base name
    pub fn listing_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// A list of card names read from the board (exclusions, earlier wants).
///
/// Entries are usually full listings; entries that are not (a bare card
/// name) are kept apart so an exclusion can cover every printing of a card.
#[derive(Debug, Clone, Default)]
pub struct ListingSet {
    listings: HashSet<String>,
    names: HashSet<String>,
    bare_names: HashSet<String>,
}

impl ListingSet {
    pub fn from_listings<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for entry in entries {
            let entry = entry.into();
            if CardIdentifier::parse(&entry).is_err() {
                set.bare_names.insert(entry.clone());
            }
            set.names.insert(base_name(&entry).to_string());
            set.listings.insert(entry);
        }
        set
    }

    pub fn contains_listing(&self, listing: &str) -> bool {
        self.listings.contains(listing)
    }

    /// Whether any entry refers to this base name
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Whether the card is covered by its listing or by a bare-name entry
    pub fn covers(&self, card: &CardIdentifier, listing: &str) -> bool {
        self.listings.contains(listing) || self.bare_names.contains(&card.name)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

/// Tunable parts of the decision procedure
#[derive(Debug, Clone)]
pub struct ReconcilePolicy {
    /// Minimum rarity an upgrade must exceed, whatever the owned rarity
    pub upgrade_floor: String,
    /// Owned rarities that are compared against their own rank only
    pub floor_exempt: HashSet<String>,
    /// Tag new wants that were never proposed before blue instead of purple
    pub highlight_fresh: bool,
    /// Treat previously proposed listings like exclusions
    pub skip_previously_proposed: bool,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self {
            upgrade_floor: "Secret Rare".to_string(),
            floor_exempt: HashSet::new(),
            highlight_fresh: false,
            skip_previously_proposed: false,
        }
    }
}

/// Accepted want for one base name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WantEntry {
    pub card: CardIdentifier,
    pub rank: usize,
    pub upgrade: bool,
    pub colour: Option<LabelColour>,
}

impl WantEntry {
    pub fn listing(&self) -> String {
        self.card.listing()
    }
}

/// Result of one scouting pass: at most one want per base name
#[derive(Debug, Clone, Default)]
pub struct CandidateBatch {
    entries: BTreeMap<String, WantEntry>,
}

impl CandidateBatch {
    pub fn get(&self, name: &str) -> Option<&WantEntry> {
        self.entries.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &WantEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn upgrade_count(&self) -> usize {
        self.entries.values().filter(|e| e.upgrade).count()
    }

    /// All wanted listings in lexicographic order
    pub fn listings(&self) -> Vec<String> {
        let mut listings: Vec<String> = self.entries.values().map(WantEntry::listing).collect();
        listings.sort();
        listings
    }

    /// Listing -> colour, for coloured entries only
    pub fn colours(&self) -> HashMap<String, LabelColour> {
        self.entries
            .values()
            .filter_map(|e| e.colour.map(|colour| (e.listing(), colour)))
            .collect()
    }

    /// Listings grouped by colour name, uncoloured last, then by listing
    pub fn prioritized(&self) -> Vec<String> {
        let mut keyed: Vec<(bool, &str, String)> = self
            .entries
            .values()
            .map(|e| {
                let colour = e.colour.map(|c| c.as_str()).unwrap_or_default();
                (e.colour.is_none(), colour, e.listing())
            })
            .collect();
        keyed.sort();
        keyed.into_iter().map(|(_, _, listing)| listing).collect()
    }
}

/// The decision procedure, configured with the rarity vocabulary, the
/// recognized sets and a policy
pub struct Reconciler<'a> {
    vocabulary: &'a RarityVocabulary,
    known_sets: &'a KnownSets,
    policy: ReconcilePolicy,
    floor_rank: usize,
}

impl<'a> Reconciler<'a> {
    /// Fails with `UnknownRarity` if the policy's floor is not in the vocabulary
    pub fn new(
        vocabulary: &'a RarityVocabulary,
        known_sets: &'a KnownSets,
        policy: ReconcilePolicy,
    ) -> Result<Self> {
        let floor_rank = vocabulary.rank(&policy.upgrade_floor)?;
        Ok(Self {
            vocabulary,
            known_sets,
            policy,
            floor_rank,
        })
    }

    /// Rank a candidate must exceed to upgrade an owned card
    pub fn upgrade_threshold(&self, owned_rarity: &str, owned_rank: usize) -> usize {
        if self.policy.floor_exempt.contains(owned_rarity) {
            owned_rank
        } else {
            owned_rank.max(self.floor_rank)
        }
    }

    pub fn reconcile<I>(
        &self,
        owned: &Holdings,
        exclusions: &ListingSet,
        proposed: &ListingSet,
        candidates: I,
    ) -> CandidateBatch
    where
        I: IntoIterator<Item = Candidate>,
    {
        let mut by_name: HashMap<String, Vec<(usize, Candidate)>> = HashMap::new();

        for candidate in candidates {
            let listing = candidate.card.listing();

            if owned.contains_listing(&listing) {
                debug!("Skipping already owned: {}", listing);
                continue;
            }
            if exclusions.covers(&candidate.card, &listing) {
                debug!("Skipping excluded: {}", listing);
                continue;
            }
            if self.policy.skip_previously_proposed && proposed.contains_listing(&listing) {
                debug!("Skipping previously proposed: {}", listing);
                continue;
            }

            let rank = match self.vocabulary.rank(&candidate.card.rarity) {
                Ok(rank) => rank,
                Err(e) => {
                    error!("Cannot rank candidate {}: {}", listing, e);
                    continue;
                }
            };

            by_name
                .entry(candidate.card.name.clone())
                .or_default()
                .push((rank, candidate));
        }

        let mut batch = CandidateBatch::default();

        for (name, mut group) in by_name {
            group.sort_by(|(rank_a, a), (rank_b, b)| {
                rank_b
                    .cmp(rank_a)
                    .then_with(|| a.card.listing().cmp(&b.card.listing()))
                    .then_with(|| a.subject.cmp(&b.subject))
            });
            group.dedup_by(|next, kept| next.1.card == kept.1.card);

            if let Some(entry) = group
                .into_iter()
                .find_map(|(rank, candidate)| self.evaluate(owned, proposed, candidate, rank))
            {
                debug!(
                    "Accepted {} (upgrade: {}, colour: {:?})",
                    entry.listing(),
                    entry.upgrade,
                    entry.colour
                );
                batch.entries.insert(name, entry);
            }
        }

        batch
    }

    /// Owned-upgrade check, new-want acceptance and colour tagging
    fn evaluate(
        &self,
        owned: &Holdings,
        proposed: &ListingSet,
        candidate: Candidate,
        rank: usize,
    ) -> Option<WantEntry> {
        let mut upgrade = false;

        if let Some(existing) = owned.listing_for(&candidate.card.name) {
            if !self.known_sets.contains(&candidate.card.set_code) {
                debug!(
                    "Not upgrading {}: set {} is not recognized",
                    existing, candidate.card.set_code
                );
                return None;
            }

            let owned_card = match CardIdentifier::parse(existing) {
                Ok(card) => card,
                Err(e) => {
                    error!("Cannot compare against owned card: {}", e);
                    return None;
                }
            };
            let owned_rank = match self.vocabulary.rank(&owned_card.rarity) {
                Ok(rank) => rank,
                Err(e) => {
                    error!("Existing card {} has a rarity not in the rarities list: {}", existing, e);
                    return None;
                }
            };

            if rank <= self.upgrade_threshold(&owned_card.rarity, owned_rank) {
                return None;
            }
            upgrade = true;
        }

        let colour = match candidate.subject {
            SubjectMatch::NameOnly => Some(LabelColour::Yellow),
            SubjectMatch::Race if upgrade => None,
            SubjectMatch::Race
                if self.policy.highlight_fresh && !proposed.contains_name(&candidate.card.name) =>
            {
                Some(LabelColour::Blue)
            }
            SubjectMatch::Race => Some(LabelColour::Purple),
        };

        Some(WantEntry {
            card: candidate.card,
            rank,
            upgrade,
            colour,
        })
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
