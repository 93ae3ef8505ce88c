//! Rarity vocabulary: the fixed, ordered list of print rarities
//!
//! The position of a label in the list is its rank; a higher rank is a rarer
//! print. Legacy exports use short codes ("UR", "ScR", ...) which are expanded
//! through [`RarityVocabulary::expand_short_code`].

use std::collections::HashMap;

use crate::error::{Error, Result};

/// All known rarities, most common first.
pub const RARITIES: &[&str] = &[
    "Common",
    "Rare",
    "Super Rare",
    "Ultra Rare",
    "Ultra Parallel Rare",
    "Duel Terminal Ultra Parallel Rare",
    "Starfoil Rare",
    "Mosaic Rare",
    "Secret Rare",
    "Extra Secret Rare",
    "Gold Secret Rare",
    "Prismatic Secret Rare",
    "Platinum Secret Rare",
    "Ultimate Rare",
    "Gold Rare",
    "Premium Gold Rare",
    "Collectors Rare",
    "Collector's Rare",
    "Ghost/Gold Rare",
    "Quarter Century Secret Rare",
    "Starlight Rare",
    "Ghost Rare",
    "10000 Secret Rare",
];

/// Short codes used by legacy exports, paired with their long names.
/// "CR" maps to the apostrophe spelling used by current prints.
const SHORT_CODES: &[(&str, &str)] = &[
    ("C", "Common"),
    ("R", "Rare"),
    ("SR", "Super Rare"),
    ("UR", "Ultra Rare"),
    ("UPR", "Ultra Parallel Rare"),
    ("DUPR", "Duel Terminal Ultra Parallel Rare"),
    ("SFR", "Starfoil Rare"),
    ("MSR", "Mosaic Rare"),
    ("ScR", "Secret Rare"),
    ("EScR", "Extra Secret Rare"),
    ("GScR", "Gold Secret Rare"),
    ("PScR", "Prismatic Secret Rare"),
    ("PlScR", "Platinum Secret Rare"),
    ("UtR", "Ultimate Rare"),
    ("GUR", "Gold Rare"),
    ("PGR", "Premium Gold Rare"),
    ("CR", "Collector's Rare"),
    ("GGR", "Ghost/Gold Rare"),
    ("QCScR", "Quarter Century Secret Rare"),
    ("StR", "Starlight Rare"),
    ("GR", "Ghost Rare"),
    ("10000ScR", "10000 Secret Rare"),
];

/// Ordered rarity labels plus the short-code lookup
#[derive(Debug, Clone)]
pub struct RarityVocabulary {
    ordered: Vec<String>,
    short_codes: HashMap<String, String>,
}

impl Default for RarityVocabulary {
    fn default() -> Self {
        Self::new(
            RARITIES.iter().map(|r| r.to_string()).collect(),
            SHORT_CODES
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        )
    }
}

impl RarityVocabulary {
    /// Build a vocabulary from labels ordered most common first
    pub fn new(ordered: Vec<String>, short_codes: HashMap<String, String>) -> Self {
        Self {
            ordered,
            short_codes,
        }
    }

    /// Rank of a rarity label (its index in the ordered list)
    pub fn rank(&self, rarity: &str) -> Result<usize> {
        self.ordered
            .iter()
            .position(|r| r == rarity)
            .ok_or_else(|| Error::UnknownRarity(rarity.to_string()))
    }

    pub fn contains(&self, rarity: &str) -> bool {
        self.ordered.iter().any(|r| r == rarity)
    }

    /// Long name for a legacy short code
    pub fn expand_short_code(&self, code: &str) -> Option<&str> {
        self.short_codes.get(code).map(String::as_str)
    }

    /// Accept either a long name or a short code and return the long name
    pub fn normalize<'a>(&'a self, label: &'a str) -> Result<&'a str> {
        let label = label.trim();
        if self.contains(label) {
            return Ok(label);
        }
        self.expand_short_code(label)
            .ok_or_else(|| Error::UnknownRarity(label.to_string()))
    }

    /// Sort the given tiers by rank, most common first. Unknown tiers are
    /// logged and left out.
    pub fn ascending<'a>(&self, tiers: &[&'a str]) -> Vec<&'a str> {
        let mut ranked: Vec<(usize, &str)> = tiers
            .iter()
            .filter_map(|tier| match self.rank(tier) {
                Ok(rank) => Some((rank, *tier)),
                Err(e) => {
                    log::error!("{}", e);
                    None
                }
            })
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.into_iter().map(|(_, tier)| tier).collect()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}
