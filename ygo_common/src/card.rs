//! Card identity: the `"Name (SET - Rarity)"` listing used as the primary key
//! on the tracking board.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Start of the set/rarity suffix
const SUFFIX_START: &str = " (";
/// Separator between set code and rarity inside the suffix
const RARITY_SEPARATOR: &str = " - ";

/// Canonical identity of one printing of a card
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardIdentifier {
    pub name: String,
    pub set_code: String,
    pub rarity: String,
}

impl CardIdentifier {
    pub fn new(
        name: impl Into<String>,
        set_code: impl Into<String>,
        rarity: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            set_code: set_code.into(),
            rarity: rarity.into(),
        }
    }

    /// Parse a canonical listing.
    ///
    /// The suffix is located with the rightmost `" ("` and the set/rarity
    /// split with the rightmost `" - "`, since names and set codes may
    /// themselves contain parentheses or hyphens.
    pub fn parse(listing: &str) -> Result<Self> {
        let malformed = || Error::MalformedCard(listing.to_string());

        let set_start = listing.rfind(SUFFIX_START).ok_or_else(malformed)?;
        let suffix = listing[set_start + SUFFIX_START.len()..]
            .strip_suffix(')')
            .ok_or_else(malformed)?;
        let rarity_start = suffix.rfind(RARITY_SEPARATOR).ok_or_else(malformed)?;

        Ok(Self {
            name: listing[..set_start].to_string(),
            set_code: suffix[..rarity_start].to_string(),
            rarity: suffix[rarity_start + RARITY_SEPARATOR.len()..].to_string(),
        })
    }

    /// Canonical string form
    pub fn listing(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CardIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} - {})", self.name, self.set_code, self.rarity)
    }
}

impl FromStr for CardIdentifier {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Base name of a listing: everything before the rightmost `" ("`.
///
/// Listings without a suffix are returned whole.
pub fn base_name(listing: &str) -> &str {
    match listing.rfind(SUFFIX_START) {
        Some(idx) => &listing[..idx],
        None => listing,
    }
}

/// Reduce a print code such as `LOB-EN001` to its set prefix (`LOB`)
pub fn set_prefix(print_code: &str) -> &str {
    let code = print_code.trim();
    match code.find('-') {
        Some(idx) => &code[..idx],
        None => code,
    }
}

#[cfg(test)]
#[path = "card_tests.rs"]
mod tests;
