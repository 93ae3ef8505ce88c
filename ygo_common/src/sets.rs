//! Table of recognized set codes and their TCG release dates

use std::collections::HashMap;

use chrono::NaiveDate;

/// Set code -> TCG release date
#[derive(Debug, Clone, Default)]
pub struct KnownSets {
    sets: HashMap<String, NaiveDate>,
}

impl KnownSets {
    pub fn contains(&self, set_code: &str) -> bool {
        self.sets.contains_key(set_code)
    }

    pub fn released_on(&self, set_code: &str) -> Option<NaiveDate> {
        self.sets.get(set_code).copied()
    }

    /// Whether the set is known and was released on or after `date`
    pub fn released_since(&self, set_code: &str, date: NaiveDate) -> bool {
        self.released_on(set_code).is_some_and(|released| released >= date)
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl FromIterator<(String, NaiveDate)> for KnownSets {
    fn from_iter<I: IntoIterator<Item = (String, NaiveDate)>>(iter: I) -> Self {
        Self {
            sets: iter.into_iter().collect(),
        }
    }
}
