//! Rarity audit of a saved card dump.

use std::path::Path;

use log::{info, warn};
use ygo_common::ygoprodeck::{distinct_rarities, load_card_dump};
use ygo_common::{RarityVocabulary, Result};

#[derive(Debug, Default)]
pub struct RarityAudit {
    /// Distinct `(rarity, rarity code)` pairs in order of first appearance
    pub pairs: Vec<(String, String)>,
    /// Rarities in the dump the vocabulary does not know
    pub unknown: Vec<String>,
}

/// List every rarity printed in the dump and flag those missing from the
/// vocabulary
pub fn audit_rarities(path: &Path, vocabulary: &RarityVocabulary) -> Result<RarityAudit> {
    info!("Auditing rarities in {}", path.display());
    let records = load_card_dump(path)?;
    let pairs = distinct_rarities(&records);

    let mut unknown: Vec<String> = Vec::new();
    for (rarity, _) in &pairs {
        if !vocabulary.contains(rarity) && !unknown.contains(rarity) {
            warn!("Rarity not in the rarities list: {rarity}");
            unknown.push(rarity.clone());
        }
    }

    info!(
        "{} cards, {} distinct rarities, {} unknown",
        records.len(),
        pairs.len(),
        unknown.len()
    );
    Ok(RarityAudit { pairs, unknown })
}
