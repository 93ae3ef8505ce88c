//! Turns an exported collection listing into canonical card listings.

use std::collections::HashSet;
use std::path::Path;

use log::{debug, info, warn};
use ygo_common::{CardIdentifier, RarityVocabulary, Result};

use crate::layout::ExportLayout;

/// Lines shorter than this cannot hold a card row and are skipped silently
pub const MIN_LINE_LEN: usize = 10;

#[derive(Debug, Clone)]
pub struct ImportOptions {
    /// Emit a listing once per owned copy instead of once per card name
    pub allow_repeats: bool,
    /// Lines at the top of the file that are not card rows
    pub header_lines: usize,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            allow_repeats: false,
            header_lines: 2,
        }
    }
}

/// Result of normalizing one export
#[derive(Debug, Default)]
pub struct ImportSummary {
    pub cards: Vec<CardIdentifier>,
    /// Rows that were reported and skipped
    pub malformed: usize,
}

impl ImportSummary {
    /// Canonical listings in lexicographic order
    pub fn sorted_listings(&self) -> Vec<String> {
        let mut listings: Vec<String> = self.cards.iter().map(CardIdentifier::listing).collect();
        listings.sort();
        listings
    }
}

/// Parse export content.
///
/// Without repeats only the first row for each card name is kept; with
/// repeats every row is expanded by its quantity column. Malformed rows are
/// logged with their line number and skipped.
pub fn normalize_export(
    content: &str,
    layout: ExportLayout,
    options: &ImportOptions,
    vocabulary: &RarityVocabulary,
) -> ImportSummary {
    let mut summary = ImportSummary::default();
    let mut seen_names = HashSet::new();

    for (idx, line) in content.lines().enumerate().skip(options.header_lines) {
        let line_no = idx + 1;
        let line = line.trim_end();

        if line.trim().is_empty() || line.len() < MIN_LINE_LEN {
            debug!("Skipping line {line_no}: too short to be a card row");
            continue;
        }

        let row = match layout.split(line_no, line) {
            Ok(row) => row,
            Err(e) => {
                warn!("Failed to load info for card: {e}");
                summary.malformed += 1;
                continue;
            }
        };

        let card = match row.card(vocabulary) {
            Ok(card) => card,
            Err(e) => {
                warn!("Failed to load info for card: {e}");
                summary.malformed += 1;
                continue;
            }
        };

        if options.allow_repeats {
            let copies = match row.quantity() {
                Ok(copies) => copies,
                Err(e) => {
                    warn!("Failed to load info for card: {e}");
                    summary.malformed += 1;
                    continue;
                }
            };
            for _ in 0..copies {
                summary.cards.push(card.clone());
            }
        } else if seen_names.insert(card.name.clone()) {
            summary.cards.push(card);
        } else {
            debug!("Line {line_no}: {} already imported", card.name);
        }
    }

    info!(
        "Imported {} cards ({} malformed rows skipped)",
        summary.cards.len(),
        summary.malformed
    );
    summary
}

/// Read and normalize an export file
pub fn import_file(
    path: &Path,
    layout: ExportLayout,
    options: &ImportOptions,
    vocabulary: &RarityVocabulary,
) -> Result<ImportSummary> {
    info!("Loading collection export from: {}", path.display());
    let content = std::fs::read_to_string(path)?;
    Ok(normalize_export(&content, layout, options, vocabulary))
}

#[cfg(test)]
#[path = "normalizer_tests.rs"]
mod tests;
