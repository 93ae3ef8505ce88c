//! Last-run marker and the release window it opens.

use std::path::Path;

use chrono::NaiveDate;
use log::{debug, info};
use ygo_common::{Candidate, Error, KnownSets, Result};

/// Date format of the marker file
pub const MARKER_FORMAT: &str = "%m/%d/%Y";

/// Read the date of the last successful run. A missing marker means no window.
pub fn read_marker(path: &Path) -> Result<Option<NaiveDate>> {
    if !path.exists() {
        info!("No last-run marker at {}, scouting all releases", path.display());
        return Ok(None);
    }
    let content = std::fs::read_to_string(path)?;
    let value = content.lines().next().unwrap_or_default().trim();
    let date = NaiveDate::parse_from_str(value, MARKER_FORMAT).map_err(|source| {
        Error::InvalidDate {
            value: value.to_string(),
            source,
        }
    })?;
    info!("Scouting releases since {}", date);
    Ok(Some(date))
}

pub fn write_marker(path: &Path, date: NaiveDate) -> Result<()> {
    std::fs::write(path, date.format(MARKER_FORMAT).to_string())?;
    info!("Wrote last-run marker {} to {}", date, path.display());
    Ok(())
}

/// Keep candidates printed in a known set released on or after `since`
pub fn within_window(
    candidates: Vec<Candidate>,
    known_sets: &KnownSets,
    since: NaiveDate,
) -> Vec<Candidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let keep = known_sets.released_since(&candidate.card.set_code, since);
            if !keep {
                debug!("Outside release window: {}", candidate.card);
            }
            keep
        })
        .collect()
}
