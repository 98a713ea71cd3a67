// Roster loading from CSV.
//
// The roster file has an `id` and a `display_name` column. Rows that fail to
// deserialize, or that carry a blank id, are logged and skipped. Duplicate
// ids keep their first occurrence.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use kickoff_draft::Participant;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum RosterError {
    #[error("failed to open roster {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to read roster {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

#[derive(Debug, Deserialize)]
struct RawParticipant {
    id: String,
    #[serde(default)]
    display_name: String,
}

fn load_roster_from_reader<R: Read>(rdr: R) -> Result<Vec<Participant>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(rdr);
    let mut seen = HashSet::new();
    let mut roster = Vec::new();
    for result in reader.deserialize::<RawParticipant>() {
        match result {
            Ok(raw) => {
                if raw.id.is_empty() {
                    warn!("skipping roster row with blank id");
                    continue;
                }
                if !seen.insert(raw.id.clone()) {
                    warn!("duplicate roster id '{}', keeping first entry", raw.id);
                    continue;
                }
                // Fall back to the id so every participant has something to show.
                let display_name = if raw.display_name.is_empty() {
                    raw.id.clone()
                } else {
                    raw.display_name
                };
                roster.push(Participant::new(raw.id, display_name));
            }
            Err(e) => {
                warn!("skipping malformed roster row: {}", e);
            }
        }
    }
    Ok(roster)
}

/// Load the participant roster from a CSV file.
pub fn load_roster(path: &Path) -> Result<Vec<Participant>, RosterError> {
    let file = std::fs::File::open(path).map_err(|e| RosterError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    load_roster_from_reader(file).map_err(|e| RosterError::Csv {
        path: path.display().to_string(),
        source: e,
    })
}
