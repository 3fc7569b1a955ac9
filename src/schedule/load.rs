//! Reading an entry list from YAML or JSON.

use super::entry::{EntryKind, PlaylistEntry, ScheduleEntry};
use crate::common::{Error, Result};
use serde::Deserialize;

/// One record of an entry file.
///
/// ```yaml
/// - type: song
///   title: Größer
///   content: |
///     Vers 1
///     ---
///     Refrain
/// - type: event
///   title: Predigt
/// ```
#[derive(Debug, Deserialize)]
struct EntryRecord {
    #[serde(rename = "type", alias = "kind")]
    kind: EntryKind,
    title: String,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl From<EntryRecord> for PlaylistEntry {
    fn from(record: EntryRecord) -> Self {
        let mut entry = PlaylistEntry::from_schedule(ScheduleEntry::new(record.kind, record.title));
        if record.kind.is_presentable() {
            match record.error {
                Some(message) => entry.resolve(Err(message)),
                None => entry.resolve(Ok(record.content.unwrap_or_default())),
            }
        }
        entry
    }
}

/// Parse an ordered entry list. JSON input is accepted as YAML flow syntax.
pub fn load_entries(input: &str) -> Result<Vec<PlaylistEntry>> {
    let records: Vec<EntryRecord> =
        serde_saphyr::from_str(input).map_err(|e| Error::ParseError(e.to_string()))?;
    Ok(records.into_iter().map(PlaylistEntry::from).collect())
}
