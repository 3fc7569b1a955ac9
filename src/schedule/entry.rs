//! Schedule entries as produced by classification and content fetching.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Content given to events, which never become presentations.
pub const EVENT_PLACEHOLDER_CONTENT: &str = "Dies ist ein nicht-präsentierbares Ereignis.";

/// Classification of a schedule line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Song, hymn or congregational song
    Song,
    /// Bible passage
    Scripture,
    /// Anything else: welcome, sermon, blessing
    Event,
}

impl EntryKind {
    /// Lowercase name, as used in entry identifiers.
    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Song => "song",
            EntryKind::Scripture => "scripture",
            EntryKind::Event => "event",
        }
    }

    /// Whether entries of this kind get their own presentation document.
    #[inline]
    pub fn is_presentable(self) -> bool {
        !matches!(self, EntryKind::Event)
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified line of a service schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    #[serde(rename = "type", alias = "kind")]
    pub kind: EntryKind,
    pub title: String,
}

impl ScheduleEntry {
    pub fn new(kind: EntryKind, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
        }
    }
}

/// A schedule entry together with its fetched display text.
///
/// `content` holds sections separated by lines consisting of `---`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistEntry {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub title: String,
    pub content: String,
    pub is_loading: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Manual correction of an entry before export.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PlaylistEntry {
    /// Initial entry for a freshly classified schedule line.
    ///
    /// Events are complete immediately; songs and scripture wait for their
    /// text.
    pub fn from_schedule(entry: ScheduleEntry) -> Self {
        let id = entry_id(entry.kind, &entry.title);
        let presentable = entry.kind.is_presentable();
        Self {
            id,
            kind: entry.kind,
            title: entry.title,
            content: if presentable {
                String::new()
            } else {
                EVENT_PLACEHOLDER_CONTENT.to_string()
            },
            is_loading: presentable,
            error: None,
        }
    }

    /// Entry whose content is already known.
    pub fn with_content(kind: EntryKind, title: impl Into<String>, content: impl Into<String>) -> Self {
        let mut entry = Self::from_schedule(ScheduleEntry::new(kind, title));
        if kind.is_presentable() {
            entry.resolve(Ok(content.into()));
        }
        entry
    }

    /// Record the outcome of fetching this entry's text.
    ///
    /// A failed fetch leaves the content empty, which exports as a title-only
    /// presentation.
    pub fn resolve(&mut self, outcome: Result<String, String>) {
        match outcome {
            Ok(content) => {
                self.content = content;
                self.error = None;
            },
            Err(message) => {
                self.content.clear();
                self.error = Some(message);
            },
        }
        self.is_loading = false;
    }

    /// Apply a manual title/content edit.
    pub fn apply_update(&mut self, update: EntryUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }

    /// Name shown for the presentation: scripture carries its translation.
    pub fn presentation_name<'a>(&'a self, translation: &str) -> Cow<'a, str> {
        match self.kind {
            EntryKind::Scripture => Cow::Owned(format!("{} ({})", self.title, translation)),
            EntryKind::Song | EntryKind::Event => Cow::Borrowed(&self.title),
        }
    }
}

/// Stable key for an entry: `"{kind}-{title}"`.
pub fn entry_id(kind: EntryKind, title: &str) -> String {
    format!("{}-{}", kind, title)
}

/// A list can be exported once it has entries and none is still loading.
pub fn is_ready(entries: &[PlaylistEntry]) -> bool {
    !entries.is_empty() && !entries.iter().any(|e| e.is_loading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_schedule_event() {
        let entry = PlaylistEntry::from_schedule(ScheduleEntry::new(EntryKind::Event, "Predigt"));
        assert_eq!(entry.id, "event-Predigt");
        assert_eq!(entry.content, EVENT_PLACEHOLDER_CONTENT);
        assert!(!entry.is_loading);
    }

    #[test]
    fn test_from_schedule_song_waits_for_content() {
        let entry = PlaylistEntry::from_schedule(ScheduleEntry::new(EntryKind::Song, "Größer"));
        assert_eq!(entry.id, "song-Größer");
        assert!(entry.content.is_empty());
        assert!(entry.is_loading);
        assert!(!is_ready(std::slice::from_ref(&entry)));
    }

    #[test]
    fn test_resolve_error_clears_content() {
        let mut entry = PlaylistEntry::with_content(EntryKind::Song, "Höher", "Vers");
        entry.resolve(Err("not found".into()));
        assert!(entry.content.is_empty());
        assert_eq!(entry.error.as_deref(), Some("not found"));
        assert!(!entry.is_loading);
    }

    #[test]
    fn test_apply_update() {
        let mut entry = PlaylistEntry::with_content(EntryKind::Song, "Hoeher", "a");
        entry.apply_update(EntryUpdate {
            title: Some("Höher".into()),
            content: None,
        });
        assert_eq!(entry.title, "Höher");
        assert_eq!(entry.content, "a");
        // id stays stable across edits
        assert_eq!(entry.id, "song-Hoeher");
    }

    #[test]
    fn test_presentation_name() {
        let psalm = PlaylistEntry::with_content(EntryKind::Scripture, "Psalm 23", "");
        assert_eq!(psalm.presentation_name("BasisBibel"), "Psalm 23 (BasisBibel)");
        let song = PlaylistEntry::with_content(EntryKind::Song, "Grace", "");
        assert_eq!(song.presentation_name("BasisBibel"), "Grace");
    }

    #[test]
    fn test_is_ready() {
        assert!(!is_ready(&[]));
        let entries = vec![
            PlaylistEntry::from_schedule(ScheduleEntry::new(EntryKind::Event, "Segen")),
            PlaylistEntry::with_content(EntryKind::Song, "Grace", "x"),
        ];
        assert!(is_ready(&entries));
    }
}
