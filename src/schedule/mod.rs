//! Service schedule data model.
//!
//! Entries arrive ordered and already classified; the export never reorders
//! or drops them.

mod content;
mod entry;
mod load;
mod source;
mod translation;

pub use content::{SECTION_SEPARATOR, split_sections};
pub use entry::{
    EVENT_PLACEHOLDER_CONTENT, EntryKind, EntryUpdate, PlaylistEntry, ScheduleEntry, entry_id,
    is_ready,
};
pub use load::load_entries;
pub use source::{DOCX_MEDIA_TYPE, ScheduleSource};
pub use translation::{BIBLE_TRANSLATIONS, DEFAULT_TRANSLATION, is_known_translation};
