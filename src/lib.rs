//! pro6-export - service schedules to ProPresenter 6 playlists
//!
//! Takes an ordered list of classified schedule entries (songs, scripture
//! passages, other events) with their display text and produces a ZIP
//! archive holding one `.pro6` presentation per song or passage and one
//! `.pro6plx` playlist that ties them together in schedule order.
//!
//! # Example
//!
//! ```rust
//! use pro6_export::archive::MemoryDelivery;
//! use pro6_export::config::ExportOptions;
//! use pro6_export::export::generate_and_deliver;
//! use pro6_export::schedule::{EntryKind, PlaylistEntry, ScheduleEntry};
//!
//! # fn main() -> pro6_export::Result<()> {
//! let entries = vec![
//!     PlaylistEntry::from_schedule(ScheduleEntry::new(EntryKind::Event, "Begrüßung")),
//!     PlaylistEntry::with_content(EntryKind::Song, "Größer", "Vers 1\n---\nRefrain"),
//!     PlaylistEntry::with_content(EntryKind::Scripture, "Psalm 23", "1 Der HERR ist mein Hirte"),
//! ];
//!
//! let options = ExportOptions::new().with_translation("BasisBibel");
//! let mut delivery = MemoryDelivery::new();
//! generate_and_deliver(&entries, &options, &mut delivery)?;
//! assert_eq!(delivery.archives.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod archive;
pub mod common;
pub mod config;
pub mod export;
pub mod propresenter;
pub mod rtf;
pub mod schedule;

pub use common::{Error, Result};
pub use config::ExportOptions;
pub use export::{GeneratedArchive, generate_and_deliver, generate_archive};
