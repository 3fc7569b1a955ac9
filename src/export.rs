//! The export operation: entries in, one delivered archive out.

use crate::archive::{Bundle, Delivery};
use crate::common::Result;
use crate::config::ExportOptions;
use crate::propresenter::{PlaylistDocument, build_playlist};
use crate::schedule::PlaylistEntry;

/// A finished, not yet delivered archive.
#[derive(Debug, Clone)]
pub struct GeneratedArchive {
    /// Download name, `{app}_Ablaufplan_{date}.zip`
    pub file_name: String,
    /// ZIP bytes
    pub data: Vec<u8>,
    /// Names of the files inside, in archive order
    pub entries: Vec<String>,
    pub playlist: PlaylistDocument,
}

/// Build every document for `entries` and pack them into a ZIP archive.
pub fn generate_archive(entries: &[PlaylistEntry], options: &ExportOptions) -> Result<GeneratedArchive> {
    let (playlist, bundle) = build_playlist(entries, options, Bundle::new())?;
    let data = bundle.to_zip(options.compression, options.last_used())?;
    let file_name = options.archive_file_name();

    log::info!(
        "built {} with {} files ({} bytes, {} profile)",
        file_name,
        bundle.len(),
        data.len(),
        options.profile
    );

    Ok(GeneratedArchive {
        file_name,
        data,
        entries: bundle.files().iter().map(|f| f.name.clone()).collect(),
        playlist,
    })
}

/// Generate the archive and hand it to `delivery`.
///
/// Any failure before delivery aborts the whole export; `delivery` only
/// ever sees a complete archive.
pub fn generate_and_deliver<D>(
    entries: &[PlaylistEntry],
    options: &ExportOptions,
    delivery: &mut D,
) -> Result<()>
where
    D: Delivery + ?Sized,
{
    let archive = generate_archive(entries, options)?;
    delivery.deliver(&archive.file_name, &archive.data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::MemoryDelivery;
    use crate::common::Error;
    use crate::schedule::{EntryKind, ScheduleEntry};

    struct FailingDelivery;

    impl Delivery for FailingDelivery {
        fn deliver(&mut self, _: &str, _: &[u8]) -> Result<()> {
            Err(Error::Other("disk full".into()))
        }
    }

    #[test]
    fn test_generate_and_deliver() {
        let entries = vec![
            PlaylistEntry::from_schedule(ScheduleEntry::new(EntryKind::Event, "Welcome")),
            PlaylistEntry::with_content(EntryKind::Song, "Grace", "a"),
        ];
        let options = ExportOptions::new()
            .with_timestamp_str("2026-10-15T10:00:00Z")
            .unwrap();
        let mut delivery = MemoryDelivery::new();
        generate_and_deliver(&entries, &options, &mut delivery).unwrap();

        assert_eq!(delivery.archives.len(), 1);
        assert_eq!(delivery.archives[0].0, "ProPresenter_Ablaufplan_2026-10-15.zip");
        assert!(delivery.archives[0].1.starts_with(b"PK"));
    }

    #[test]
    fn test_delivery_failure_is_reported() {
        let entries = vec![PlaylistEntry::with_content(EntryKind::Song, "Grace", "a")];
        let err = generate_and_deliver(&entries, &ExportOptions::new(), &mut FailingDelivery).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn test_empty_list_still_has_playlist() {
        let archive = generate_archive(&[], &ExportOptions::new()).unwrap();
        assert_eq!(archive.entries.len(), 1);
        assert!(archive.playlist.items.is_empty());
    }
}
