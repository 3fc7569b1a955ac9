//! Export configuration.

use crate::archive::ArchiveCompression;
use crate::common::{Error, Result};
use crate::propresenter::{OutputProfile, PLAYLIST_BASENAME, sanitize_file_name};
use crate::schedule::DEFAULT_TRANSLATION;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Name of the presentation application, used in the archive name.
pub const DEFAULT_APP_NAME: &str = "ProPresenter";

/// Options for one export run.
///
/// # Examples
///
/// ```rust
/// use pro6_export::config::ExportOptions;
/// use pro6_export::propresenter::OutputProfile;
///
/// let options = ExportOptions::new()
///     .with_translation("BasisBibel")
///     .with_profile(OutputProfile::Legacy);
/// assert_eq!(options.translation, "BasisBibel");
/// ```
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Bible translation appended to scripture titles
    pub translation: String,
    /// Schema flavour of the generated documents
    pub profile: OutputProfile,
    /// Moment of the export; drives `lastDateUsed` and every date in file names
    pub timestamp: DateTime<Utc>,
    /// Application name prefixed to the archive name
    pub app_name: String,
    /// Compression of archive entries
    pub compression: ArchiveCompression,
    /// Render presentations on the rayon pool
    pub parallel: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            translation: DEFAULT_TRANSLATION.to_string(),
            profile: OutputProfile::default(),
            timestamp: Utc::now(),
            app_name: DEFAULT_APP_NAME.to_string(),
            compression: ArchiveCompression::default(),
            parallel: true,
        }
    }
}

impl ExportOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_translation(mut self, translation: impl Into<String>) -> Self {
        self.translation = translation.into();
        self
    }

    #[inline]
    pub fn with_profile(mut self, profile: OutputProfile) -> Self {
        self.profile = profile;
        self
    }

    #[inline]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the timestamp from an RFC 3339 string.
    pub fn with_timestamp_str(self, timestamp: &str) -> Result<Self> {
        let parsed = DateTime::parse_from_rfc3339(timestamp)
            .map_err(|e| Error::ParseError(format!("timestamp '{}': {}", timestamp, e)))?;
        Ok(self.with_timestamp(parsed.with_timezone(&Utc)))
    }

    #[inline]
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    #[inline]
    pub fn with_compression(mut self, compression: ArchiveCompression) -> Self {
        self.compression = compression;
        self
    }

    #[inline]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// `YYYY-MM-DD` of the timestamp.
    pub fn date_label(&self) -> String {
        self.timestamp.format("%Y-%m-%d").to_string()
    }

    /// Timestamp without zone, as written to `lastDateUsed`.
    pub fn last_used(&self) -> NaiveDateTime {
        self.timestamp.naive_utc()
    }

    /// `{app}_Ablaufplan_{date}.zip`, with path separators and other unsafe
    /// characters in the app name replaced.
    pub fn archive_file_name(&self) -> String {
        format!(
            "{}_{}_{}.zip",
            sanitize_file_name(&self.app_name),
            PLAYLIST_BASENAME,
            self.date_label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.translation, "Lutherbibel 2017");
        assert_eq!(options.profile, OutputProfile::Modern);
        assert_eq!(options.compression, ArchiveCompression::Deflated);
        assert!(options.parallel);
    }

    #[test]
    fn test_names_follow_timestamp() {
        let options = ExportOptions::new()
            .with_timestamp_str("2026-10-15T23:59:58+00:00")
            .unwrap();
        assert_eq!(options.date_label(), "2026-10-15");
        assert_eq!(options.archive_file_name(), "ProPresenter_Ablaufplan_2026-10-15.zip");
        assert_eq!(options.last_used().to_string(), "2026-10-15 23:59:58");
    }

    #[test]
    fn test_timestamp_is_normalized_to_utc() {
        let options = ExportOptions::new()
            .with_timestamp_str("2026-10-16T01:00:00+02:00")
            .unwrap();
        assert_eq!(options.date_label(), "2026-10-15");
    }

    #[test]
    fn test_archive_name_stays_in_output_directory() {
        let options = ExportOptions::new()
            .with_app_name("../../etc/Pro\\Presenter")
            .with_timestamp_str("2026-10-15T12:00:00Z")
            .unwrap();
        let name = options.archive_file_name();
        assert_eq!(name, "..-..-etc-Pro-Presenter_Ablaufplan_2026-10-15.zip");
        assert_eq!(std::path::Path::new(&name).components().count(), 1);
    }

    #[test]
    fn test_bad_timestamp() {
        assert!(ExportOptions::new().with_timestamp_str("gestern").is_err());
    }
}
