/// Bible translations offered for scripture passages.
pub const BIBLE_TRANSLATIONS: &[&str] = &[
    "Lutherbibel 2017",
    "Elberfelder Bibel",
    "Hoffnung für Alle",
    "BasisBibel",
    "New International Version (NIV)",
    "King James Version (KJV)",
    "English Standard Version (ESV)",
];

/// Translation used when none is chosen.
pub const DEFAULT_TRANSLATION: &str = "Lutherbibel 2017";

/// Whether `label` is one of [`BIBLE_TRANSLATIONS`].
pub fn is_known_translation(label: &str) -> bool {
    BIBLE_TRANSLATIONS.contains(&label)
}
