//! Append-only set of named files destined for one archive.

use crate::common::{Error, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use std::collections::HashSet;
use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compression applied to archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchiveCompression {
    #[default]
    Deflated,
    Stored,
}

impl ArchiveCompression {
    fn method(self) -> CompressionMethod {
        match self {
            ArchiveCompression::Deflated => CompressionMethod::Deflated,
            ArchiveCompression::Stored => CompressionMethod::Stored,
        }
    }
}

/// One file in a [`Bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Files collected during an export, in insertion order.
///
/// Names are unique; adding a name twice is rejected rather than
/// overwritten.
#[derive(Debug, Default)]
pub struct Bundle {
    files: Vec<BundleFile>,
    names: HashSet<String>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file.
    pub fn add(&mut self, name: impl Into<String>, data: Vec<u8>) -> Result<()> {
        let name = name.into();
        if !self.names.insert(name.clone()) {
            return Err(Error::DuplicateEntry(name));
        }
        self.files.push(BundleFile { name, data });
        Ok(())
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[BundleFile] {
        &self.files
    }

    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.files
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.data.as_slice())
    }

    /// Write every file into a ZIP archive held in memory.
    ///
    /// Names and bytes are stored exactly as registered. Entries carry
    /// `modified` as their timestamp.
    pub fn to_zip(&self, compression: ArchiveCompression, modified: NaiveDateTime) -> Result<Vec<u8>> {
        let mut options = SimpleFileOptions::default().compression_method(compression.method());
        if let Some(time) = zip_time(modified) {
            options = options.last_modified_time(time);
        }

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for file in &self.files {
            zip.start_file(file.name.as_str(), options)?;
            zip.write_all(&file.data)?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

// ZIP timestamps cover 1980..=2107; anything else keeps the default
fn zip_time(t: NaiveDateTime) -> Option<zip::DateTime> {
    let year = u16::try_from(t.year()).ok()?;
    zip::DateTime::from_date_and_time(
        year,
        t.month() as u8,
        t.day() as u8,
        t.hour() as u8,
        t.minute() as u8,
        t.second() as u8,
    )
    .ok()
}
