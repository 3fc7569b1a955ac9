//! Handing a finished archive to its destination.

use crate::common::{Error, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Destination for a finished archive.
///
/// Implementations receive the complete archive in one call, so a failed
/// export never reaches them.
pub trait Delivery {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> Result<()>;
}

/// Writes archives into a directory.
///
/// Data goes to a temporary file in the same directory first and is renamed
/// into place, so readers never observe a partial archive.
#[derive(Debug)]
pub struct DirectoryDelivery {
    dir: PathBuf,
    delivered: Vec<PathBuf>,
}

impl DirectoryDelivery {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            delivered: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far.
    pub fn delivered(&self) -> &[PathBuf] {
        &self.delivered
    }
}

impl Delivery for DirectoryDelivery {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let target = self.dir.join(file_name);

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(data)?;
        tmp.flush()?;
        tmp.persist(&target).map_err(|e| Error::Io(e.error))?;

        log::info!("wrote {} ({} bytes)", target.display(), data.len());
        self.delivered.push(target);
        Ok(())
    }
}

/// Keeps delivered archives in memory.
#[derive(Debug, Default)]
pub struct MemoryDelivery {
    pub archives: Vec<(String, Vec<u8>)>,
}

impl MemoryDelivery {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Delivery for MemoryDelivery {
    fn deliver(&mut self, file_name: &str, data: &[u8]) -> Result<()> {
        self.archives.push((file_name.to_string(), data.to_vec()));
        Ok(())
    }
}
