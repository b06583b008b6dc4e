//! Writes generated files and keeps the manifest of a run.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::Result;

/// Writes rendered content to disk and records every written path.
///
/// The manifest only grows after a write succeeded, so its length always
/// equals the number of files actually emitted. There is no rollback: a
/// failed write leaves earlier files in place.
#[derive(Debug, Default)]
pub struct FileEmitter {
    generated_files: Vec<PathBuf>,
}

impl FileEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `content` to `path`, creating missing parent directories.
    /// Existing files are overwritten.
    pub fn emit<P: AsRef<Path>>(&mut self, path: P, content: &str) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        if path.exists() {
            warn!("Overwriting existing file: {}", path.display());
        }
        fs::write(path, content)?;
        debug!("Writing file: {}", path.display());

        self.record(path);
        Ok(())
    }

    fn record(&mut self, path: &Path) {
        if !self.generated_files.iter().any(|p| p == path) {
            self.generated_files.push(path.to_path_buf());
        }
    }

    /// Creates a directory tree. Directories are not part of the manifest.
    pub fn create_dir<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        debug!("Creating directory: {}", path.display());
        fs::create_dir_all(path)?;
        Ok(())
    }

    pub fn generated_files(&self) -> &[PathBuf] {
        &self.generated_files
    }

    pub fn into_manifest(self) -> Vec<PathBuf> {
        self.generated_files
    }
}
