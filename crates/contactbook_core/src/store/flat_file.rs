//! Whole-file text store.
//!
//! # Responsibility
//! - Create the backing file (and its directory) on open.
//! - Provide line reads plus overwrite/append/clear writes.
//!
//! # Invariants
//! - `read_all` reads count and content in one pass.
//! - `overwrite` replaces the file through a temp file + rename, so readers
//!   see either the old or the new content.

use super::StoreResult;
use log::{error, info};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

/// Text file store addressed by path.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Opens the store at `path`, creating the parent directory and an empty
    /// file when they do not exist yet.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        if !path.exists() {
            OpenOptions::new().create(true).append(true).open(&path)?;
            info!("event=store_create module=store status=ok");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of lines in the backing file. Empty file -> `0`.
    pub fn line_count(&self) -> StoreResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Returns every line of the backing file in order.
    pub fn read_all(&self) -> StoreResult<Vec<String>> {
        let content = fs::read_to_string(&self.path).map_err(|err| {
            error!("event=store_read module=store status=error error={err}");
            err
        })?;
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        info!(
            "event=store_read module=store status=ok lines={}",
            lines.len()
        );
        Ok(lines)
    }

    /// Replaces the whole file content with `text`.
    pub fn overwrite(&self, text: &str) -> StoreResult<()> {
        let started_at = Instant::now();
        match self.replace_contents(text) {
            Ok(()) => {
                info!(
                    "event=store_overwrite module=store status=ok bytes={} duration_ms={}",
                    text.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_overwrite module=store status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err.into())
            }
        }
    }

    /// Appends `text` to the end of the file.
    pub fn append(&self, text: &str) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        info!(
            "event=store_append module=store status=ok bytes={}",
            text.len()
        );
        Ok(())
    }

    pub fn clear(&self) -> StoreResult<()> {
        self.overwrite("")
    }

    fn replace_contents(&self, text: &str) -> std::io::Result<()> {
        let dir = self
            .path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(text.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
