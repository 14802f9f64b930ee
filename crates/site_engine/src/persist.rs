use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("output directory missing or not writable: {0}")]
    OutputDir(String),
    #[error("relative path escapes the output directory: {0}")]
    InvalidPath(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure output directory exists; create if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::OutputDir("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    }
    NamedTempFile::new_in(dir).map_err(|e| PersistError::OutputDir(e.to_string()))?;
    Ok(())
}

/// Writes files below `root` through a temp file in the target directory, then renames.
pub struct AtomicFileWriter {
    root: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `relative` uses `/` separators, e.g. `events/page/2/index.html`.
    pub fn write(&self, relative: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.resolve(relative)?;
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        ensure_output_dir(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        if target.exists() {
            fs::remove_file(&target)?;
        }
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }

    fn resolve(&self, relative: &str) -> Result<PathBuf, PersistError> {
        let rel = Path::new(relative);
        let normal = rel
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if relative.is_empty() || !normal {
            return Err(PersistError::InvalidPath(relative.to_string()));
        }
        Ok(self.root.join(rel))
    }
}
