//! A small text file the demos write, read back and append to.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// Handle to a UTF-8 text file on disk.
#[derive(Debug, Clone)]
pub struct ScratchFile {
    path: PathBuf,
}

impl ScratchFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ScratchFile { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates or truncates the file with `contents`.
    pub fn write(&self, contents: &str) -> Result<(), CoreError> {
        fs::write(&self.path, contents)?;
        Ok(())
    }

    pub fn read(&self) -> Result<String, CoreError> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Appends `text`, creating the file if needed.
    pub fn append(&self, text: &str) -> Result<(), CoreError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(text.as_bytes())?;
        Ok(())
    }
}
