//! Session output location.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::error::{ScaffoldError, ScaffoldResult};

/// A fresh, session-unique directory that all generated files land in.
///
/// The name is derived from the session start time, so two sessions never
/// share or overwrite an output location.
pub struct SessionOutput {
    dir: PathBuf,
}

impl SessionOutput {
    /// Create `<root>/session-YYYYMMDD-HHMMSS/`.
    pub fn create(root: &Path, started: DateTime<Utc>) -> ScaffoldResult<Self> {
        let dir = root.join(format!("session-{}", started.format("%Y%m%d-%H%M%S")));
        fs::create_dir_all(&dir).map_err(|source| ScaffoldError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Wrap an existing directory (tests and sub-generators).
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one file, creating parent directories as needed. A failure
    /// names the relative path so the caller can report which file died.
    pub fn write(&self, relative: &str, content: &str) -> ScaffoldResult<()> {
        let path = self.dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| ScaffoldError::Write {
            path: relative.to_string(),
            source,
        })?;
        debug!("Wrote {}", relative);
        Ok(())
    }
}
