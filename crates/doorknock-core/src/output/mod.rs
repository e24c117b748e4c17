//! Per-client run directories
//!
//! Each campaign writes its artifacts to `<base>/output_<slug>/`:
//! one `task_<n>.json` per task and the rendered `index.html`.

use crate::config::{task_file_name, OUTPUT_DIR_PREFIX, SITE_FILE};
use crate::error::{DoorknockError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Directory-safe form of a client name.
///
/// Lowercased; every character outside `[a-z0-9_-]` (spaces and path
/// separators included) becomes `_`. A blank name has no slug.
pub fn client_slug(client_name: &str) -> Result<String> {
    let slug: String = client_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'a'..='z' | '0'..='9' | '_' | '-' => c,
            _ => '_',
        })
        .collect();

    if slug.is_empty() || slug == "." || slug == ".." {
        return Err(DoorknockError::OutputInvalidName(client_name.to_string()));
    }
    Ok(slug)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunDirectory {
    path: PathBuf,
}

impl RunDirectory {
    pub fn for_client(base: impl AsRef<Path>, client_name: &str) -> Result<Self> {
        let name = format!("{}{}", OUTPUT_DIR_PREFIX, client_slug(client_name)?);
        Ok(Self {
            path: base.as_ref().join(name),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the directory and its parents. Existing directories are fine.
    pub fn create(&self) -> Result<()> {
        std::fs::create_dir_all(&self.path)?;
        Ok(())
    }

    /// Write a task artifact as `task_<index>.json`. `index` starts at 1.
    pub fn write_task<T: Serialize>(&self, index: usize, value: &T) -> Result<PathBuf> {
        if index == 0 {
            return Err(DoorknockError::Generic(
                "task index starts at 1".to_string(),
            ));
        }
        let content = serde_json::to_string_pretty(value)?;
        let path = self.path.join(task_file_name(index));
        self.write_atomic(&path, content.as_bytes())?;
        Ok(path)
    }

    /// Write the landing page as `index.html`.
    pub fn write_site(&self, html: &str) -> Result<PathBuf> {
        let path = self.path.join(SITE_FILE);
        self.write_atomic(&path, html.as_bytes())?;
        Ok(path)
    }

    fn write_atomic(&self, path: &Path, content: &[u8]) -> Result<()> {
        use std::io::Write;
        use tempfile::NamedTempFile;

        self.create()?;
        let write_error = |reason: String| DoorknockError::OutputWriteError {
            path: path.to_path_buf(),
            reason,
        };

        let mut temp_file = NamedTempFile::new_in(&self.path)
            .map_err(|e| write_error(format!("failed to create temp file: {}", e)))?;
        temp_file
            .write_all(content)
            .map_err(|e| write_error(format!("failed to write temp file: {}", e)))?;
        temp_file
            .as_file()
            .sync_all()
            .map_err(|e| write_error(format!("failed to sync temp file: {}", e)))?;
        temp_file
            .persist(path)
            .map_err(|e| write_error(format!("failed to persist temp file: {}", e)))?;

        log::debug!("wrote {}", path.display());
        Ok(())
    }
}
