//! File-based site source.

use std::path::{Path, PathBuf};

use super::source::{parse_table, SiteSource};
use super::ConfigError;

/// A site source that loads from a TOML file.
///
/// Files can be marked as required or optional. Required files that don't exist
/// cause an error; optional files that don't exist are silently skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    required: bool,
}

impl FileSource {
    /// Creates a new file source.
    ///
    /// If `required` is true, loading fails when the file doesn't exist.
    pub fn new(path: impl AsRef<Path>, required: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            required,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SiteSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn table(&self) -> Result<Option<toml::Table>, ConfigError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                log::debug!("Using site config file `{}`", self.path.display());
                parse_table(&self.origin(), &contents).map(Some)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                if self.required {
                    Err(ConfigError::FileNotFound(self.path.clone()))
                } else {
                    log::debug!(
                        "Optional site config file `{}` not found, skipping",
                        self.path.display()
                    );
                    Ok(None)
                }
            }
            Err(e) => Err(ConfigError::ReadError {
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

/// Walks from `dir` towards the filesystem root looking for `name`.
pub(crate) fn find_project_file(dir: impl Into<PathBuf>, name: &str) -> Option<PathBuf> {
    let mut file_path = dir.into();
    file_path.push(name);
    while !file_path.is_file() {
        file_path.pop(); // filename
        if !file_path.pop() {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}
