//! Explicitly configured directory source.

use std::path::PathBuf;

use super::DirectorySource;

/// A directory fixed at construction time.
///
/// Used by the CLI when `--directory` is given and by tests, which need to
/// set or unset the directory per case without touching the process
/// environment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FixedDirectory {
    dir: Option<PathBuf>,
}

impl FixedDirectory {
    /// A source that always yields `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: Some(dir.into()),
        }
    }

    /// A source that behaves as if `CREDENTIALS_DIRECTORY` were not set.
    pub fn unset() -> Self {
        Self { dir: None }
    }
}

impl From<Option<PathBuf>> for FixedDirectory {
    fn from(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

impl DirectorySource for FixedDirectory {
    fn credentials_directory(&self) -> Option<PathBuf> {
        self.dir.clone()
    }

    fn describe(&self) -> &'static str {
        if self.dir.is_some() {
            "fixed"
        } else {
            "unset"
        }
    }
}
