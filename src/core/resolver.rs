//! Credential resolution.
//!
//! Turns `systemdcredential:NAME` into the content of
//! `$CREDENTIALS_DIRECTORY/NAME`. The steps run in a fixed order: scheme,
//! name, directory, file read, normalization. The first failing step decides
//! the error.

use std::fs;

use tracing::{debug, trace};

use crate::core::constants::SCHEME;
use crate::core::directory::{self, DirectorySource};
use crate::core::retrieved::Retrieved;
use crate::core::selector::{CredentialName, Selector};
use crate::error::{self, ResolveError};

/// Resolves credential selectors against a credentials directory.
///
/// Holds no mutable state; one instance can serve any number of concurrent
/// callers.
pub struct Resolver {
    source: Box<dyn DirectorySource>,
}

impl Resolver {
    /// A resolver reading the directory from the process environment.
    pub fn new() -> Self {
        Self {
            source: directory::default_source(),
        }
    }

    /// A resolver reading the directory from `source`.
    pub fn with_source(source: impl DirectorySource + 'static) -> Self {
        Self {
            source: Box::new(source),
        }
    }

    /// The scheme this resolver answers to.
    pub fn scheme(&self) -> &'static str {
        SCHEME
    }

    /// Resolve a selector URI to the credential's value.
    ///
    /// # Errors
    ///
    /// - `UnsupportedScheme` if `uri` does not start with `systemdcredential:`
    /// - `InvalidName` if the name fails validation
    /// - `DirectoryNotConfigured` if no credentials directory is available
    /// - `ReadFailed` if the credential file cannot be read
    pub fn resolve(&self, uri: &str) -> Result<Retrieved, ResolveError> {
        let selector = Selector::parse(uri)?;
        self.read(selector.name())
    }

    /// Read an already validated credential.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryNotConfigured` or `ReadFailed`.
    pub fn read(&self, name: &CredentialName) -> Result<Retrieved, ResolveError> {
        let dir = self
            .source
            .credentials_directory()
            .ok_or(ResolveError::DirectoryNotConfigured)?;

        let path = name.path_in(&dir);
        debug!(
            credential = %name,
            path = %path.display(),
            source = self.source.describe(),
            "reading credential"
        );

        let bytes = fs::read(&path).map_err(|source| ResolveError::ReadFailed {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;

        let value = Retrieved::from_bytes(&bytes);
        debug!(credential = %name, bytes = bytes.len(), "credential resolved");

        Ok(value)
    }

    /// Names of the credentials present in the directory, sorted.
    ///
    /// Only regular files (or symlinks to them) whose names pass validation
    /// are listed; anything else could not be resolved anyway.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryNotConfigured`, or an I/O error if the directory
    /// cannot be read.
    pub fn list(&self) -> error::Result<Vec<CredentialName>> {
        let dir = self
            .source
            .credentials_directory()
            .ok_or(ResolveError::DirectoryNotConfigured)?;
        debug!(path = %dir.display(), "listing credentials");

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let Some(file_name) = entry.file_name().to_str().map(str::to_owned) else {
                continue;
            };
            let Ok(name) = CredentialName::new(&file_name) else {
                trace!(entry = %file_name, "skipping invalid credential name");
                continue;
            };
            if !fs::metadata(entry.path()).map(|m| m.is_file()).unwrap_or(false) {
                continue;
            }
            names.push(name);
        }
        names.sort();

        Ok(names)
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
