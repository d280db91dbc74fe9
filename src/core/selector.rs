//! Selector parsing.
//!
//! A selector is `systemdcredential:NAME`. Parsing checks the scheme first,
//! then validates the name, so a bad scheme always wins over a bad name.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::core::constants::SCHEME;
use crate::core::validation;
use crate::error::ResolveError;

/// A credential name that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CredentialName(String);

impl CredentialName {
    /// Validate and wrap `name`.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::InvalidName` if the name fails the pattern.
    pub fn new(name: &str) -> Result<Self, ResolveError> {
        validation::validate_name(name)?;
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path of this credential inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.0)
    }
}

impl fmt::Display for CredentialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CredentialName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A parsed `systemdcredential:NAME` selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    name: CredentialName,
}

impl Selector {
    /// Parse a selector URI.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::UnsupportedScheme` when the URI does not start
    /// with `systemdcredential:`, or `ResolveError::InvalidName` when the rest
    /// of the URI is not a valid credential name (including when it is empty).
    pub fn parse(uri: &str) -> Result<Self, ResolveError> {
        let candidate = uri
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .ok_or_else(|| ResolveError::UnsupportedScheme {
                uri: uri.to_string(),
                scheme: SCHEME,
            })?;

        Ok(Self {
            name: CredentialName::new(candidate)?,
        })
    }

    pub fn name(&self) -> &CredentialName {
        &self.name
    }

    pub fn into_name(self) -> CredentialName {
        self.name
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", SCHEME, self.name)
    }
}

impl std::str::FromStr for Selector {
    type Err = ResolveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
