use std::path::PathBuf;

use thiserror::Error;

/// Classification of a failed resolution.
///
/// Mirrors the variants of [`ResolveError`] without their payloads so callers
/// can branch on what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveErrorKind {
    UnsupportedScheme,
    InvalidName,
    DirectoryNotConfigured,
    ReadFailed,
}

/// Errors produced while resolving a credential selector.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("{uri:?} uri is not supported by {scheme:?} provider")]
    UnsupportedScheme { uri: String, scheme: &'static str },

    #[error("credential name {name:?} has invalid name: must match regex {pattern}")]
    InvalidName { name: String, pattern: &'static str },

    #[error("CREDENTIALS_DIRECTORY environment variable is not set")]
    DirectoryNotConfigured,

    #[error("failed to read credential {name:?} from {path:?}: {source}")]
    ReadFailed {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResolveError {
    /// The classification of this error.
    pub fn kind(&self) -> ResolveErrorKind {
        match self {
            Self::UnsupportedScheme { .. } => ResolveErrorKind::UnsupportedScheme,
            Self::InvalidName { .. } => ResolveErrorKind::InvalidName,
            Self::DirectoryNotConfigured => ResolveErrorKind::DirectoryNotConfigured,
            Self::ReadFailed { .. } => ResolveErrorKind::ReadFailed,
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// The resolve classification, if this error came from resolution.
    pub fn resolve_kind(&self) -> Option<ResolveErrorKind> {
        match self {
            Self::Resolve(e) => Some(e.kind()),
            Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
