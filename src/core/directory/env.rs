//! Environment-backed directory source.

use std::path::PathBuf;

use tracing::trace;

use super::DirectorySource;
use crate::core::constants::CREDENTIALS_DIRECTORY_ENV;

/// Reads `$CREDENTIALS_DIRECTORY` from the process environment on every call.
///
/// Only presence is checked. A variable that is set but empty counts as
/// configured, and the file read then resolves relative to the working
/// directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl DirectorySource for ProcessEnv {
    fn credentials_directory(&self) -> Option<PathBuf> {
        let dir = std::env::var_os(CREDENTIALS_DIRECTORY_ENV).map(PathBuf::from);
        trace!(configured = dir.is_some(), "looked up {}", CREDENTIALS_DIRECTORY_ENV);
        dir
    }

    fn describe(&self) -> &'static str {
        "environment"
    }
}
