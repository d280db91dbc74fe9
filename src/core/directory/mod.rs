//! Credentials directory lookup.
//!
//! The directory a credential is read from is owned by the host (usually the
//! service manager). The resolver never reads the process environment
//! directly; it asks a `DirectorySource`, which keeps the lookup swappable in
//! tests and for callers that already know the path.
//!
//! ## Adding a New Source
//!
//! 1. Implement the `DirectorySource` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct FromConfig { dir: PathBuf }
//!
//! impl DirectorySource for FromConfig {
//!     fn credentials_directory(&self) -> Option<PathBuf> {
//!         Some(self.dir.clone())
//!     }
//! }
//! ```

use std::path::PathBuf;

mod env;
mod fixed;

pub use env::ProcessEnv;
pub use fixed::FixedDirectory;

/// Source of the credentials directory path.
///
/// Consulted once per resolution, after the credential name has been
/// validated.
pub trait DirectorySource: Send + Sync {
    /// The credentials directory, or `None` when it is not configured.
    fn credentials_directory(&self) -> Option<PathBuf>;

    /// Short description for logs.
    fn describe(&self) -> &'static str;
}

/// Default source: the process environment.
pub fn default_source() -> Box<dyn DirectorySource> {
    Box::new(ProcessEnv)
}
