//! Test support utilities for systemd-credential integration tests.
//!
//! Provides an isolated credentials directory and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};

use systemd_credential::{FixedDirectory, Resolver};
use tempfile::TempDir;

/// Test environment with its own credentials directory.
///
/// No process-global state is mutated: library tests hand the directory to
/// the resolver through `FixedDirectory`, and child processes receive
/// `CREDENTIALS_DIRECTORY` through their own environment, so tests can run in
/// parallel.
pub struct Test {
    /// Temporary credentials directory
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty credentials directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a credentials directory holding the given credentials.
    pub fn with_credentials(credentials: &[(&str, &str)]) -> Self {
        let t = Self::new();
        for (name, value) in credentials {
            t.write(name, value.as_bytes());
        }
        t
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a credential file, mode 0600 on Unix like the service manager.
    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("failed to write credential");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o600))
                .expect("failed to set permissions");
        }

        path
    }

    /// A resolver bound to this directory.
    pub fn resolver(&self) -> Resolver {
        Resolver::with_source(FixedDirectory::new(self.dir.path()))
    }
}

/// A resolver that behaves as if `CREDENTIALS_DIRECTORY` were unset.
pub fn unconfigured_resolver() -> Resolver {
    Resolver::with_source(FixedDirectory::unset())
}

/// Build a selector for `name`.
pub fn selector(name: &str) -> String {
    format!("{}:{}", systemd_credential::SCHEME, name)
}
