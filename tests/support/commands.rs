//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// A systemd-credential command with no credentials directory.
///
/// Strips any `CREDENTIALS_DIRECTORY` the test runner itself inherited.
pub fn bare_cmd() -> Command {
    #[allow(deprecated)]
    let mut cmd =
        Command::cargo_bin("systemd-credential").expect("failed to find systemd-credential binary");
    cmd.env_remove("CREDENTIALS_DIRECTORY");
    cmd.env_remove("SYSTEMD_CREDENTIAL_LOG");
    cmd.env("NO_COLOR", "1");
    cmd
}

impl Test {
    /// Create a command with `CREDENTIALS_DIRECTORY` pointing at this test's
    /// directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = bare_cmd();
        cmd.env("CREDENTIALS_DIRECTORY", self.dir.path());
        cmd
    }

    /// Shortcut for `systemd-credential resolve`.
    pub fn resolve(&self, selector: &str) -> Output {
        self.cmd()
            .args(["resolve", selector])
            .output()
            .expect("failed to run systemd-credential resolve")
    }

    /// Shortcut for `systemd-credential list`.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run systemd-credential list")
    }
}
