//! Test assertion helpers.

use std::process::Output;

use systemd_credential::{ResolveError, ResolveErrorKind, Retrieved};

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Assert a resolution failed with the given kind and return the error.
pub fn assert_kind(
    result: Result<Retrieved, ResolveError>,
    kind: ResolveErrorKind,
) -> ResolveError {
    match result {
        Ok(value) => panic!("expected {:?}, resolved {:?}", kind, value),
        Err(err) => {
            assert_eq!(err.kind(), kind, "unexpected error: {}", err);
            err
        }
    }
}
