//! Credential name validation.
//!
//! Names end up as a path component under the credentials directory, so
//! anything that could escape it (separators, `..`, leading dots) is rejected.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::constants::NAME_PATTERN;
use crate::error::ResolveError;

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(NAME_PATTERN).expect("credential name pattern is valid"));

/// Check whether `name` is a valid credential name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_RE.is_match(name)
}

/// Validate a credential name.
///
/// Credential names must:
/// - Start with an ASCII letter or underscore
/// - Continue with ASCII letters, digits, underscores or dashes
/// - Not be empty
///
/// # Errors
///
/// Returns `ResolveError::InvalidName` carrying the name and the pattern.
pub fn validate_name(name: &str) -> Result<(), ResolveError> {
    if is_valid_name(name) {
        return Ok(());
    }

    Err(ResolveError::InvalidName {
        name: name.to_string(),
        pattern: NAME_PATTERN,
    })
}
