//! Constants used throughout systemd-credential.
//!
//! Centralizes magic strings shared by the resolver, the provider adapter and
//! the CLI.

/// Scheme token routed to this resolver (`systemdcredential:NAME`).
pub const SCHEME: &str = "systemdcredential";

/// Environment variable holding the credentials directory.
///
/// Set by the service manager when a unit declares `LoadCredential=` or
/// `SetCredential=`.
pub const CREDENTIALS_DIRECTORY_ENV: &str = "CREDENTIALS_DIRECTORY";

/// Pattern every credential name must fully match.
pub const NAME_PATTERN: &str = "^[a-zA-Z_][a-zA-Z0-9_-]*$";

/// Environment variable controlling the CLI log filter.
pub const LOG_ENV: &str = "SYSTEMD_CREDENTIAL_LOG";

/// Selector prefix, `SCHEME` followed by the `:` delimiter.
pub fn selector_prefix() -> String {
    format!("{}:", SCHEME)
}
