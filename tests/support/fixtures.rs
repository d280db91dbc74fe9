//! Test fixtures and constants.

/// Plain token without trailing newline.
pub const API_TOKEN: (&str, &str) = ("api_token", "my-secret-token-12345");

/// Value as written by `echo`, with a trailing newline.
pub const TOKEN_WITH_NEWLINE: (&str, &str) = ("token_with_newline", "my-secret-token\n");

/// Empty credential file.
pub const EMPTY_CRED: (&str, &str) = ("empty_cred", "");

/// Value full of characters that are not allowed in names.
pub const SPECIAL_CHARS: (&str, &str) = ("special_chars", "token-with-special!@#$%^&*()chars");

/// Name that fails validation.
pub const INVALID_NAME: &str = "default%config";

/// Standard credentials used across multiple tests.
pub const STANDARD_CREDENTIALS: &[(&str, &str)] = &[
    API_TOKEN,
    TOKEN_WITH_NEWLINE,
    EMPTY_CRED,
    SPECIAL_CHARS,
    ("db-password", "hunter2\n"),
    ("_private", "underscore first"),
];
