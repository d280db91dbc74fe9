//! Resolved credential values.

use std::fmt;

use zeroize::Zeroizing;

/// A resolved credential value.
///
/// Always a string, and always ephemeral: the host should not cache it past
/// the configuration load that asked for it. The backing buffer is wiped when
/// the value is dropped.
#[derive(Clone, PartialEq, Eq)]
pub struct Retrieved {
    value: Zeroizing<String>,
}

impl Retrieved {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: Zeroizing::new(value.into()),
        }
    }

    /// Build a value from raw file content.
    ///
    /// Strips exactly one trailing `\n` if present. `\r` and any other
    /// whitespace are kept. Invalid UTF-8 is replaced with U+FFFD.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let bytes = bytes.strip_suffix(b"\n").unwrap_or(bytes);
        Self::new(String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn len(&self) -> usize {
        self.value.len()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the host may cache this value. Credentials never are.
    pub fn is_ephemeral(&self) -> bool {
        true
    }

    /// Take the value out, leaving an empty buffer behind to be wiped.
    pub fn into_string(mut self) -> String {
        std::mem::take(&mut *self.value)
    }
}

// Values are secrets; keep them out of debug output and logs.
impl fmt::Debug for Retrieved {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Retrieved")
            .field("len", &self.value.len())
            .finish_non_exhaustive()
    }
}
