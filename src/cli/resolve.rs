//! `resolve` command.

use std::io::{self, Write};

use tracing::debug;

use crate::core::resolver::Resolver;
use crate::error::Result;

/// Resolve `selector` and write the value to stdout.
///
/// No newline is appended, so `$(systemd-credential resolve ...)` yields the
/// value exactly as the resolver returned it.
pub fn execute(resolver: &Resolver, selector: &str) -> Result<()> {
    let value = resolver.resolve(selector)?;
    debug!(bytes = value.len(), "writing credential to stdout");

    let mut stdout = io::stdout().lock();
    stdout.write_all(value.as_str().as_bytes())?;
    stdout.flush()?;

    Ok(())
}
