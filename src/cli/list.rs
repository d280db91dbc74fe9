//! `list` command.

use std::io::{self, Write};

use crate::cli::output;
use crate::core::resolver::Resolver;
use crate::error::Result;

/// List credential names available to the resolver, one per line.
pub fn execute(resolver: &Resolver, json: bool) -> Result<()> {
    let names: Vec<String> = resolver
        .list()?
        .into_iter()
        .map(|name| name.to_string())
        .collect();

    let mut stdout = io::stdout().lock();
    if json {
        writeln!(stdout, "{}", serde_json::Value::from(names))?;
        return Ok(());
    }

    if names.is_empty() {
        output::warn("no credentials found");
        return Ok(());
    }
    for name in &names {
        writeln!(stdout, "{}", name)?;
    }

    Ok(())
}
