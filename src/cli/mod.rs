//! Command-line interface.

pub mod list;
pub mod output;
pub mod resolve;

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::constants::{selector_prefix, NAME_PATTERN};
use crate::core::directory::FixedDirectory;
use crate::core::resolver::Resolver;
use crate::error::{Error, ResolveErrorKind};

/// systemd-credential - Resolve systemdcredential:NAME selectors.
#[derive(Parser)]
#[command(
    name = "systemd-credential",
    about = "Read credentials from the service manager's credentials directory",
    version
)]
pub struct Cli {
    /// Credentials directory (overrides $CREDENTIALS_DIRECTORY)
    ///
    /// Kept as a raw string so an empty value reaches the resolver like it
    /// does through the library.
    #[arg(
        short,
        long,
        global = true,
        env = "CREDENTIALS_DIRECTORY",
        value_name = "PATH"
    )]
    pub directory: Option<OsString>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// The credentials directory, from `--directory` or the environment.
    pub fn directory(&self) -> Option<PathBuf> {
        self.directory.clone().map(PathBuf::from)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the value of a credential
    Resolve {
        /// Selector, e.g. systemdcredential:api_token
        selector: String,
    },

    /// List credential names in the directory
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the scheme this resolver handles
    Scheme,
}

/// Execute a command.
///
/// The directory has already been folded together with the environment by
/// clap, so the resolver is always given an explicit source here.
pub fn execute(command: Command, directory: Option<PathBuf>) -> crate::error::Result<()> {
    let resolver = Resolver::with_source(FixedDirectory::from(directory));

    match command {
        Command::Resolve { selector } => resolve::execute(&resolver, &selector),
        Command::List { json } => list::execute(&resolver, json),
        Command::Scheme => {
            println!("{}", resolver.scheme());
            Ok(())
        }
    }
}

/// Suggested next step for an error, if there is an obvious one.
pub fn hint_for(err: &Error) -> Option<String> {
    match err.resolve_kind()? {
        ResolveErrorKind::UnsupportedScheme => {
            Some(format!("selectors look like {}NAME", selector_prefix()))
        }
        ResolveErrorKind::InvalidName => Some(format!("names must match {}", NAME_PATTERN)),
        ResolveErrorKind::DirectoryNotConfigured => {
            Some("set CREDENTIALS_DIRECTORY or pass --directory".to_string())
        }
        ResolveErrorKind::ReadFailed => None,
    }
}
