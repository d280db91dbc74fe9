//! systemd-credential - Resolve `systemdcredential:NAME` selectors.
//!
//! Reads credentials the service manager placed in `$CREDENTIALS_DIRECTORY`
//! and hands them to a configuration framework as plain string values.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Operator command-line interface
//! │   ├── resolve       # Print one credential
//! │   ├── list          # List credential names
//! │   └── output        # Terminal output helpers
//! ├── core/             # Core library components
//! │   ├── constants     # Scheme, env var and pattern
//! │   ├── directory/    # Credentials directory sources
//! │   │   ├── mod       # DirectorySource trait
//! │   │   ├── env       # $CREDENTIALS_DIRECTORY
//! │   │   └── fixed     # Explicit path
//! │   ├── resolver      # Selector -> value
//! │   ├── retrieved     # Resolved value
//! │   ├── selector      # Selector and name parsing
//! │   └── validation    # Name pattern
//! └── provider          # Host registry adapter
//! ```
//!
//! # Example
//!
//! ```no_run
//! use systemd_credential::Resolver;
//!
//! let resolver = Resolver::new();
//! let token = resolver.resolve("systemdcredential:api_token")?;
//! println!("{} bytes", token.len());
//! # Ok::<(), systemd_credential::error::ResolveError>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
pub mod provider;

pub use crate::core::constants::SCHEME;
pub use crate::core::directory::{DirectorySource, FixedDirectory, ProcessEnv};
pub use crate::core::resolver::Resolver;
pub use crate::core::retrieved::Retrieved;
pub use crate::core::selector::{CredentialName, Selector};
pub use crate::error::{Error, ResolveError, ResolveErrorKind, Result};
pub use crate::provider::{new_factory, CredentialProvider, Provider, ProviderFactory};
