//! systemd-credential - Resolve systemdcredential:NAME selectors.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use systemd_credential::cli::{execute, hint_for, output, Cli};
use systemd_credential::core::constants::LOG_ENV;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("systemd_credential=debug")
        } else {
            EnvFilter::new("systemd_credential=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let directory = cli.directory();
    if let Err(e) = execute(cli.command, directory) {
        output::error(&e.to_string());
        if let Some(hint) = hint_for(&e) {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
