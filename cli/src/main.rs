//! crackle - package descriptors in, container launch commands out

#![cfg_attr(test, allow(clippy::expect_used))]

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crackle_cli::cli::Cli;
use crackle_cli::domain::PackageError;
use crackle_cli::output::json::format_error;

/// Exit code for package rule violations, distinct from I/O failures.
const EXIT_VIOLATION: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let json = cli.json;
    match cli.run() {
        Ok(code) => code,
        Err(e) => report(&e, json),
    }
}

/// Initialise tracing on stderr. `CRACKLE_LOG` (then `RUST_LOG`) wins over
/// the `--verbose` default.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("CRACKLE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn report(e: &anyhow::Error, json: bool) -> ExitCode {
    let package_error = e.downcast_ref::<PackageError>();
    if json {
        let code = package_error.map_or("error", PackageError::code);
        match format_error(&format!("{e:#}"), code) {
            Ok(out) => println!("{out}"),
            Err(_) => eprintln!("Error: {e:#}"),
        }
    } else {
        eprintln!("Error: {e:#}");
    }
    if package_error.is_some_and(PackageError::is_violation) {
        ExitCode::from(EXIT_VIOLATION)
    } else {
        ExitCode::FAILURE
    }
}
