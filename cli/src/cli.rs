//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use crate::app::{AppContext, OutputFlags};
use crate::commands;

/// Validate crackle package descriptors and render their launch commands
#[derive(Parser)]
#[command(
    name = "crackle",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output (a non-empty NO_COLOR does the same)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a package descriptor against the package rules
    Validate(commands::DescriptorArgs),

    /// Print the container launch command for a descriptor
    Command(commands::command::CommandArgs),

    /// Show the package record a descriptor translates to
    Inspect(commands::DescriptorArgs),

    /// Convert a stored package record back into a descriptor
    Export(commands::export::ExportArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Validate(args) => commands::validate::run(&app, &args),
            Command::Command(args) => commands::command::run(&app, &args),
            Command::Inspect(args) => commands::inspect::run(&app, &args),
            Command::Export(args) => commands::export::run(&app, &args),
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Version => commands::version::run(&app),
        }
    }
}
