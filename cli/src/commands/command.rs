//! `crackle command`: print the container launch command for a descriptor.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::package_service;
use crate::commands::DEFAULT_DESCRIPTOR;

/// Arguments for the command command.
#[derive(Args)]
pub struct CommandArgs {
    /// Path to the package descriptor
    #[arg(default_value = DEFAULT_DESCRIPTOR)]
    pub path: PathBuf,

    /// Render without validating the descriptor first
    #[arg(long)]
    pub skip_validation: bool,
}

/// Run the command command.
///
/// # Errors
///
/// Returns the decode error, or the first rule violation unless
/// `--skip-validation` is set.
pub fn run(app: &AppContext, args: &CommandArgs) -> Result<ExitCode> {
    let command = if args.skip_validation {
        package_service::launch_command(&app.descriptors, &args.path)?
    } else {
        package_service::validated_launch_command(&app.descriptors, &args.path)?
    };
    app.renderer().render_launch_command(&command)?;
    Ok(ExitCode::SUCCESS)
}
