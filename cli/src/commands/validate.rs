//! `crackle validate`: check a descriptor against the package rules.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::package_service;
use crate::commands::DescriptorArgs;

/// Run the validate command.
///
/// # Errors
///
/// Returns the decode error or the first rule violation.
pub fn run(app: &AppContext, args: &DescriptorArgs) -> Result<ExitCode> {
    let descriptor = package_service::load_descriptor(&app.descriptors, &args.path)?;
    app.renderer().render_valid(&descriptor, &args.path)?;
    Ok(ExitCode::SUCCESS)
}
