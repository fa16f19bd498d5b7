//! `crackle export`: turn a stored package record back into a descriptor.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::package_service;

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Path to a package record (JSON)
    pub path: PathBuf,
}

/// Run the export command.
///
/// # Errors
///
/// Returns the load error or the first rule violation.
pub fn run(app: &AppContext, args: &ExportArgs) -> Result<ExitCode> {
    let descriptor = package_service::export_descriptor(&app.records, &args.path)?;
    app.renderer().render_descriptor(&descriptor)?;
    Ok(ExitCode::SUCCESS)
}
