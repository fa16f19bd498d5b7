//! `crackle inspect`: show the package record a descriptor translates to.

use anyhow::Result;
use std::process::ExitCode;

use crate::app::AppContext;
use crate::application::services::package_service;
use crate::commands::DescriptorArgs;
use crate::infra::identity::ConfigIdentity;

/// Run the inspect command.
///
/// # Errors
///
/// Returns the decode error, the first rule violation, or a translation
/// error (`MalformedRepository`, `MissingIdentity`).
pub fn run(app: &AppContext, args: &DescriptorArgs) -> Result<ExitCode> {
    let identity = ConfigIdentity::resolve(&app.config_store)?;
    let package = package_service::load_package(&app.descriptors, &identity, &args.path)?;
    app.renderer().render_package(&package)?;
    Ok(ExitCode::SUCCESS)
}
