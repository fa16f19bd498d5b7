//! Application service: package pipeline use-cases.
//!
//! Each flow reads through a port exactly once and then hands off to pure
//! domain functions. Errors are returned unchanged; presentation happens in
//! `crate::commands`.

use std::path::Path;

use anyhow::Result;
use crackle_common::{Package, PackageDescriptor};
use tracing::{debug, warn};

use crate::application::ports::{DescriptorSource, IdentityProvider, PackageSource};
use crate::domain::PackageError;
use crate::domain::package::{
    LaunchCommand, descriptor_to_package, package_to_descriptor, render_launch_command,
    validate_descriptor, validate_package,
};

/// Decode the descriptor at `path` and render its launch command.
///
/// No validation is performed.
///
/// # Errors
///
/// Returns the decoder's error unchanged.
pub fn launch_command(source: &impl DescriptorSource, path: &Path) -> Result<LaunchCommand> {
    let descriptor = source.decode(path)?;
    let command = render_launch_command(&descriptor);
    debug!(path = %path.display(), arguments = %command.arguments, "rendered launch command");
    Ok(command)
}

/// Decode and validate the descriptor at `path`, then render its launch
/// command.
///
/// # Errors
///
/// Returns the decoder's error or the first validation violation.
pub fn validated_launch_command(
    source: &impl DescriptorSource,
    path: &Path,
) -> Result<LaunchCommand> {
    let descriptor = load_descriptor(source, path)?;
    Ok(render_launch_command(&descriptor))
}

/// Decode and validate the descriptor at `path`.
///
/// # Errors
///
/// Returns the decoder's error or the first validation violation.
pub fn load_descriptor(source: &impl DescriptorSource, path: &Path) -> Result<PackageDescriptor> {
    let descriptor = source.decode(path)?;
    validate_descriptor(&descriptor)?;
    debug!(path = %path.display(), name = %descriptor.name, "descriptor valid");
    Ok(descriptor)
}

/// Decode, validate and translate the descriptor at `path` into a package
/// record owned by the current identity.
///
/// # Errors
///
/// Returns the decoder's error, the first validation violation,
/// `MalformedRepository`, or `MissingIdentity`.
pub fn load_package<I>(
    source: &impl DescriptorSource,
    identity: &I,
    path: &Path,
) -> Result<Package>
where
    I: IdentityProvider + ?Sized,
{
    let descriptor = load_descriptor(source, path)?;
    let package = descriptor_to_package(&descriptor, identity).inspect_err(|e| {
        if matches!(e, PackageError::MissingIdentity) {
            warn!("no username configured; cannot assign package owner");
        }
    })?;
    debug!(
        name = %package.name,
        repository = %package.repository,
        version = %package.version,
        owner = %package.owner,
        "translated descriptor"
    );
    Ok(package)
}

/// Load the package record at `path`, validate it and convert it back to an
/// authored descriptor.
///
/// # Errors
///
/// Returns the loader's error or the first validation violation.
pub fn export_descriptor(source: &impl PackageSource, path: &Path) -> Result<PackageDescriptor> {
    let package = source.load(path)?;
    validate_package(&package)?;
    debug!(path = %path.display(), name = %package.name, "exporting record as descriptor");
    Ok(package_to_descriptor(&package))
}
