//! Conversion between the authored descriptor and the package record.
//!
//! `descriptor_to_package` splits `repository:version` and stamps the owner;
//! `package_to_descriptor` rejoins them. The return trip drops `owner` and
//! `pulls`, which only exist on the record.

use crackle_common::{Package, PackageDescriptor};

use crate::domain::error::PackageError;

/// Supplies the username of the account running the CLI.
///
/// An empty string means no identity is configured.
pub trait IdentityProvider {
    fn current_username(&self) -> String;
}

impl IdentityProvider for str {
    fn current_username(&self) -> String {
        self.to_string()
    }
}

impl IdentityProvider for String {
    fn current_username(&self) -> String {
        self.clone()
    }
}

/// Splits a combined image reference on its first `:`.
///
/// # Errors
///
/// Returns `MalformedRepository` when there is no separator.
pub fn split_repository(reference: &str) -> Result<(&str, &str), PackageError> {
    reference
        .split_once(':')
        .ok_or_else(|| PackageError::MalformedRepository(reference.to_string()))
}

/// Builds a fresh package record from a descriptor.
///
/// # Errors
///
/// Returns `MalformedRepository` if the repository has no `:` separator and
/// `MissingIdentity` if `identity` yields an empty username.
pub fn descriptor_to_package<I>(
    descriptor: &PackageDescriptor,
    identity: &I,
) -> Result<Package, PackageError>
where
    I: IdentityProvider + ?Sized,
{
    let (repository, version) = split_repository(&descriptor.repository)?;

    let owner = identity.current_username();
    if owner.is_empty() {
        return Err(PackageError::MissingIdentity);
    }

    Ok(Package {
        name: descriptor.name.clone(),
        repository: repository.to_string(),
        version: version.to_string(),
        owner,
        pulls: 0,
        command_start: descriptor.command_start.clone(),
        homepage: descriptor.homepage.clone(),
        short_description: descriptor.short_description.clone(),
        long_description: descriptor.long_description.clone(),
        ports: descriptor.ports.clone(),
        volumes: descriptor.volumes.clone(),
    })
}

/// Rebuilds the authored descriptor from a package record.
#[must_use]
pub fn package_to_descriptor(package: &Package) -> PackageDescriptor {
    PackageDescriptor {
        name: package.name.clone(),
        repository: package.image_reference(),
        command_start: package.command_start.clone(),
        homepage: package.homepage.clone(),
        short_description: package.short_description.clone(),
        long_description: package.long_description.clone(),
        ports: package.ports.clone(),
        volumes: package.volumes.clone(),
    }
}
