//! Pure package validation. No I/O.
//!
//! Predicates are total: they never fail, they answer `true` or `false`.
//! `validate_descriptor` and `validate_package` apply the whole rule set in
//! a fixed order and stop at the first violation.

use std::sync::LazyLock;

use crackle_common::{Package, PackageDescriptor, PortMapping, VolumeMount};
use regex::Regex;

use crate::domain::error::{PackageError, Side, TextField};

/// Package names: 2–50 chars, lowercase alphanumeric at both ends,
/// `[a-z0-9_*-]` in between.
pub static PACKAGE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Safety: constant pattern, cannot fail.
    #[allow(clippy::expect_used)]
    Regex::new(r"^[a-z0-9][a-z0-9_*-]{0,48}[a-z0-9]$").expect("valid regex")
});

/// Repository references: image path, registry host, port and tag characters.
pub static REPOSITORY_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::expect_used)]
    Regex::new(r"^[A-Za-z0-9./:-]+$").expect("valid regex")
});

pub const REPOSITORY_NAME_MIN: usize = 3;
pub const REPOSITORY_NAME_MAX: usize = 141;

/// Longest accepted volume path on either side of a mount.
pub const VOLUME_PATH_MAX: usize = 4351;

/// Returns `true` if `name` is a valid package name.
///
/// The match must span the whole input; a valid name embedded in a longer
/// string is rejected.
pub fn is_valid_package_name(name: &str) -> bool {
    !name.is_empty() && PACKAGE_NAME_RE.is_match(name)
}

/// Returns `true` if `repository` is a valid repository reference.
pub fn is_valid_repository_name(repository: &str) -> bool {
    (REPOSITORY_NAME_MIN..=REPOSITORY_NAME_MAX).contains(&repository.len())
        && REPOSITORY_NAME_RE.is_match(repository)
}

/// Returns `true` if `port` is a base-10 integer in `1..=65535`.
pub fn is_valid_port(port: &str) -> bool {
    port.parse::<i64>()
        .is_ok_and(|n| (1..=i64::from(u16::MAX)).contains(&n))
}

/// Validate an authored descriptor.
///
/// # Errors
///
/// Returns the first rule violation found.
pub fn validate_descriptor(descriptor: &PackageDescriptor) -> Result<(), PackageError> {
    check_name(&descriptor.name)?;
    check_repository(&descriptor.repository)?;
    check_ports(&descriptor.ports)?;
    check_volumes(&descriptor.volumes)?;
    check_text(
        descriptor.short_description.as_deref(),
        descriptor.long_description.as_deref(),
        descriptor.homepage.as_deref(),
        descriptor.command_start.as_deref(),
    )
}

/// Validate a package record. The repository check runs on the rejoined
/// `repository:version` reference.
///
/// # Errors
///
/// Returns the first rule violation found.
pub fn validate_package(package: &Package) -> Result<(), PackageError> {
    check_name(&package.name)?;
    check_repository(&package.image_reference())?;
    check_ports(&package.ports)?;
    check_volumes(&package.volumes)?;
    check_text(
        package.short_description.as_deref(),
        package.long_description.as_deref(),
        package.homepage.as_deref(),
        package.command_start.as_deref(),
    )
}

fn check_name(name: &str) -> Result<(), PackageError> {
    if is_valid_package_name(name) {
        Ok(())
    } else {
        Err(PackageError::InvalidPackageName(name.to_string()))
    }
}

fn check_repository(repository: &str) -> Result<(), PackageError> {
    if is_valid_repository_name(repository) {
        Ok(())
    } else {
        Err(PackageError::InvalidRepositoryName(repository.to_string()))
    }
}

fn check_ports(ports: &[PortMapping]) -> Result<(), PackageError> {
    for port in ports {
        for (side, value) in [(Side::Container, &port.container), (Side::Local, &port.local)] {
            if !is_valid_port(value) {
                return Err(PackageError::InvalidPort {
                    side,
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_volumes(volumes: &[VolumeMount]) -> Result<(), PackageError> {
    for volume in volumes {
        for (side, value) in [
            (Side::Container, &volume.container),
            (Side::Local, &volume.local),
        ] {
            if value.chars().count() > VOLUME_PATH_MAX {
                return Err(PackageError::InvalidVolume {
                    side,
                    value: value.clone(),
                });
            }
        }
    }
    Ok(())
}

fn check_text(
    short_description: Option<&str>,
    long_description: Option<&str>,
    homepage: Option<&str>,
    command_start: Option<&str>,
) -> Result<(), PackageError> {
    let fields = [
        (TextField::ShortDescription, short_description),
        (TextField::LongDescription, long_description),
        (TextField::Homepage, homepage),
        (TextField::CommandStart, command_start),
    ];
    for (field, value) in fields {
        if let Some(text) = value
            && text.chars().count() > field.limit()
        {
            return Err(PackageError::too_long(field));
        }
    }
    Ok(())
}
