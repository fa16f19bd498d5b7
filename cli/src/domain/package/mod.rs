//! Package rules: validation, translation and launch-command rendering.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, or `std::process`.

pub mod launch;
pub mod translate;
pub mod validate;

pub use launch::{LAUNCH_EXECUTABLE, LaunchCommand, render_launch_command};
pub use translate::{
    IdentityProvider, descriptor_to_package, package_to_descriptor, split_repository,
};
pub use validate::{
    is_valid_package_name, is_valid_port, is_valid_repository_name, validate_descriptor,
    validate_package,
};
