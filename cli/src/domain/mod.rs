//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod package;

pub use config::{CrackleConfig, validate_config_key, validate_config_value};
pub use error::{ConfigError, PackageError, Side, TextField};
