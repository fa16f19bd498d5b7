//! JSON output helpers.
//!
//! Every `--json` code path prints exactly one pretty-printed JSON document
//! to stdout. Failures use the error object from `format_error`.

use std::path::Path;

use anyhow::{Context, Result};
use crackle_common::{Package, PackageDescriptor};
use serde::Serialize;

use crate::domain::config::CrackleConfig;
use crate::domain::package::LaunchCommand;

/// Machine-readable renderer for `--json` mode.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Render the CLI version.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        emit(&serde_json::json!({ "version": version }))
    }

    /// Render a successful validation result.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_valid(&self, descriptor: &PackageDescriptor, path: &Path) -> Result<()> {
        emit(&serde_json::json!({
            "valid": true,
            "path": path.display().to_string(),
            "name": descriptor.name,
        }))
    }

    /// Render a launch command as `{ "executable", "arguments" }`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_launch_command(&self, command: &LaunchCommand) -> Result<()> {
        emit(command)
    }

    /// Render a package record in its persisted shape.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_package(&self, package: &Package) -> Result<()> {
        emit(package)
    }

    /// Render a descriptor in its authored shape.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_descriptor(&self, descriptor: &PackageDescriptor) -> Result<()> {
        emit(descriptor)
    }

    /// Render configuration together with its file location.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &CrackleConfig, path: &Path) -> Result<()> {
        emit(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
        }))
    }

    /// Render a configuration change.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        emit(&serde_json::json!({ "key": key, "value": value }))
    }
}

fn emit<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(value).context("JSON serialization failed")?;
    println!("{out}");
    Ok(())
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
