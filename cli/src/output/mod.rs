//! Output formatting module

pub mod human;
pub mod json;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use crackle_common::{Package, PackageDescriptor};
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::domain::config::CrackleConfig;
use crate::domain::package::LaunchCommand;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let env_no_color = no_color_requested(std::env::var("NO_COLOR").ok().as_deref());
        let use_colors = !no_color && is_tty && !env_no_color;

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }
}

/// `NO_COLOR` disables color when set to any non-empty value.
#[must_use]
pub fn no_color_requested(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Output renderer selected by `AppContext::renderer()`.
///
/// Commands call the same method regardless of mode; the variant decides
/// the format.
pub enum Renderer<'a> {
    Human(HumanRenderer<'a>),
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(r) => r.render_version(version),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_valid(&self, descriptor: &PackageDescriptor, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_valid(descriptor, path);
                Ok(())
            }
            Self::Json(r) => r.render_valid(descriptor, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_launch_command(&self, command: &LaunchCommand) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_launch_command(command);
                Ok(())
            }
            Self::Json(r) => r.render_launch_command(command),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_package(&self, package: &Package) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_package(package);
                Ok(())
            }
            Self::Json(r) => r.render_package(package),
        }
    }

    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_descriptor(&self, descriptor: &PackageDescriptor) -> Result<()> {
        match self {
            Self::Human(r) => r.render_descriptor(descriptor),
            Self::Json(r) => r.render_descriptor(descriptor),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &CrackleConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(r) => r.render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config_set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config_set(key, value);
                Ok(())
            }
            Self::Json(r) => r.render_config_set(key, value),
        }
    }
}
