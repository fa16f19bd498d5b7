//! Human-readable terminal renderer.

use std::path::Path;

use anyhow::{Context, Result};
use crackle_common::{Package, PackageDescriptor};
use owo_colors::OwoColorize as _;

use crate::domain::config::{CONFIG_ENV, CrackleConfig, USERNAME_ENV};
use crate::domain::package::LaunchCommand;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        println!("crackle {version}");
    }

    /// Confirm that a descriptor passed validation.
    pub fn render_valid(&self, descriptor: &PackageDescriptor, path: &Path) {
        self.ctx.success(&format!(
            "{} is valid ({})",
            path.display(),
            descriptor.name
        ));
    }

    /// Print the launch command. Never suppressed: it is the command's output.
    pub fn render_launch_command(&self, command: &LaunchCommand) {
        println!("{command}");
    }

    /// Render a package record.
    pub fn render_package(&self, package: &Package) {
        println!();
        println!("  {}", package.name.style(self.ctx.styles.header));
        println!();
        println!("  {:<20} {}", "repository:", package.repository);
        println!("  {:<20} {}", "version:", package.version);
        println!("  {:<20} {}", "owner:", package.owner);
        println!("  {:<20} {}", "pulls:", package.pulls);
        for (label, value) in [
            ("homepage:", &package.homepage),
            ("description:", &package.short_description),
            ("command start:", &package.command_start),
        ] {
            if let Some(value) = value {
                println!("  {label:<20} {value}");
            }
        }
        if let Some(long) = &package.long_description {
            println!();
            println!("  {}", "Details:".style(self.ctx.styles.bold));
            for line in long.lines() {
                println!("    {line}");
            }
        }
        if !package.ports.is_empty() {
            println!();
            println!("  {}", "Ports:".style(self.ctx.styles.bold));
            for port in &package.ports {
                println!("    {} → {}", port.local, port.container);
            }
        }
        if !package.volumes.is_empty() {
            println!();
            println!("  {}", "Volumes:".style(self.ctx.styles.bold));
            for volume in &package.volumes {
                println!("    {} → {}", volume.local, volume.container);
            }
        }
        println!();
    }

    /// Print a descriptor as TOML, ready to be saved as `crackle.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptor cannot be serialized.
    pub fn render_descriptor(&self, descriptor: &PackageDescriptor) -> Result<()> {
        let toml = toml::to_string_pretty(descriptor).context("cannot serialize descriptor")?;
        print!("{toml}");
        Ok(())
    }

    /// Render the current crackle configuration.
    pub fn render_config(&self, config: &CrackleConfig, path: &Path) {
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        let username = match config.username() {
            "" => "(not set)",
            name => name,
        };
        println!("  {:<20} {username}", "auth.username:");
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, USERNAME_ENV, "NO_COLOR"] {
            println!(
                "    {:<18} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    /// Confirm a configuration change.
    pub fn render_config_set(&self, key: &str, value: &str) {
        self.ctx.success(&format!("Set {key} = {value}"));
    }
}
