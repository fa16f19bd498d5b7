//! Command implementations

pub mod command;
pub mod config;
pub mod export;
pub mod inspect;
pub mod validate;
pub mod version;

use std::path::PathBuf;

use clap::Args;

/// Default descriptor file name.
pub const DEFAULT_DESCRIPTOR: &str = "crackle.toml";

/// Positional descriptor path shared by package commands.
#[derive(Args)]
pub struct DescriptorArgs {
    /// Path to the package descriptor
    #[arg(default_value = DEFAULT_DESCRIPTOR)]
    pub path: PathBuf,
}
