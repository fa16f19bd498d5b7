//! Launch-command rendering for a package descriptor.
//!
//! Rendering performs no validation; callers validate first when they need
//! clean input.

use std::fmt;

use crackle_common::PackageDescriptor;
use serde::Serialize;

/// Program handed to the process launcher.
pub const LAUNCH_EXECUTABLE: &str = "/usr/bin/env";

/// Non-interactive, auto-removed container run with a pseudo-TTY.
pub const LAUNCH_PREAMBLE: &str = "docker run -t --rm";

/// A rendered container invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchCommand {
    pub executable: String,
    pub arguments: String,
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.executable, self.arguments)
    }
}

/// Renders `descriptor` into a `docker run` command line.
///
/// Port flags come first, then volume flags, each in list order, then the
/// image reference and the optional command-start suffix.
#[must_use]
pub fn render_launch_command(descriptor: &PackageDescriptor) -> LaunchCommand {
    let mut args = String::from(LAUNCH_PREAMBLE);

    for port in &descriptor.ports {
        args.push_str(&format!(" -p {}:{}", port.local, port.container));
    }
    for volume in &descriptor.volumes {
        args.push_str(&format!(" -v {}:{}", volume.local, volume.container));
    }

    args.push(' ');
    args.push_str(&descriptor.repository);
    if let Some(suffix) = &descriptor.command_start {
        args.push(' ');
        args.push_str(suffix);
    }

    LaunchCommand {
        executable: LAUNCH_EXECUTABLE.to_string(),
        arguments: args,
    }
}
