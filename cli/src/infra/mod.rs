//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: descriptor and record files,
//! the client config file, and identity resolution.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod config;
pub mod identity;
pub mod package_files;
