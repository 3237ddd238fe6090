//! CEA command line
//!
//! Configuration loading and the bodies of the `cea` subcommands. The
//! binary in `main.rs` only parses arguments, installs logging and maps
//! results to output and exit status.

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod commands;
pub mod config;

pub use config::{AppConfig, ConfigError, PathsConfig};
