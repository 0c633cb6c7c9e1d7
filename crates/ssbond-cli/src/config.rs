//! Layered configuration for the `detect` command.
//!
//! Values are resolved in order of increasing precedence: built-in defaults
//! ([`defaults`]), an optional TOML file ([`file`]), `--set KEY=VALUE`
//! overrides and finally explicit command-line flags ([`builder`]).

pub mod builder;
pub mod defaults;
pub mod file;
pub mod models;
