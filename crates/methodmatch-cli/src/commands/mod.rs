//! Subcommand implementations.

pub mod check;
pub mod init;
pub mod list_presets;
pub mod output;
