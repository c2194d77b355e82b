//! CLI module for planr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for creating plans,
//! inspecting them, and recording progress.

pub mod commands;
pub mod subjects;

pub use commands::Cli;
