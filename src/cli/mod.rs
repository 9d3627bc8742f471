//! CLI module for martech-hub - command-line interface and text rendering.
//!
//! Provides the main entry point with subcommands for listing, profiles,
//! submissions and the interactive browse session.

pub mod browse;
pub mod commands;
pub mod render;

pub use commands::Cli;
