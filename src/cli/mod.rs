//! CLI module for the OpsHub API
//!
//! Provides the `serve` subcommand that runs the HTTP gateway.

pub mod serve;

use clap::{Parser, Subcommand};

/// OpsHub API - REST gateway for agent tasks, projects and workflows
#[derive(Parser)]
#[command(name = "opshub-api")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
