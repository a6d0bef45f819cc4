//! CLI definition using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use motorpool_types::OutputFormat;

#[derive(Parser)]
#[command(name = "motorpool")]
#[command(version)]
#[command(about = "Drive a fleet of passenger cars and trucks through a scripted scenario")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load a scenario and print the fleet report
    Show {
        /// Path to scenario TOML file
        scenario: PathBuf,
    },

    /// Apply a scenario's steps in order and print each outcome
    Run {
        /// Path to scenario TOML file
        scenario: PathBuf,

        /// Stop at the first failing step (overrides config)
        #[arg(long)]
        fail_fast: bool,
    },

    /// Validate a scenario without running it
    Check {
        /// Path to scenario TOML file
        scenario: PathBuf,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Enable/disable fail-fast runs
        #[arg(long)]
        set_fail_fast: Option<bool>,
    },
}
