//! Command-line interface for arkanoid

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Arkanoid - an SDL2 breakout clone
///
/// Launch the game, validate an asset directory, or run the world
/// headlessly for reproducible balance checks.
#[derive(Parser, Debug)]
#[command(name = "arkanoid")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute; launches the game when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "ARKANOID_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Launch the game (default)
    Play(PlayArgs),

    /// Validate an asset directory
    Check(CheckArgs),

    /// Run the world headlessly and report the outcome
    Simulate(SimulateArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Arguments for the play command
#[derive(Parser, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Asset directory (default: from configuration)
    #[arg(short, long)]
    pub assets: Option<PathBuf>,

    /// Window width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Window height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Start in borderless fullscreen
    #[arg(short, long)]
    pub fullscreen: bool,

    /// Disable vertical synchronization
    #[arg(long)]
    pub no_vsync: bool,

    /// World seed (default: from configuration, or random)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Asset directory to validate (default: from configuration)
    pub dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Pretty)]
    pub format: ReportFormat,
}

/// Arguments for the simulate command
#[derive(Parser, Debug)]
pub struct SimulateArgs {
    /// Number of fixed 16 ms ticks to simulate
    #[arg(short, long, default_value = "3600")]
    pub ticks: u32,

    /// World seed
    #[arg(short, long, default_value = "0")]
    pub seed: u64,

    /// Leave the paddle idle instead of chasing the ball
    #[arg(long)]
    pub no_autopilot: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Pretty)]
    pub format: ReportFormat,
}

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable pretty output
    Pretty,
    /// JSON output
    Json,
    /// TOML output
    Toml,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Configuration subcommand
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Edit configuration file
    Edit,
    /// Reset configuration to defaults
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key
        key: String,
        /// Configuration value
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key
        key: String,
    },
    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
