//! Arkanoid - an SDL2 breakout clone
//!
//! Main entry point for the arkanoid CLI application.

use std::process::ExitCode;

use console::style;
use tracing_subscriber::EnvFilter;

use arkanoid::cli::{self, Cli, Commands, PlayArgs};
use arkanoid::config::Config;
use arkanoid::error::Result;

/// Application banner
const BANNER: &str = r#"
   █████╗ ██████╗ ██╗  ██╗ █████╗ ███╗   ██╗ ██████╗ ██╗██████╗
  ██╔══██╗██╔══██╗██║ ██╔╝██╔══██╗████╗  ██║██╔═══██╗██║██╔══██╗
  ███████║██████╔╝█████╔╝ ███████║██╔██╗ ██║██║   ██║██║██║  ██║
  ██╔══██║██╔══██╗██╔═██╗ ██╔══██║██║╚██╗██║██║   ██║██║██║  ██║
  ██║  ██║██║  ██║██║  ██╗██║  ██║██║ ╚████║╚██████╔╝██║██████╔╝
  ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝  ╚═══╝ ╚═════╝ ╚═╝╚═════╝
"#;

fn main() -> ExitCode {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so the file can set the level
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    // Set up logging
    setup_logging(&cli, &config);

    // Run the application
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Load the configuration file.
///
/// The `config` subcommands fall back to defaults when the file is
/// unreadable, so a broken file can still be repaired with
/// `config reset` or `config init --force`.
fn load_config(cli: &Cli) -> Result<Config> {
    match Config::load_or_default_path(cli.config.as_deref()) {
        Ok(config) => Ok(config),
        Err(e) if matches!(cli.command, Some(Commands::Config(_))) => {
            eprintln!(
                "{} could not read configuration ({}); using defaults",
                style("Warning:").yellow().bold(),
                e
            );
            Ok(Config::default())
        }
        Err(e) => Err(e),
    }
}

/// Set up logging based on CLI arguments and configuration
fn setup_logging(cli: &Cli, config: &Config) {
    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        &config.logging.level
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.logging.color)
        .with_target(false)
        .without_time()
        .init();
}

/// Main application logic
fn run(cli: Cli, config: Config) -> Result<()> {
    // Show banner when launching the game (not quiet mode)
    let launching = matches!(cli.command, None | Some(Commands::Play(_)));
    if launching && !cli.quiet {
        println!("{}", style(BANNER).cyan());
        println!(
            "  {} v{}\n",
            style("arkanoid").bold(),
            style(arkanoid::VERSION).dim()
        );
    }

    // Dispatch to appropriate command handler
    match cli.command {
        None => cli::execute_play(&PlayArgs::default(), &config),
        Some(Commands::Play(args)) => cli::execute_play(&args, &config),
        Some(Commands::Check(args)) => cli::execute_check(&args, &config),
        Some(Commands::Simulate(args)) => cli::execute_simulate(&args),
        Some(Commands::Config(args)) => cli::execute_config(&args, cli.config.as_deref()),
    }
}
