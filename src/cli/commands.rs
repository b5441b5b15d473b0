//! Command execution handlers

use std::path::Path;

use console::style;

use crate::config::Config;
use crate::error::{GameError, Result};

/// Execute the play command
pub fn execute_play(args: &super::PlayArgs, config: &Config) -> Result<()> {
    use crate::app::{self, AppOptions};

    let assets_dir = args
        .assets
        .clone()
        .unwrap_or_else(|| config.assets.dir.clone());

    // explicit flag beats config beats a random seed
    let seed = args
        .seed
        .or(config.gameplay.seed)
        .unwrap_or_else(rand::random);

    let options = AppOptions {
        width: args.width.unwrap_or(config.window.width),
        height: args.height.unwrap_or(config.window.height),
        fullscreen: args.fullscreen || config.window.fullscreen,
        vsync: config.window.vsync && !args.no_vsync,
        assets_dir,
        seed,
    };

    app::run(&options)
}

/// Execute the check command
pub fn execute_check(args: &super::CheckArgs, config: &Config) -> Result<()> {
    use crate::app::AssetManifest;

    let dir = args.dir.clone().unwrap_or_else(|| config.assets.dir.clone());
    let manifest = AssetManifest::scan(&dir)?;

    match args.format {
        super::ReportFormat::Pretty => {
            println!("Asset Check");
            println!("═══════════════════════════════════════");
            println!("Directory:   {}", manifest.dir.display());
            println!("Textures:    {}", manifest.textures.join(", "));
            println!("Font:        {}", if manifest.has_font { "found" } else { "missing" });

            if manifest.is_complete() {
                println!("\n{} all expected assets present", style("✓").green().bold());
            } else {
                println!("\n{} missing assets:", style("✗").red().bold());
                for name in &manifest.missing {
                    println!("  • {}", name);
                }
            }
        }
        super::ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&manifest)?);
        }
        super::ReportFormat::Toml => {
            println!(
                "{}",
                toml::to_string_pretty(&manifest).map_err(|e| GameError::Other(e.to_string()))?
            );
        }
    }

    if manifest.is_complete() {
        Ok(())
    } else {
        Err(GameError::AssetsIncomplete(format!(
            "{} of {} expected entries missing",
            manifest.missing.len(),
            crate::app::assets::TEXTURE_STEMS.len() + 1
        )))
    }
}

/// Execute the simulate command
pub fn execute_simulate(args: &super::SimulateArgs) -> Result<()> {
    use crate::sim::{self, SimOptions};

    let options = SimOptions {
        ticks: args.ticks,
        seed: args.seed,
        autopilot: !args.no_autopilot,
    };
    let report = sim::run(&options);

    match args.format {
        super::ReportFormat::Pretty => {
            println!("{}", style("Headless Run Report").bold().underlined());
            println!();
            println!("  Seed:           {}", report.seed);
            println!(
                "  Simulated:      {} ticks ({:.1} s)",
                report.ticks, report.simulated_secs
            );
            println!("  Final phase:    {:?}", report.phase);
            println!("  Score:          {}", report.score);
            println!("  Balls left:     {}", report.remaining_balls);
            println!("  Tiles left:     {}", report.tiles_left);
            println!();
            println!("{}", style("Statistics").bold());
            println!("  Tiles destroyed:   {}", report.stats.tiles_destroyed);
            println!("  Pickups spawned:   {}", report.stats.pickups_spawned);
            println!("  Pickups collected: {}", report.stats.pickups_collected);
            println!("  Balls lost:        {}", report.stats.balls_lost);
        }
        super::ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        super::ReportFormat::Toml => {
            println!(
                "{}",
                toml::to_string_pretty(&report).map_err(|e| GameError::Other(e.to_string()))?
            );
        }
    }

    Ok(())
}

/// Execute the config command
///
/// All subcommands operate on the same file: the global `--config`
/// override when given, otherwise the default platform location.
pub fn execute_config(args: &super::ConfigArgs, path_override: Option<&Path>) -> Result<()> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => Config::config_path()?,
    };

    match &args.command {
        super::ConfigCommands::Show => {
            let config = Config::load_from(&path)?;
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| GameError::Other(e.to_string()))?
            );
        }
        super::ConfigCommands::Edit => {
            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "nano".to_string());
            std::process::Command::new(editor).arg(&path).status()?;
        }
        super::ConfigCommands::Reset { yes } => {
            let confirmed = *yes
                || dialoguer::Confirm::new()
                    .with_prompt("Reset configuration to defaults?")
                    .default(false)
                    .interact()
                    .map_err(|e| GameError::Other(e.to_string()))?;

            if confirmed {
                Config::reset_at(&path)?;
                println!("Configuration reset to defaults");
            } else {
                println!("Aborted");
            }
        }
        super::ConfigCommands::Set { key, value } => {
            let mut config = Config::load_from(&path)?;
            config.set(key, value)?;
            config.save_to(&path)?;
            println!("Set {} = {}", key, value);
        }
        super::ConfigCommands::Get { key } => {
            let config = Config::load_from(&path)?;
            if let Some(value) = config.get(key) {
                println!("{}", value);
            } else {
                println!("Key '{}' not found", key);
            }
        }
        super::ConfigCommands::Init { force } => {
            Config::init_at(&path, *force)?;
            println!("Configuration initialized");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{ConfigArgs, ConfigCommands};

    #[test]
    fn test_config_set_honors_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let args = ConfigArgs {
            command: ConfigCommands::Set {
                key: "window.width".to_string(),
                value: "800".to_string(),
            },
        };
        execute_config(&args, Some(&path)).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.window.width, 800);
    }

    #[test]
    fn test_config_reset_honors_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("logging.level", "trace").unwrap();
        config.save_to(&path).unwrap();

        let args = ConfigArgs {
            command: ConfigCommands::Reset { yes: true },
        };
        execute_config(&args, Some(&path)).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_init_honors_path_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let args = ConfigArgs {
            command: ConfigCommands::Init { force: false },
        };
        execute_config(&args, Some(&path)).unwrap();
        assert!(path.exists());

        // a second init without --force refuses to clobber the file
        assert!(execute_config(&args, Some(&path)).is_err());
    }
}
