use std::path::Path;

use anyhow::Context;
use tatami_config::cli::{Cli, Subcommand};
use tatami_config::config::{self, Config};

fn main() -> anyhow::Result<()> {
    match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(env_filter) => {
            tracing_subscriber::fmt()
                .compact()
                .with_env_filter(env_filter)
                .init();
        }
        Err(_) => {
            tracing_subscriber::fmt().compact().init();
        }
    }

    let cli = Cli::parse_and_expand();

    let config_dir = cli
        .config_dir
        .or_else(config::config_dir)
        .context("no config directory could be resolved")?;

    let config = load_for_inspection(&config_dir)?;

    match cli.subcommand {
        Subcommand::Check => match config.validate() {
            Ok(()) => {
                println!(
                    "OK: {} keybinds, {} groups, {} screens",
                    config.keys.len(),
                    config.groups.len(),
                    config.screens.len(),
                );
            }
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        },
        Subcommand::Dump => {
            let toml =
                toml::to_string_pretty(&config).context("failed to serialize the configuration")?;
            println!("{toml}");
        }
    }

    Ok(())
}

/// Loads the config for `check`/`dump`. Unlike the host's startup path, a
/// malformed file is a hard error here so it can't hide behind the stock
/// fallback; only a missing file uses the stock configuration.
fn load_for_inspection(config_dir: &Path) -> anyhow::Result<Config> {
    if config_dir.join("config.toml").exists() {
        Ok(Config::load(config_dir)?)
    } else {
        tracing::info!(
            "No config.toml in {}, using the stock configuration",
            config_dir.display()
        );
        Ok(Config::default())
    }
}
