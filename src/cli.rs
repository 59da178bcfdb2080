//! Command line interface.

use std::path::PathBuf;

use clap::{Parser, ValueHint};
use tracing::warn;

/// The main CLI struct.
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Use the config at this directory instead of the default location
    #[arg(short, long, value_name("DIR"), value_hint(ValueHint::DirPath))]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

impl Cli {
    /// Parses the command line, shell-expanding `--config-dir`.
    pub fn parse_and_expand() -> Self {
        let mut cli = Cli::parse();

        cli.config_dir = cli.config_dir.and_then(|dir| {
            match shellexpand::path::full(&dir) {
                Ok(dir) => Some(dir.to_path_buf()),
                Err(err) => {
                    warn!("Could not shellexpand `--config-dir`'s argument: {err}; unsetting `--config-dir`");
                    None
                }
            }
        });

        cli
    }
}

/// Cli subcommands.
#[derive(clap::Subcommand, Debug)]
pub enum Subcommand {
    /// Validate the configuration and report every violation found
    Check,
    /// Print the full configuration as TOML, stock values included
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn config_dir_is_optional() {
        let cli = Cli::parse_from(["tatami-config", "check"]);
        assert!(cli.config_dir.is_none());
        assert!(matches!(cli.subcommand, Subcommand::Check));
    }
}
