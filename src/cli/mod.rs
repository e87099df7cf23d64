//! CLI module - Command-line interface for anistream
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;

/// anistream - Anime episode catalog server
/// Serves stream files as a paginated listing, a player and a JSON API
#[derive(Parser)]
#[command(name = "anistream")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a config file (defaults to the usual search locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override catalog.stream_dir
    #[arg(long, global = true)]
    pub stream_dir: Option<String>,

    /// Override server.port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Start the web server (default)
    #[command(alias = "web")]
    Serve,

    /// Print one listing page
    #[command(alias = "ls", alias = "l")]
    List {
        /// Page number, clamped to the last page
        #[arg(long, short, default_value_t = 1)]
        page: usize,
    },

    /// Show an episode by id or slug
    #[command(alias = "i")]
    Show {
        /// Episode id or slug
        identifier: String,
    },

    /// Read every stream file and report the ones that are skipped
    #[command(alias = "scan")]
    Check,

    /// Create default config file
    Init,
}

impl Cli {
    /// Resolves the configuration this invocation runs with.
    ///
    /// An explicit `--config` path must exist, except for `init` which
    /// creates it. Flag overrides are applied after loading.
    pub fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) if path.exists() => Config::load_from_path(path)?,
            Some(_) if self.command == Some(Commands::Init) => Config::default(),
            Some(path) => {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            None => Config::load().context("Failed to load configuration")?,
        };

        if let Some(stream_dir) = &self.stream_dir {
            config.catalog.stream_dir.clone_from(stream_dir);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }

        Ok(config)
    }

    /// Path `init` writes to.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::default_config_path)
    }
}

pub use commands::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["anistream"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_parses_list_page() {
        let cli = Cli::parse_from(["anistream", "list", "--page", "3"]);
        assert_eq!(cli.command, Some(Commands::List { page: 3 }));
    }

    #[test]
    fn test_parses_show_identifier() {
        let cli = Cli::parse_from(["anistream", "show", "frieren-1"]);
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                identifier: "frieren-1".to_string()
            })
        );
    }

    #[test]
    fn test_global_overrides_apply() {
        let cli = Cli::parse_from([
            "anistream",
            "--config",
            "/nonexistent/anistream.toml",
            "--stream-dir",
            "/srv/stream",
            "--port",
            "8080",
            "init",
        ]);

        let config = cli.load_config().unwrap();
        assert_eq!(config.catalog.stream_dir, "/srv/stream");
        assert_eq!(config.server.port, 8080);
        assert_eq!(cli.config_path(), PathBuf::from("/nonexistent/anistream.toml"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = Cli::parse_from(["anistream", "--config", "/nonexistent/anistream.toml", "check"]);
        assert!(cli.load_config().is_err());
    }
}
