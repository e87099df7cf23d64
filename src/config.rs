use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::ITEMS_PER_PAGE;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
/// Contents of `config.toml`. Every section and key is optional.
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub catalog: CatalogConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`.
    pub log_level: String,

    /// "pretty" or "json"
    pub log_format: String,

    /// Tokio worker threads, 0 means one per core.
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// Episodes per listing page.
    pub items_per_page: usize,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            items_per_page: ITEMS_PER_PAGE,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Directory holding the `NNNNNNNNN.json` stream files.
    pub stream_dir: String,

    /// Upper bound on stream files read at the same time.
    pub max_concurrent_reads: usize,

    /// Reuse the aggregated catalog while the directory listing is unchanged.
    pub cache_enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stream_dir: "./stream".to_string(),
            max_concurrent_reads: 16,
            cache_enabled: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

impl Config {
    /// First config file found in the search locations, or the defaults.
    pub fn load() -> Result<Self> {
        match Self::config_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => {
                info!(path = %path.display(), "Using config file");
                Self::load_from_path(&path)
            }
            None => {
                info!("No config file found, running with built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Cannot read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Cannot write {}", path.display()))?;
        Ok(())
    }

    /// `./config.toml`, then the platform config dir, then `~/.anistream`.
    fn config_paths() -> Vec<PathBuf> {
        std::iter::once(Self::default_config_path())
            .chain(dirs::config_dir().map(|dir| dir.join("anistream").join("config.toml")))
            .chain(dirs::home_dir().map(|home| home.join(".anistream").join("config.toml")))
            .collect()
    }

    #[must_use]
    pub fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    /// Writes the defaults to `path` unless a file is already there.
    /// Returns whether a file was written.
    pub fn create_default_if_missing(path: &Path) -> Result<bool> {
        if path.exists() {
            return Ok(false);
        }
        Self::default().save_to_path(path)?;
        info!(path = %path.display(), "Wrote default config");
        Ok(true)
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.items_per_page == 0 {
            anyhow::bail!("server.items_per_page must be > 0");
        }

        if self.catalog.max_concurrent_reads == 0 {
            anyhow::bail!("catalog.max_concurrent_reads must be > 0");
        }

        if self.catalog.stream_dir.trim().is_empty() {
            anyhow::bail!("catalog.stream_dir cannot be empty");
        }

        if !matches!(self.general.log_format.as_str(), "pretty" | "json") {
            anyhow::bail!(
                "general.log_format must be \"pretty\" or \"json\", got \"{}\"",
                self.general.log_format
            );
        }

        Ok(())
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
