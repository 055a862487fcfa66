//! ---
//! csel_section: "01-core-functionality"
//! csel_subsection: "module"
//! csel_type: "source"
//! csel_scope: "code"
//! csel_description: "TOML configuration: logging, default site conditions, presets and report output."
//! csel_version: "v0.1.0"
//! csel_owner: "tbd"
//! ---
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use cablesel_engine::EnvironmentalSettings;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::logging::LogFormat;

fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

fn default_reports_directory() -> PathBuf {
    PathBuf::from("reports")
}

/// Primary configuration object for CableSel tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Site conditions applied to batch runs without an explicit preset.
    #[serde(default)]
    pub defaults: EnvironmentalSettings,
    #[serde(default)]
    pub environments: IndexMap<String, EnvironmentalSettings>,
    #[serde(default)]
    pub reports: ReportsConfig,
}

/// Metadata describing where an [`AppConfig`] was loaded from.
#[derive(Debug, Clone)]
pub struct LoadedAppConfig {
    pub config: AppConfig,
    /// `None` when built-in defaults were used.
    pub source: Option<PathBuf>,
}

impl AppConfig {
    pub const ENV_CONFIG_PATH: &str = "CABLESEL_CONFIG";

    /// Load configuration from disk, respecting the `CABLESEL_CONFIG` override.
    pub fn load<P: AsRef<Path>>(candidates: &[P]) -> Result<Self> {
        match Self::locate(candidates) {
            Some(path) => Self::from_path(&path),
            None => Err(anyhow!(
                "no configuration files found. inspected: {}",
                candidates
                    .iter()
                    .map(|p| p.as_ref().display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }

    /// Like [`AppConfig::load`], but falls back to built-in defaults when no
    /// file exists. A file that exists and fails to parse is still an error.
    pub fn load_or_default<P: AsRef<Path>>(candidates: &[P]) -> Result<LoadedAppConfig> {
        match Self::locate(candidates) {
            Some(path) => Ok(LoadedAppConfig {
                config: Self::from_path(&path)?,
                source: Some(path),
            }),
            None => {
                debug!("no configuration file found, using built-in defaults");
                Ok(LoadedAppConfig {
                    config: AppConfig::default(),
                    source: None,
                })
            }
        }
    }

    fn locate<P: AsRef<Path>>(candidates: &[P]) -> Option<PathBuf> {
        if let Ok(env_path) = std::env::var(Self::ENV_CONFIG_PATH) {
            if !env_path.trim().is_empty() {
                return Some(PathBuf::from(env_path));
            }
        }
        candidates
            .iter()
            .map(|candidate| candidate.as_ref())
            .find(|candidate| candidate.exists())
            .map(Path::to_path_buf)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        debug!(config_path = %path.display(), "loading configuration");
        let contents = fs::read_to_string(path)
            .with_context(|| format!("unable to read config file {}", path.display()))?;
        let config = toml::from_str::<AppConfig>(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve a named preset, or the defaults when `name` is `None`.
    pub fn environment(&self, name: Option<&str>) -> Result<&EnvironmentalSettings> {
        match name {
            None => Ok(&self.defaults),
            Some(name) => self.environments.get(name).ok_or_else(|| {
                anyhow!(
                    "unknown environment '{}'; configured: [{}]",
                    name,
                    self.environments
                        .keys()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            }),
        }
    }

    /// Validate structural invariants.
    pub fn validate(&self) -> Result<()> {
        self.defaults
            .validate()
            .context("invalid [defaults] environment")?;
        for (name, environment) in &self.environments {
            environment
                .validate()
                .with_context(|| format!("invalid environment preset '{}'", name))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for AppConfig {
    type Err = anyhow::Error;

    fn from_str(content: &str) -> std::result::Result<Self, Self::Err> {
        let config: AppConfig =
            toml::from_str(content).with_context(|| "failed to parse configuration")?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: LogFormat,
    /// Rolling log files are only written when a directory is configured.
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub file_prefix: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
            directory: None,
            file_prefix: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    #[serde(default = "default_reports_directory")]
    pub directory: PathBuf,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            directory: default_reports_directory(),
        }
    }
}
