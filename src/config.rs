//! Configuration management for skillspark

use crate::error::{Result, SkillSparkError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `service.base_url`
pub const BASE_URL_ENV: &str = "SKILLSPARK_API_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://skillspark-ai-by-shahid.onrender.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub state_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for Config {
    fn default() -> Self {
        let state_dir = dirs::data_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillspark");

        Self {
            service: ServiceConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 15,
            },
            storage: StorageConfig { state_dir },
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load the configuration from the default location, creating it on first use
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load the configuration from `path`, writing defaults there if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// The file contents without environment overrides, for writing back
    pub fn load_file(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Config>(&content)
                .map_err(|e| SkillSparkError::Configuration(format!("Failed to parse config: {}", e)))?
        } else {
            let config = Self::default();
            config.save_to(path)?;
            config
        };

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillSparkError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillspark")
            .join("config.toml")
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            if !base_url.trim().is_empty() {
                self.service.base_url = base_url.trim().to_string();
            }
        }
    }

    /// Set a single dotted configuration key, e.g. `service.timeout_secs`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "service.base_url" => {
                if value.trim().is_empty() {
                    return Err(SkillSparkError::Configuration("base_url cannot be empty".to_string()));
                }
                self.service.base_url = value.trim().to_string();
            }
            "service.timeout_secs" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| SkillSparkError::Configuration(format!("Invalid timeout: {}", value)))?;
                if secs == 0 {
                    return Err(SkillSparkError::Configuration("timeout_secs must be positive".to_string()));
                }
                self.service.timeout_secs = secs;
            }
            "storage.state_dir" => self.storage.state_dir = PathBuf::from(value),
            "output.format" => {
                self.output.format = crate::cli::parse_output_format(value).map_err(SkillSparkError::Configuration)?;
            }
            "output.detailed" => self.output.detailed = parse_bool(value)?,
            "output.color_output" => self.output.color_output = parse_bool(value)?,
            _ => {
                return Err(SkillSparkError::Configuration(format!("Unknown configuration key: {}", key)));
            }
        }
        Ok(())
    }

    pub fn state_dir(&self) -> &Path {
        &self.storage.state_dir
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(SkillSparkError::Configuration(format!("Expected a boolean, got: {}", value))),
    }
}
