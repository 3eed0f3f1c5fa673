//! Configuration loading from files and environment variables.

use crate::schema::Config;
use crate::validator::ConfigValidator;
use gendata_common::{GenDataError, LogFormat, Result as GenDataResult};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "GENDATA_CONFIG_PATH";

/// Files probed in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILES: [&str; 3] = ["gendata.yaml", "gendata.yml", "gendata.toml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("Failed to parse TOML configuration: {0}")]
    TomlError(#[from] toml::de::Error),

    /// File extension is neither YAML nor TOML
    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(String),

    /// Configuration validation error
    #[error("Invalid configuration field '{field}': {message}")]
    Validation {
        /// Dotted path of the offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name.
        var: String,
        /// Parse failure.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl From<ConfigError> for GenDataError {
    fn from(err: ConfigError) -> Self {
        Self::config_with_source("failed to load configuration", err)
    }
}

/// Serialization format of a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// `.yaml` / `.yml`
    Yaml,
    /// `.toml`
    Toml,
}

impl FileFormat {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("toml") => Ok(Self::Toml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a file with environment variable overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::parse_str(&content, FileFormat::from_path(path)?)?;

        Self::apply_env_overrides(&mut config)?;
        ConfigValidator::validate(&config)?;

        debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// Load configuration from the environment-named file, a default file in
    /// the working directory, or built-in defaults, in that order.
    pub fn load() -> GenDataResult<Config> {
        let config = match Self::locate(env::var(CONFIG_PATH_ENV).ok(), |p| p.exists()) {
            Some(path) => Self::load_config(path)?,
            None => {
                info!("no configuration file found, using defaults");
                let mut config = Config::default();
                Self::apply_env_overrides(&mut config)?;
                ConfigValidator::validate(&config)?;
                config
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GenDataResult<Config> {
        Ok(Self::load_config(path)?)
    }

    /// Parse configuration text without touching the environment.
    pub fn parse_str(content: &str, format: FileFormat) -> Result<Config, ConfigError> {
        let config: Config = match format {
            FileFormat::Yaml => serde_yaml::from_str(content)?,
            FileFormat::Toml => toml::from_str(content)?,
        };
        Ok(config)
    }

    /// Picks the configuration file: an explicit path wins, then the first
    /// existing default file.
    pub fn locate(
        explicit: Option<String>,
        exists: impl Fn(&Path) -> bool,
    ) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        DEFAULT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|candidate| exists(candidate))
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides(config: &mut Config) -> Result<(), ConfigError> {
        Self::apply_overrides_from(config, |var| env::var(var).ok())
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value.
    pub fn apply_overrides_from(
        config: &mut Config,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(path) = lookup("GENDATA_OUTPUT_PATH") {
            config.output.path = PathBuf::from(path);
        }

        if let Some(width) = lookup("GENDATA_WIDTH") {
            config.output.width = parse_var("GENDATA_WIDTH", &width)?;
        }

        if let Some(height) = lookup("GENDATA_HEIGHT") {
            config.output.height = parse_var("GENDATA_HEIGHT", &height)?;
        }

        if let Some(seed) = lookup("GENDATA_SEED") {
            config.seed = Some(parse_var("GENDATA_SEED", &seed)?);
        }

        if let Some(level) = lookup("GENDATA_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(format) = lookup("GENDATA_LOG_FORMAT") {
            config.logging.format = format
                .parse::<LogFormat>()
                .map_err(|e| ConfigError::EnvParseError {
                    var: "GENDATA_LOG_FORMAT".to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
