use serde::{Deserialize, Serialize};

use super::decoder::DecoderConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;

const LOCAL_CONFIG_PATH: &str = "ferrous-mdns.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/ferrous-mdns/config.toml";

/// Main configuration structure for Ferrous mDNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Response decoder configuration (service filter, packet size)
    #[serde(default)]
    pub decoder: DecoderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ferrous-mdns.toml in current directory
    /// 3. /etc/ferrous-mdns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.accept_any_service {
            self.decoder.service_type = None;
        } else if let Some(service_type) = overrides.service_type {
            self.decoder.service_type = Some(service_type);
        }
        if let Some(size) = overrides.max_packet_size {
            self.decoder.max_packet_size = size;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.decoder.max_packet_size;
        if !(12..=65535).contains(&size) {
            return Err(ConfigError::Validation(format!(
                "max_packet_size must be between 12 and 65535, got {}",
                size
            )));
        }

        if let Some(service_type) = &self.decoder.service_type {
            let labels = service_type.trim_end_matches('.').split('.');
            if labels.clone().count() < 2 || labels.clone().any(|label| label.is_empty()) {
                return Err(ConfigError::Validation(format!(
                    "Invalid service type '{}'. Expected e.g. '_http._tcp.local'",
                    service_type
                )));
            }
            if labels.clone().any(|label| label.len() > 63) {
                return Err(ConfigError::Validation(format!(
                    "Service type '{}' has a label longer than 63 bytes",
                    service_type
                )));
            }
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::Validation(
                "Log level cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &str) -> Result<(), ConfigError> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_string)
            .map_err(|e| ConfigError::FileWrite(path.to_string(), e.to_string()))?;
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub service_type: Option<String>,
    /// Drop any configured service filter and accept every service type.
    pub accept_any_service: bool,
    pub max_packet_size: Option<usize>,
    pub log_level: Option<String>,
}
