use ipnetwork::IpNetwork;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::geoip::GeoipConfig;
use super::logging::LoggingConfig;
use super::select::SelectConfig;

const LOCAL_CONFIG_PATH: &str = "dns-select.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/dns-select/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// SELECT records and their policies
    #[serde(default)]
    pub select: SelectConfig,

    /// Static GeoIP networks
    #[serde(default)]
    pub geoip: GeoipConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-select.toml in current directory
    /// 3. /etc/dns-select/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Self::from_file(LOCAL_CONFIG_PATH)?
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Self::from_file(SYSTEM_CONFIG_PATH)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = json;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut names = FxHashSet::default();
        for record in &self.select.records {
            record
                .validate()
                .map_err(|e| ConfigError::Validation(e.to_string()))?;

            let normalized = record.name.trim_end_matches('.').to_ascii_lowercase();
            if !names.insert(normalized) {
                return Err(ConfigError::Validation(format!(
                    "Duplicate SELECT record '{}'",
                    record.name
                )));
            }
        }

        for network in &self.geoip.networks {
            network.cidr.parse::<IpNetwork>().map_err(|e| {
                ConfigError::Validation(format!("Invalid GeoIP CIDR {}: {}", network.cidr, e))
            })?;
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_json: Option<bool>,
}
