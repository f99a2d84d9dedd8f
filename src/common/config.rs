use crate::common::enums::{EaDataType, EaStateFlags};
use crate::common::error::ConfigError;
use crate::ea_log;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub log_dir: String,
    pub enable_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: "logs".to_string(),
            enable_console: true,
        }
    }
}

/// Static parameters of one EA: identity, the data categories it
/// subscribes to and the permissions it starts with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EaConfig {
    pub name: String,
    pub symbol: String,
    /// Flag list, e.g. `"CHART | INDICATOR"`.
    #[serde(default)]
    pub data: EaDataType,
    pub enabled: bool,
    pub libs_allowed: bool,
    pub trade_allowed: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl EaConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let content = fs::read_to_string(&path)?;
        let config: EaConfig = toml::from_str(&content)?;

        ea_log!(
            info,
            "Loaded EA configuration '{}' from {}",
            config.name,
            path.as_ref().display()
        );

        Ok(config)
    }

    /// Loads from the path in `EA_CONFIG_PATH`, falling back to `ea.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let config_path = env::var("EA_CONFIG_PATH").unwrap_or_else(|_| "ea.toml".to_string());
        Self::load_from_file(config_path)
    }

    /// Folds the permission booleans into the EA's starting state mask.
    /// An enabled EA starts active; everything else is granted later by
    /// the runtime environment.
    pub fn initial_flags(&self) -> EaStateFlags {
        let mut flags = EaStateFlags::empty();

        if self.enabled {
            flags |= EaStateFlags::ENABLED | EaStateFlags::ACTIVE;
        }
        if self.libs_allowed {
            flags |= EaStateFlags::LIBS_ALLOWED;
        }
        if self.trade_allowed {
            flags |= EaStateFlags::TRADE_ALLOWED;
        }

        flags
    }

    pub fn subscribes_to(&self, data: EaDataType) -> bool {
        self.data.contains(data)
    }
}

/// Parses a flag list taken from a raw config value.
pub fn parse_data_types(input: &str) -> Result<EaDataType, ConfigError> {
    Ok(input.parse::<EaDataType>()?)
}

// Global configuration instance
use std::sync::OnceLock;

static CONFIG: OnceLock<EaConfig> = OnceLock::new();

pub fn get_config() -> &'static EaConfig {
    CONFIG.get_or_init(|| EaConfig::load().expect("Failed to load configuration"))
}

pub fn init_config() -> Result<(), ConfigError> {
    let config = EaConfig::load()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::InvalidValue("Configuration already initialized".to_string()))?;
    Ok(())
}
