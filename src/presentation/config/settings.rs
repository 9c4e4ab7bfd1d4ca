use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_REPLY_LATENCY_MS: u64 = 1500;
const DEFAULT_MAX_SESSIONS: usize = 1000;
const DEFAULT_VERIFICATION_DELAY_MS: u64 = 1000;
const DEFAULT_LOG_FILTER: &str = "info,cisec_nexus=debug,tower_http=debug";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub simulator: SimulatorSettings,
    #[serde(default)]
    pub portal: PortalSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl Settings {
    /// Layers `appsettings.<env>` (optional) and `APP_` variables, e.g.
    /// `APP_SIMULATOR__REPLY_LATENCY_MS=500`, over built-in defaults.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.file_suffix()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = configuration.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.server.host.trim().is_empty() {
            return Err(SettingsError::Invalid("server.host is empty".to_string()));
        }
        if self.simulator.max_sessions == 0 {
            return Err(SettingsError::Invalid(
                "simulator.max_sessions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SimulatorSettings {
    pub reply_latency_ms: u64,
    /// Fixes the canned-reply sequence when set.
    pub rng_seed: Option<u64>,
    /// Live chats kept in memory before the least recently used is evicted.
    pub max_sessions: usize,
}

impl SimulatorSettings {
    pub fn reply_latency(&self) -> Duration {
        Duration::from_millis(self.reply_latency_ms)
    }
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            reply_latency_ms: DEFAULT_REPLY_LATENCY_MS,
            rng_seed: None,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    pub verification_delay_ms: u64,
}

impl PortalSettings {
    pub fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms)
    }
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            verification_delay_ms: DEFAULT_VERIFICATION_DELAY_MS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            json_format: false,
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
