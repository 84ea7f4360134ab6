//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `barbershop.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use chrono::NaiveTime;
use serde::Deserialize;

use barbershop_domain::slot::BusinessHours;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Opening hours and slot length.
    pub schedule: ScheduleConfig,
    /// Demo data.
    pub seed: SeedConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Business hours, as `HH:MM` local times.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ScheduleConfig {
    /// First slot start.
    pub open: String,
    /// Closing time; no slot starts at or after it.
    pub close: String,
    /// Length of one slot in minutes.
    pub slot_minutes: u32,
}

/// Sample data toggles.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Pre-fill the appointment store with the sample bookings.
    pub sample_appointments: bool,
}

impl Config {
    /// Load configuration from `barbershop.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("barbershop.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("BARBERSHOP_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("BARBERSHOP_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("BARBERSHOP_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("BARBERSHOP_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        self.business_hours()?;
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Business hours described by the `[schedule]` section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] when a time is not `HH:MM` or the
    /// hours themselves are inconsistent.
    pub fn business_hours(&self) -> Result<BusinessHours, ConfigError> {
        let open = parse_clock("open", &self.schedule.open)?;
        let close = parse_clock("close", &self.schedule.close)?;
        BusinessHours::new(open, close, self.schedule.slot_minutes)
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }
}

fn parse_clock(field: &str, value: &str) -> Result<NaiveTime, ConfigError> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        ConfigError::Validation(format!("schedule.{field} must be HH:MM, got `{value}`"))
    })
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "barbershopd=info,barbershop_app=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            open: "09:00".to_string(),
            close: "19:00".to_string(),
            slot_minutes: 30,
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            sample_appointments: true,
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
