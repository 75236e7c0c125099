use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8055;
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("port should be positive")]
    NegativePort,
    #[error("port {0} is out of range")]
    PortOutOfRange(i64),
    #[error("timeout should be positive")]
    NegativeTimeout,
    #[error("{name} must be an integer, got \"{value}\"")]
    NotANumber { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Grace period given to in-flight requests on SIGINT/SIGTERM
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            shutdown_timeout: Duration::from_secs(DEFAULT_SHUTDOWN_TIMEOUT_SECS),
        }
    }
}

impl ServerConfig {
    /// Read `HOST`, `SERVER_PORT` and `SERVER_TIMEOUT` (seconds).
    ///
    /// Unset, empty or zero values fall back to the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(host) = std::env::var("HOST") {
            if !host.trim().is_empty() {
                config.host = host.trim().to_string();
            }
        }

        if let Some(port) = read_int("SERVER_PORT")? {
            config = config.with_port(port)?;
        }

        if let Some(timeout) = read_int("SERVER_TIMEOUT")? {
            config = config.with_timeout(timeout)?;
        }

        Ok(config)
    }

    pub fn with_port(mut self, port: i64) -> Result<Self, ConfigError> {
        if port < 0 {
            return Err(ConfigError::NegativePort);
        }
        if port > 0 {
            self.port = u16::try_from(port).map_err(|_| ConfigError::PortOutOfRange(port))?;
        }
        Ok(self)
    }

    pub fn with_timeout(mut self, seconds: i64) -> Result<Self, ConfigError> {
        if seconds < 0 {
            return Err(ConfigError::NegativeTimeout);
        }
        if seconds > 0 {
            self.shutdown_timeout = Duration::from_secs(seconds as u64);
        }
        Ok(self)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn read_int(name: &'static str) -> Result<Option<i64>, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            let parsed = value.trim().parse::<i64>();
            match parsed {
                Ok(number) => Ok(Some(number)),
                Err(_) => Err(ConfigError::NotANumber { name, value }),
            }
        }
        _ => Ok(None),
    }
}
