// Configuration module entry point
// Loads layered configuration and holds the shared application state

mod state;
mod types;

use hyper::header::HeaderValue;
use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, LogLevel};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    ///
    /// Sources in increasing priority: defaults, the optional file,
    /// then `MOCK__SECTION__KEY` environment variables.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8000)?
            .set_default("logging.level", "warn")?
            .set_default("logging.access_log", false)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("http.server_name", "JeevanSetuMock/0.1")?
            .set_default("performance.connection_timeout", 0)?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("MOCK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate().map_err(config::ConfigError::Message)?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, per request
    pub fn validate(&self) -> Result<(), String> {
        HeaderValue::from_str(&self.http.server_name)
            .map_err(|e| format!("Invalid http.server_name {:?}: {e}", self.http.server_name))?;
        self.log_level()?;
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    pub fn log_level(&self) -> Result<LogLevel, String> {
        self.logging.level.parse()
    }
}
