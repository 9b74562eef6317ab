use std::time::Duration;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub geocoder: GeocoderConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocoderConfig {
    /// When false, scans report only coordinates found in the markup.
    pub enabled: bool,
    /// Nominatim-compatible search endpoint.
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl GeocoderConfig {
    /// ## Summary
    /// Returns the per-query timeout applied by the address resolution queue.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, `config.toml` and `OOMPH_*` environment
    /// variables. Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it or
    /// validating it fails.
    pub fn load() -> Result<Self> {
        let settings = Config::builder()
            .set_default("geocoder.enabled", true)?
            .set_default(
                "geocoder.endpoint",
                "https://nominatim.openstreetmap.org/search",
            )?
            .set_default("geocoder.timeout_secs", 10)?
            .set_default("geocoder.user_agent", "oomph/0.1")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(config::File::with_name("config.toml").required(false))
            // Env vars, e.g. OOMPH_GEOCODER__TIMEOUT_SECS
            .add_source(
                config::Environment::with_prefix("OOMPH")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot work at runtime.
    ///
    /// ## Errors
    /// Returns `CoreError::ConfigError` naming the offending key.
    pub fn validate(&self) -> CoreResult<()> {
        if self.geocoder.timeout_secs == 0 {
            return Err(CoreError::ConfigError(
                "geocoder.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.geocoder.enabled && self.geocoder.endpoint.trim().is_empty() {
            return Err(CoreError::ConfigError(
                "geocoder.endpoint is required when the geocoder is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        geocoder_enabled = settings.geocoder.enabled,
        endpoint = %settings.geocoder.endpoint,
        "Configuration loaded"
    );
    Ok(settings)
}
