//! Engine configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `HAVEN_SENTINEL`
//! prefix and nested values use `__` as separator, e.g.
//! `HAVEN_SENTINEL__DETECTION__RAPID_POSTING_THRESHOLD=5`.
//!
//! Every section has defaults, so the engine runs with an empty
//! environment.

mod detection;
mod error;

pub use detection::DetectionConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root engine configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct EngineConfig {
    /// Detection thresholds and rolling-window sizes.
    #[serde(default)]
    pub detection: DetectionConfig,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads a `.env` file if present (development), then reads
    /// `HAVEN_SENTINEL`-prefixed variables into typed sections.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HAVEN_SENTINEL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.detection.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize tests touching them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn loads_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        let config = EngineConfig::load().unwrap();
        assert_eq!(config.detection.rapid_posting_threshold, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn environment_overrides_detection_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("HAVEN_SENTINEL__DETECTION__RAPID_POSTING_THRESHOLD", "8");
        let result = EngineConfig::load();
        env::remove_var("HAVEN_SENTINEL__DETECTION__RAPID_POSTING_THRESHOLD");

        let config = result.unwrap();
        assert_eq!(config.detection.rapid_posting_threshold, 8);
    }

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }
}
