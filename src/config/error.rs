//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Errors raised by semantic validation of configuration values.
#[derive(Debug, Clone, Error)]
#[error("invalid configuration value '{field}': {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_displays_field_and_reason() {
        let err = ValidationError::new("detection.trend_cap", "must be greater than zero");
        assert_eq!(
            err.to_string(),
            "invalid configuration value 'detection.trend_cap': must be greater than zero"
        );
    }
}
