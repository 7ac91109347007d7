//! Configuration validation utilities

/// Configuration validation result type
pub type ConfigResult<T> = Result<T, ConfigurationError>;

/// Configuration error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("Invalid configuration parameter: {0}")]
    InvalidParameter(String),
}

/// Configuration validation trait
pub trait Validator {
    /// Validates the configuration settings
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if a limit is outside
    /// its valid range.
    fn validate(&self) -> ConfigResult<()>;
}

/// Common configuration validation utilities
pub(crate) struct ConfigValidator;

impl ConfigValidator {
    /// Largest accepted value for any count limit
    const MAX_LIMIT: usize = 1 << 20;

    /// Validate a count limit
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidParameter` if the limit is zero or
    /// exceeds `MAX_LIMIT`.
    pub(crate) fn validate_limit(limit: usize, name: &str) -> ConfigResult<()> {
        if limit == 0 {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot be zero"
            )));
        }

        if limit > Self::MAX_LIMIT {
            return Err(ConfigurationError::InvalidParameter(format!(
                "{name} cannot exceed {}",
                Self::MAX_LIMIT
            )));
        }

        Ok(())
    }
}
