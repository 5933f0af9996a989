use thiserror::Error;

/// Application error types
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Form has no field with this name
    #[error("Unknown field: {0}")]
    UnknownField(String),
    /// Output format is neither text nor json
    #[error("Invalid output format: {0}")]
    InvalidFormat(String),
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for QuoteError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = QuoteError::UnknownField("colour".to_string());
        assert_eq!(error.to_string(), "Unknown field: colour");

        let error = QuoteError::InvalidFormat("yaml".to_string());
        assert_eq!(error.to_string(), "Invalid output format: yaml");
    }

    #[test]
    fn test_from_config_error() {
        let error: QuoteError = config::ConfigError::Message("bad value".to_string()).into();
        assert!(matches!(error, QuoteError::Config(_)));
        assert!(error.to_string().contains("bad value"));
    }
}
