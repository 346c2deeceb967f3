//! Error types and handling for the `SmartMap` application

use thiserror::Error;

/// Main error type for the `SmartMap` application
#[derive(Error, Debug)]
pub enum SmartMapError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Destination catalog errors
    #[error("Catalog error: {message}")]
    Catalog { message: String },

    /// API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl SmartMapError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new catalog error
    pub fn catalog<S: Into<String>>(message: S) -> Self {
        Self::Catalog {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            SmartMapError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            SmartMapError::Catalog { message } => {
                format!("Destination catalog unavailable: {message}")
            }
            SmartMapError::Api { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            SmartMapError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            SmartMapError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            SmartMapError::General { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = SmartMapError::config("missing API key");
        assert!(matches!(config_err, SmartMapError::Config { .. }));

        let catalog_err = SmartMapError::catalog("catalog not found");
        assert!(matches!(catalog_err, SmartMapError::Catalog { .. }));

        let validation_err = SmartMapError::validation("invalid day count");
        assert!(matches!(validation_err, SmartMapError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = SmartMapError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let catalog_err = SmartMapError::catalog("catalog not found: data/missing.csv");
        assert!(catalog_err.user_message().contains("catalog not found"));

        let validation_err = SmartMapError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: SmartMapError = io_err.into();
        assert!(matches!(app_err, SmartMapError::Io { .. }));
    }
}
