use thiserror::Error;

/// Error type for the remote text-generation client
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Rate limit error: {0}")]
    RateLimitError(String),
}

pub type Result<T> = std::result::Result<T, GeminiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_descriptions_are_non_empty() {
        let errors = [
            GeminiError::ParseError("bad json".into()),
            GeminiError::NetworkError("connection refused".into()),
            GeminiError::ApiError("500".into()),
            GeminiError::AuthenticationError("bad key".into()),
            GeminiError::RateLimitError("quota".into()),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
