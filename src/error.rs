use miette::Diagnostic;
use std::io;
use thiserror::Error;

/// Primary error type for the WordGPT application
#[derive(Error, Debug, Diagnostic)]
pub enum WordGptError {
    #[error("Environment configuration error: {0}")]
    #[diagnostic(code(wordgpt::env_error))]
    Env(String),

    #[error("HTTP client error: {0}")]
    #[diagnostic(code(wordgpt::http_error))]
    Http(#[from] reqwest::Error),
}

/// Errors raised while reading or writing the persisted option mapping
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("No stored configuration")]
    #[diagnostic(code(wordgpt::config::missing))]
    Missing,

    #[error("Stored configuration is malformed: {0}")]
    #[diagnostic(code(wordgpt::config::malformed))]
    Malformed(#[from] serde_json::Error),

    #[error("Failed to access configuration file: {0}")]
    #[diagnostic(code(wordgpt::config::io))]
    Io(#[from] io::Error),

    #[error("Configuration backend failure: {0}")]
    #[diagnostic(code(wordgpt::config::backend))]
    Backend(String),

    #[error("Unknown option '{0}' (expected include_synonyms or include_examples)")]
    #[diagnostic(code(wordgpt::config::unknown_key))]
    UnknownKey(String),
}

/// Generation failures. The display text of each variant is the notice shown
/// to the user.
#[derive(Error, Debug, Diagnostic)]
pub enum GenerationError {
    #[error("Please enter a word in the front field first.")]
    #[diagnostic(code(wordgpt::generation::empty_input))]
    EmptyInput,

    #[error("Service Error (Status {status}): {body}")]
    #[diagnostic(code(wordgpt::generation::service_status))]
    ServiceStatus { status: u16, body: String },

    #[error("Service Error: {0}")]
    #[diagnostic(code(wordgpt::generation::service_error))]
    ServiceError(String),

    #[error("Service is taking too long to respond. Please try again later.")]
    #[diagnostic(code(wordgpt::generation::timeout))]
    Timeout,

    #[error(
        "Could not connect to the service. It might be down or starting up. Please try again in a minute."
    )]
    #[diagnostic(code(wordgpt::generation::connection_failure))]
    ConnectionFailure,

    #[error("Error generating content: {0}")]
    #[diagnostic(code(wordgpt::generation::unknown))]
    Unknown(String),
}

// Re-export error types for convenience
pub use WordGptError as Error;

/// Create a result type that uses our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_notices_are_distinct() {
        let timeout = GenerationError::Timeout.to_string();
        let connection = GenerationError::ConnectionFailure.to_string();

        assert!(!timeout.is_empty());
        assert!(!connection.is_empty());
        assert_ne!(timeout, connection);
    }

    #[test]
    fn test_service_status_notice_carries_status_and_body() {
        let err = GenerationError::ServiceStatus {
            status: 500,
            body: "server error".to_string(),
        };
        assert_eq!(err.to_string(), "Service Error (Status 500): server error");
    }
}
