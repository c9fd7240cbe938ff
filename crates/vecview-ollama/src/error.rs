//! Error types for vecview-ollama.

use ollama_rs::error::OllamaError;
use thiserror::Error;

use crate::client::OllamaConfigBuilderError;

/// Error type for the vecview-ollama library.
#[derive(Error, Debug)]
pub enum Error {
    /// Ollama API errors from ollama-rs.
    #[error("Ollama error: {0}")]
    Ollama(#[from] OllamaError),

    /// Configuration errors.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

impl From<OllamaConfigBuilderError> for Error {
    fn from(err: OllamaConfigBuilderError) -> Self {
        Self::invalid_config(err.to_string())
    }
}

impl From<Error> for vecview_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Ollama(OllamaError::ReqwestError(e)) if e.is_timeout() => {
                vecview_core::Error::timeout()
                    .with_message(format!("Ollama request timed out: {e}"))
                    .with_source(e)
            }
            Error::Ollama(OllamaError::ReqwestError(e)) if e.is_connect() => {
                vecview_core::Error::network_error()
                    .with_message("Could not connect to Ollama")
                    .with_source(e)
            }
            Error::Ollama(e) => vecview_core::Error::external_error()
                .with_message(format!("Ollama embedding error: {e}"))
                .with_source(e),
            Error::Config(message) => vecview_core::Error::configuration().with_message(message),
        }
    }
}

/// Result type alias for vecview-ollama operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use vecview_core::ErrorKind;

    use super::*;

    #[test]
    fn maps_service_errors_to_external() {
        let error = vecview_core::Error::from(Error::Ollama(OllamaError::Other("boom".into())));
        assert_eq!(error.kind(), ErrorKind::ExternalError);
    }

    #[test]
    fn maps_config_errors() {
        let error = vecview_core::Error::from(Error::invalid_config("bad host"));
        assert_eq!(error.kind(), ErrorKind::Configuration);
    }
}
