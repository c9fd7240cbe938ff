//! Transport error types for vecview-chroma.

use thiserror::Error;

/// Result type alias for vecview-chroma operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Transport-level error raised while talking to Chroma.
///
/// Converted into [`vecview_core::Error`] at the provider boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),
    /// Response body could not be decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    /// Endpoint URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// The service answered with a non-success status.
    #[error("Chroma returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl Error {
    /// Creates an API error from a status code and response body.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}

impl From<Error> for vecview_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Reqwest(e) => {
                if e.is_timeout() {
                    vecview_core::Error::timeout()
                        .with_message(e.to_string())
                        .with_source(e)
                } else if e.is_connect() {
                    vecview_core::Error::network_error()
                        .with_message("Could not connect to Chroma")
                        .with_source(e)
                } else if e.is_decode() {
                    vecview_core::Error::serialization()
                        .with_message(e.to_string())
                        .with_source(e)
                } else {
                    vecview_core::Error::network_error()
                        .with_message(e.to_string())
                        .with_source(e)
                }
            }
            Error::Serde(e) => vecview_core::Error::serialization()
                .with_message(e.to_string())
                .with_source(e),
            Error::Url(e) => vecview_core::Error::configuration()
                .with_message(e.to_string())
                .with_source(e),
            Error::Api { status, message } => {
                let error = match status {
                    401 | 403 => vecview_core::Error::authentication(),
                    404 => vecview_core::Error::not_found(),
                    _ if message.contains("does not exist") => vecview_core::Error::not_found(),
                    _ => vecview_core::Error::external_error(),
                };
                error.with_message(format!("Chroma returned {status}: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vecview_core::ErrorKind;

    use super::*;

    #[test]
    fn maps_api_statuses() {
        let kind = |status, message| vecview_core::Error::from(Error::api(status, message)).kind();

        assert_eq!(kind(404, "Collection [x] does not exists"), ErrorKind::NotFound);
        assert_eq!(kind(500, "Collection x does not exist."), ErrorKind::NotFound);
        assert_eq!(kind(401, "unauthorized"), ErrorKind::Authentication);
        assert_eq!(kind(500, "boom"), ErrorKind::ExternalError);
    }

    #[test]
    fn maps_decode_failures() {
        let Err(e) = serde_json::from_str::<u32>("nope") else {
            unreachable!()
        };
        let error = vecview_core::Error::from(Error::Serde(e));
        assert_eq!(error.kind(), ErrorKind::Serialization);
    }
}
