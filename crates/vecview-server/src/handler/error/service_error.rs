//! Conversion from store and embedder errors to HTTP errors.

use super::http_error::{Error as HttpError, ErrorKind};
use crate::TRACING_TARGET_HANDLER;

impl From<vecview_core::Error> for HttpError<'static> {
    fn from(error: vecview_core::Error) -> Self {
        use vecview_core::ErrorKind as CoreErrorKind;

        match error.kind() {
            CoreErrorKind::NotFound | CoreErrorKind::InvalidInput => {
                tracing::debug!(
                    target: TRACING_TARGET_HANDLER,
                    error = %error,
                    "Request rejected by the store"
                );
            }
            CoreErrorKind::NetworkError | CoreErrorKind::Timeout => {
                tracing::warn!(
                    target: TRACING_TARGET_HANDLER,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Upstream service unreachable"
                );
            }
            _ => {
                tracing::error!(
                    target: TRACING_TARGET_HANDLER,
                    error = %error,
                    error_kind = error.kind_str(),
                    "Upstream operation failed"
                );
            }
        }

        let context = error.to_string();

        match error.kind() {
            CoreErrorKind::NotFound => ErrorKind::NotFound
                .with_message("Collection not found")
                .with_context(context),

            CoreErrorKind::InvalidInput => ErrorKind::BadRequest
                .with_message("Invalid input")
                .with_context(context),

            CoreErrorKind::NetworkError => ErrorKind::BadGateway
                .with_message("Upstream service unreachable")
                .with_context(context),

            CoreErrorKind::Timeout => ErrorKind::BadGateway
                .with_message("Request timed out")
                .with_context(context),

            CoreErrorKind::Authentication
            | CoreErrorKind::Configuration
            | CoreErrorKind::Serialization
            | CoreErrorKind::ExternalError
            | CoreErrorKind::InternalError => ErrorKind::InternalServerError
                .with_message("Upstream operation failed")
                .with_context(context),
        }
    }
}
