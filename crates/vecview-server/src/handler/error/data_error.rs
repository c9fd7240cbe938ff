//! Conversion from export errors to HTTP errors.

use vecview_data::DataError;

use super::http_error::{Error as HttpError, ErrorKind};
use crate::TRACING_TARGET_HANDLER;

impl From<DataError> for HttpError<'static> {
    fn from(error: DataError) -> Self {
        tracing::error!(
            target: TRACING_TARGET_HANDLER,
            error = %error,
            "Export failed"
        );

        ErrorKind::InternalServerError
            .with_message("Export failed")
            .with_context(error.to_string())
    }
}
