use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::TRACING_TARGET_EXTRACT;
use crate::handler::{Error, ErrorKind};

/// Query string extractor that rejects with a JSON [`Error`].
///
/// Behaves like axum's `Query`, but a malformed query string (for example a
/// non-numeric `top_k`) answers `400` with an [`ErrorResponse`] body naming
/// the offending parameter.
///
/// [`ErrorResponse`]: crate::handler::response::ErrorResponse
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(enhance_query_error(rejection)),
        }
    }
}

fn enhance_query_error(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: TRACING_TARGET_EXTRACT,
        error = %rejection,
        "Query parameter parsing failed"
    );

    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            let error_message = err.to_string();

            if error_message.contains("invalid") {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameter type")
                    .with_context(format!("Failed to parse query parameter: {error_message}"))
            } else if error_message.contains("duplicate field") {
                let field_name = extract_field_name_from_error(&error_message);
                ErrorKind::BadRequest
                    .with_message("Duplicate query parameter")
                    .with_context(format!(
                        "The query parameter '{}' was provided multiple times",
                        field_name.unwrap_or("unknown")
                    ))
            } else {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameters")
                    .with_context(format!("Failed to parse query string: {error_message}"))
            }
        }
        _ => ErrorKind::BadRequest
            .with_message("Invalid query parameters")
            .with_context("The query string could not be parsed"),
    }
}

/// Pulls the field name out of serde messages like ``duplicate field `top_k` ``.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    let start = error_message.find('`')?;
    let end = error_message[start + 1..].find('`')?;
    Some(&error_message[start + 1..start + 1 + end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_from_backticks() {
        assert_eq!(
            extract_field_name_from_error("duplicate field `top_k`"),
            Some("top_k")
        );
        assert_eq!(extract_field_name_from_error("some other error"), None);
    }

    #[test]
    fn into_inner_unwraps() {
        let query = Query::new("docs".to_string());
        assert_eq!(query.into_inner(), "docs");
    }
}
