//! [`Error`], [`ErrorKind`] and [`Result`].

mod data_error;
mod http_error;
mod service_error;

pub use http_error::{Error, ErrorKind, Result};
