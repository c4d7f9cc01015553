//! Error types for the public interface of the library.
//!
//! Internally the crate uses `anyhow` (see `Res`). At the boundary of each operation the error is
//! tagged with an `ErrorType` so that callers can tell a bad configuration apart from a rejected
//! HTTP request or an unexpected response body.

use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// The internal result type.
pub(crate) type Res<T> = anyhow::Result<T>;

/// The public result type.
pub type Result<T> = std::result::Result<T, Error>;

/// The broad category of an `Error`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A credential or the budget ID is missing, or the API URL is unusable.
    Config,
    /// The request could not be sent or the response could not be read.
    Request,
    /// The service answered with a status other than 200 OK.
    Http,
    /// The service answered 200 OK but the body was not the expected shape.
    MalformedResponse,
    /// Reading the prompt or writing the report failed.
    Output,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

/// The error returned by public functions of this library.
pub struct Error {
    error_type: ErrorType,
    inner: anyhow::Error,
}

impl Error {
    pub(crate) fn new(error_type: ErrorType, inner: impl Into<anyhow::Error>) -> Self {
        Self {
            error_type,
            inner: inner.into(),
        }
    }

    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// When the service rejected the request, this returns the status and body it sent back.
    pub fn http_status(&self) -> Option<&HttpStatus> {
        self.inner.downcast_ref::<HttpStatus>()
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {:?}", self.error_type, self.inner)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // The alternate form prints the whole context chain on one line.
        write!(f, "{:#}", self.inner)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.inner.source()
    }
}

/// A non-200 response from the budgeting service.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HttpStatus {
    status: u16,
    body: String,
}

impl HttpStatus {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

impl Display for HttpStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "HTTP status {}: {}", self.status, self.body)
    }
}

impl std::error::Error for HttpStatus {}

/// Converts an internal `anyhow` result into a public `Result` by tagging it with an `ErrorType`.
pub(crate) trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<anyhow::Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| Error::new(error_type, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use std::str::FromStr;

    #[test]
    fn test_error_type_display() {
        assert_eq!(
            ErrorType::MalformedResponse.to_string(),
            "malformed_response"
        );
        assert_eq!(ErrorType::from_str("http").unwrap(), ErrorType::Http);
    }

    #[test]
    fn test_pub_result_keeps_context_chain() {
        let res: Res<()> = Err(anyhow::anyhow!("inner")).context("outer");
        let err = res.pub_result(ErrorType::Request).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Request);
        assert_eq!(err.to_string(), "outer: inner");
        assert!(err.http_status().is_none());
    }

    #[test]
    fn test_http_status_is_recoverable() {
        let res: Res<()> = Err(HttpStatus::new(404, "not found").into());
        let err = res.pub_result(ErrorType::Http).unwrap_err();
        let status = err.http_status().unwrap();
        assert_eq!(status.status(), 404);
        assert_eq!(status.body(), "not found");
    }
}
