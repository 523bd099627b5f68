//! Client error taxonomy.
//!
//! Status codes map onto a flat set of variants; anything the table does
//! not name ends up in [`ClientError::UnexpectedStatus`].

use aas_client_core::model::{ApiResult, Message};
use aas_client_core::EncodingError;
use std::fmt;

/// A response whose status code was not the one the operation expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusError {
    /// HTTP method of the request
    pub method: String,
    /// Request URI including query
    pub uri: String,
    /// Response status code
    pub status: u16,
    /// Raw response body
    pub body: String,
    /// Messages of the API `Result` body, if it could be parsed
    pub messages: Vec<Message>,
}

impl StatusError {
    /// Build from a response, parsing the body as an API `Result` when possible.
    #[must_use]
    pub fn new(
        method: impl Into<String>,
        uri: impl Into<String>,
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        let body = body.into();
        let messages = serde_json::from_str::<ApiResult>(&body)
            .map(|result| result.messages)
            .unwrap_or_default();
        Self {
            method: method.into(),
            uri: uri.into(),
            status,
            body,
            messages,
        }
    }
}

impl fmt::Display for StatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} returned {}", self.method, self.uri, self.status)?;
        if let Some(message) = self.messages.first() {
            write!(f, ": {}", message.text)?;
        }
        Ok(())
    }
}

/// Errors that can occur with the AAS client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ClientError {
    /// Client initialization failed
    #[error("client init error: {0}")]
    Init(String),
    /// The request could not be built (bad URL, unencodable query value)
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The server could not be reached or the exchange was interrupted
    #[error("connectivity error for {uri}: {message}")]
    Connectivity {
        /// Request URI
        uri: String,
        /// Transport error message
        message: String,
    },
    /// 400
    #[error("bad request: {0}")]
    BadRequest(StatusError),
    /// 401
    #[error("unauthorized: {0}")]
    Unauthorized(StatusError),
    /// 403
    #[error("forbidden: {0}")]
    Forbidden(StatusError),
    /// 404
    #[error("not found: {0}")]
    NotFound(StatusError),
    /// 405
    #[error("method not allowed: {0}")]
    MethodNotAllowed(StatusError),
    /// 409
    #[error("conflict: {0}")]
    Conflict(StatusError),
    /// 500
    #[error("internal server error: {0}")]
    InternalServerError(StatusError),
    /// Any other status the operation did not expect
    #[error("unexpected status: {0}")]
    UnexpectedStatus(StatusError),
    /// Request body serialization failed
    #[error("serialization error: {0}")]
    Serialization(String),
    /// Response body parsing failed
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Dispatch a status error to its variant.
    #[must_use]
    pub fn from_status(error: StatusError) -> Self {
        match error.status {
            400 => Self::BadRequest(error),
            401 => Self::Unauthorized(error),
            403 => Self::Forbidden(error),
            404 => Self::NotFound(error),
            405 => Self::MethodNotAllowed(error),
            409 => Self::Conflict(error),
            500 => Self::InternalServerError(error),
            _ => Self::UnexpectedStatus(error),
        }
    }

    /// Status details, for errors caused by a response status.
    #[must_use]
    pub fn status_error(&self) -> Option<&StatusError> {
        match self {
            Self::BadRequest(e)
            | Self::Unauthorized(e)
            | Self::Forbidden(e)
            | Self::NotFound(e)
            | Self::MethodNotAllowed(e)
            | Self::Conflict(e)
            | Self::InternalServerError(e)
            | Self::UnexpectedStatus(e) => Some(e),
            _ => None,
        }
    }

    /// HTTP status code, for errors caused by a response status.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        self.status_error().map(|e| e.status)
    }

    /// Messages the server sent with the error, if any.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        match self.status_error() {
            Some(e) => &e.messages,
            None => &[],
        }
    }

    /// Whether the addressed resource does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl From<EncodingError> for ClientError {
    fn from(error: EncodingError) -> Self {
        Self::InvalidRequest(error.to_string())
    }
}
