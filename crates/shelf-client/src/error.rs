//! Error types for the Shelf client

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures a filesystem operation can surface.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server reported failure, or the transport did (network
    /// error, timeout, unusable HTTP response). `Display` is exactly
    /// the most specific message that was available.
    #[error("{message}")]
    RequestFailed { message: String },

    /// The server asserted success but omitted the payload of a
    /// data-returning operation.
    #[error("malformed response from {endpoint}: success without data")]
    MalformedResponse { endpoint: &'static str },
}

impl ClientError {
    pub(crate) fn failed(message: impl Into<String>) -> Self {
        ClientError::RequestFailed {
            message: message.into(),
        }
    }
}
