//! Error types for the to-do API client.
//!
//! # Design
//! The server answers every rejected request with 400 and a message, whether
//! the input was blank or the store refused the operation. That case gets
//! its own `Rejected` variant carrying the message. Any other unexpected
//! status lands in `HttpError` with the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `ToDoClient` build and parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 400: bad input or the operation was refused.
    #[error("request rejected: {message}")]
    Rejected { message: String },

    /// The server returned a status other than the expected one or 400.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}
