//! Controller error type and its HTTP mapping.
//!
//! Blank identifying input and a refused store operation both answer
//! 400 Bad Request with a `Message` body. The variants exist for logs and
//! tests; clients cannot tell them apart by status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use todo_core::Message;

/// Why a controller refused a request.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ControllerError {
    /// An identifying string was empty or whitespace.
    #[error("{field} must not be empty")]
    Validation { field: &'static str },

    /// The store returned `false`, nothing, or an empty collection.
    #[error("{0}")]
    Operation(String),
}

impl ControllerError {
    pub fn operation(message: impl Into<String>) -> Self {
        ControllerError::Operation(message.into())
    }
}

impl IntoResponse for ControllerError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(Message::new(self.to_string()))).into_response()
    }
}

/// Successful controller output is serialized as the JSON body of a 200.
pub type ControllerResult<T> = Result<Json<T>, ControllerError>;

/// Reject blank identifiers before the store is touched.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ControllerError> {
    if value.trim().is_empty() {
        tracing::warn!(field, "rejected blank identifier");
        return Err(ControllerError::Validation { field });
    }
    Ok(())
}

/// Translate a store's boolean verdict into a controller outcome.
pub(crate) fn acknowledge(succeeded: bool, done: &str, refused: &str) -> ControllerResult<Message> {
    if succeeded {
        Ok(Json(Message::new(done)))
    } else {
        tracing::warn!("{refused}");
        Err(ControllerError::operation(refused))
    }
}
