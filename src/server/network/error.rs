use axum::{
    extract::rejection::{BytesRejection, QueryRejection},
    http::header::ToStrError,
};
use thiserror::Error;

use crate::server::network::mapping::MappingError;

/// Errors produced while binding a request into a DTO or mapping a model into one.
#[derive(Error, Debug)]
pub enum RequestError {
    /// Raw input could not be decoded into the target shape.
    ///
    /// Covers invalid syntax, wrong field types and unreadable bodies. Results in a
    /// 400 Bad Request carrying the decode error text.
    #[error("{0}")]
    MalformedInput(#[from] DecodeError),

    /// Input decoded but failed one or more validation rules.
    ///
    /// Carries the custom messages of every failing field joined with `", "`.
    /// Results in a 400 Bad Request.
    #[error("{0}")]
    InvalidInput(String),

    /// Model to DTO conversion failed.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// A DTO has no message for a failing field.
    ///
    /// Raised by the custom-message hook when its table does not cover a
    /// failure. Indicates a gap in the DTO definition and results in a 500
    /// Internal Server Error.
    #[error("No validation message for rule '{rule}' on field '{field}'")]
    MissingMessage {
        /// Field path of the failure
        field: String,
        /// Validation rule code that failed
        rule: String,
    },
}

/// Decode failures for each binding source.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read request body: {0}")]
    Body(#[from] BytesRejection),

    #[error("Invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid query string: {0}")]
    Query(#[from] QueryRejection),

    /// Header value contains bytes that are not visible ASCII.
    #[error("Header '{name}' is not valid text: {source}")]
    HeaderEncoding {
        /// Lowercase header name
        name: String,
        /// The underlying conversion error
        #[source]
        source: ToStrError,
    },

    #[error("Invalid headers: {0}")]
    Headers(#[source] serde_json::Error),
}
