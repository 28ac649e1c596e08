//! Request binding, validation and response mapping.
//!
//! This module is the boundary between raw HTTP input and the typed DTOs the
//! controllers work with. It provides:
//!
//! - **Binding** (`request`) - `bind_body`, `bind_query` and `bind_headers` decode raw
//!   transport data into a DTO and validate it, plus the `ReqBody`, `ReqQuery` and
//!   `ReqHeaders` Axum extractors built on top of them
//! - **Validation** (`validation`) - the `Dto` trait, ordered collection of field
//!   failures and the joining of custom messages into one display string
//! - **Mapping** (`mapping`) - statically checked model to DTO conversion through `MapFrom`
//! - **Responses** (`response`) - the success envelope returned by controllers
//! - **Errors** (`error`) - `RequestError` and `DecodeError`
//!
//! Binding is stateless: each call decodes, validates and returns. Errors are handed
//! back to the caller and never logged here; `AppError` decides the status code.

pub mod error;
pub mod mapping;
pub mod request;
pub mod response;
pub mod validation;

#[cfg(test)]
mod test;
