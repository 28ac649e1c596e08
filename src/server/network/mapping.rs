//! Statically checked conversion between models and DTOs.
//!
//! Each source/destination pair implements `MapFrom` by assigning fields explicitly.
//! Conversions that can fail (parsing stored text, decoding JSON columns) report the
//! offending field through `MappingError`.

use std::{fmt::Display, str::FromStr};
use thiserror::Error;

use crate::server::network::error::RequestError;

/// A field could not be converted into the destination type.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("Failed to map field '{field}': {reason}")]
pub struct MappingError {
    /// Name of the destination field
    pub field: &'static str,
    /// Why the value was rejected
    pub reason: String,
}

impl MappingError {
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Conversion from a borrowed `S` into `Self`, one field at a time.
pub trait MapFrom<S: ?Sized>: Sized {
    fn map_from(source: &S) -> Result<Self, MappingError>;
}

/// Maps a single model into a newly constructed DTO.
///
/// # Arguments
/// - `model` - Source model to read fields from
///
/// # Returns
/// - `Ok(T)` - The populated DTO
/// - `Err(RequestError::Mapping)` - A field could not be converted
pub fn map_to_dto<T, V>(model: &V) -> Result<T, RequestError>
where
    T: MapFrom<V>,
{
    Ok(T::map_from(model)?)
}

/// Maps every model of a slice, failing on the first field that can't be converted.
pub fn map_all_to_dto<T, V>(models: &[V]) -> Result<Vec<T>, RequestError>
where
    T: MapFrom<V>,
{
    models
        .iter()
        .map(T::map_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}

/// Parses `value` into `T`, naming `field` in the error.
pub fn parse_field<T>(field: &'static str, value: &str) -> Result<T, MappingError>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .parse::<T>()
        .map_err(|e| MappingError::new(field, format!("'{}': {}", value, e)))
}
