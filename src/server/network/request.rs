//! Binding of request bodies, query strings and headers into validated DTOs.
//!
//! All three sources follow the same two phases: decode the raw input into the DTO,
//! then run the DTO's validation rules. Decode failures become
//! `RequestError::MalformedInput`; rule failures become `RequestError::InvalidInput`
//! with the DTO's custom messages joined into one string.
//!
//! The `ReqBody`, `ReqQuery` and `ReqHeaders` extractors wrap the binding functions so
//! handlers receive an already validated DTO and rejections flow through `AppError`.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, HeaderMap, Uri},
};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::server::{
    error::AppError,
    network::{
        error::{DecodeError, RequestError},
        validation::{process_errors, Dto},
    },
};

/// Binds a JSON request body into `T` and validates it.
///
/// # Arguments
/// - `body` - Raw request body bytes
///
/// # Returns
/// - `Ok(T)` - Decoded DTO that passed every validation rule
/// - `Err(RequestError::MalformedInput)` - Body is not valid JSON for `T`
/// - `Err(RequestError::InvalidInput)` - One or more rules failed
/// - `Err(_)` - Any error raised by the DTO's message hook
pub fn bind_body<T: Dto>(body: &[u8]) -> Result<T, RequestError> {
    let dto: T = serde_json::from_slice(body).map_err(DecodeError::from)?;

    validate(dto)
}

/// Binds the query string of `uri` into `T` and validates it.
///
/// A URI without a query string decodes as an empty set of parameters.
pub fn bind_query<T: Dto>(uri: &Uri) -> Result<T, RequestError> {
    let Query(dto) = Query::<T>::try_from_uri(uri).map_err(DecodeError::from)?;

    validate(dto)
}

/// Binds request headers into `T` and validates it.
///
/// Header names are lowercase, so DTO fields rename to the lowercase header name
/// (`x-api-key`). Only headers named in `T::FIELDS` are read; anything else the client
/// sends is ignored, whatever its encoding. Every value decodes as a string; when a
/// header repeats, the first value wins.
pub fn bind_headers<T: Dto>(headers: &HeaderMap) -> Result<T, RequestError> {
    let mut fields = Map::new();

    for name in T::FIELDS {
        let Some(value) = headers.get(*name) else {
            continue;
        };

        let text = value.to_str().map_err(|e| DecodeError::HeaderEncoding {
            name: name.to_string(),
            source: e,
        })?;

        fields.insert(name.to_string(), Value::String(text.to_string()));
    }

    let dto: T = serde_json::from_value(Value::Object(fields)).map_err(DecodeError::Headers)?;

    validate(dto)
}

/// Deserializes a string with surrounding whitespace removed.
///
/// Use with `#[serde(deserialize_with = "trimmed")]` so validation rules judge the
/// text that is later stored.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    Ok(value.trim().to_string())
}

/// Deserializes a list of strings, trimming every entry.
pub fn trimmed_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<String>::deserialize(deserializer)?;

    Ok(values.iter().map(|v| v.trim().to_string()).collect())
}

fn validate<T: Dto>(dto: T) -> Result<T, RequestError> {
    match dto.validate() {
        Ok(()) => Ok(dto),
        Err(errors) => Err(process_errors(&dto, &errors)),
    }
}

/// Extractor binding the JSON request body into a validated `T`.
#[derive(Debug, Clone)]
pub struct ReqBody<T>(pub T);

impl<T, S> FromRequest<S> for ReqBody<T>
where
    T: Dto + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| RequestError::from(DecodeError::from(e)))?;

        Ok(Self(bind_body(&body)?))
    }
}

/// Extractor binding the query string into a validated `T`.
#[derive(Debug, Clone)]
pub struct ReqQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ReqQuery<T>
where
    T: Dto + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bind_query(&parts.uri)?))
    }
}

/// Extractor binding request headers into a validated `T`.
#[derive(Debug, Clone)]
pub struct ReqHeaders<T>(pub T);

impl<T, S> FromRequestParts<S> for ReqHeaders<T>
where
    T: Dto + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(bind_headers(&parts.headers)?))
    }
}
