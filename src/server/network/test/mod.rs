use axum::{
    body::Body,
    extract::{FromRequest, FromRequestParts, Request},
    http::{HeaderMap, HeaderValue, StatusCode, Uri},
    response::IntoResponse,
};
use serde::Deserialize;
use validator::Validate;

use crate::{
    model::{
        auth::ApiKeyHeaders, blog::CreateBlogDto, contact::CreateMessageDto,
        pagination::PaginationDto,
    },
    server::{
        error::AppError,
        network::{
            error::{DecodeError, RequestError},
            mapping::{map_all_to_dto, map_to_dto, parse_field, MapFrom, MappingError},
            request::{bind_body, bind_headers, bind_query, ReqBody, ReqHeaders, ReqQuery},
            validation::{
                join_messages, process_errors, required_text, translate, Dto, FieldFailure,
            },
        },
    },
};

mod bind_body;

/// Profile with two independently failing fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
struct ProfileDto {
    #[validate(custom(function = "required_text"), length(min = 2, max = 20))]
    name: String,

    #[validate(range(min = 1, max = 150))]
    age: u32,
}

impl Dto for ProfileDto {
    const FIELDS: &'static [&'static str] = &["name", "age"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |f| match (f.field.as_str(), f.rule.as_str()) {
            ("name", "required") => Some("name is required".to_string()),
            ("name", _) => Some("name must be between 2 and 20 characters".to_string()),
            ("age", _) => Some("age must be between 1 and 150".to_string()),
            _ => None,
        })
    }
}

/// Message hook that only words the second field, leaving a blank for the first.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct PartlyWordedDto {
    #[validate(custom(function = "required_text"))]
    first: String,

    #[validate(custom(function = "required_text"))]
    second: String,
}

impl Dto for PartlyWordedDto {
    const FIELDS: &'static [&'static str] = &["first", "second"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        Ok(failures
            .iter()
            .map(|f| match f.field.as_str() {
                "second" => "second is required".to_string(),
                _ => String::new(),
            })
            .collect())
    }
}

/// Message hook that never words anything.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct UnwordedDto {
    #[validate(custom(function = "required_text"))]
    code: String,
}

impl Dto for UnwordedDto {
    const FIELDS: &'static [&'static str] = &["code"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        Ok(vec!["  ".to_string(); failures.len()])
    }
}

/// Message table with no entry for its only field.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
struct UntranslatedDto {
    #[validate(length(min = 1))]
    label: String,
}

impl Dto for UntranslatedDto {
    const FIELDS: &'static [&'static str] = &["label"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |_| None)
    }
}

fn invalid_message<T>(result: Result<T, RequestError>) -> String {
    match result {
        Err(RequestError::InvalidInput(message)) => message,
        Err(other) => panic!("expected InvalidInput, got {:?}", other),
        Ok(_) => panic!("expected InvalidInput, got Ok"),
    }
}
