use serde::Deserialize;
use validator::Validate;

use crate::server::network::{
    error::RequestError,
    validation::{required_text, translate, Dto, FieldFailure},
};

/// Headers identifying the calling client application.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate)]
#[serde(default)]
pub struct ApiKeyHeaders {
    #[serde(rename = "x-api-key")]
    #[validate(custom(function = "required_text"), length(max = 256))]
    pub api_key: String,
}

impl Dto for ApiKeyHeaders {
    const FIELDS: &'static [&'static str] = &["api_key", "x-api-key"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |f| match f.field.as_str() {
            "api_key" | "x-api-key" => Some(f.default_message("x-api-key header")),
            _ => None,
        })
    }
}
