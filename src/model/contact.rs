use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::network::{
    error::RequestError,
    request::trimmed,
    validation::{required_text, translate, Dto, FieldFailure},
};

/// Message submitted through the contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default)]
pub struct CreateMessageDto {
    /// Category of the message, e.g. `feedback` or `bug`
    #[serde(rename = "type", deserialize_with = "trimmed")]
    #[validate(custom(function = "required_text"), length(min = 2, max = 50))]
    pub msg_type: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "required_text"), length(max = 2000))]
    pub msg: String,
}

impl Dto for CreateMessageDto {
    const FIELDS: &'static [&'static str] = &["msg_type", "type", "msg"];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |f| match (f.field.as_str(), f.rule.as_str()) {
            ("msg_type" | "type", "required") => Some("type is required".to_string()),
            ("msg_type" | "type", "length") => {
                Some("type must be between 2 and 50 characters".to_string())
            }
            ("msg", "required") => Some("msg is required".to_string()),
            ("msg", "length") => Some("msg must be at most 2000 characters".to_string()),
            ("msg_type" | "type", _) => Some(f.default_message("type")),
            ("msg", _) => Some(f.default_message("msg")),
            _ => None,
        })
    }
}

/// Contact message as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InfoMessageDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub msg_type: String,
    pub msg: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
