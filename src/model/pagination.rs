use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

use crate::server::network::{
    error::RequestError,
    validation::{translate, Dto, FieldFailure},
};

/// Page selection bound from the query string.
///
/// Both parameters are required; an absent parameter decodes as `0` and fails its
/// range rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct PaginationDto {
    /// Page number, starting at 1
    #[serde(rename = "pageNumber")]
    #[validate(range(min = 1, max = 1000))]
    pub page: u64,

    /// Number of items per page
    #[serde(rename = "pageItemCount")]
    #[validate(range(min = 1, max = 1000))]
    pub limit: u64,
}

impl Dto for PaginationDto {
    const FIELDS: &'static [&'static str] = &[
        "page",
        "pageNumber",
        "limit",
        "pageItemCount",
    ];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |f| match f.field.as_str() {
            "page" | "pageNumber" => Some("pageNumber must be between 1 and 1000".to_string()),
            "limit" | "pageItemCount" => {
                Some("pageItemCount must be between 1 and 1000".to_string())
            }
            _ => None,
        })
    }
}
