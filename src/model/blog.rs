use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::server::network::{
    error::RequestError,
    request::{trimmed, trimmed_list},
    validation::{required_text, slug_format, tag_list, translate, Dto, FieldFailure},
};

/// Blog draft submitted by a writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateBlogDto {
    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "required_text"), length(min = 3, max = 500))]
    pub title: String,

    #[serde(deserialize_with = "trimmed")]
    #[validate(custom(function = "required_text"), length(min = 3, max = 2000))]
    pub description: String,

    #[validate(custom(function = "required_text"), length(max = 50000))]
    pub draft_text: String,

    /// URL path segment, lowercase words joined by hyphens
    #[validate(length(min = 3, max = 200), custom(function = "slug_format"))]
    pub slug: String,

    #[validate(url, length(max = 200))]
    pub img_url: Option<String>,

    /// At least one tag, each in uppercase
    #[serde(deserialize_with = "trimmed_list")]
    #[validate(custom(function = "tag_list"))]
    pub tags: Vec<String>,
}

impl Dto for CreateBlogDto {
    const FIELDS: &'static [&'static str] = &[
        "title",
        "description",
        "draft_text",
        "draftText",
        "slug",
        "img_url",
        "imgUrl",
        "tags",
    ];

    fn validate_errors(&self, failures: &[FieldFailure]) -> Result<Vec<String>, RequestError> {
        translate(failures, |f| {
            let label = match f.field.as_str() {
                "title" => "title",
                "description" => "description",
                "draft_text" | "draftText" => "draftText",
                "slug" => "slug",
                "img_url" | "imgUrl" => "imgUrl",
                "tags" => "tags",
                _ => return None,
            };

            let message = match (label, f.rule.as_str()) {
                ("slug", "slug") => {
                    "slug must contain only lowercase letters, digits and single hyphens"
                        .to_string()
                }
                ("tags", "required") => "tags must contain at least one tag".to_string(),
                ("tags", "uppercase") => "every tag must be uppercase".to_string(),
                _ => f.default_message(label),
            };

            Some(message)
        })
    }
}

/// Blog as returned to writers and editors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub draft_text: String,
    pub slug: String,
    pub img_url: Option<String>,
    pub tags: Vec<String>,
    /// `DRAFT`, `SUBMITTED` or `PUBLISHED`
    pub status: String,
    pub author: AuthorDto,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AuthorDto {
    pub id: i32,
    pub name: String,
}
