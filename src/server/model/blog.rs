//! Blog domain models and parameters.
//!
//! A blog is created as a draft by a writer and later moves through submission and
//! publication. Tags are persisted as a JSON array in a text column and the status as
//! its upper case code, so mapping stored records back into `Blog` can fail on
//! corrupt data.

use chrono::{DateTime, Utc};
use std::{fmt, str::FromStr};

use crate::{
    model::blog::{AuthorDto, BlogDto, CreateBlogDto},
    server::network::mapping::{parse_field, MapFrom, MappingError},
};

/// Publication state of a blog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlogStatus {
    Draft,
    Submitted,
    Published,
}

impl BlogStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Submitted => "SUBMITTED",
            Self::Published => "PUBLISHED",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlogStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DRAFT" => Ok(Self::Draft),
            "SUBMITTED" => Ok(Self::Submitted),
            "PUBLISHED" => Ok(Self::Published),
            other => Err(format!("unknown blog status '{}'", other)),
        }
    }
}

/// Author summary attached to a blog.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

/// Blog with its author.
#[derive(Debug, Clone, PartialEq)]
pub struct Blog {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub draft_text: String,
    pub slug: String,
    pub img_url: Option<String>,
    pub tags: Vec<String>,
    pub status: BlogStatus,
    pub author: Author,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Blog entity joined with its author, as returned by the repository.
#[derive(Debug, Clone)]
pub struct BlogWithAuthor {
    pub blog: entity::blog::Model,
    pub author: Option<entity::user::Model>,
}

impl MapFrom<BlogWithAuthor> for Blog {
    /// Converts a stored blog and its author into the domain model.
    ///
    /// # Returns
    /// - `Ok(Blog)` - Record converted
    /// - `Err(MappingError)` - Tags are not a JSON string array, the status code is
    ///   unknown, or the author row is missing
    fn map_from(source: &BlogWithAuthor) -> Result<Self, MappingError> {
        let entity = &source.blog;

        let tags: Vec<String> = serde_json::from_str(&entity.tags)
            .map_err(|e| MappingError::new("tags", e.to_string()))?;
        let status = parse_field::<BlogStatus>("status", &entity.status)?;

        let author = source
            .author
            .as_ref()
            .map(|user| Author {
                id: user.id,
                name: user.name.clone(),
            })
            .ok_or_else(|| {
                MappingError::new("author", format!("user {} not found", entity.author_id))
            })?;

        Ok(Self {
            id: entity.id,
            title: entity.title.clone(),
            description: entity.description.clone(),
            draft_text: entity.draft_text.clone(),
            slug: entity.slug.clone(),
            img_url: entity.img_url.clone(),
            tags,
            status,
            author,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

impl MapFrom<Blog> for BlogDto {
    fn map_from(blog: &Blog) -> Result<Self, MappingError> {
        Ok(Self {
            id: blog.id,
            title: blog.title.clone(),
            description: blog.description.clone(),
            draft_text: blog.draft_text.clone(),
            slug: blog.slug.clone(),
            img_url: blog.img_url.clone(),
            tags: blog.tags.clone(),
            status: blog.status.to_string(),
            author: AuthorDto {
                id: blog.author.id,
                name: blog.author.name.clone(),
            },
            created_at: blog.created_at,
            updated_at: blog.updated_at,
        })
    }
}

/// Parameters for creating a draft blog.
#[derive(Debug, Clone)]
pub struct CreateBlogParams {
    pub title: String,
    pub description: String,
    pub draft_text: String,
    pub slug: String,
    pub img_url: Option<String>,
    pub tags: Vec<String>,
    pub author_id: i32,
}

impl CreateBlogParams {
    /// Converts a validated DTO into creation parameters for `author_id`.
    pub fn from_dto(dto: CreateBlogDto, author_id: i32) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            draft_text: dto.draft_text,
            slug: dto.slug,
            img_url: dto.img_url,
            tags: dto.tags,
            author_id,
        }
    }
}
