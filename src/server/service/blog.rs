use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::blog::CreateBlogDto,
    server::{
        data::blog::BlogRepository,
        error::{internal::InternalError, AppError},
        model::{
            blog::{Blog, BlogWithAuthor, CreateBlogParams},
            user::User,
        },
        network::mapping::MapFrom,
    },
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft blog authored by `author`
    ///
    /// # Arguments
    /// - `dto` - Validated blog draft
    /// - `author` - The authenticated writer
    ///
    /// # Returns
    /// - `Ok(Blog)` - The created draft with its author
    /// - `Err(AppError::BadRequest)` - Another blog already uses the slug
    /// - `Err(AppError)` - Database or encoding error
    pub async fn create_blog(&self, dto: CreateBlogDto, author: &User) -> Result<Blog, AppError> {
        let repo = BlogRepository::new(self.db);

        if repo.slug_exists(&dto.slug).await? {
            return Err(duplicate_slug());
        }

        let params = CreateBlogParams::from_dto(dto, author.id);
        let tags = serde_json::to_string(&params.tags)
            .map_err(|source| InternalError::Encode {
                field: "tags",
                source,
            })?;

        // A concurrent create can take the slug after the check above
        let created = repo.create(params, tags).await.map_err(map_create_error)?;
        let blog = to_blog(&created)?;

        tracing::info!(
            "Created draft blog {} ({}) for {}",
            blog.id,
            blog.slug,
            author.name
        );

        Ok(blog)
    }

    /// Finds a blog by ID regardless of its status
    pub async fn find_blog(&self, id: i32) -> Result<Option<Blog>, AppError> {
        let repo = BlogRepository::new(self.db);

        let result = repo.find_by_id(id).await?;

        result.as_ref().map(to_blog).transpose().map_err(Into::into)
    }
}

fn duplicate_slug() -> AppError {
    AppError::BadRequest("Blog with this slug already exists".to_string())
}

/// Maps a failed blog insert, reporting a unique violation as a duplicate slug.
pub(super) fn map_create_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_slug(),
        _ => err.into(),
    }
}

fn to_blog(source: &BlogWithAuthor) -> Result<Blog, InternalError> {
    Blog::map_from(source).map_err(|e| InternalError::CorruptRecord {
        entity: "blog",
        id: source.blog.id,
        source: e,
    })
}
