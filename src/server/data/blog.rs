//! Blog repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::server::model::blog::{BlogStatus, BlogWithAuthor, CreateBlogParams};

pub struct BlogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BlogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft blog and returns it with its author
    ///
    /// # Arguments
    /// - `params` - Blog fields and author ID
    /// - `tags` - Tags already encoded as a JSON array
    pub async fn create(
        &self,
        params: CreateBlogParams,
        tags: String,
    ) -> Result<BlogWithAuthor, DbErr> {
        let now = Utc::now();

        let blog = entity::blog::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            draft_text: ActiveValue::Set(params.draft_text),
            slug: ActiveValue::Set(params.slug),
            img_url: ActiveValue::Set(params.img_url),
            tags: ActiveValue::Set(tags),
            status: ActiveValue::Set(BlogStatus::Draft.as_str().to_string()),
            author_id: ActiveValue::Set(params.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(blog.id).await?.ok_or(DbErr::RecordNotFound(format!(
            "Blog with id {} not found after creation",
            blog.id
        )))
    }

    /// Finds a blog by ID together with its author
    pub async fn find_by_id(&self, id: i32) -> Result<Option<BlogWithAuthor>, DbErr> {
        let result = entity::prelude::Blog::find_by_id(id)
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        Ok(result.map(|(blog, author)| BlogWithAuthor { blog, author }))
    }

    /// Checks whether any blog already uses `slug`
    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Blog::find()
            .filter(entity::blog::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
