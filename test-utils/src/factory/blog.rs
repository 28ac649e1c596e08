//! Blog factory for creating test blog entities.
//!
//! Blogs reference their author, so the author must be created first, usually with
//! `factory::user::create_user`.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test blogs with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::blog::BlogFactory;
///
/// let blog = BlogFactory::new(&db, author.id)
///     .slug("my-first-blog")
///     .tags(&["RUST"])
///     .build()
///     .await?;
/// ```
pub struct BlogFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    title: String,
    slug: String,
    tags: Vec<String>,
    status: String,
}

impl<'a> BlogFactory<'a> {
    /// Creates a new BlogFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Blog {id}"` where id is auto-incremented
    /// - slug: `"blog-{id}"`
    /// - tags: `["GENERAL"]`
    /// - status: `"DRAFT"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `author_id` - ID of the user who wrote the blog
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            title: format!("Blog {}", id),
            slug: format!("blog-{}", id),
            tags: vec!["GENERAL".to_string()],
            status: "DRAFT".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|tag| tag.to_string()).collect();
        self
    }

    /// Sets the stored status text. Accepts any text so tests can store invalid values.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the blog entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::blog::Model)` - Created blog entity
    /// - `Err(DbErr)` - Database error during insert or tag encoding
    pub async fn build(self) -> Result<entity::blog::Model, DbErr> {
        let tags = serde_json::to_string(&self.tags).map_err(|e| DbErr::Custom(e.to_string()))?;
        let now = Utc::now();

        entity::blog::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(self.title.clone()),
            description: ActiveValue::Set(format!("Description of {}", self.title)),
            draft_text: ActiveValue::Set(format!("Draft of {}", self.title)),
            slug: ActiveValue::Set(self.slug),
            img_url: ActiveValue::Set(None),
            tags: ActiveValue::Set(tags),
            status: ActiveValue::Set(self.status),
            author_id: ActiveValue::Set(self.author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft blog with default values for the given author.
pub async fn create_blog(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::blog::Model, DbErr> {
    BlogFactory::new(db, author_id).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use crate::factory::user::create_user;

    #[tokio::test]
    async fn creates_blog_for_author() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_blog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let author = create_user(db).await?;
        let blog = BlogFactory::new(db, author.id)
            .slug("custom-slug")
            .tags(&["RUST", "AXUM"])
            .build()
            .await?;

        assert_eq!(blog.author_id, author.id);
        assert_eq!(blog.slug, "custom-slug");
        assert_eq!(blog.tags, r#"["RUST","AXUM"]"#);
        assert_eq!(blog.status, "DRAFT");

        Ok(())
    }
}
