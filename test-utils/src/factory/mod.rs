//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories take the IDs of the rows they reference, so a
//! blog is created for an existing author.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let blog = factory::blog::create_blog(&db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let user = factory::user::UserFactory::new(&db)
//!     .name("Writer")
//!     .roles(&["WRITER", "EDITOR"])
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `message` - Create contact message entities
//! - `blog` - Create blog entities
//! - `helpers` - Unique ID generation shared by all factories

pub mod blog;
pub mod helpers;
pub mod message;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use blog::create_blog;
pub use message::create_message;
pub use user::create_user;
