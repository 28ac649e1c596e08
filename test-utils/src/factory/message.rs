//! Message factory for creating test contact message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test contact messages with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::message::MessageFactory;
///
/// let message = MessageFactory::new(&db)
///     .msg_type("feedback")
///     .status(false)
///     .build()
///     .await?;
/// ```
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    msg_type: String,
    msg: String,
    status: bool,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - msg_type: `"general"`
    /// - msg: `"Message {id}"` where id is auto-incremented
    /// - status: `true` (active)
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            msg_type: "general".to_string(),
            msg: format!("Message {}", id),
            status: true,
            created_at: Utc::now(),
        }
    }

    pub fn msg_type(mut self, msg_type: impl Into<String>) -> Self {
        self.msg_type = msg_type.into();
        self
    }

    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    /// Sets whether the message is active. Inactive messages are hidden from reads.
    pub fn status(mut self, status: bool) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::message::Model)` - Created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            id: ActiveValue::NotSet,
            msg_type: ActiveValue::Set(self.msg_type),
            msg: ActiveValue::Set(self.msg),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active message with default values.
pub async fn create_message(db: &DatabaseConnection) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db).build().await
}
