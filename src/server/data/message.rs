//! Contact message repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::CreateMessageParams;

pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a new active message stamped with the current time
    pub async fn create(
        &self,
        params: CreateMessageParams,
    ) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            msg_type: ActiveValue::Set(params.msg_type),
            msg: ActiveValue::Set(params.msg),
            status: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Finds an active message by ID
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(id)
            .filter(entity::message::Column::Status.eq(true))
            .one(self.db)
            .await
    }

    /// Gets one page of active messages, newest first
    ///
    /// # Arguments
    /// - `page` - Page number starting at 1; 0 is treated as 1
    /// - `per_page` - Number of messages per page
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::Status.eq(true))
            .order_by_desc(entity::message::Column::CreatedAt)
            .order_by_desc(entity::message::Column::Id)
            .paginate(self.db, per_page)
            .fetch_page(page.saturating_sub(1))
            .await
    }
}
