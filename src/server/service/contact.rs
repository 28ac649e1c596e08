use sea_orm::DatabaseConnection;

use crate::{
    model::{contact::CreateMessageDto, pagination::PaginationDto},
    server::{
        data::message::MessageRepository,
        error::{internal::InternalError, AppError},
        model::message::{CreateMessageParams, Message},
        network::mapping::MapFrom,
    },
};

pub struct ContactService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ContactService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a message submitted through the contact form
    pub async fn save_message(&self, dto: CreateMessageDto) -> Result<Message, AppError> {
        let repo = MessageRepository::new(self.db);

        let entity = repo.create(CreateMessageParams::from_dto(dto)).await?;

        Ok(to_message(&entity)?)
    }

    /// Finds an active message by ID
    pub async fn find_message(&self, id: i32) -> Result<Option<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        let entity = repo.find_by_id(id).await?;

        entity.as_ref().map(to_message).transpose().map_err(Into::into)
    }

    /// Gets the requested page of active messages, newest first
    pub async fn find_paginated_messages(
        &self,
        pagination: &PaginationDto,
    ) -> Result<Vec<Message>, AppError> {
        let repo = MessageRepository::new(self.db);

        let entities = repo
            .get_paginated(pagination.page, pagination.limit)
            .await?;

        entities
            .iter()
            .map(to_message)
            .collect::<Result<Vec<_>, _>>()
            .map_err(Into::into)
    }
}

fn to_message(entity: &entity::message::Model) -> Result<Message, InternalError> {
    Message::map_from(entity).map_err(|source| InternalError::CorruptRecord {
        entity: "message",
        id: entity.id,
        source,
    })
}
