//! Contact message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::contact::{CreateMessageDto, InfoMessageDto},
    server::network::mapping::{MapFrom, MappingError},
};

/// Active message left through the contact form.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub msg_type: String,
    pub msg: String,
    pub created_at: DateTime<Utc>,
}

impl MapFrom<entity::message::Model> for Message {
    fn map_from(entity: &entity::message::Model) -> Result<Self, MappingError> {
        Ok(Self {
            id: entity.id,
            msg_type: entity.msg_type.clone(),
            msg: entity.msg.clone(),
            created_at: entity.created_at,
        })
    }
}

impl MapFrom<Message> for InfoMessageDto {
    fn map_from(message: &Message) -> Result<Self, MappingError> {
        Ok(Self {
            id: message.id,
            msg_type: message.msg_type.clone(),
            msg: message.msg.clone(),
            created_at: message.created_at,
        })
    }
}

/// Parameters for storing a new contact message.
#[derive(Debug, Clone)]
pub struct CreateMessageParams {
    pub msg_type: String,
    pub msg: String,
}

impl CreateMessageParams {
    /// Converts a validated DTO into message parameters.
    pub fn from_dto(dto: CreateMessageDto) -> Self {
        Self {
            msg_type: dto.msg_type,
            msg: dto.msg,
        }
    }
}
